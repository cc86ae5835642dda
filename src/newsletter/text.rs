//! Plain-text helpers shared by the extraction phase

/// Remove bold and italic markers
pub fn strip_emphasis(text: &str) -> String {
    text.replace('*', "")
}

/// Strip markup, collapse whitespace runs to single spaces and trim
pub fn clean_title(title: &str) -> String {
    strip_emphasis(title)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cut `text` to at most `max_chars` characters, marking the cut with `...`
///
/// The ellipsis counts towards the limit.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}

pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
