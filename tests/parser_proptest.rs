//! Property-based tests for newsletter parsing
//!
//! Generated newsletters follow the shape the generator emits: an overview, then
//! numbered sections holding `*   **Title:** Sentence. Sentence.` bullets, under
//! either header convention.

use newsletter_parser::newsletter::text::clean_title;
use newsletter_parser::newsletter::{parse, HeaderConvention};
use proptest::prelude::*;

/// Bullet titles of at least eleven characters, never with a parenthetical
fn title_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{4,8} [A-Z][a-z]{4,8}( [a-z]{2,6}){0,3}"
}

/// Sentences of at least twenty characters
fn sentence_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{3,8}( [a-z]{2,8}){6,12}\\."
}

fn section_title_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{3,10}( [A-Z][a-z]{3,10})?"
}

fn bullet_strategy() -> impl Strategy<Value = (String, String)> {
    (
        title_strategy(),
        prop::collection::vec(sentence_strategy(), 1..4),
    )
        .prop_map(|(title, sentences)| (title, sentences.join(" ")))
}

fn section_strategy() -> impl Strategy<Value = (String, Vec<(String, String)>)> {
    (
        section_title_strategy(),
        prop::collection::vec(bullet_strategy(), 1..4),
    )
}

fn convention_strategy() -> impl Strategy<Value = HeaderConvention> {
    prop_oneof![Just(HeaderConvention::Markdown), Just(HeaderConvention::Bold)]
}

fn header(convention: HeaderConvention, number: usize, title: &str) -> String {
    match convention {
        HeaderConvention::Markdown => format!("## {}. {}\n", number, title),
        HeaderConvention::Bold => format!("**{}. {}**\n", number, title),
    }
}

fn render(
    convention: HeaderConvention,
    overview: &str,
    sections: &[(String, Vec<(String, String)>)],
) -> String {
    let mut doc = header(convention, 1, "Overview");
    doc.push_str(overview);
    doc.push_str("\n\n");
    for (i, (title, bullets)) in sections.iter().enumerate() {
        doc.push_str(&header(convention, i + 2, title));
        for (bullet_title, body) in bullets {
            doc.push_str(&format!("*   **{}:** {}\n", bullet_title, body));
        }
        doc.push('\n');
    }
    doc
}

proptest! {
    #[test]
    fn test_text_without_headers_yields_nothing(source in "[a-zA-Z0-9 .,!?()\n-]{0,300}") {
        let parsed = parse(&source).unwrap();
        prop_assert_eq!(parsed.overview, "");
        prop_assert!(parsed.articles.is_empty());
    }

    #[test]
    fn test_parse_never_fails_and_is_deterministic(source in "\\PC{0,400}") {
        let first = parse(&source);
        prop_assert!(first.is_ok());
        prop_assert_eq!(first.unwrap(), parse(&source).unwrap());
    }

    #[test]
    fn test_every_section_with_bullets_yields_articles(
        convention in convention_strategy(),
        overview in sentence_strategy(),
        sections in prop::collection::vec(section_strategy(), 1..5),
    ) {
        let doc = render(convention, &overview, &sections);
        let parsed = parse(&doc).unwrap();

        prop_assert_eq!(&parsed.overview, &overview);
        let expected: usize = sections.iter().map(|(_, bullets)| bullets.len()).sum();
        prop_assert_eq!(parsed.articles.len(), expected);

        for (i, (title, bullets)) in sections.iter().enumerate() {
            let number = i + 2;
            let in_section: Vec<_> = parsed
                .articles
                .iter()
                .filter(|a| a.id.starts_with(&format!("article-{}-", number)))
                .collect();
            prop_assert_eq!(in_section.len(), bullets.len());
            for (index, article) in in_section.iter().enumerate() {
                prop_assert_eq!(&article.category, title);
                prop_assert_eq!(&article.id, &format!("article-{}-{}", number, index));
                prop_assert_eq!(&article.title, &bullets[index].0);
            }
        }
    }

    #[test]
    fn test_parenthesis_free_articles_respect_length_bounds(
        convention in convention_strategy(),
        sections in prop::collection::vec(section_strategy(), 1..4),
    ) {
        let doc = render(convention, "Intro.", &sections);
        for article in parse(&doc).unwrap().articles {
            // Only holds for labels without an organization aside
            prop_assert!(article.title.chars().count() >= 10);
            let len = article.summary.chars().count();
            prop_assert!((20..=300).contains(&len), "summary length {}", len);
            if article.summary.ends_with("...") {
                prop_assert_eq!(len, 300);
            }
        }
    }

    #[test]
    fn test_both_conventions_agree(
        overview in sentence_strategy(),
        sections in prop::collection::vec(section_strategy(), 1..4),
    ) {
        let markdown = parse(&render(HeaderConvention::Markdown, &overview, &sections)).unwrap();
        let bold = parse(&render(HeaderConvention::Bold, &overview, &sections)).unwrap();
        prop_assert_eq!(markdown, bold);
    }

    #[test]
    fn test_clean_title_preserves_clean_text(title in "[A-Za-z0-9]{1,10}( [A-Za-z0-9]{1,10}){0,5}") {
        prop_assert_eq!(clean_title(&title), title);
    }

    #[test]
    fn test_clean_title_is_idempotent(title in "\\PC{0,80}") {
        let once = clean_title(&title);
        prop_assert_eq!(clean_title(&once), once.clone());
    }
}
