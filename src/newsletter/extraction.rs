//! Extraction phase
//!
//! Turns the body of one section into [`ArticleRecord`]s. An article starts at a
//! bullet whose bold label ends in a colon, optionally with the organization in
//! parentheses right before the colon:
//!
//! ```text
//! *   **Big Model (OpenAI):** OpenAI released a new model. It is very capable.
//! ```
//!
//! Its content runs to the next bullet, the next section header, or the end of
//! the section. Matches whose label or summary is too short are dropped without
//! interrupting the scan; running indices only count emitted articles.

use crate::newsletter::config::ParserRules;
use crate::newsletter::error::ParseError;
use crate::newsletter::grammar::Grammar;
use crate::newsletter::model::{ArticleMetadata, ArticleRecord, Section};
use crate::newsletter::text::{char_len, clean_title, strip_emphasis, truncate_chars};
use regex::Regex;
use tracing::debug;

/// Extract the articles of one section
///
/// The overview section never yields articles.
pub fn extract_articles(
    section: &Section,
    rules: &ParserRules,
) -> Result<Vec<ArticleRecord>, ParseError> {
    if section.is_overview() {
        return Ok(Vec::new());
    }
    let grammar = Grammar::get()?;
    let body = section.body.as_str();

    let bullets: Vec<_> = grammar.article_bullet.captures_iter(body).collect();
    let mut articles = Vec::new();

    for (i, caps) in bullets.iter().enumerate() {
        let Some(label) = caps.get(0) else {
            continue;
        };
        let next_bullet = bullets
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(body.len());
        let tail = &body[label.end()..next_bullet];
        let stop = grammar
            .article_stop
            .find(tail)
            .map(|m| m.start())
            .unwrap_or(tail.len());
        let content = tail[..stop].trim();

        let title = caps.name("title").map(|m| m.as_str()).unwrap_or("");
        let organization = caps
            .name("organization")
            .map(|m| m.as_str().trim().to_string());

        // The label is the whole bold heading before the colon, aside included
        let heading = match &organization {
            Some(org) => format!("{} ({})", title.trim(), org),
            None => title.to_string(),
        };
        if char_len(&clean_title(&heading)) < rules.min_title_chars {
            continue;
        }

        let summary = extract_summary(content, rules)?;
        if char_len(&summary) < rules.min_summary_chars {
            continue;
        }

        let found = extract_metadata(content)?;
        let author = organization.or(found.organization);

        articles.push(ArticleRecord {
            id: format!("article-{}-{}", section.number, articles.len()),
            title: clean_title(title),
            summary,
            category: section.title.clone(),
            author: author.clone(),
            content: content.to_string(),
            metadata: ArticleMetadata {
                organization: author,
                publication: found.publication,
            },
            image_url: None,
        });
    }

    debug!(
        section = %section.number,
        category = %section.title,
        articles = articles.len(),
        "extracted section articles"
    );
    Ok(articles)
}

/// First one or two sentences of an article, as plain text
pub fn extract_summary(content: &str, rules: &ParserRules) -> Result<String, ParseError> {
    let grammar = Grammar::get()?;

    let plain = strip_emphasis(content);
    let plain = grammar.link.replace_all(&plain, "$text");
    let plain = grammar.dash_bullet.replace_all(&plain, "");

    let Some(paragraph) = plain.trim().lines().find(|line| !line.trim().is_empty()) else {
        return Ok(String::new());
    };

    let sentences: Vec<&str> = grammar
        .sentence
        .find_iter(paragraph)
        .take(2)
        .map(|m| m.as_str().trim())
        .collect();

    if sentences.is_empty() {
        return Ok(truncate_chars(paragraph.trim(), rules.fallback_summary_chars));
    }
    let summary = sentences.join(" ");
    Ok(truncate_chars(summary.trim(), rules.max_summary_chars))
}

/// Organization and publication named in the raw (unstripped) content
///
/// Both are best-effort, first-match scans over a closed vocabulary.
pub fn extract_metadata(content: &str) -> Result<ArticleMetadata, ParseError> {
    let grammar = Grammar::get()?;
    Ok(ArticleMetadata {
        organization: first_name(&grammar.organization, content),
        publication: first_name(&grammar.publication, content),
    })
}

fn first_name(pattern: &Regex, content: &str) -> Option<String> {
    let caps = pattern.captures(content)?;
    Some(caps.name("name")?.as_str().trim().to_string())
}
