//! Main module for newsletter parsing functionality

pub mod config;
pub mod error;
pub mod extraction;
pub mod grammar;
pub mod loader;
pub mod model;
pub mod segmenting;
pub mod testing;
pub mod text;
pub mod transforms;

pub use config::ParserRules;
pub use error::{LoaderError, ParseError};
pub use model::{
    ArticleMetadata, ArticleRecord, Newsletter, NewsletterSection, ParsedIssue, ParsedNewsletter,
    Section,
};
pub use segmenting::HeaderConvention;

use crate::newsletter::extraction::extract_articles;
use crate::newsletter::segmenting::{segment, SegmentedDocument};
use crate::newsletter::transforms::standard::{newsletter_transform, PARSE_NEWSLETTER};

/// Parse a markdown newsletter with the default rules
pub fn parse(content: &str) -> Result<ParsedNewsletter, ParseError> {
    PARSE_NEWSLETTER.run(content.to_string())
}

/// Parse a markdown newsletter with custom rules
pub fn parse_with(content: &str, rules: &ParserRules) -> Result<ParsedNewsletter, ParseError> {
    newsletter_transform(rules.clone()).run(content.to_string())
}

/// Parse a stored newsletter, keeping its envelope fields and raw markdown
pub fn parse_newsletter(
    newsletter: &Newsletter,
    rules: &ParserRules,
) -> Result<ParsedIssue, ParseError> {
    let parsed = parse_with(&newsletter.content, rules)?;
    Ok(ParsedIssue::from_parts(newsletter, parsed))
}

/// Parse a newsletter into a per-section view
///
/// Every detected section is returned, the overview included. The overview never
/// carries articles. `content` is the section text after its header line, cut to
/// `preview_chars` characters.
pub fn parse_sections(
    content: &str,
    rules: &ParserRules,
    preview_chars: usize,
) -> Result<Vec<NewsletterSection>, ParseError> {
    let SegmentedDocument { sections, .. } = segment(content, rules)?;

    let mut views = Vec::with_capacity(sections.len());
    for section in &sections {
        let articles = if section.is_overview() {
            Vec::new()
        } else {
            extract_articles(section, rules)?
        };
        let preview: String = section.content().chars().take(preview_chars).collect();
        views.push(NewsletterSection {
            id: format!("section-{}", section.number),
            title: section.title.clone(),
            content: preview,
            articles,
        });
    }
    Ok(views)
}

