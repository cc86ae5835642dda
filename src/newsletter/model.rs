//! Data model for parsed newsletters
//!
//! The output types serialize with camelCase field names and omit absent
//! optionals, which is the shape the presentation layer reads.

use serde::{Deserialize, Serialize};

/// Section number reserved for the overview
pub const OVERVIEW_SECTION: &str = "1";

/// A header-delimited span of the source document
///
/// `body` starts at the header itself; `header_len` is the byte length of the
/// header match at the start of `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub number: String,
    pub title: String,
    pub body: String,
    pub header_len: usize,
}

impl Section {
    pub fn is_overview(&self) -> bool {
        self.number == OVERVIEW_SECTION
    }

    /// Section text after the header, trimmed
    pub fn content(&self) -> &str {
        self.body.get(self.header_len..).unwrap_or("").trim()
    }
}

/// Organization and publication found in an article
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication: Option<String>,
}

impl ArticleMetadata {
    pub fn is_empty(&self) -> bool {
        self.organization.is_none() && self.publication.is_none()
    }
}

/// One news item found inside a section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "ArticleMetadata::is_empty")]
    pub metadata: ArticleMetadata,
    /// Filled in by the image service, never by the parser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Overview plus the ordered article records of one newsletter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedNewsletter {
    pub overview: String,
    pub articles: Vec<ArticleRecord>,
}

/// A stored newsletter as produced by the generation step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newsletter {
    pub id: String,
    pub title: String,
    pub week_start: String,
    pub week_end: String,
    pub content: String,
    pub generated_at: String,
    pub model: String,
}

/// A parsed newsletter together with its envelope fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIssue {
    pub id: String,
    pub title: String,
    pub week_start: String,
    pub week_end: String,
    pub overview: String,
    pub articles: Vec<ArticleRecord>,
    pub generated_at: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_content: Option<String>,
}

impl ParsedIssue {
    pub fn from_parts(newsletter: &Newsletter, parsed: ParsedNewsletter) -> Self {
        ParsedIssue {
            id: newsletter.id.clone(),
            title: newsletter.title.clone(),
            week_start: newsletter.week_start.clone(),
            week_end: newsletter.week_end.clone(),
            overview: parsed.overview,
            articles: parsed.articles,
            generated_at: newsletter.generated_at.clone(),
            model: newsletter.model.clone(),
            raw_content: Some(newsletter.content.clone()),
        }
    }
}

/// Per-section view of a newsletter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterSection {
    pub id: String,
    pub title: String,
    pub content: String,
    pub articles: Vec<ArticleRecord>,
}
