//! Individual transformation stages
//!
//! Each stage implements the `Runnable` trait and owns the rules it applies.

use crate::newsletter::config::ParserRules;
use crate::newsletter::error::ParseError;
use crate::newsletter::extraction::extract_articles;
use crate::newsletter::model::ParsedNewsletter;
use crate::newsletter::segmenting::{segment, SegmentedDocument};
use crate::newsletter::transforms::Runnable;
use tracing::info;

/// Segmentation stage
///
/// Detects the header convention, splits the document into sections and
/// extracts the overview.
///
/// # Input
/// - `String` - raw newsletter markdown
///
/// # Output
/// - `SegmentedDocument` - overview, detected convention and sections
pub struct Segmentation {
    rules: ParserRules,
}

impl Segmentation {
    pub fn new(rules: ParserRules) -> Self {
        Segmentation { rules }
    }
}

impl Default for Segmentation {
    fn default() -> Self {
        Self::new(ParserRules::default())
    }
}

impl Runnable<String, SegmentedDocument> for Segmentation {
    fn run(&self, input: String) -> Result<SegmentedDocument, ParseError> {
        segment(&input, &self.rules)
    }
}

impl Runnable<&str, SegmentedDocument> for Segmentation {
    fn run(&self, input: &str) -> Result<SegmentedDocument, ParseError> {
        segment(input, &self.rules)
    }
}

/// Article extraction stage
///
/// Runs the per-section article extractor over every non-overview section, in
/// document order.
///
/// # Input
/// - `SegmentedDocument`
///
/// # Output
/// - `ParsedNewsletter` - overview plus all emitted articles
pub struct ArticleExtraction {
    rules: ParserRules,
}

impl ArticleExtraction {
    pub fn new(rules: ParserRules) -> Self {
        ArticleExtraction { rules }
    }
}

impl Default for ArticleExtraction {
    fn default() -> Self {
        Self::new(ParserRules::default())
    }
}

impl Runnable<SegmentedDocument, ParsedNewsletter> for ArticleExtraction {
    fn run(&self, input: SegmentedDocument) -> Result<ParsedNewsletter, ParseError> {
        let mut articles = Vec::new();
        for section in input.sections.iter().filter(|s| !s.is_overview()) {
            articles.extend(extract_articles(section, &self.rules)?);
        }
        info!(articles = articles.len(), "extracted articles from newsletter");

        Ok(ParsedNewsletter {
            overview: input.overview,
            articles,
        })
    }
}
