//! Standard transform definitions
//!
//! Pre-built pipelines for common use cases, defined as static references using
//! `once_cell::sync::Lazy`. They run with [`ParserRules::default`]; use
//! [`newsletter_transform`] for custom rules.

use crate::newsletter::config::ParserRules;
use crate::newsletter::model::ParsedNewsletter;
use crate::newsletter::segmenting::SegmentedDocument;
use crate::newsletter::transforms::stages::{ArticleExtraction, Segmentation};
use crate::newsletter::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for the segmentation transform
pub type SegmentationTransform = Transform<String, SegmentedDocument>;

/// Type alias for the full parsing transform
pub type NewsletterTransform = Transform<String, ParsedNewsletter>;

/// Segmentation only: String → SegmentedDocument
pub static SEGMENTATION: Lazy<SegmentationTransform> =
    Lazy::new(|| Transform::<String, String>::from_fn(Ok).then(Segmentation::default()));

/// Full parse: String → ParsedNewsletter
///
/// 1. Segmentation (convention detection, sections, overview)
/// 2. Article extraction
pub static PARSE_NEWSLETTER: Lazy<NewsletterTransform> =
    Lazy::new(|| newsletter_transform(ParserRules::default()));

/// Build a full parsing transform with custom rules
pub fn newsletter_transform(rules: ParserRules) -> NewsletterTransform {
    Transform::<String, String>::from_fn(Ok)
        .then(Segmentation::new(rules.clone()))
        .then(ArticleExtraction::new(rules))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segmentation_transform() {
        let doc = SEGMENTATION
            .run("**1. Overview**\nIntro\n**2. News**\nBody\n".to_string())
            .unwrap();
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.overview, "Intro");
    }

    #[test]
    fn test_parse_newsletter_transform() {
        let parsed = PARSE_NEWSLETTER
            .run("## 1. Overview\nIntro\n## 2. News\n* **Battery Research Win:** A new cell design doubles capacity.\n".to_string())
            .unwrap();
        assert_eq!(parsed.articles.len(), 1);
        assert_eq!(parsed.articles[0].category, "News");
    }

    #[test]
    fn test_custom_rules_change_thresholds() {
        let rules = ParserRules {
            min_title_chars: 1,
            ..ParserRules::default()
        };
        let parsed = newsletter_transform(rules)
            .run("## 2. News\n* **Hi:** Short label but a long enough summary.\n".to_string())
            .unwrap();
        assert_eq!(parsed.articles.len(), 1);
        assert_eq!(parsed.articles[0].title, "Hi");
    }
}
