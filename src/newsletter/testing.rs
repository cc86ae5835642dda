//! Testing utilities for newsletter parsing
//!
//! Newsletter text is generated by a language model and its markup is only
//! loosely consistent. Hand-written snippets in tests tend to drift from what the
//! generator actually emits, so integration tests should:
//!
//! 1. Load verified sample documents through [`Samples`] (files under
//!    `tests/fixtures/`).
//! 2. Check results with the fluent [`assert_parsed`] API rather than counting.
//!
//! ```rust,ignore
//! use newsletter_parser::newsletter::testing::{assert_parsed, Samples};
//!
//! let parsed = Samples::MarkdownHeaders.parse();
//! assert_parsed(&parsed)
//!     .overview_starts_with("This week")
//!     .article_count(4)
//!     .article(0, |a| {
//!         a.title("Sparse Mixture Models Scale Up")
//!             .author("Google DeepMind")
//!             .category("Breakthroughs in AI Research");
//!     });
//! ```

use crate::newsletter::model::{ArticleRecord, ParsedNewsletter};
use std::fs;
use std::path::PathBuf;

/// Verified sample newsletters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Samples {
    /// `## N. Title` headers, five sections
    MarkdownHeaders,
    /// The same newsletter with `**N. Title**` headers
    BoldHeaders,
    /// Bold overview, then both conventions
    MixedConventions,
    /// Prose and a bullet, no numbered headers
    NoHeaders,
}

impl Samples {
    pub const ALL: [Samples; 4] = [
        Samples::MarkdownHeaders,
        Samples::BoldHeaders,
        Samples::MixedConventions,
        Samples::NoHeaders,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Samples::MarkdownHeaders => "markdown-headers.md",
            Samples::BoldHeaders => "bold-headers.md",
            Samples::MixedConventions => "mixed-conventions.md",
            Samples::NoHeaders => "no-headers.md",
        }
    }

    pub fn path(self) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(self.file_name())
    }

    /// Raw sample text
    ///
    /// # Panics
    ///
    /// Panics if the fixture file is missing.
    pub fn source(self) -> String {
        let path = self.path();
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read sample {}: {}", path.display(), e))
    }

    /// Parse the sample with the default rules
    ///
    /// # Panics
    ///
    /// Panics if parsing fails.
    pub fn parse(self) -> ParsedNewsletter {
        crate::newsletter::parse(&self.source())
            .unwrap_or_else(|e| panic!("failed to parse sample {}: {}", self.file_name(), e))
    }
}

/// Start a fluent assertion chain over a parsed newsletter
pub fn assert_parsed(parsed: &ParsedNewsletter) -> ParsedAssertion<'_> {
    ParsedAssertion { parsed }
}

pub struct ParsedAssertion<'a> {
    parsed: &'a ParsedNewsletter,
}

impl<'a> ParsedAssertion<'a> {
    pub fn overview(self, expected: &str) -> Self {
        assert_eq!(self.parsed.overview, expected, "overview mismatch");
        self
    }

    pub fn overview_starts_with(self, prefix: &str) -> Self {
        assert!(
            self.parsed.overview.starts_with(prefix),
            "overview {:?} does not start with {:?}",
            self.parsed.overview,
            prefix
        );
        self
    }

    pub fn article_count(self, expected: usize) -> Self {
        assert_eq!(
            self.parsed.articles.len(),
            expected,
            "article count mismatch, got ids {:?}",
            self.parsed
                .articles
                .iter()
                .map(|a| a.id.as_str())
                .collect::<Vec<_>>()
        );
        self
    }

    pub fn ids(self, expected: &[&str]) -> Self {
        let ids: Vec<&str> = self.parsed.articles.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, expected, "article ids mismatch");
        self
    }

    pub fn article<F>(self, index: usize, check: F) -> Self
    where
        F: FnOnce(ArticleAssertion<'a>),
    {
        let article = self.parsed.articles.get(index).unwrap_or_else(|| {
            panic!(
                "no article at index {} ({} articles)",
                index,
                self.parsed.articles.len()
            )
        });
        check(ArticleAssertion { article });
        self
    }
}

pub struct ArticleAssertion<'a> {
    article: &'a ArticleRecord,
}

impl<'a> ArticleAssertion<'a> {
    pub fn id(self, expected: &str) -> Self {
        assert_eq!(self.article.id, expected, "id mismatch");
        self
    }

    pub fn title(self, expected: &str) -> Self {
        assert_eq!(self.article.title, expected, "title mismatch in {}", self.article.id);
        self
    }

    pub fn category(self, expected: &str) -> Self {
        assert_eq!(
            self.article.category, expected,
            "category mismatch in {}",
            self.article.id
        );
        self
    }

    pub fn summary(self, expected: &str) -> Self {
        assert_eq!(
            self.article.summary, expected,
            "summary mismatch in {}",
            self.article.id
        );
        self
    }

    pub fn author(self, expected: &str) -> Self {
        assert_eq!(
            self.article.author.as_deref(),
            Some(expected),
            "author mismatch in {}",
            self.article.id
        );
        self
    }

    pub fn no_author(self) -> Self {
        assert!(
            self.article.author.is_none(),
            "expected no author in {}, got {:?}",
            self.article.id,
            self.article.author
        );
        self
    }

    pub fn publication(self, expected: &str) -> Self {
        assert_eq!(
            self.article.metadata.publication.as_deref(),
            Some(expected),
            "publication mismatch in {}",
            self.article.id
        );
        self
    }

    pub fn content_contains(self, needle: &str) -> Self {
        assert!(
            self.article.content.contains(needle),
            "content of {} does not contain {:?}",
            self.article.id,
            needle
        );
        self
    }
}
