//! Newsletter loading utilities
//!
//! `NewsletterLoader` reads newsletter markdown from a file, a string or a stored
//! JSON envelope and runs transforms on it. It is used by the CLI and by tests.
//!
//! ```rust,ignore
//! use newsletter_parser::newsletter::loader::NewsletterLoader;
//!
//! // From a markdown file
//! let parsed = NewsletterLoader::from_path("issue.md")?.parse()?;
//!
//! // From a stored envelope, keeping id, dates and model
//! let issue = NewsletterLoader::from_envelope_path("issue.json")?.parse_issue(&rules)?;
//! ```

use crate::newsletter::config::ParserRules;
use crate::newsletter::error::LoaderError;
use crate::newsletter::model::{Newsletter, NewsletterSection, ParsedIssue, ParsedNewsletter};
use crate::newsletter::segmenting::SegmentedDocument;
use crate::newsletter::transforms::standard::{PARSE_NEWSLETTER, SEGMENTATION};
use crate::newsletter::transforms::Transform;
use std::fs;
use std::path::Path;

/// Newsletter loader with transform shortcuts
pub struct NewsletterLoader {
    source: String,
    envelope: Option<Newsletter>,
}

impl NewsletterLoader {
    /// Load markdown from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(Self::from_string(source))
    }

    /// Load markdown from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        NewsletterLoader {
            source: source.into(),
            envelope: None,
        }
    }

    /// Load a stored newsletter envelope (JSON) from a file path
    pub fn from_envelope_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let json = fs::read_to_string(path)?;
        Self::from_envelope_json(&json)
    }

    /// Load a stored newsletter envelope from JSON text
    pub fn from_envelope_json(json: &str) -> Result<Self, LoaderError> {
        let newsletter: Newsletter = serde_json::from_str(json)?;
        Self::from_envelope(newsletter)
    }

    /// Load from an already decoded envelope
    pub fn from_envelope(newsletter: Newsletter) -> Result<Self, LoaderError> {
        if newsletter.content.trim().is_empty() {
            return Err(LoaderError::EmptyEnvelope);
        }
        Ok(NewsletterLoader {
            source: newsletter.content.clone(),
            envelope: Some(newsletter),
        })
    }

    /// Run a custom transform on the source
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, LoaderError> {
        Ok(transform.run(self.source.clone())?)
    }

    /// Parse with the default rules
    pub fn parse(&self) -> Result<ParsedNewsletter, LoaderError> {
        self.with(&PARSE_NEWSLETTER)
    }

    /// Parse with custom rules
    pub fn parse_with(&self, rules: &ParserRules) -> Result<ParsedNewsletter, LoaderError> {
        Ok(crate::newsletter::parse_with(&self.source, rules)?)
    }

    /// Run segmentation only
    pub fn segment(&self) -> Result<SegmentedDocument, LoaderError> {
        self.with(&SEGMENTATION)
    }

    /// Per-section view of the newsletter
    pub fn sections(
        &self,
        rules: &ParserRules,
        preview_chars: usize,
    ) -> Result<Vec<NewsletterSection>, LoaderError> {
        Ok(crate::newsletter::parse_sections(
            &self.source,
            rules,
            preview_chars,
        )?)
    }

    /// Parse, keeping the envelope fields when the source came from one
    ///
    /// Plain markdown sources get an empty envelope with the raw content attached.
    pub fn parse_issue(&self, rules: &ParserRules) -> Result<ParsedIssue, LoaderError> {
        let parsed = self.parse_with(rules)?;
        let issue = match &self.envelope {
            Some(newsletter) => ParsedIssue::from_parts(newsletter, parsed),
            None => ParsedIssue::from_parts(
                &Newsletter {
                    id: String::new(),
                    title: String::new(),
                    week_start: String::new(),
                    week_end: String::new(),
                    content: self.source.clone(),
                    generated_at: String::new(),
                    model: String::new(),
                },
                parsed,
            ),
        };
        Ok(issue)
    }

    pub fn envelope(&self) -> Option<&Newsletter> {
        self.envelope.as_ref()
    }

    /// Get the raw source string
    pub fn source(&self) -> &str {
        &self.source
    }
}
