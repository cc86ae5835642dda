//! Segmentation phase
//!
//! Splits a raw newsletter into sections and pulls out the overview. This is the
//! tokenizer-like half of the pipeline: it only finds boundaries, it never looks
//! inside a section.
//!
//! Two header conventions are recognized. Detection runs once, up front, and the
//! first convention present wins for the whole document:
//!
//! 1. [`HeaderConvention::Markdown`]: `## 2. Breakthroughs`
//! 2. [`HeaderConvention::Bold`]: `**2. Breakthroughs**`
//!
//! Headers of the losing convention are ignored even when they are present.
//! A document with no headers at all yields no sections and an empty overview.

use crate::newsletter::config::ParserRules;
use crate::newsletter::error::ParseError;
use crate::newsletter::grammar::{Grammar, HeaderGrammar};
use crate::newsletter::model::Section;
use serde::Serialize;
use tracing::debug;

/// Which header markup a document uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeaderConvention {
    /// `## N. Title`
    Markdown,
    /// `**N. Title**`
    Bold,
}

impl HeaderConvention {
    /// Detection order; earlier conventions take priority
    pub const PRIORITY: [HeaderConvention; 2] = [HeaderConvention::Markdown, HeaderConvention::Bold];

    fn grammar(self, grammar: &Grammar) -> &HeaderGrammar {
        match self {
            HeaderConvention::Markdown => &grammar.markdown,
            HeaderConvention::Bold => &grammar.bold,
        }
    }

    /// Whether any header of this convention occurs in `source`
    pub fn is_present(self, source: &str) -> Result<bool, ParseError> {
        Ok(self.grammar(Grammar::get()?).presence.is_match(source))
    }

    /// Pick the convention for a document, if any
    pub fn detect(source: &str) -> Result<Option<HeaderConvention>, ParseError> {
        for convention in Self::PRIORITY {
            if convention.is_present(source)? {
                return Ok(Some(convention));
            }
        }
        Ok(None)
    }

    /// Split `source` into sections at every header of this convention
    pub fn sections(self, source: &str) -> Result<Vec<Section>, ParseError> {
        let header = &self.grammar(Grammar::get()?).header;

        let headers: Vec<(String, String, usize, usize)> = header
            .captures_iter(source)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                Some((
                    caps.name("number")?.as_str().to_string(),
                    caps.name("title")?.as_str().trim().to_string(),
                    whole.start(),
                    whole.len(),
                ))
            })
            .collect();

        let mut sections = Vec::with_capacity(headers.len());
        for (i, (number, title, start, header_len)) in headers.iter().enumerate() {
            let end = headers
                .get(i + 1)
                .map(|(_, _, next_start, _)| *next_start)
                .unwrap_or(source.len());
            sections.push(Section {
                number: number.clone(),
                title: title.clone(),
                body: source[*start..end].to_string(),
                header_len: *header_len,
            });
        }
        Ok(sections)
    }

    /// Body of the `1. Overview` section under this convention, trimmed
    pub fn overview(self, source: &str) -> Result<Option<String>, ParseError> {
        let grammar = self.grammar(Grammar::get()?);
        let Some(header) = grammar.overview.find(source) else {
            return Ok(None);
        };
        let rest = &source[header.end()..];
        let end = grammar
            .overview_end
            .find(rest)
            .map(|m| m.start())
            .unwrap_or(rest.len());
        Ok(Some(rest[..end].trim().to_string()))
    }
}

/// Output of the segmentation phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedDocument {
    pub overview: String,
    pub convention: Option<HeaderConvention>,
    pub sections: Vec<Section>,
}

/// Extract the overview, trying each convention in priority order
///
/// Returns an empty string when no overview header is found.
pub fn extract_overview(source: &str) -> Result<String, ParseError> {
    for convention in HeaderConvention::PRIORITY {
        if let Some(overview) = convention.overview(source)? {
            if !overview.is_empty() {
                return Ok(overview);
            }
        }
    }
    Ok(String::new())
}

/// Run the whole segmentation phase over one document
pub fn segment(source: &str, rules: &ParserRules) -> Result<SegmentedDocument, ParseError> {
    if let Some(limit) = rules.max_document_bytes {
        if source.len() > limit {
            return Err(ParseError::DocumentTooLarge {
                size: source.len(),
                limit,
            });
        }
    }

    let overview = extract_overview(source)?;
    let convention = HeaderConvention::detect(source)?;
    if convention == Some(HeaderConvention::Markdown)
        && HeaderConvention::Bold.is_present(source)?
    {
        debug!("document mixes header conventions, ignoring bold headers");
    }

    let sections = match convention {
        Some(convention) => convention.sections(source)?,
        None => Vec::new(),
    };
    debug!(
        convention = ?convention,
        sections = sections.len(),
        "segmented newsletter"
    );

    Ok(SegmentedDocument {
        overview,
        convention,
        sections,
    })
}
