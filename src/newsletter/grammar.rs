//! Grammar Pattern Definitions
//!
//! This module defines the regex patterns used by both parsing phases. Each
//! header convention owns its own [`HeaderGrammar`] so the two dialects never
//! interleave:
//!
//! - markdown headers: `## 2. Breakthroughs`
//! - bold headers: `**2. Breakthroughs**`
//!
//! Inside a section, articles are bullets with a bold label ending in a colon:
//!
//! ```text
//! *   **Big Model (OpenAI):** OpenAI released a new model.
//! * **Some Title:** Content
//! ```
//!
//! Patterns are compiled once into a shared [`Grammar`]. Compilation failures are
//! kept and surfaced as [`ParseError::Pattern`] on every parse.

use crate::newsletter::error::ParseError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Patterns for one header convention
#[derive(Debug)]
pub struct HeaderGrammar {
    /// Cheap presence test used by convention detection
    pub presence: Regex,
    /// Section header with `number` and `title` captures
    pub header: Regex,
    /// Overview header (`1. Overview`), body follows the match
    pub overview: Regex,
    /// Where the overview body ends
    pub overview_end: Regex,
}

/// All compiled patterns
#[derive(Debug)]
pub struct Grammar {
    pub markdown: HeaderGrammar,
    pub bold: HeaderGrammar,
    /// Article bullet label with `title` and optional `organization` captures
    pub article_bullet: Regex,
    /// Any section header, of either convention, ending an article's content
    pub article_stop: Regex,
    pub link: Regex,
    pub dash_bullet: Regex,
    pub sentence: Regex,
    pub organization: Regex,
    pub publication: Regex,
}

const ORGANIZATION_SUFFIXES: &[&str] = &[
    "University",
    "Institute",
    "Lab",
    "Research",
    "AI",
    "Inc",
    "Corp",
    "Company",
    "Systems",
    "Medicine",
    "Academy",
    "Dynamics",
    "Mind",
    "Google",
    "Microsoft",
    "Meta",
    "IBM",
    "OpenAI",
    "Anthropic",
];

const PUBLICATION_SUFFIXES: &[&str] = &[
    "Medicine",
    "Science",
    "Journal",
    "Letters",
    "Review",
    "Biotechnology",
];

static GRAMMAR: Lazy<Result<Grammar, regex::Error>> = Lazy::new(Grammar::compile);

impl Grammar {
    /// Shared compiled grammar
    pub fn get() -> Result<&'static Grammar, ParseError> {
        GRAMMAR.as_ref().map_err(|e| ParseError::Pattern(e.clone()))
    }

    fn compile() -> Result<Grammar, regex::Error> {
        Ok(Grammar {
            markdown: HeaderGrammar {
                presence: Regex::new(r"##\s*\d+\.\s*[^\n]+")?,
                header: Regex::new(r"##\s*(?P<number>\d+)\.\s*(?P<title>[^\n]+)\n")?,
                overview: Regex::new(r"(?i)##\s*1\.\s*Overview\s*\n")?,
                overview_end: Regex::new(r"\n##\s*\d+\.|\n#\s")?,
            },
            bold: HeaderGrammar {
                presence: Regex::new(r"\*\*\d+\.\s*[^*\n]+\*\*")?,
                header: Regex::new(r"\*\*(?P<number>\d+)\.\s*(?P<title>[^*\n]+)\*\*")?,
                overview: Regex::new(r"(?i)\*\*1\.\s*Overview\*\*\s*\n")?,
                overview_end: Regex::new(r"\n\*\*\d+\.")?,
            },
            article_bullet: Regex::new(
                r"(?m)^\s*\*+\s*\*\*(?P<title>[^*:]+?)(?:\s*\((?P<organization>[^)]+)\))?\s*:\*\*",
            )?,
            article_stop: Regex::new(r"##\s*\d+\.|\*\*\d+\.")?,
            link: Regex::new(r"\[(?P<text>[^\]]+)\]\([^)]+\)")?,
            dash_bullet: Regex::new(r"(?m)^\s*-\s*")?,
            sentence: Regex::new(r"[^.!?]+[.!?]+")?,
            organization: Regex::new(&format!(
                r"\*\*(?P<name>[A-Z][A-Za-z\s&]+(?:{}))\*\*",
                ORGANIZATION_SUFFIXES.join("|")
            ))?,
            publication: Regex::new(&format!(
                r"\*(?P<name>[A-Z][A-Za-z\s&]+(?:{}))\*",
                PUBLICATION_SUFFIXES.join("|")
            ))?,
        })
    }
}
