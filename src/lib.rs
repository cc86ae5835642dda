//! # newsletter-parser
//!
//! Turns an AI-generated markdown newsletter into structured article records.
//!
//! Layout
//!
//! The parser runs as a two-phase pipeline:
//!
//! src/newsletter
//!   ├── segmenting   Header convention detection, sections and overview
//!   ├── extraction   Article bullets, summaries and metadata
//!   └── transforms   Composable stages tying the two phases together
//!
//! Most callers only need [`newsletter::parse`] or [`newsletter::parse_newsletter`].
//! For test fixtures and guidelines, see the [testing module](newsletter::testing).

pub mod newsletter;

pub use newsletter::{parse, parse_newsletter, parse_sections, parse_with};
