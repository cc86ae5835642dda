//! Error types for parsing and loading newsletters
//!
//! Malformed markdown is never an error: missing headers, empty sections and
//! too-short matches all degrade to fewer (or zero) articles. `ParseError` only
//! covers failures the caller has to report as a pipeline fault.

use thiserror::Error;

/// Error that can occur while running the parsing pipeline
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A grammar pattern failed to compile
    #[error("invalid grammar pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// The document exceeds the size limit the caller opted into
    #[error("document is {size} bytes, exceeding the {limit} byte limit")]
    DocumentTooLarge { size: usize, limit: usize },
}

/// Error that can occur when loading newsletters
#[derive(Error, Debug)]
pub enum LoaderError {
    /// IO error when reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON envelope could not be decoded
    #[error("invalid newsletter envelope: {0}")]
    Envelope(#[from] serde_json::Error),

    /// The envelope decoded but carries no markdown content
    #[error("newsletter envelope has no content")]
    EmptyEnvelope,

    /// Parsing failed
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_too_large_message() {
        let err = ParseError::DocumentTooLarge {
            size: 2048,
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "document is 2048 bytes, exceeding the 1024 byte limit"
        );
    }

    #[test]
    fn test_pattern_error_message() {
        let err: ParseError = regex::Regex::new("(").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid grammar pattern:"));
    }

    #[test]
    fn test_loader_wraps_parse_error() {
        let err: LoaderError = ParseError::DocumentTooLarge { size: 2, limit: 1 }.into();
        assert!(matches!(err, LoaderError::Parse(_)));
        assert!(err.to_string().starts_with("parse error:"));
    }
}
