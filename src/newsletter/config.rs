//! Configuration loading for the newsletter parser
//!
//! `defaults/newsletter.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`NewsletterConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/newsletter.default.toml");

/// Top-level configuration consumed by the CLI and library callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterConfig {
    pub parser: ParserRules,
    pub sections: SectionsConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

/// Thresholds applied while extracting articles.
///
/// All lengths are counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserRules {
    pub min_title_chars: usize,
    pub min_summary_chars: usize,
    pub max_summary_chars: usize,
    pub fallback_summary_chars: usize,
    /// Opt-in size limit; unset means any document is parsed
    #[serde(default)]
    pub max_document_bytes: Option<usize>,
}

impl Default for ParserRules {
    fn default() -> Self {
        ParserRules {
            min_title_chars: 10,
            min_summary_chars: 20,
            max_summary_chars: 300,
            fallback_summary_chars: 250,
            max_document_bytes: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionsConfig {
    pub preview_chars: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Json,
    Yaml,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<NewsletterConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NewsletterConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser.min_title_chars, 10);
        assert_eq!(config.sections.preview_chars, 500);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.pretty);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn embedded_defaults_match_rules_default() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser, ParserRules::default());
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.format", "yaml")
            .expect("override to apply")
            .set_override("parser.min_summary_chars", 5i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Yaml);
        assert_eq!(config.parser.min_summary_chars, 5);
    }

    #[test]
    fn size_limit_is_opt_in() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.parser.max_document_bytes, None);

        let config = Loader::new()
            .set_override("parser.max_document_bytes", 4096i64)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.parser.max_document_bytes, Some(4096));
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[sections]\npreview_chars = 120").unwrap();

        let config = Loader::new().with_file(file.path()).build().unwrap();
        assert_eq!(config.sections.preview_chars, 120);
        assert_eq!(config.parser.max_summary_chars, 300);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/newsletter.toml")
            .build()
            .unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn missing_required_file_fails() {
        let result = Loader::new()
            .with_file("/nonexistent/newsletter.toml")
            .build();
        assert!(result.is_err());
    }
}
