//! Command-line interface for the newsletter parser
//!
//! Usage:
//!   newsletter parse `<path>` [--envelope] [--format `<format>`]     - Parse a newsletter into articles
//!   newsletter sections `<path>` [--envelope] [--format `<format>`]  - Show the per-section view
//!   newsletter show-config                                        - Print the effective configuration
//!
//! Every subcommand accepts `--config <file>` to layer a TOML file over the
//! built-in defaults.

use clap::{Arg, ArgAction, ArgMatches, Command};
use newsletter_parser::newsletter::config::{Loader, NewsletterConfig, OutputFormat};
use newsletter_parser::newsletter::error::LoaderError;
use newsletter_parser::newsletter::loader::NewsletterLoader;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

fn main() {
    let matches = Command::new("newsletter")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract structured articles from markdown newsletters")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .subcommand(
            Command::new("parse")
                .about("Parse a newsletter into overview and articles")
                .arg(path_arg())
                .arg(envelope_arg())
                .arg(format_arg()),
        )
        .subcommand(
            Command::new("sections")
                .about("Show each section with its articles")
                .arg(path_arg())
                .arg(envelope_arg())
                .arg(format_arg()),
        )
        .subcommand(Command::new("show-config").about("Print the effective configuration"))
        .get_matches();

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config.logging.filter);

    match matches.subcommand() {
        Some(("parse", sub)) => handle_parse_command(sub, &config),
        Some(("sections", sub)) => handle_sections_command(sub, &config),
        Some(("show-config", _)) => print_or_exit(render(&config, &config)),
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the newsletter (markdown, or JSON with --envelope)")
        .required(true)
        .index(1)
}

fn envelope_arg() -> Arg {
    Arg::new("envelope")
        .long("envelope")
        .short('e')
        .help("Treat the input as a stored newsletter JSON envelope")
        .action(ArgAction::SetTrue)
}

fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .short('f')
        .help("Output format: json or yaml (default from config)")
        .value_parser(["json", "yaml"])
}

fn load_config(path: Option<&String>) -> Result<NewsletterConfig, config::ConfigError> {
    let mut loader = Loader::new();
    if let Some(path) = path {
        loader = loader.with_file(path);
    }
    loader.build()
}

fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn open_loader(matches: &ArgMatches) -> NewsletterLoader {
    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    let loaded = if matches.get_flag("envelope") {
        NewsletterLoader::from_envelope_path(path)
    } else {
        NewsletterLoader::from_path(path)
    };
    loaded.unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", path, e);
        std::process::exit(1);
    })
}

fn with_format_override(matches: &ArgMatches, config: &NewsletterConfig) -> NewsletterConfig {
    let mut config = config.clone();
    match matches.get_one::<String>("format").map(String::as_str) {
        Some("json") => config.output.format = OutputFormat::Json,
        Some("yaml") => config.output.format = OutputFormat::Yaml,
        _ => {}
    }
    config
}

/// Handle the parse command
fn handle_parse_command(matches: &ArgMatches, config: &NewsletterConfig) {
    let loader = open_loader(matches);
    let config = with_format_override(matches, config);
    print_or_exit(run_parse(&loader, &config));
}

fn run_parse(loader: &NewsletterLoader, config: &NewsletterConfig) -> Result<String, CliError> {
    if loader.envelope().is_some() {
        render(&loader.parse_issue(&config.parser)?, config)
    } else {
        render(&loader.parse_with(&config.parser)?, config)
    }
}

/// Handle the sections command
fn handle_sections_command(matches: &ArgMatches, config: &NewsletterConfig) {
    let loader = open_loader(matches);
    let config = with_format_override(matches, config);
    let result = loader
        .sections(&config.parser, config.sections.preview_chars)
        .map_err(CliError::from)
        .and_then(|sections| render(&sections, &config));
    print_or_exit(result);
}

fn render<T: Serialize>(value: &T, config: &NewsletterConfig) -> Result<String, CliError> {
    let text = match (config.output.format, config.output.pretty) {
        (OutputFormat::Json, true) => serde_json::to_string_pretty(value)?,
        (OutputFormat::Json, false) => serde_json::to_string(value)?,
        (OutputFormat::Yaml, _) => serde_yaml::to_string(value)?,
    };
    Ok(text)
}

fn print_or_exit(result: Result<String, CliError>) {
    match result {
        Ok(text) => {
            print!("{}", text);
            if !text.ends_with('\n') {
                println!();
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error("JSON output failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML output failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
