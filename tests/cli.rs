use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn parse_markdown_fixture_to_json() {
    let mut cmd = cargo_bin_cmd!("newsletter");
    cmd.arg("parse").arg(fixture_path("markdown-headers.md"));

    let output_pred = predicate::str::contains("\"id\": \"article-2-0\"")
        .and(predicate::str::contains("\"author\": \"Google DeepMind\""))
        .and(predicate::str::contains("\"category\": \"Robotics\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn parse_bold_fixture_to_yaml() {
    let mut cmd = cargo_bin_cmd!("newsletter");
    cmd.arg("parse")
        .arg(fixture_path("bold-headers.md"))
        .arg("--format")
        .arg("yaml");

    let output_pred = predicate::str::contains("overview:")
        .and(predicate::str::contains("title: Humanoid Robot Learns Warehouse Tasks"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn parse_envelope_keeps_issue_fields() {
    let source = std::fs::read_to_string(fixture_path("markdown-headers.md")).unwrap();
    let envelope = serde_json::json!({
        "id": "nl-2025-19",
        "title": "AI Weekly Digest",
        "weekStart": "May 1, 2025",
        "weekEnd": "May 8, 2025",
        "content": source,
        "generatedAt": "2025-05-08T06:00:00Z",
        "model": "gpt-4.1-mini",
    });
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", envelope).unwrap();

    let mut cmd = cargo_bin_cmd!("newsletter");
    cmd.arg("parse").arg(file.path()).arg("--envelope");

    let output_pred = predicate::str::contains("\"id\": \"nl-2025-19\"")
        .and(predicate::str::contains("\"weekStart\": \"May 1, 2025\""))
        .and(predicate::str::contains("\"id\": \"article-5-0\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn sections_lists_every_section() {
    let mut cmd = cargo_bin_cmd!("newsletter");
    cmd.arg("sections").arg(fixture_path("markdown-headers.md"));

    let output_pred = predicate::str::contains("\"id\": \"section-1\"")
        .and(predicate::str::contains("\"id\": \"section-5\""))
        .and(predicate::str::contains("\"title\": \"Policy and Ethics\""));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn config_file_changes_output_format() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "[output]\nformat = \"json\"\npretty = false").unwrap();

    let mut cmd = cargo_bin_cmd!("newsletter");
    cmd.arg("--config")
        .arg(config.path())
        .arg("parse")
        .arg(fixture_path("markdown-headers.md"));

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("{\"overview\":"));
}

#[test]
fn show_config_prints_defaults() {
    let mut cmd = cargo_bin_cmd!("newsletter");
    cmd.arg("show-config");

    let output_pred = predicate::str::contains("\"min_title_chars\": 10")
        .and(predicate::str::contains("\"preview_chars\": 500"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn missing_input_fails() {
    let mut cmd = cargo_bin_cmd!("newsletter");
    cmd.arg("parse").arg("/nonexistent/issue.md");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Error loading"));
}

#[test]
fn invalid_envelope_fails() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let mut cmd = cargo_bin_cmd!("newsletter");
    cmd.arg("parse").arg(file.path()).arg("--envelope");

    cmd.assert().failure();
}
