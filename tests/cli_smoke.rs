//! CLI binary smoke tests using assert_cmd.
//!
//! None of these reach the network: failures are triggered before a request
//! is made or against a closed local port.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("airwatch").unwrap();
    cmd.env_remove("AIRWATCH__PROVIDER__API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("airwatch"));
}

#[test]
fn missing_config_file_fails() {
    cmd()
        .args(["--config", "/nonexistent/airwatch.toml", "report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

// ---------------------------------------------------------------------------
// Report subcommand
// ---------------------------------------------------------------------------

#[test]
fn report_rejects_out_of_range_latitude() {
    let config = config_file("");
    cmd()
        .arg("--config")
        .arg(config.path())
        .args(["report", "--lat", "95", "--lon", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"));
}

#[test]
fn report_rejects_non_numeric_longitude() {
    cmd()
        .args(["report", "--lat", "10", "--lon", "east"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn report_without_api_key_is_a_config_error() {
    let config = config_file("");
    cmd()
        .arg("--config")
        .arg(config.path())
        .args(["report", "--lat", "19.076", "--lon", "72.8777"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn report_with_unreachable_provider_fails_cleanly() {
    let config = config_file(
        r#"
[provider]
api_key = "0123456789abcdef"
base_url = "http://127.0.0.1:9"
timeout_seconds = 2
"#,
    );
    cmd()
        .arg("--config")
        .arg(config.path())
        .args(["report", "--lat", "-33.8688", "--lon", "151.2093"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to reach the weather service"))
        .stderr(predicate::str::contains("0123456789abcdef").not());
}

#[test]
fn invalid_config_value_is_rejected() {
    let config = config_file(
        r#"
[logging]
format = "xml"
"#,
    );
    cmd()
        .arg("--config")
        .arg(config.path())
        .args(["report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
