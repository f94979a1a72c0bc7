#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These tests ensure that the binary starts, parses its flags, and reports
//! failures with the right exit codes without needing a running Ollama.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn mygpt(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("mygpt").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("OLLAMA_HOST")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    mygpt(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MyGPT - Ollama Terminal Chat"))
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--style"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    mygpt(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_lists_styles() {
    let home = TempDir::new().unwrap();
    mygpt(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("braille"))
        .stdout(predicate::str::contains("classic"));
}

#[test]
fn test_invalid_style_rejected() {
    let home = TempDir::new().unwrap();
    mygpt(&home)
        .args(["--style", "sparkles"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_bench_help() {
    let home = TempDir::new().unwrap();
    mygpt(&home)
        .args(["bench", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--iterations"))
        .stdout(predicate::str::contains("--prompt"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_bench_unreachable_server_fails_fast() {
    let home = TempDir::new().unwrap();
    let chart = home.path().join("speed.svg");

    mygpt(&home)
        .args(["bench", "--endpoint", "http://127.0.0.1:9", "--iterations", "3"])
        .arg("--output")
        .arg(&chart)
        .assert()
        .code(exitcode::UNAVAILABLE)
        .stdout(predicate::str::contains("Error in iteration 1"))
        .stdout(predicate::str::contains("Error in iteration 2").not())
        .stdout(predicate::str::contains("no successful iterations"));

    assert!(!chart.exists());
}

#[test]
fn test_malformed_config_exits_with_config_code() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join("mygpt");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[mygpt\nmodel = ").unwrap();

    mygpt(&home)
        .arg("models")
        .assert()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
