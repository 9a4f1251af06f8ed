//! Integration tests for the CLI interface
//!
//! Drives the built binary end to end: argument parsing, interactive
//! prompting, report output and error presentation.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::cargo_bin("numerist").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--date"));
}

#[test]
fn test_full_report_from_arguments() {
    let mut cmd = Command::cargo_bin("numerist").unwrap();
    cmd.args(["--name", "Anna", "--date", "07-16-1990"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NUMEROLOGY REPORT FOR: ANNA"))
        .stdout(predicate::str::contains("Life Path:        6"))
        .stdout(predicate::str::contains("POSITIVE TRAITS & STRENGTHS"))
        .stdout(predicate::str::contains("Essence:"));
}

#[test]
fn test_slash_separated_date() {
    let mut cmd = Command::cargo_bin("numerist").unwrap();
    cmd.args(["--name", "Anna", "--date", "07/16/1990"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Life Path:        6"));
}

#[test]
fn test_invalid_date_fails_with_format_hint() {
    let mut cmd = Command::cargo_bin("numerist").unwrap();
    cmd.args(["--name", "Anna", "--date", "13/45/abcd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MM-DD-YYYY"));
}

#[test]
fn test_empty_name_is_rejected() {
    let mut cmd = Command::cargo_bin("numerist").unwrap();
    cmd.args(["--name", "   ", "--date", "07-16-1990"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name cannot be empty"));
}

#[test]
fn test_prompts_read_from_stdin() {
    let mut cmd = Command::cargo_bin("numerist").unwrap();
    cmd.write_stdin("Anna\n07-16-1990\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter your full name"))
        .stdout(predicate::str::contains("Life Path:        6"));
}

#[test]
fn test_json_output_parses() {
    let mut cmd = Command::cargo_bin("numerist").unwrap();
    let output = cmd
        .args(["--name", "Anna", "--date", "07-16-1990", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let profile: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(profile["core"]["life_path"], 6);
    assert_eq!(profile["planes"]["physical"], 0);
    assert!(profile["identity"]["positive"].is_string());
}

#[test]
fn test_report_has_no_escape_codes_when_piped() {
    let mut cmd = Command::cargo_bin("numerist").unwrap();
    cmd.args(["--name", "Anna", "--date", "07-16-1990"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b").not());
}
