//! Basic CLI tests for mtree
//!
//! Tests for command-line argument parsing, help output, version display,
//! and error handling for invalid inputs.

use predicates::prelude::*;

use super::Fixture;

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    Fixture::new()
        .mtree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("mtree"))
        .stdout(predicate::str::contains("plan-delete"));
}

#[test]
fn help_short_flag_shows_usage() {
    Fixture::new()
        .mtree()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn version_flag_shows_version() {
    Fixture::new()
        .mtree()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Arguments (exit code 3)
// =============================================================================

#[test]
fn missing_command_returns_exit_code_3() {
    Fixture::new()
        .mtree()
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Missing command"));
}

#[test]
fn unknown_option_returns_exit_code_3() {
    Fixture::new()
        .mtree()
        .args(["ls", "records.json", "--bogus"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn unknown_command_returns_exit_code_3() {
    Fixture::new()
        .mtree()
        .arg("explode")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown command"));
}

#[test]
fn missing_listing_argument_returns_exit_code_3() {
    Fixture::new().mtree().arg("ls").assert().code(3);
}

#[test]
fn invalid_format_value_returns_exit_code_3() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("ls")
        .arg(&fx.listing)
        .args(["--format", "yaml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn invalid_category_returns_exit_code_3() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("view")
        .arg(&fx.listing)
        .args(["--category", "spreadsheets"])
        .assert()
        .code(3);
}

#[test]
fn invalid_date_returns_exit_code_3() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("view")
        .arg(&fx.listing)
        .args(["--from", "yesterday"])
        .assert()
        .code(3);
}

// =============================================================================
// Runtime Errors (exit code 2)
// =============================================================================

#[test]
fn nonexistent_listing_returns_exit_code_2() {
    let fx = Fixture::new();
    fx.mtree()
        .arg("ls")
        .arg(fx.dir.path().join("missing.json"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn malformed_listing_returns_exit_code_2() {
    let fx = Fixture::with_listing("{ not json");
    fx.mtree()
        .arg("ls")
        .arg(&fx.listing)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Listing error"));
}

// =============================================================================
// Config File
// =============================================================================

#[cfg(target_os = "linux")]
#[test]
fn config_file_sets_home_label() {
    let fx = Fixture::new();
    fx.write_config("[media]\nhome_label = \"Library\"\n");
    fx.mtree()
        .args(["crumbs", "media/docs/"])
        .assert()
        .success()
        .stdout("Library\tmedia/\ndocs\tmedia/docs/\n");
}

#[cfg(target_os = "linux")]
#[test]
fn broken_config_file_falls_back_to_defaults() {
    let fx = Fixture::new();
    fx.write_config("[media\nroot = ");
    fx.mtree()
        .args(["crumbs", "media/"])
        .assert()
        .success()
        .stdout("Home\tmedia/\n");
}

#[test]
fn command_line_overrides_home_label() {
    Fixture::new()
        .mtree()
        .args(["crumbs", "media/", "--home-label", "Root"])
        .assert()
        .success()
        .stdout("Root\tmedia/\n");
}
