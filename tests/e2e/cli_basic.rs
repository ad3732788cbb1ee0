//! Basic CLI tests for pv
//!
//! Tests for command-line argument parsing, help output, version display,
//! and error handling for invalid inputs.

use predicates::prelude::*;

use super::pv;

// =============================================================================
// Help and Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    pv().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("--tabs"))
        .stdout(predicate::str::contains("--exit-on-root-back"));
}

#[test]
fn help_short_flag_shows_usage() {
    pv().arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn help_mentions_config_file() {
    pv().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn version_flag_shows_version() {
    pv().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_short_flag_shows_version() {
    pv().arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Invalid Options (Exit Code 3)
// =============================================================================

#[test]
fn unknown_option_returns_exit_code_3() {
    pv().arg("--unknown-option")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option"));
}

#[test]
fn stray_argument_returns_exit_code_3() {
    pv().arg("luna")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unexpected argument"));
}

#[test]
fn invalid_format_returns_exit_code_3() {
    pv().args(["--list", "--format", "xml"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid format"));
}

#[test]
fn unknown_tab_returns_exit_code_3() {
    pv().args(["--tab", "settings"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown tab"));
}

#[test]
fn missing_data_file_returns_exit_code_3() {
    pv().args(["--list", "--data", "/nonexistent/pets.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Data file does not exist"));
}

#[test]
fn option_missing_value_returns_exit_code_3() {
    pv().arg("--tabs").assert().code(3);
}

// =============================================================================
// Navigator Configuration (Exit Code 2)
// =============================================================================

#[test]
fn default_tab_outside_tab_set_returns_exit_code_2() {
    pv().args(["--tabs", "home,favorites", "--tab", "about", "--no-start"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid tab"));
}

#[test]
fn duplicate_tabs_return_exit_code_2() {
    pv().args(["--tabs", "home,home", "--no-start"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config error"));
}
