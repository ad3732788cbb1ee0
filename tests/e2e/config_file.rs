//! E2E tests for the config file (`$XDG_CONFIG_HOME/petview/config.toml`)
//!
//! `dirs` only honours XDG_CONFIG_HOME on Linux.
#![cfg(target_os = "linux")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::pv;

/// `pv` reading `content` as its config file
fn pv_with_config(temp: &TempDir, content: &str) -> Command {
    let dir = temp.path().join("petview");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), content).unwrap();

    let mut cmd = pv();
    cmd.env("XDG_CONFIG_HOME", temp.path());
    cmd
}

#[test]
fn unknown_tab_in_config_is_reported() {
    let temp = TempDir::new().unwrap();
    pv_with_config(&temp, "[navigation]\ntabs = [\"home\", \"settings\"]\n")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Luna"))
        .stderr(predicate::str::contains("Warning: ignoring"))
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn malformed_config_is_reported() {
    let temp = TempDir::new().unwrap();
    pv_with_config(&temp, "not toml {{")
        .arg("--list")
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: ignoring"));
}

#[test]
fn malformed_config_is_written_to_log_file() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("pv.log");
    pv_with_config(&temp, "not toml {{")
        .arg("--list")
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success();

    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("ignoring"));
}

#[test]
fn valid_config_is_applied_silently() {
    let temp = TempDir::new().unwrap();
    pv_with_config(
        &temp,
        "[navigation]\ntabs = [\"home\"]\ndefault_tab = \"about\"\n",
    )
    .arg("--no-start")
    .assert()
    .code(2)
    .stderr(predicate::str::contains("Invalid tab"))
    .stderr(predicate::str::contains("Warning").not());
}
