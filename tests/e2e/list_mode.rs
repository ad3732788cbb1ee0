//! E2E tests for --list mode

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

use super::pv;

#[test]
fn list_prints_sample_pets() {
    pv().arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tLuna\t2\tLabrador\tMadrid\t0"))
        .stdout(predicate::str::contains("Leo"));
}

#[test]
fn list_json_output() {
    let output = pv().args(["--list", "--format", "json"]).output().unwrap();
    assert!(output.status.success());

    let pets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let pets = pets.as_array().unwrap();
    assert_eq!(pets.len(), 10);
    assert_eq!(pets[0]["name"], "Luna");
    assert_eq!(pets[0]["id"], 1);
    assert_eq!(pets[9]["species"], "cat");
}

#[test]
fn list_favorites_is_empty_without_likes() {
    pv().args(["--list", "--favorites"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn list_from_data_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pets.json");
    fs::write(
        &path,
        r#"[
  {"name": "Max", "age": 2, "breed": "Mixed", "location": "Madrid"},
  {"name": "Mia", "age": 7, "species": "cat", "likes": 3}
]"#,
    )
    .unwrap();

    pv().args(["--list", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tMax\t2\tMixed\tMadrid\t0"))
        .stdout(predicate::str::contains("2\tMia\t7"))
        .stdout(predicate::str::contains("Luna").not());

    pv().args(["--list", "--favorites", "--data"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Mia"))
        .stdout(predicate::str::contains("Max").not());
}

#[test]
fn list_with_invalid_data_file_returns_exit_code_2() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pets.json");
    fs::write(&path, "not json").unwrap();

    pv().args(["--list", "--data"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn list_with_duplicate_names_returns_exit_code_2() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pets.json");
    fs::write(&path, r#"[{"name": "Max", "age": 1}, {"name": "max", "age": 2}]"#).unwrap();

    pv().args(["--list", "--data"])
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}
