//! Tests for error handling, suggestions and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hatch_in(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hatch").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_error_unsupported_language() {
    let temp = TempDir::new().unwrap();

    hatch_in(&temp)
        .args(["new", "demo", "--lang", "cobol"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported language"))
        .stderr(predicate::str::contains("rust"))
        .stderr(predicate::str::contains("haskell"));
}

#[test]
fn test_error_unknown_language_id() {
    let temp = TempDir::new().unwrap();

    hatch_in(&temp)
        .args(["new", "demo", "--lang", "12"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown language index 12"));
}

#[test]
fn test_error_invalid_project_name() {
    let temp = TempDir::new().unwrap();

    hatch_in(&temp)
        .args(["new", "a/b", "--lang", "go"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_error_empty_project_name() {
    let temp = TempDir::new().unwrap();

    hatch_in(&temp)
        .args(["new", "", "--lang", "go"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_error_missing_dir() {
    let temp = TempDir::new().unwrap();

    hatch_in(&temp)
        .args(["new", "demo", "--lang", "go", "--dir", "does-not-exist"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_error_file_in_the_way() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("demo"), "").unwrap();

    hatch_in(&temp)
        .args(["new", "demo", "--lang", "go"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to create directory"))
        .stderr(predicate::str::contains("Nothing was created").not());
}

#[test]
fn test_error_bad_arguments() {
    let temp = TempDir::new().unwrap();

    hatch_in(&temp)
        .args(["new", "demo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--lang"));
}
