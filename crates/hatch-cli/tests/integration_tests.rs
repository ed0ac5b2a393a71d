//! Integration tests for the `hatch` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hatch() -> Command {
    let mut cmd = Command::cargo_bin("hatch").unwrap();
    cmd.env_remove("RUST_LOG").env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_help_flag() {
    hatch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hatch"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_version_flag() {
    hatch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_new_command_help() {
    hatch()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_new_go_project() {
    let temp = TempDir::new().unwrap();

    hatch()
        .args(["new", "demo", "--lang", "go", "--dir"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Project 'demo' created!"));

    let project = temp.path().join("demo");
    assert_eq!(
        std::fs::read_to_string(project.join("go.mod")).unwrap(),
        "module demo\n\ngo 1.20\n"
    );
    assert!(
        std::fs::read_to_string(project.join("main.go"))
            .unwrap()
            .contains("Hello, Go world!")
    );
    assert!(project.join(".gitignore").is_file());
}

#[test]
fn test_new_in_current_dir_by_menu_id() {
    let temp = TempDir::new().unwrap();

    hatch()
        .current_dir(temp.path())
        .args(["new", "my project", "--lang", "4"])
        .assert()
        .success();

    let cargo = std::fs::read_to_string(temp.path().join("my project/Cargo.toml")).unwrap();
    assert!(cargo.contains("name = \"my project\""));
    assert!(temp.path().join("my project/src/main.rs").is_file());
}

#[test]
fn test_new_twice_is_idempotent() {
    let temp = TempDir::new().unwrap();

    hatch()
        .current_dir(temp.path())
        .args(["new", "demo", "--lang", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists").not());

    hatch()
        .current_dir(temp.path())
        .args(["new", "demo", "--lang", "python"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    assert!(temp.path().join("demo/venv").is_dir());
    assert!(temp.path().join("demo/main.py").is_file());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    hatch()
        .current_dir(temp.path())
        .args(["new", "demo", "--lang", "java", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Main.java"));

    assert!(!temp.path().join("demo").exists());
}

#[test]
fn test_quiet_prints_nothing_on_success() {
    let temp = TempDir::new().unwrap();

    hatch()
        .current_dir(temp.path())
        .args(["-q", "new", "demo", "--lang", "lua"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(temp.path().join("demo/main.lua").is_file());
}

#[test]
fn test_list_plain() {
    hatch()
        .args(["list", "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("c\ncpp\npython\ngo\n"))
        .stdout(predicate::str::contains("haskell"));
}

#[test]
fn test_list_json() {
    let output = hatch()
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 12);
    assert_eq!(entries[3]["slug"], "go");
    assert_eq!(entries[3]["color"], "cyan");
    assert_eq!(entries[8]["files"][0], "main.sh");
}

#[test]
fn test_list_table() {
    hatch()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Available languages"))
        .stdout(predicate::str::contains("JavaScript (Node.js)"));
}

#[test]
fn test_completions_bash() {
    hatch()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hatch"));
}

#[test]
fn test_interactive_without_terminal_fails_cleanly() {
    let temp = TempDir::new().unwrap();

    hatch()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not a terminal"));

    assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[test]
fn test_log_file_receives_events() {
    let temp = TempDir::new().unwrap();
    let log = temp.path().join("hatch.log");

    hatch()
        .current_dir(temp.path())
        .args(["-v", "new", "demo", "--lang", "c", "--log-file"])
        .arg(&log)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("scaffold completed"));
}
