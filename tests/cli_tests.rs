//! Integration tests for CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn file_cleaner() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("file-cleaner"))
}

fn nested_fixture() -> TempDir {
    let temp = TempDir::new().expect("temp dir");
    let root = temp.path();
    fs::create_dir(root.join("subdir")).expect("mkdir subdir");
    fs::write(root.join("test_top.txt"), "content").expect("write top");
    fs::write(root.join("subdir/test_nested.txt"), "content").expect("write nested");
    fs::write(root.join("normal.txt"), "content").expect("write normal");
    temp
}

#[test]
fn test_cli_version() {
    let mut cmd = file_cleaner();
    cmd.arg("--version");
    cmd.assert().success().stdout(predicate::str::contains("file-cleaner"));
}

#[test]
fn test_cli_help() {
    let mut cmd = file_cleaner();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Suggests files to delete"))
        .stdout(predicate::str::contains("--patterns"))
        .stdout(predicate::str::contains("--no-recursive"));
}

#[test]
fn test_cli_requires_path() {
    let mut cmd = file_cleaner();
    cmd.assert().failure().stderr(predicate::str::contains("<PATH>"));
}

#[test]
fn test_recursive_report() {
    let fixture = nested_fixture();
    let mut cmd = file_cleaner();
    cmd.arg(fixture.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("FILE CLEANING AGENT REPORT"))
        .stdout(predicate::str::contains("Total files scanned: 3"))
        .stdout(predicate::str::contains("Files suggested for deletion: 2"))
        .stdout(predicate::str::contains("test_top.txt"))
        .stdout(predicate::str::contains("test_nested.txt"))
        .stdout(predicate::str::contains("normal.txt").not());
}

#[test]
fn test_no_recursive_flag() {
    let fixture = nested_fixture();
    let mut cmd = file_cleaner();
    cmd.arg(fixture.path()).arg("--no-recursive");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total files scanned: 2"))
        .stdout(predicate::str::contains("Files suggested for deletion: 1"))
        .stdout(predicate::str::contains("test_nested.txt").not());
}

#[test]
fn test_custom_patterns_flag() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("backup.txt"), "content").expect("write");
    fs::write(temp.path().join("temp.log"), "content").expect("write");
    fs::write(temp.path().join("test.txt"), "content").expect("write");

    let mut cmd = file_cleaner();
    cmd.arg(temp.path()).args(["--patterns", "backup", "temp"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Files suggested for deletion: 2"))
        .stdout(predicate::str::contains("  - ").count(2))
        .stdout(predicate::str::contains("test.txt").not());
}

#[test]
fn test_no_suggestions_message() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("normal.txt"), "content").expect("write");

    let mut cmd = file_cleaner();
    cmd.arg(temp.path());
    cmd.assert().success().stdout(predicate::str::contains("No files suggested for deletion."));
}

#[test]
fn test_missing_path_reports_error_and_exits_zero() {
    let temp = TempDir::new().expect("temp dir");
    let missing = temp.path().join("nonexistent");

    let mut cmd = file_cleaner();
    cmd.arg(&missing);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Error: Path does not exist:"))
        .stdout(predicate::str::contains("REPORT").not());
}

#[test]
fn test_file_path_reports_not_a_directory() {
    let temp = TempDir::new().expect("temp dir");
    let file = temp.path().join("test.txt");
    fs::write(&file, "content").expect("write");

    let mut cmd = file_cleaner();
    cmd.arg(&file);
    cmd.assert().success().stdout(predicate::str::contains("Error: Path is not a directory:"));
}

#[test]
fn test_json_output() {
    let fixture = nested_fixture();
    let mut cmd = file_cleaner();
    cmd.arg(fixture.path()).args(["--format", "json"]);
    let output = cmd.assert().success().get_output().stdout.clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).expect("valid json");
    assert!(parsed.get("error").is_none());
    assert_eq!(parsed["summary"]["total_files_scanned"], 3);
    assert_eq!(parsed["summary"]["files_suggested"], 2);
    assert_eq!(parsed["suggestions"].as_array().map(Vec::len), Some(2));
}

#[test]
fn test_discovered_config_supplies_patterns() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("file-cleaner.toml"), "patterns = ['draft']\n").expect("write");
    fs::write(temp.path().join("draft_v1.md"), "content").expect("write");
    fs::write(temp.path().join("test.txt"), "content").expect("write");

    let mut cmd = file_cleaner();
    cmd.arg(temp.path());
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total files scanned: 3"))
        .stdout(predicate::str::contains("Files suggested for deletion: 1"))
        .stdout(predicate::str::contains("draft_v1.md"));
}

#[test]
fn test_cli_patterns_override_config() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("file-cleaner.toml"), "patterns = ['draft']\n").expect("write");
    fs::write(temp.path().join("draft_v1.md"), "content").expect("write");
    fs::write(temp.path().join("test.txt"), "content").expect("write");

    let mut cmd = file_cleaner();
    cmd.arg(temp.path()).args(["--patterns", "test"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Files suggested for deletion: 1"))
        .stdout(predicate::str::contains("test.txt"))
        .stdout(predicate::str::contains("draft_v1.md").not());
}

#[test]
fn test_invalid_explicit_config_fails() {
    let temp = TempDir::new().expect("temp dir");
    let config = temp.path().join("bad.toml");
    fs::write(&config, "patterns = 123\n").expect("write");

    let mut cmd = file_cleaner();
    cmd.arg(temp.path()).arg("--config").arg(&config);
    cmd.assert().failure().stderr(predicate::str::contains("Invalid TOML config"));
}

#[test]
fn test_dot_argument_prints_bare_file_names() {
    let temp = TempDir::new().expect("temp dir");
    fs::write(temp.path().join("test.txt"), "content").expect("write");
    fs::create_dir(temp.path().join("sub")).expect("mkdir sub");
    fs::write(temp.path().join("sub/test_nested.txt"), "content").expect("write nested");

    let mut cmd = file_cleaner();
    cmd.current_dir(temp.path()).arg(".");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\n  - sub/test_nested.txt\n"))
        .stdout(predicate::str::contains("\n  - test.txt\n"))
        .stdout(predicate::str::contains("./").not());
}

#[test]
fn test_rust_log_overrides_default_level() {
    let temp = TempDir::new().expect("temp dir");

    let mut quiet = file_cleaner();
    quiet.env_remove("RUST_LOG").arg(temp.path());
    quiet.assert().success().stderr(predicate::str::contains("Scanning").not());

    let mut debug = file_cleaner();
    debug.env("RUST_LOG", "debug").arg(temp.path());
    debug.assert().success().stderr(predicate::str::contains("Scanning"));
}
