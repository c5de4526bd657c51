use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn snippets(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("snippets").unwrap();
    cmd.current_dir(dir)
        .env_remove("SNIPPETS_DB")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn with_db(dir: &TempDir) -> Command {
    let mut cmd = snippets(dir.path());
    cmd.arg("--database").arg(dir.path().join("snippets.db"));
    cmd
}

#[test]
fn test_put_then_get() {
    let temp_dir = TempDir::new().unwrap();

    with_db(&temp_dir)
        .args(["put", "greeting", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored").and(predicate::str::contains("\"hello\"")))
        .stdout(predicate::str::contains("\"greeting\""));

    with_db(&temp_dir)
        .args(["get", "greeting"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_get_missing_prints_sentinel() {
    let temp_dir = TempDir::new().unwrap();

    with_db(&temp_dir)
        .args(["get", "nothing-here"])
        .assert()
        .success()
        .stdout("404: Snippet Not Found\n");
}

#[test]
fn test_second_put_is_absorbed() {
    let temp_dir = TempDir::new().unwrap();

    with_db(&temp_dir).args(["put", "greeting", "hello"]).assert().success();

    with_db(&temp_dir)
        .args(["put", "greeting", "bonjour"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"bonjour\""))
        .stderr(predicate::str::contains("already exists").not());

    with_db(&temp_dir)
        .args(["get", "greeting"])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_catalog_lists_keywords() {
    let temp_dir = TempDir::new().unwrap();

    with_db(&temp_dir).arg("catalog").assert().success().stdout("");

    with_db(&temp_dir).args(["put", "one", "1"]).assert().success();
    with_db(&temp_dir).args(["put", "two", "2"]).assert().success();

    let output = with_db(&temp_dir).arg("catalog").assert().success().get_output().stdout.clone();
    let mut lines: Vec<String> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
}

#[test]
fn test_search() {
    let temp_dir = TempDir::new().unwrap();

    with_db(&temp_dir).args(["put", "a", "hello world"]).assert().success();
    with_db(&temp_dir).args(["put", "b", "goodbye"]).assert().success();

    with_db(&temp_dir)
        .args(["search", "hello"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello world"))
        .stdout(predicate::str::contains("goodbye").not());

    with_db(&temp_dir)
        .args(["search", "xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No snippets found."));
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = with_db(&temp_dir)
        .args(["--json", "put", "greeting", "hello"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["command"], "put");
    assert_eq!(value["data"]["inserted"], true);

    let output = with_db(&temp_dir)
        .args(["--json", "get", "missing"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["data"]["found"], false);
    assert!(value["data"]["message"].is_null());
}

#[test]
fn test_init_then_use_configured_database() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("store").join("notes.db");

    snippets(temp_dir.path())
        .arg("--database")
        .arg(&db)
        .arg("init")
        .assert()
        .success();
    assert!(temp_dir.path().join("snippets.toml").exists());
    assert!(db.exists());

    snippets(temp_dir.path()).args(["put", "greeting", "hello"]).assert().success();
    snippets(temp_dir.path())
        .args(["get", "greeting"])
        .assert()
        .success()
        .stdout("hello\n");

    snippets(temp_dir.path()).arg("init").assert().failure();
}

#[test]
fn test_empty_name_is_rejected() {
    let temp_dir = TempDir::new().unwrap();

    with_db(&temp_dir).args(["put", "", "hello"]).assert().failure();
}

#[test]
fn test_unopenable_database_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    snippets(temp_dir.path())
        .arg("--database")
        .arg(temp_dir.path())
        .args(["get", "greeting"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("open failed for"))
        .stderr(predicate::str::contains(temp_dir.path().display().to_string()));
}

#[test]
fn test_conflict_is_logged_to_configured_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("snippets.toml"), "log_file = \"snippets.log\"\n").unwrap();

    with_db(&temp_dir).args(["put", "a", "one"]).assert().success();
    with_db(&temp_dir)
        .args(["put", "a", "two"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists").not());

    let log = std::fs::read_to_string(temp_dir.path().join("snippets.log")).unwrap();
    assert!(log.contains("Snippet \"a\" already exists"));
    assert_eq!(log.matches("already exists").count(), 1);
}

#[test]
fn test_verbose_logs_conflict_to_stderr() {
    let temp_dir = TempDir::new().unwrap();

    with_db(&temp_dir)
        .args(["-v", "put", "a", "one"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists").not());

    with_db(&temp_dir)
        .args(["-v", "put", "a", "two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"two\""))
        .stderr(predicate::str::contains("Snippet \"a\" already exists"));
}
