//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary against a temporary config and date store.

use std::path::Path;
use std::process::Command;

/// Run a CLI command in `dir` and return (stdout, stderr, exit code).
fn run_cli(dir: &Path, args: &[&str]) -> (String, String, i32) {
    let config = dir.join("config.toml");
    let dates = dir.join("dates.txt");
    let output = Command::new(env!("CARGO_BIN_EXE_goaltracker"))
        .arg("--config")
        .arg(&config)
        .arg("--dates")
        .arg(&dates)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_list_creates_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["list"]);
    assert_eq!(code, 0, "List failed");
    assert!(stdout.contains("No dates"));
    assert!(dir.path().join("dates.txt").exists());
    assert!(dir.path().join("config.toml").exists());
}

#[test]
fn test_add_then_list() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["add", "2016|8|2|10|30|0"]);
    assert_eq!(code, 0, "Add failed");
    assert_eq!(stdout.trim(), "[0] - 2016-08-02 10:30:00");

    std::fs::write(
        dir.path().join("dates.txt"),
        "2016|8|2|10|30|0\n2016|13|2|10|30|0\n",
    )
    .unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["list"]);
    assert_eq!(code, 0, "List failed");
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["[0] - 2016-08-02 10:30:00", "The date could not be parsed."]
    );
}

#[test]
fn test_add_rejects_bad_date() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["add", "2016|2|31|0|0|0"]);
    assert_ne!(code, 0, "Add unexpectedly succeeded");
    assert!(stderr.contains("error:"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("dates.txt")).unwrap_or_default(),
        ""
    );
}

#[test]
fn test_list_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dates.txt"), "2016|8|2|10|30|0\nabc\n").unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["list", "--json"]);
    assert_eq!(code, 0, "List JSON failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let lines = parsed.as_array().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0]["parsed"]["date"], "2016-08-02T10:30:00");
    assert!(lines[1]["parsed"]["error"].is_string());
}

#[test]
fn test_status_json() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dates.txt"), "2016|8|2|10|30|0\n").unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["status", "0", "--json"]);
    assert_eq!(code, 0, "Status failed");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["type"], "GoalSnapshot");
    // Years past 2016 put the count well above 10 doublings of a day.
    assert!(parsed["goals_reached"].as_u64().unwrap() >= 11);
}

#[test]
fn test_status_text() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dates.txt"), "2016|8|2|10|30|0\n").unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["status", "0"]);
    assert_eq!(code, 0, "Status failed");
    assert!(stdout.contains("Current:"));
    assert!(stdout.contains("Number of Goals:"));
}

#[test]
fn test_status_rejects_bad_index() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dates.txt"), "2016|8|2|10|30|0\n").unwrap();

    let (_, stderr, code) = run_cli(dir.path(), &["status", "3"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("out of range"));

    let (_, stderr, code) = run_cli(dir.path(), &["status", "one"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("incorrect format"));
}

#[test]
fn test_config_set_get() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(
        dir.path(),
        &["config", "set", "notifications.enabled", "false"],
    );
    assert_eq!(code, 0, "Config set failed");
    assert_eq!(stdout.trim(), "ok");

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "notifications.enabled"]);
    assert_eq!(code, 0, "Config get failed");
    assert_eq!(stdout.trim(), "false");
}

#[test]
fn test_config_reset() {
    let dir = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(dir.path(), &["config", "set", "tick_interval_ms", "250"]);
    assert_eq!(code, 0, "Config set failed");

    let (stdout, _, code) = run_cli(dir.path(), &["config", "reset"]);
    assert_eq!(code, 0, "Config reset failed");
    assert!(stdout.contains("reset to defaults"));

    let (stdout, _, code) = run_cli(dir.path(), &["config", "get", "tick_interval_ms"]);
    assert_eq!(code, 0, "Config get failed");
    assert_eq!(stdout.trim(), "1000");
}

#[test]
fn test_config_get_unknown_key() {
    let dir = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(dir.path(), &["config", "get", "volume"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("unknown config key"));
}

#[test]
fn test_config_list() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["config", "list"]);
    assert_eq!(code, 0, "Config list failed");
    assert!(stdout.contains("tick_interval_ms = 1000"));
    assert!(stdout.contains("notifications.sound = music.mp3"));
}

#[test]
fn test_run_with_empty_store_exits() {
    let dir = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(dir.path(), &["run"]);
    assert_eq!(code, 0, "Run failed");
    assert!(stdout.contains("No dates"));
}
