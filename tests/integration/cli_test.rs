use assert_cmd::Command;
use chrono::{Duration, Local};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

fn tasklist(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("tasklist").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("TASKLIST_DIR")
        .env_remove("RUST_LOG");
    cmd
}

fn init() -> TempDir {
    let dir = TempDir::new().unwrap();
    tasklist(&dir).arg("init").assert().success();
    dir
}

/// Add a task and return its id parsed from "Added task <id>".
fn add(dir: &TempDir, args: &[&str]) -> String {
    let output = tasklist(dir).arg("add").args(args).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Added task ")
        .unwrap_or_else(|| panic!("unexpected add output: {stdout}"))
        .to_string()
}

fn list_json(dir: &TempDir, filter: &str) -> Vec<Value> {
    let output = tasklist(dir)
        .args(["--json", "list", "--filter", filter])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    value.as_array().unwrap().clone()
}

#[test]
fn init_creates_workspace() {
    let dir = TempDir::new().unwrap();
    tasklist(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains(".tasklist"));

    assert!(dir.path().join(".tasklist").exists());
    assert!(dir.path().join(".tasklist/config.json").exists());
}

#[test]
fn init_twice_fails() {
    let dir = init();
    tasklist(&dir).arg("init").assert().failure();
}

#[test]
fn commands_outside_workspace_fail() {
    let dir = TempDir::new().unwrap();
    tasklist(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tasklist init"));
}

#[test]
fn list_empty() {
    let dir = init();
    tasklist(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet"));
    tasklist(&dir)
        .args(["list", "--filter", "completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No completed tasks"));
}

#[test]
fn add_persists_across_invocations() {
    let dir = init();
    let id = add(&dir, &["Buy groceries", "--due", "2030-05-01"]);

    let tasks = list_json(&dir, "all");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"].to_string(), id);
    assert_eq!(tasks[0]["text"], "Buy groceries");
    assert_eq!(tasks[0]["completed"], false);
    assert_eq!(tasks[0]["dueDate"], "2030-05-01");
    assert!(tasks[0]["createdAt"].is_string());

    let slot = std::fs::read_to_string(dir.path().join(".tasklist/tasks.json")).unwrap();
    assert!(slot.contains("Buy groceries"));
}

#[test]
fn add_blank_is_noop() {
    let dir = init();
    tasklist(&dir)
        .args(["add", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to add"));
    assert!(list_json(&dir, "all").is_empty());
    assert!(!dir.path().join(".tasklist/tasks.json").exists());
}

#[test]
fn add_rejects_bad_due_date() {
    let dir = init();
    tasklist(&dir)
        .args(["add", "Task", "--due", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid --due"));
}

#[test]
fn toggle_flips_and_unknown_is_reported() {
    let dir = init();
    let id = add(&dir, &["Walk the dog"]);

    tasklist(&dir)
        .args(["toggle", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed task"));
    assert_eq!(list_json(&dir, "completed").len(), 1);

    tasklist(&dir)
        .args(["toggle", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reopened task"));
    assert_eq!(list_json(&dir, "pending").len(), 1);

    tasklist(&dir)
        .args(["toggle", "12345"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No task 12345"));
}

#[test]
fn toggle_rejects_non_numeric_id() {
    let dir = init();
    tasklist(&dir).args(["toggle", "abc"]).assert().failure();
}

#[test]
fn delete_removes_only_target() {
    let dir = init();
    let keep = add(&dir, &["Keep"]);
    let gone = add(&dir, &["Remove"]);

    tasklist(&dir)
        .args(["delete", gone.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted task"));

    let tasks = list_json(&dir, "all");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["id"].to_string(), keep);

    tasklist(&dir)
        .args(["delete", gone.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No task"));
    assert_eq!(list_json(&dir, "all").len(), 1);
}

#[test]
fn edit_changes_only_given_fields() {
    let dir = init();
    let id = add(&dir, &["Draft essay", "--due", "2030-01-10"]);

    tasklist(&dir)
        .args(["edit", id.as_str(), "--text", "Finish essay"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated task"));
    let tasks = list_json(&dir, "all");
    assert_eq!(tasks[0]["text"], "Finish essay");
    assert_eq!(tasks[0]["dueDate"], "2030-01-10");

    tasklist(&dir).args(["edit", id.as_str(), "--no-due"]).assert().success();
    let tasks = list_json(&dir, "all");
    assert!(tasks[0].get("dueDate").is_none());
    assert_eq!(tasks[0]["text"], "Finish essay");
}

#[test]
fn edit_blank_text_leaves_task_unchanged() {
    let dir = init();
    let id = add(&dir, &["Original", "--due", "2030-01-10"]);
    let before = list_json(&dir, "all");

    tasklist(&dir)
        .args(["edit", id.as_str(), "--text", "  ", "--due", "2031-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));

    assert_eq!(list_json(&dir, "all"), before);
}

#[test]
fn edit_due_conflicts_with_no_due() {
    let dir = init();
    let id = add(&dir, &["Task"]);
    tasklist(&dir)
        .args(["edit", id.as_str(), "--due", "2030-01-01", "--no-due"])
        .assert()
        .failure();
}

#[test]
fn list_orders_for_display() {
    let dir = init();
    let a = add(&dir, &["A", "--due", "2030-01-10"]);
    let b = add(&dir, &["B"]);
    let c = add(&dir, &["C", "--due", "2030-01-01"]);
    let d = add(&dir, &["D", "--due", "2030-01-05"]);
    tasklist(&dir).args(["toggle", c.as_str()]).assert().success();

    let order: Vec<String> = list_json(&dir, "all")
        .iter()
        .map(|t| t["id"].to_string())
        .collect();
    assert_eq!(order, vec![d, a, b, c]);
}

#[test]
fn filter_counts_and_stats() {
    let dir = init();
    let ids: Vec<String> = (0..5).map(|i| add(&dir, &[format!("task {i}").as_str()])).collect();
    tasklist(&dir).args(["toggle", ids[0].as_str()]).assert().success();
    tasklist(&dir).args(["toggle", ids[3].as_str()]).assert().success();

    assert_eq!(list_json(&dir, "completed").len(), 2);
    assert_eq!(list_json(&dir, "pending").len(), 3);
    assert_eq!(list_json(&dir, "all").len(), 5);

    let output = tasklist(&dir).args(["--json", "stats"]).output().unwrap();
    let stats: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 5);
    assert_eq!(stats["completed"], 2);
    assert_eq!(stats["pending"], 3);
}

#[test]
fn list_marks_overdue() {
    let dir = init();
    let yesterday = (Local::now().date_naive() - Duration::days(1))
        .format("%Y-%m-%d")
        .to_string();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    add(&dir, &["Late", "--due", &yesterday]);
    add(&dir, &["On time", "--due", &today]);

    let output = tasklist(&dir).arg("list").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let late = stdout.lines().find(|l| l.contains("Late")).unwrap();
    let on_time = stdout.lines().find(|l| l.contains("On time")).unwrap();
    assert!(late.contains("OVERDUE"));
    assert!(!on_time.contains("OVERDUE"));
}

#[test]
fn corrupt_slot_starts_empty() {
    let dir = init();
    add(&dir, &["Will be lost"]);
    std::fs::write(dir.path().join(".tasklist/tasks.json"), "[{\"id\": 1, \"tex").unwrap();

    assert!(list_json(&dir, "all").is_empty());
    add(&dir, &["Fresh start"]);
    assert_eq!(list_json(&dir, "all").len(), 1);
}

#[test]
fn leftover_lock_file_does_not_lose_adds() {
    let dir = init();
    std::fs::write(dir.path().join(".tasklist/tasks.json.lock"), "").unwrap();

    add(&dir, &["one"]);
    add(&dir, &["two"]);
    add(&dir, &["three"]);

    assert_eq!(list_json(&dir, "all").len(), 3);
    assert!(!dir.path().join(".tasklist/tasks.json.lock").exists());
}

#[test]
fn dir_flag_and_env_select_workspace() {
    let dir = init();
    let elsewhere = TempDir::new().unwrap();
    add(&dir, &["Shared"]);

    tasklist(&elsewhere)
        .args(["--dir", dir.path().to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shared"));

    tasklist(&elsewhere)
        .env("TASKLIST_DIR", dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Shared"));
}

#[test]
fn discovers_workspace_from_subdirectory() {
    let dir = init();
    add(&dir, &["From root"]);
    let sub = dir.path().join("nested").join("deeper");
    std::fs::create_dir_all(&sub).unwrap();

    #[allow(deprecated)]
    Command::cargo_bin("tasklist")
        .unwrap()
        .env_remove("TASKLIST_DIR")
        .current_dir(&sub)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("From root"));
}
