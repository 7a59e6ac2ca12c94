mod common;
use common::{add, init_db, rti, setup_test_db};

use predicates::prelude::*;
use serde_json::Value;

fn list_json(db_path: &str, date: &str) -> Vec<Value> {
    let output = rti()
        .args(["--db", db_path, "--test", "list", date, "--json"])
        .output()
        .expect("failed to run list");
    assert!(output.status.success());

    let parsed: Value = serde_json::from_slice(&output.stdout).expect("list prints JSON");
    parsed.as_array().cloned().expect("JSON array")
}

fn spans(entries: &[Value]) -> Vec<(String, String, String)> {
    entries
        .iter()
        .map(|e| {
            (
                e["start_time"].as_str().unwrap().to_string(),
                e["end_time"].as_str().unwrap().to_string(),
                e["project"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn span(start: &str, end: &str, project: &str) -> (String, String, String) {
    (start.into(), end.into(), project.into())
}

#[test]
fn test_init_creates_database() {
    let db = setup_test_db("init");
    init_db(&db.path);
    assert!(std::path::Path::new(&db.path).exists());

    rti()
        .args(["--db", &db.path, "--test", "db", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Integrity check passed"));
}

#[test]
fn test_add_splits_existing_entry() {
    let db = setup_test_db("split");
    init_db(&db.path);

    add(&db.path, "2025-09-01", "09:00", "17:00", "Alpha");
    add(&db.path, "2025-09-01", "12:00", "13:00", "Beta");

    let entries = list_json(&db.path, "2025-09-01");
    assert_eq!(
        spans(&entries),
        vec![
            span("09:00", "12:00", "Alpha"),
            span("12:00", "13:00", "Beta"),
            span("13:00", "17:00", "Alpha"),
        ]
    );
    assert_eq!(entries[0]["duration_minutes"], 180);
}

#[test]
fn test_add_rejects_end_before_start() {
    let db = setup_test_db("reversed");
    init_db(&db.path);

    rti()
        .args([
            "--db", &db.path, "--test", "add", "2025-09-01", "--from", "10:00", "--to", "09:00",
            "-p", "Alpha", "-t", "dev",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid range"));
}

#[test]
fn test_add_overnight_with_end_date() {
    let db = setup_test_db("overnight");
    init_db(&db.path);

    rti()
        .args([
            "--db",
            &db.path,
            "--test",
            "add",
            "2025-09-01",
            "--from",
            "22:00",
            "--to",
            "02:00",
            "--end-date",
            "2025-09-02",
            "-p",
            "Ops",
            "-t",
            "oncall",
            "-m",
            "deploy window",
        ])
        .assert()
        .success();

    let entries = list_json(&db.path, "2025-09-01");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["end_date"], "2025-09-02");
    assert_eq!(entries[0]["memo"], "deploy window");
    assert_eq!(entries[0]["duration_minutes"], 240);

    rti()
        .args([
            "--db", &db.path, "--test", "add", "2025-09-01", "--from", "22:00", "--to", "02:00",
            "--end-date", "2025-09-03", "-p", "Ops", "-t", "oncall",
        ])
        .assert()
        .failure();
}

#[test]
fn test_invalid_time_is_reported() {
    let db = setup_test_db("bad_time");
    init_db(&db.path);

    rti()
        .args([
            "--db", &db.path, "--test", "add", "2025-09-01", "--from", "9h", "--to", "10:00",
            "-p", "Alpha", "-t", "dev",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn test_del_and_missing_id() {
    let db = setup_test_db("del");
    init_db(&db.path);
    add(&db.path, "2025-09-01", "09:00", "10:00", "Alpha");

    let entries = list_json(&db.path, "2025-09-01");
    let id = entries[0]["id"].as_i64().unwrap().to_string();

    rti()
        .args(["--db", &db.path, "--test", "del", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("has been deleted"));

    assert!(list_json(&db.path, "2025-09-01").is_empty());

    rti()
        .args(["--db", &db.path, "--test", "del", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn test_clone_and_clone_day() {
    let db = setup_test_db("clone");
    init_db(&db.path);
    add(&db.path, "2025-09-01", "09:00", "10:00", "Alpha");
    add(&db.path, "2025-09-01", "10:00", "11:00", "Beta");
    add(&db.path, "2025-09-02", "09:30", "12:00", "Gamma");

    rti()
        .args(["--db", &db.path, "--test", "clone-day", "2025-09-01", "2025-09-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cloned 2 entries"));

    assert_eq!(
        spans(&list_json(&db.path, "2025-09-02")),
        vec![
            span("09:00", "10:00", "Alpha"),
            span("10:00", "11:00", "Beta"),
            span("11:00", "12:00", "Gamma"),
        ]
    );

    let first = list_json(&db.path, "2025-09-01")[0]["id"]
        .as_i64()
        .unwrap()
        .to_string();
    rti()
        .args(["--db", &db.path, "--test", "clone", &first, "2025-09-05"])
        .assert()
        .success();
    assert_eq!(
        spans(&list_json(&db.path, "2025-09-05")),
        vec![span("09:00", "10:00", "Alpha")]
    );

    rti()
        .args(["--db", &db.path, "--test", "clone-day", "2025-08-01", "2025-09-05"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entries found"));
}

#[test]
fn test_tags_and_summary_json() {
    let db = setup_test_db("tags");
    init_db(&db.path);
    add(&db.path, "2025-09-01", "09:00", "10:30", "Zeta");
    add(&db.path, "2025-09-02", "09:00", "10:00", "Alpha");

    let output = rti()
        .args(["--db", &db.path, "--test", "tags", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let tags: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(tags["projects"], serde_json::json!(["Alpha", "Zeta"]));
    assert_eq!(tags["task_types"], serde_json::json!(["dev"]));

    let output = rti()
        .args(["--db", &db.path, "--test", "summary", "--period", "2025-09", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let summary: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["total_minutes"], 150);
    assert_eq!(summary["entry_count"], 2);
    assert_eq!(summary["project_breakdown"][0]["name"], "Zeta");
    assert_eq!(summary["daily_summary"][1]["hours"], 1.0);
}

#[test]
fn test_log_records_operations() {
    let db = setup_test_db("log");
    init_db(&db.path);
    add(&db.path, "2025-09-01", "09:00", "10:00", "Alpha");

    rti()
        .args(["--db", &db.path, "--test", "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("add"));
}
