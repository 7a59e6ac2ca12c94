#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;
use timelayer::db::store::RangeStore;
use timelayer::models::Range;

pub fn rti() -> Command {
    cargo_bin_cmd!("timelayer")
}

/// A database file inside its own temp dir; removed when dropped.
pub struct TestDb {
    _dir: TempDir,
    pub path: String,
}

pub fn setup_test_db(name: &str) -> TestDb {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir
        .path()
        .join(format!("{}_timelayer.sqlite", name))
        .to_string_lossy()
        .to_string();
    TestDb { _dir: dir, path }
}

/// Create the schema through the CLI, as a user would.
pub fn init_db(db_path: &str) {
    rti()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add an entry through the CLI.
pub fn add(db_path: &str, date: &str, from: &str, to: &str, project: &str) {
    rti()
        .args([
            "--db", db_path, "--test", "add", date, "--from", from, "--to", to, "-p", project,
            "-t", "dev",
        ])
        .assert()
        .success();
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S"))
        .expect("valid timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn range(start: &str, end: &str, project: &str) -> Range {
    Range::new(dt(start), dt(end), project, "dev", "").expect("valid range")
}

/// Persist `r` directly, bypassing resolution (for seeding a store).
pub fn seed<S: RangeStore>(store: &mut S, r: Range) -> Range {
    let id = store.insert(&r).expect("insert");
    r.with_id(id)
}

/// (start, end, project) of every range, ordered by start.
pub fn bounds(ranges: &[Range]) -> Vec<(String, String, String)> {
    let mut v: Vec<_> = ranges
        .iter()
        .map(|r| {
            (
                r.start().format("%Y-%m-%d %H:%M").to_string(),
                r.end().format("%Y-%m-%d %H:%M").to_string(),
                r.project().to_string(),
            )
        })
        .collect();
    v.sort();
    v
}

pub fn triple(start: &str, end: &str, project: &str) -> (String, String, String) {
    (start.to_string(), end.to_string(), project.to_string())
}

/// No two ranges overlap.
pub fn assert_disjoint(ranges: &[Range]) {
    for (i, a) in ranges.iter().enumerate() {
        for b in &ranges[i + 1..] {
            assert!(
                !a.overlaps(b),
                "overlap between {:?} and {:?}",
                (a.id(), a.start(), a.end()),
                (b.id(), b.start(), b.end())
            );
        }
    }
}
