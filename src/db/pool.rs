//! SQLite connection wrapper (lightweight for CLI usage) and its `RangeStore` impl.

use crate::db::initialize::init_db;
use crate::db::queries;
use crate::db::store::RangeStore;
use crate::errors::AppResult;
use crate::models::Range;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> rusqlite::Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the database and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = Self::new(path)?;
        init_db(&pool.conn)?;
        Ok(pool)
    }

    /// Private in-memory database with the full schema, used by tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self { conn })
    }
}

impl RangeStore for DbPool {
    fn query_overlapping(
        &self,
        exclude_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Range>> {
        queries::load_overlapping(&self.conn, exclude_id, start, end)
    }

    fn insert(&mut self, range: &Range) -> AppResult<i64> {
        queries::insert_range(&self.conn, range)
    }

    fn update(&mut self, range: &Range) -> AppResult<()> {
        queries::update_range(&self.conn, range)
    }

    fn delete(&mut self, id: i64) -> AppResult<bool> {
        queries::delete_range(&self.conn, id)
    }

    fn get(&self, id: i64) -> AppResult<Option<Range>> {
        queries::load_range(&self.conn, id)
    }

    fn query_by_day(&self, day: NaiveDate) -> AppResult<Vec<Range>> {
        queries::load_ranges_by_day(&self.conn, &day)
    }

    fn query_recent(&self, limit: usize) -> AppResult<Vec<Range>> {
        queries::load_recent(&self.conn, limit)
    }

    fn query_between_days(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Range>> {
        queries::load_ranges_between(&self.conn, &from, &to)
    }

    fn distinct_projects(&self) -> AppResult<Vec<String>> {
        queries::load_distinct_projects(&self.conn)
    }

    fn distinct_task_types(&self) -> AppResult<Vec<String>> {
        queries::load_distinct_task_types(&self.conn)
    }

    fn atomic<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        // Already inside a transaction: let the outer scope decide.
        if !self.conn.is_autocommit() {
            return f(self);
        }

        // IMMEDIATE takes the write lock up front, so two processes sharing
        // the file cannot both resolve against the same snapshot.
        self.conn.execute_batch("BEGIN IMMEDIATE")?;

        let outcome = f(self).and_then(|value| {
            self.conn.execute_batch("COMMIT")?;
            Ok(value)
        });

        if outcome.is_err() && !self.conn.is_autocommit() {
            if let Err(e) = self.conn.execute_batch("ROLLBACK") {
                log::error!("rollback failed: {}", e);
            }
        }

        outcome
    }
}
