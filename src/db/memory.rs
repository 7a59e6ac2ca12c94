//! In-memory `RangeStore`, used by tests and by anything that wants the
//! resolver without a database file.

use crate::db::store::RangeStore;
use crate::errors::{AppError, AppResult};
use crate::models::Range;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    ranges: BTreeMap<i64, Range>,
    next_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Every stored range ordered by start.
    pub fn all(&self) -> Vec<Range> {
        sorted_by_start(self.ranges.values().cloned().collect())
    }

    fn distinct<F>(&self, label: F) -> Vec<String>
    where
        F: Fn(&Range) -> &str,
    {
        self.ranges
            .values()
            .map(|r| label(r).to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn sorted_by_start(mut v: Vec<Range>) -> Vec<Range> {
    v.sort_by_key(|r| (r.start(), r.id()));
    v
}

impl RangeStore for MemoryStore {
    fn query_overlapping(
        &self,
        exclude_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Range>> {
        Ok(sorted_by_start(
            self.ranges
                .iter()
                .filter(|(id, r)| **id != exclude_id && r.start() < end && r.end() > start)
                .map(|(_, r)| r.clone())
                .collect(),
        ))
    }

    fn insert(&mut self, range: &Range) -> AppResult<i64> {
        self.next_id += 1;
        let id = self.next_id;
        self.ranges.insert(id, range.clone().with_id(id));
        Ok(id)
    }

    fn update(&mut self, range: &Range) -> AppResult<()> {
        let id = range
            .id()
            .ok_or_else(|| AppError::Other("cannot update a range that was never inserted".into()))?;

        match self.ranges.get_mut(&id) {
            Some(slot) => {
                *slot = range.clone();
                Ok(())
            }
            None => Err(AppError::NotFound(id)),
        }
    }

    fn delete(&mut self, id: i64) -> AppResult<bool> {
        Ok(self.ranges.remove(&id).is_some())
    }

    fn get(&self, id: i64) -> AppResult<Option<Range>> {
        Ok(self.ranges.get(&id).cloned())
    }

    fn query_by_day(&self, day: NaiveDate) -> AppResult<Vec<Range>> {
        Ok(sorted_by_start(
            self.ranges
                .values()
                .filter(|r| r.day_key() == day)
                .cloned()
                .collect(),
        ))
    }

    fn query_recent(&self, limit: usize) -> AppResult<Vec<Range>> {
        let mut all = self.all();
        all.reverse();
        all.truncate(limit);
        Ok(all)
    }

    fn query_between_days(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Range>> {
        Ok(sorted_by_start(
            self.ranges
                .values()
                .filter(|r| r.day_key() >= from && r.day_key() <= to)
                .cloned()
                .collect(),
        ))
    }

    fn distinct_projects(&self) -> AppResult<Vec<String>> {
        Ok(self.distinct(Range::project))
    }

    fn distinct_task_types(&self) -> AppResult<Vec<String>> {
        Ok(self.distinct(Range::task_type))
    }

    fn atomic<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        let snapshot = self.clone();
        let outcome = f(self);
        if outcome.is_err() {
            *self = snapshot;
        }
        outcome
    }
}
