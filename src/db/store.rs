//! Abstract ordered-range store consumed by the resolver and the entry services.

use crate::errors::AppResult;
use crate::models::Range;
use chrono::{NaiveDate, NaiveDateTime};

/// Persisted collection of ranges keyed by id.
///
/// Implementations must honour the strict overlap predicate in
/// `query_overlapping`: a stored range `[s, e)` matches iff `s < end && e > start`,
/// so ranges that only touch the bounds are never returned.
pub trait RangeStore {
    /// Every stored range, other than `exclude_id`, intersecting `[start, end)`.
    fn query_overlapping(
        &self,
        exclude_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Range>>;

    /// Persist a new range and return the identity assigned to it.
    fn insert(&mut self, range: &Range) -> AppResult<i64>;

    /// Overwrite bounds, day key and labels of an already persisted range.
    fn update(&mut self, range: &Range) -> AppResult<()>;

    /// Remove a range. Returns `false` when nothing had that id.
    fn delete(&mut self, id: i64) -> AppResult<bool>;

    fn get(&self, id: i64) -> AppResult<Option<Range>>;

    /// Ranges whose day key equals `day`, ordered by start ascending.
    fn query_by_day(&self, day: NaiveDate) -> AppResult<Vec<Range>>;

    /// The `limit` most recent ranges, ordered by start descending.
    fn query_recent(&self, limit: usize) -> AppResult<Vec<Range>>;

    /// Ranges with `from <= day_key <= to`, ordered by start ascending.
    fn query_between_days(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Range>>;

    /// Sorted, de-duplicated project labels.
    fn distinct_projects(&self) -> AppResult<Vec<String>>;

    /// Sorted, de-duplicated task type labels.
    fn distinct_task_types(&self) -> AppResult<Vec<String>>;

    /// Run `f` as one unit: everything it wrote is kept on `Ok`
    /// and discarded on `Err`.
    fn atomic<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
        Self: Sized;
}
