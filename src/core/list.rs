use crate::db::store::RangeStore;
use crate::errors::AppResult;
use crate::models::Range;
use crate::models::tags::Tags;
use crate::utils::date::parse_day;

/// Read-only views over the stored entries.
pub struct ListLogic;

impl ListLogic {
    /// Entries of one day (YYYY-MM-DD), earliest first.
    pub fn by_day<S: RangeStore>(store: &S, day: &str) -> AppResult<Vec<Range>> {
        let d = parse_day(day)?;
        store.query_by_day(d)
    }

    /// The `limit` most recent entries, latest first.
    pub fn recent<S: RangeStore>(store: &S, limit: usize) -> AppResult<Vec<Range>> {
        store.query_recent(limit)
    }

    pub fn tags<S: RangeStore>(store: &S) -> AppResult<Tags> {
        Ok(Tags {
            projects: store.distinct_projects()?,
            task_types: store.distinct_task_types()?,
        })
    }
}
