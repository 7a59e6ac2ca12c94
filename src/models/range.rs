use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate, NaiveDateTime, SubsecRound};
use serde::Serialize;

/// Text format used for persisted timestamps.
/// Sorts lexicographically in chronological order, so SQL comparisons work.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Text format used for `day_key`.
pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A persisted time entry covering the half-open interval `[start, end)`.
///
/// Fields are private so `end > start` and `day_key == start.date()` cannot be
/// broken from outside: every mutator goes through `set_start` / `set_end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Range {
    id: Option<i64>,           // ⇔ entries.id (None until inserted)
    start: NaiveDateTime,      // ⇔ entries.start (inclusive)
    end: NaiveDateTime,        // ⇔ entries.end   (exclusive)
    day_key: NaiveDate,        // ⇔ entries.day_key (TEXT "YYYY-MM-DD")
    project: String,           // ⇔ entries.project
    task_type: String,         // ⇔ entries.task_type
    memo: String,              // ⇔ entries.memo (default '')
}

impl Range {
    /// Build a new, not yet persisted range.
    ///
    /// Bounds are truncated to whole seconds, the precision stores keep.
    /// Fails with `InvalidRange` when `end <= start` after truncation and
    /// with `InvalidLabel` when project or task type is blank.
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        project: impl Into<String>,
        task_type: impl Into<String>,
        memo: impl Into<String>,
    ) -> AppResult<Self> {
        let start = start.trunc_subsecs(0);
        let end = end.trunc_subsecs(0);

        if end <= start {
            return Err(AppError::InvalidRange(format!(
                "end {} must be after start {}",
                end.format(TIMESTAMP_FORMAT),
                start.format(TIMESTAMP_FORMAT)
            )));
        }

        let project = normalize_label(project.into(), "project")?;
        let task_type = normalize_label(task_type.into(), "task type")?;

        Ok(Self {
            id: None,
            start,
            end,
            day_key: start.date(),
            project,
            task_type,
            memo: memo.into(),
        })
    }

    /// Rebuild a range read back from a store.
    /// Same validation as `new`, plus the stored identity.
    pub fn from_stored(
        id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
        project: impl Into<String>,
        task_type: impl Into<String>,
        memo: impl Into<String>,
    ) -> AppResult<Self> {
        let mut r = Self::new(start, end, project, task_type, memo)?;
        r.id = Some(id);
        Ok(r)
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn day_key(&self) -> NaiveDate {
        self.day_key
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn task_type(&self) -> &str {
        &self.task_type
    }

    pub fn memo(&self) -> &str {
        &self.memo
    }

    /// Attach the identity assigned by the store.
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Elapsed whole minutes, floor-truncated.
    pub fn duration(&self) -> i64 {
        (self.end - self.start).num_seconds() / 60
    }

    /// Strict overlap: ranges touching at a boundary do not overlap.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Number of calendar days between the start date and the end date.
    pub fn span_days(&self) -> i64 {
        (self.end.date() - self.start.date()).num_days()
    }

    /// Move the start, recomputing `day_key` from the new start.
    pub fn set_start(&mut self, start: NaiveDateTime) -> AppResult<()> {
        if self.end <= start {
            return Err(AppError::InvalidRange(format!(
                "cannot move start to {}: end is {}",
                start.format(TIMESTAMP_FORMAT),
                self.end.format(TIMESTAMP_FORMAT)
            )));
        }
        self.start = start;
        self.day_key = start.date();
        Ok(())
    }

    /// Move the end. `day_key` follows the start only, so it is left as is.
    pub fn set_end(&mut self, end: NaiveDateTime) -> AppResult<()> {
        if end <= self.start {
            return Err(AppError::InvalidRange(format!(
                "cannot move end to {}: start is {}",
                end.format(TIMESTAMP_FORMAT),
                self.start.format(TIMESTAMP_FORMAT)
            )));
        }
        self.end = end;
        Ok(())
    }

    /// A fresh range `[from, self.end)` carrying the same labels and memo.
    pub fn remainder(&self, from: NaiveDateTime) -> AppResult<Range> {
        Range::new(
            from,
            self.end,
            self.project.clone(),
            self.task_type.clone(),
            self.memo.clone(),
        )
    }

    /// A fresh copy moved by `days` calendar days, same time of day and duration.
    ///
    /// Fails with `InvalidDate` when either bound leaves the representable range.
    pub fn shifted_by_days(&self, days: i64) -> AppResult<Range> {
        let offset = Duration::try_days(days)
            .ok_or_else(|| AppError::InvalidDate(format!("cannot shift by {} days", days)))?;
        let out_of_range = || {
            AppError::InvalidDate(format!(
                "{} shifted by {} days is out of range",
                self.day_key_str(),
                days
            ))
        };
        let start = self
            .start
            .checked_add_signed(offset)
            .ok_or_else(out_of_range)?;
        let end = self.end.checked_add_signed(offset).ok_or_else(out_of_range)?;

        Range::new(
            start,
            end,
            self.project.clone(),
            self.task_type.clone(),
            self.memo.clone(),
        )
    }

    pub fn day_key_str(&self) -> String {
        self.day_key.format(DAY_KEY_FORMAT).to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format(TIMESTAMP_FORMAT).to_string()
    }
}

fn normalize_label(value: String, what: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidLabel(format!("{} must not be empty", what)));
    }
    Ok(trimmed.to_string())
}

/// Input for creating an entry, before any validation.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub project: String,
    pub task_type: String,
    pub memo: String,
}

impl NewEntry {
    pub fn new(
        start: NaiveDateTime,
        end: NaiveDateTime,
        project: impl Into<String>,
        task_type: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            project: project.into(),
            task_type: task_type.into(),
            memo: String::new(),
        }
    }

    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }
}
