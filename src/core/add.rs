use crate::core::resolver;
use crate::db::store::RangeStore;
use crate::errors::{AppError, AppResult};
use crate::models::{NewEntry, Range};

/// An entry may end on the day after it starts, never later.
pub const MAX_SPAN_DAYS: i64 = 1;

/// High-level business logic for creating entries.
pub struct AddLogic;

impl AddLogic {
    /// Validate, persist and reconcile a new entry.
    ///
    /// The insert and every change the resolver makes to neighbouring
    /// entries are committed together.
    pub fn apply<S: RangeStore>(store: &mut S, entry: NewEntry) -> AppResult<Range> {
        let range = Range::new(
            entry.start,
            entry.end,
            entry.project,
            entry.task_type,
            entry.memo,
        )?;

        if range.span_days() > MAX_SPAN_DAYS {
            return Err(AppError::InvalidRange(format!(
                "entry spans {} days, at most {} allowed",
                range.span_days(),
                MAX_SPAN_DAYS
            )));
        }

        let created = store.atomic(|s| insert_and_resolve(s, range))?;

        log::info!(
            "created entry #{} {} → {} ({})",
            created.id().unwrap_or_default(),
            created.start(),
            created.end(),
            created.project()
        );

        Ok(created)
    }
}

/// Insert `range` and make it authoritative over everything it overlaps.
/// Must run inside `RangeStore::atomic`.
pub(crate) fn insert_and_resolve<S: RangeStore>(store: &mut S, range: Range) -> AppResult<Range> {
    let id = store.insert(&range)?;
    let persisted = range.with_id(id);
    resolver::resolve(store, &persisted)?;
    Ok(persisted)
}
