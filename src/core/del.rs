use crate::db::store::RangeStore;
use crate::errors::{AppError, AppResult};
use crate::models::Range;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one entry by id. Neighbouring entries are left as they are.
    pub fn apply<S: RangeStore>(store: &mut S, id: i64) -> AppResult<Range> {
        let removed = store.atomic(|s| {
            let existing = s.get(id)?.ok_or(AppError::NotFound(id))?;
            if !s.delete(id)? {
                return Err(AppError::NotFound(id));
            }
            Ok(existing)
        })?;

        log::info!("deleted entry #{}", id);
        Ok(removed)
    }
}
