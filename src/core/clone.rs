use crate::core::add::insert_and_resolve;
use crate::db::store::RangeStore;
use crate::errors::{AppError, AppResult};
use crate::models::Range;
use crate::utils::date::parse_day;
use chrono::NaiveDate;

/// Copies entries onto another day, keeping time of day and duration.
pub struct CloneLogic;

fn shift_onto(source: &Range, target: NaiveDate) -> AppResult<Range> {
    let offset = (target - source.start().date()).num_days();
    source.shifted_by_days(offset)
}

impl CloneLogic {
    /// Clone a single entry onto `target_date` (YYYY-MM-DD).
    pub fn to_date<S: RangeStore>(
        store: &mut S,
        source_id: i64,
        target_date: &str,
    ) -> AppResult<Range> {
        let target = parse_day(target_date)?;

        let created = store.atomic(|s| {
            let source = s.get(source_id)?.ok_or(AppError::NotFound(source_id))?;
            let copy = shift_onto(&source, target)?;
            insert_and_resolve(s, copy)
        })?;

        log::info!(
            "cloned entry #{} onto {} as #{}",
            source_id,
            target,
            created.id().unwrap_or_default()
        );

        Ok(created)
    }

    /// Clone every entry of `source_date` onto `target_date`.
    ///
    /// Entries are placed one after the other in start order, each one
    /// resolved before the next is inserted, so later clones see what earlier
    /// clones changed. The batch commits as a whole.
    ///
    /// Returns the clones as they stand once the batch is done; a clone that a
    /// later clone fully covered is no longer there and is not returned.
    pub fn all_from_date<S: RangeStore>(
        store: &mut S,
        source_date: &str,
        target_date: &str,
    ) -> AppResult<Vec<Range>> {
        let source_day = parse_day(source_date)?;
        let target_day = parse_day(target_date)?;

        let created = store.atomic(|s| {
            let sources = s.query_by_day(source_day)?;
            if sources.is_empty() {
                return Err(AppError::NoEntries(source_day.to_string()));
            }

            let mut ids = Vec::with_capacity(sources.len());
            for source in &sources {
                let copy = shift_onto(source, target_day)?;
                let placed = insert_and_resolve(s, copy)?;
                if let Some(id) = placed.id() {
                    ids.push(id);
                }
            }

            let mut out = Vec::with_capacity(ids.len());
            for id in ids {
                if let Some(r) = s.get(id)? {
                    out.push(r);
                }
            }
            Ok(out)
        })?;

        log::info!(
            "cloned {} entries from {} onto {}",
            created.len(),
            source_day,
            target_day
        );

        Ok(created)
    }
}
