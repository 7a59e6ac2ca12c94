use crate::db::store::RangeStore;
use crate::errors::{AppError, AppResult};
use crate::models::summary::{DailyTotal, LabelTotal, Summary};
use crate::utils::date::parse_day;
use crate::utils::time::minutes_to_hours;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashMap};

pub struct SummaryLogic;

/// Largest total first, ties by name.
fn ranked(totals: HashMap<String, i64>) -> Vec<LabelTotal> {
    let mut out: Vec<LabelTotal> = totals
        .into_iter()
        .map(|(name, value)| LabelTotal { name, value })
        .collect();
    out.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    out
}

impl SummaryLogic {
    /// Totals over every entry whose day lies in `from..=to` (YYYY-MM-DD).
    pub fn between<S: RangeStore>(store: &S, from: &str, to: &str) -> AppResult<Summary> {
        let from = parse_day(from)?;
        let to = parse_day(to)?;
        Self::between_days(store, from, to)
    }

    pub fn between_days<S: RangeStore>(
        store: &S,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Summary> {
        if from > to {
            return Err(AppError::InvalidRange(format!(
                "summary period {} .. {} ends before it starts",
                from, to
            )));
        }

        let entries = store.query_between_days(from, to)?;

        let mut projects: HashMap<String, i64> = HashMap::new();
        let mut task_types: HashMap<String, i64> = HashMap::new();
        let mut daily: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        let mut total_minutes = 0;

        for e in &entries {
            let minutes = e.duration();
            *projects.entry(e.project().to_string()).or_default() += minutes;
            *task_types.entry(e.task_type().to_string()).or_default() += minutes;
            *daily.entry(e.day_key()).or_default() += minutes;
            total_minutes += minutes;
        }

        Ok(Summary {
            from,
            to,
            project_breakdown: ranked(projects),
            task_type_breakdown: ranked(task_types),
            daily_summary: daily
                .into_iter()
                .map(|(date, minutes)| DailyTotal {
                    date,
                    minutes,
                    hours: minutes_to_hours(minutes),
                })
                .collect(),
            total_minutes,
            total_hours: minutes_to_hours(total_minutes),
            entry_count: entries.len(),
        })
    }
}
