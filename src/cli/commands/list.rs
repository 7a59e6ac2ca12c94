use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::entries::{EntryView, print_entries, print_json};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        date: day,
        today,
        recent,
        json,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;

        let (title, ranges) = if let Some(limit) = recent {
            let limit = limit.unwrap_or(cfg.recent_limit);
            (
                format!("{} most recent", limit),
                ListLogic::recent(&pool, limit)?,
            )
        } else {
            let d = match day {
                Some(d) if !*today => d.clone(),
                _ => date::today().to_string(),
            };
            let ranges = ListLogic::by_day(&pool, &d)?;
            (d, ranges)
        };

        if *json {
            let views: Vec<EntryView> = ranges
                .iter()
                .map(|r| EntryView::from_range(r, &cfg.time_format))
                .collect();
            print_json(&views)?;
        } else {
            print_entries(&title, &ranges, &cfg.time_format);
        }
    }

    Ok(())
}
