use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::db::store::RangeStore;
use crate::errors::AppResult;
use crate::models::NewEntry;
use crate::ui::entries::print_entries;
use crate::ui::messages::success;
use crate::utils::date::parse_day;
use crate::utils::time::{at, parse_required_time};

/// Add a time entry and report how the day looks afterwards.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        end_date,
        project,
        task_type,
        memo,
    } = cmd
    {
        //
        // 1. Parse input
        //
        let start_day = parse_day(date)?;
        let end_day = match end_date {
            Some(d) => parse_day(d)?,
            None => start_day,
        };
        let start_at = at(start_day, parse_required_time(start)?);
        let end_at = at(end_day, parse_required_time(end)?);

        //
        // 2. Create and reconcile
        //
        let mut pool = DbPool::open(&cfg.database)?;
        let entry = NewEntry::new(start_at, end_at, project.as_str(), task_type.as_str())
            .memo(memo.as_str());
        let created = AddLogic::apply(&mut pool, entry)?;

        let id = created.id().unwrap_or_default();
        audit(
            &pool,
            "add",
            &format!("entry #{}", id),
            &format!(
                "{} → {} {} / {}",
                created.start_str(),
                created.end_str(),
                created.project(),
                created.task_type()
            ),
        );

        success(format!(
            "Added entry #{} on {}: {} → {} ({} min).",
            id,
            created.day_key_str(),
            created.start().format(&cfg.time_format),
            created.end().format(&cfg.time_format),
            created.duration()
        ));

        //
        // 3. Show the reconciled day
        //
        let day = pool.query_by_day(created.day_key())?;
        print_entries(&created.day_key_str(), &day, &cfg.time_format);
    }

    Ok(())
}
