use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::SummaryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::entries::{print_json, print_summary};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary {
        from,
        to,
        period,
        json,
    } = cmd
    {
        let pool = DbPool::open(&cfg.database)?;

        let summary = match (from, to, period) {
            (Some(f), Some(t), _) => SummaryLogic::between(&pool, f, t)?,
            (_, _, Some(p)) => {
                let (f, t) = date::period_bounds(p)?;
                SummaryLogic::between_days(&pool, f, t)?
            }
            _ => {
                let (f, t) = date::current_month_bounds()?;
                SummaryLogic::between_days(&pool, f, t)?
            }
        };

        if *json {
            print_json(&summary)?;
        } else {
            print_summary(&summary);
        }
    }

    Ok(())
}
