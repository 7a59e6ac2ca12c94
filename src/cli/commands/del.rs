use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let removed = DeleteLogic::apply(&mut pool, *id)?;

        audit(
            &pool,
            "del",
            &format!("entry #{}", id),
            &format!(
                "{} → {} {} / {}",
                removed.start_str(),
                removed.end_str(),
                removed.project(),
                removed.task_type()
            ),
        );

        success(format!(
            "Entry #{} ({} {} → {}) has been deleted.",
            id,
            removed.day_key_str(),
            removed.start().format(&cfg.time_format),
            removed.end().format(&cfg.time_format)
        ));
    }

    Ok(())
}
