use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::entries::{print_json, print_tags};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tags { json } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let tags = ListLogic::tags(&pool)?;

        if *json {
            print_json(&tags)?;
        } else {
            print_tags(&tags);
        }
    }

    Ok(())
}
