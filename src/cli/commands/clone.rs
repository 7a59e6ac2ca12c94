use crate::cli::commands::audit;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clone::CloneLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::entries::print_entries;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Clone { id, target } => {
            let mut pool = DbPool::open(&cfg.database)?;
            let created = CloneLogic::to_date(&mut pool, *id, target)?;

            let new_id = created.id().unwrap_or_default();
            audit(
                &pool,
                "clone",
                &format!("entry #{}", id),
                &format!("cloned onto {} as #{}", created.day_key_str(), new_id),
            );

            success(format!(
                "Entry #{} cloned onto {} as #{}.",
                id,
                created.day_key_str(),
                new_id
            ));
        }
        Commands::CloneDay {
            source,
            target,
            yesterday,
        } => {
            let (src, dst) = if *yesterday {
                (date::yesterday().to_string(), date::today().to_string())
            } else {
                match (source, target) {
                    (Some(s), Some(t)) => (s.clone(), t.clone()),
                    _ => {
                        return Err(AppError::InvalidDate(
                            "clone-day needs SOURCE and TARGET, or --yesterday".into(),
                        ));
                    }
                }
            };

            let mut pool = DbPool::open(&cfg.database)?;
            let created = CloneLogic::all_from_date(&mut pool, &src, &dst)?;

            audit(
                &pool,
                "clone-day",
                &format!("{} → {}", src, dst),
                &format!("{} entries cloned", created.len()),
            );

            success(format!(
                "Cloned {} entries from {} onto {}.",
                created.len(),
                src,
                dst
            ));
            print_entries(&dst, &created, &cfg.time_format);
        }
        _ => {}
    }

    Ok(())
}
