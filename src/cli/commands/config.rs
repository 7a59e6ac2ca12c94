use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        if *check {
            let missing = Config::missing_fields(&path)?;
            if missing.is_empty() {
                success(format!("{} has every known field.", path.display()));
            } else {
                warning(format!(
                    "{} is missing: {} (defaults are used)",
                    path.display(),
                    missing.join(", ")
                ));
            }
        }
    }

    Ok(())
}
