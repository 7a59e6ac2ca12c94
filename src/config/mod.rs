use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".timelayer";
const CONFIG_FILE: &str = "timelayer.conf";
const DB_FILE: &str = "timelayer.sqlite";

/// Keys every configuration file is expected to carry.
pub const KNOWN_FIELDS: [&str; 3] = ["database", "recent_limit", "time_format"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
    #[serde(default = "default_time_format")]
    pub time_format: String,
}

fn default_recent_limit() -> usize {
    20
}
fn default_time_format() -> String {
    "%H:%M".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            recent_limit: default_recent_limit(),
            time_format: default_time_format(),
        }
    }
}

impl Config {
    /// Return the configuration directory (`~/.timelayer`, or `./.timelayer`
    /// when no home directory can be determined).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Fields from `KNOWN_FIELDS` absent in the file at `path`.
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Ok(KNOWN_FIELDS.to_vec());
        }

        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        let mapping = value
            .as_mapping()
            .ok_or_else(|| AppError::Config(format!("{}: not a mapping", path.display())))?;

        Ok(KNOWN_FIELDS
            .iter()
            .copied()
            .filter(|k| !mapping.contains_key(*k))
            .collect())
    }

    /// Create the config directory, write the config file (unless `is_test`)
    /// and return the resulting configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        // DB path: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() || is_test {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(config)
    }
}
