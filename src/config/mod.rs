use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable that supplies the database path.
pub const DATABASE_ENV: &str = "BJJDB_DATABASE";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_positions_file")]
    pub positions_file: String,
    #[serde(default = "default_moves_file")]
    pub moves_file: String,
    #[serde(default = "default_drill_hold")]
    pub drill_hold_seconds: u64,
}

fn default_positions_file() -> String {
    "positions.json".to_string()
}
fn default_moves_file() -> String {
    "moves.json".to_string()
}
fn default_drill_hold() -> u64 {
    5
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            positions_file: default_positions_file(),
            moves_file: default_moves_file(),
            drill_hold_seconds: default_drill_hold(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("bjjdb")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".bjjdb")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bjjdb.conf")
    }

    /// Return the full path of the default SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("bjjdb.sqlite")
    }

    /// Resolve a database name: relative paths live in the config dir.
    /// Every source (`--db`, `BJJDB_DATABASE`, the config file, `init`)
    /// goes through here so they all name the same file.
    pub fn resolve_database(name: &str) -> String {
        let p = Path::new(name);
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            Self::config_dir().join(p)
        };
        path.to_string_lossy().to_string()
    }

    /// Load configuration from file, or return defaults if not found.
    /// `BJJDB_DATABASE` overrides the `database` entry.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?
        } else {
            Config::default()
        };

        if let Ok(db) = env::var(DATABASE_ENV)
            && !db.trim().is_empty()
        {
            cfg.database = db;
        }
        cfg.database = Self::resolve_database(&cfg.database);

        Ok(cfg)
    }

    /// Initialize configuration and database files.
    /// Returns the resolved database path.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let database = match custom_name {
            Some(name) => Self::resolve_database(&name),
            None => Self::database_file().to_string_lossy().to_string(),
        };

        let config = Config {
            database,
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config.database)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg: Config = serde_yaml::from_str("database: /tmp/x.sqlite\n").unwrap();
        assert_eq!(cfg.database, "/tmp/x.sqlite");
        assert_eq!(cfg.positions_file, "positions.json");
        assert_eq!(cfg.moves_file, "moves.json");
        assert_eq!(cfg.drill_hold_seconds, 5);
    }

    #[test]
    fn relative_database_lives_in_config_dir() {
        let resolved = Config::resolve_database("rel.sqlite");
        assert_eq!(
            resolved,
            Config::config_dir().join("rel.sqlite").to_string_lossy()
        );
        assert_eq!(Config::resolve_database("/tmp/abs.sqlite"), "/tmp/abs.sqlite");
    }
}
