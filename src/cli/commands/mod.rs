pub mod config;
pub mod db;
pub mod drill;
pub mod init;
pub mod log;
pub mod moves;
pub mod position;
pub mod session;

use crate::config::Config;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Record file: explicit `--file`, otherwise the configured path.
pub(crate) fn record_file(explicit: &Option<String>, configured: &str) -> PathBuf {
    expand_tilde(explicit.as_deref().unwrap_or(configured))
}

/// Drill hold: explicit `--hold`, otherwise the configured seconds.
pub(crate) fn hold_duration(explicit: Option<u64>, cfg: &Config) -> std::time::Duration {
    std::time::Duration::from_secs(explicit.unwrap_or(cfg.drill_hold_seconds))
}
