use crate::cli::parser::Cli;
use crate::config::{Config, DATABASE_ENV};
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with `--test`)
///  - the SQLite database with the positions, moves, drills and log tables
pub fn handle(cli: &Cli) -> AppResult<()> {
    let custom = cli.db.clone().or_else(|| {
        std::env::var(DATABASE_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
    });
    let db_path = Config::init_all(custom, cli.test)?;

    println!("⚙️  Initializing bjjdb…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    init_db(&db_path)?;

    audit(
        &db_path,
        "init",
        "database",
        &format!("Database initialized at {}", &db_path),
    );

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
