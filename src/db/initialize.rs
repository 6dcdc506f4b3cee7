use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;

/// Initialize the database.
/// Delegates all schema creation to the migration step.
pub fn init_db(db_path: &str) -> AppResult<()> {
    run_pending_migrations(db_path)?;
    Ok(())
}
