use crate::db::migrate::ensure_log_table;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an internal log line into the `log` table.
pub fn ttlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    ensure_log_table(conn)?;

    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Open `db_path` and write one audit line. Failures are reported as a
/// warning and never abort the calling command.
pub fn audit(db_path: &str, operation: &str, target: &str, message: &str) {
    let result = crate::db::pool::DbPool::new(db_path)
        .map_err(crate::errors::AppError::from)
        .and_then(|pool| ttlog(&pool.conn, operation, target, message));

    if let Err(e) = result {
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}
