use crate::db::tables::create_table;
use crate::errors::AppResult;
use crate::db::pool::DbPool;
use crate::models::drill::{DRILL_COLUMNS, DRILLS_TABLE};
use crate::models::moves::Move;
use crate::models::position::Position;
use crate::models::record::Record;
use rusqlite::{Connection, Result};

/// Ensure that the internal `log` table exists.
pub fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create every table the application knows about. Idempotent.
pub fn run_pending_migrations(db_path: &str) -> AppResult<()> {
    let pool = DbPool::new(db_path)?;
    ensure_log_table(&pool.conn)?;
    drop(pool);

    create_table(db_path, Position::TABLE, Position::columns())?;
    create_table(db_path, Move::TABLE, Move::columns())?;
    create_table(db_path, DRILLS_TABLE, DRILL_COLUMNS)?;

    Ok(())
}
