//! Direct, single-statement table operations parameterized by a database
//! path and a table name.
//!
//! Identifiers are checked against an allow-list pattern and double-quoted
//! before they reach SQL text; values are always bound as parameters.

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::formatting::format_row;
use regex::Regex;
use rusqlite::types::Value;
use rusqlite::{ToSql, params_from_iter};
use std::sync::LazyLock;

/// One result row, in column order.
pub type Row = Vec<Value>;

/// Default condition for `select_rows`.
pub const ALL_ROWS: &str = "1=1";

/// Default pattern for `drop_tables_with_pattern`.
pub const DEFAULT_DROP_PATTERN: &str = "_";

static IDENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

static COLUMN_TYPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_ (),.']*$").expect("valid type regex"));

/// Validate a table or column name and return it quoted for SQL text.
pub fn quote_ident(name: &str) -> AppResult<String> {
    if !IDENT_RE.is_match(name) {
        return Err(AppError::InvalidIdentifier(name.to_string()));
    }
    Ok(format!("\"{}\"", name))
}

/// Column type clauses are free-form SQL (`TEXT NOT NULL DEFAULT ''`), so only
/// a conservative character set is accepted and comments are refused.
fn check_column_type(column: &str, ty: &str) -> AppResult<()> {
    if !COLUMN_TYPE_RE.is_match(ty) || ty.contains("--") {
        return Err(AppError::InvalidColumnType {
            column: column.to_string(),
            ty: ty.to_string(),
        });
    }
    Ok(())
}

/// Create `table` with the given `(column, type)` definitions if it does not
/// exist yet.
pub fn create_table(db_path: &str, table: &str, columns: &[(&str, &str)]) -> AppResult<()> {
    let table_q = quote_ident(table)?;

    let mut defs = Vec::with_capacity(columns.len());
    for (col, ty) in columns {
        check_column_type(col, ty)?;
        defs.push(format!("{} {}", quote_ident(col)?, ty));
    }

    let sql = format!("CREATE TABLE IF NOT EXISTS {} ({})", table_q, defs.join(", "));

    let pool = DbPool::new(db_path)?;
    pool.conn.execute(&sql, [])?;
    Ok(())
}

/// Insert one row. Column names are quoted identifiers, values are bound.
pub fn insert_row(db_path: &str, table: &str, data: &[(&str, Value)]) -> AppResult<()> {
    let table_q = quote_ident(table)?;

    let sql = if data.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES", table_q)
    } else {
        let columns = data
            .iter()
            .map(|(col, _)| quote_ident(col))
            .collect::<AppResult<Vec<_>>>()?;
        let placeholders = (1..=data.len())
            .map(|i| format!("?{}", i))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table_q,
            columns.join(", "),
            placeholders
        )
    };

    let pool = DbPool::new(db_path)?;
    pool.conn
        .execute(&sql, params_from_iter(data.iter().map(|(_, v)| v)))?;
    Ok(())
}

/// Return every row of `table` matching the raw SQL `condition`
/// (default `1=1`). When `printout` is set each row is also printed.
pub fn select_rows(
    db_path: &str,
    table: &str,
    condition: Option<&str>,
    printout: bool,
) -> AppResult<Vec<Row>> {
    let table_q = quote_ident(table)?;
    let condition = match condition {
        Some(c) if !c.trim().is_empty() => c,
        _ => ALL_ROWS,
    };

    let pool = DbPool::new(db_path)?;
    let mut stmt = pool
        .conn
        .prepare(&format!("SELECT * FROM {} WHERE {}", table_q, condition))?;
    let width = stmt.column_count();

    let rows = stmt.query_map([], |row| {
        (0..width)
            .map(|i| row.get::<_, Value>(i))
            .collect::<rusqlite::Result<Row>>()
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    if printout {
        for row in &out {
            println!("{}", format_row(row));
        }
    }

    Ok(out)
}

/// Delete rows where `column` equals `value`; returns the number removed.
pub fn delete_rows(
    db_path: &str,
    table: &str,
    column: &str,
    value: &dyn ToSql,
) -> AppResult<usize> {
    let sql = format!(
        "DELETE FROM {} WHERE {} = ?1",
        quote_ident(table)?,
        quote_ident(column)?
    );

    let pool = DbPool::new(db_path)?;
    let count = pool.conn.execute(&sql, &[value][..])?;
    Ok(count)
}

/// Names of user tables in catalogue order (SQLite internals excluded).
pub fn list_tables(db_path: &str) -> AppResult<Vec<String>> {
    let pool = DbPool::new(db_path)?;
    Ok(user_tables(&pool.conn)?)
}

fn user_tables(conn: &rusqlite::Connection) -> rusqlite::Result<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY rowid")?;
    let names = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for n in names {
        let n = n?;
        if !n.starts_with("sqlite_") {
            out.push(n);
        }
    }
    Ok(out)
}

/// Drop every user table whose name contains `pattern` (default `_`).
/// All drops run in one transaction; returns the dropped names.
pub fn drop_tables_with_pattern(
    db_path: &str,
    pattern: Option<&str>,
) -> AppResult<Vec<String>> {
    let pattern = pattern.unwrap_or(DEFAULT_DROP_PATTERN);

    let mut pool = DbPool::new(db_path)?;
    let dropped = pool.with_conn(|conn| {
        let tx = conn.transaction()?;
        let mut dropped = Vec::new();

        for name in user_tables(&tx)? {
            if name.contains(pattern) {
                // names come from the catalogue; quoting still guards odd characters
                let escaped = name.replace('"', "\"\"");
                tx.execute(&format!("DROP TABLE IF EXISTS \"{}\"", escaped), [])?;
                dropped.push(name);
            }
        }

        tx.commit()?;
        Ok(dropped)
    })?;

    Ok(dropped)
}

/// Number of rows in `table`.
pub fn count_rows(db_path: &str, table: &str) -> AppResult<i64> {
    let pool = DbPool::new(db_path)?;
    let count = pool.conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", quote_ident(table)?),
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_ident_accepts_plain_names() {
        assert_eq!(quote_ident("move_log").unwrap(), "\"move_log\"");
        assert_eq!(quote_ident("_x1").unwrap(), "\"_x1\"");
    }

    #[test]
    fn quote_ident_rejects_injection() {
        for bad in ["", "1abc", "a b", "drills; DROP TABLE x", "x\"y", "a-b"] {
            assert!(
                matches!(quote_ident(bad), Err(AppError::InvalidIdentifier(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn column_types_are_checked() {
        assert!(check_column_type("c", "TEXT NOT NULL DEFAULT ''").is_ok());
        assert!(check_column_type("c", "INTEGER PRIMARY KEY AUTOINCREMENT").is_ok());
        assert!(check_column_type("c", "NUMERIC(10, 2)").is_ok());
        assert!(check_column_type("c", "TEXT); DROP TABLE x").is_err());
        assert!(check_column_type("c", "TEXT -- comment").is_err());
    }
}
