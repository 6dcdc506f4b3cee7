use crate::db::migrate::ensure_log_table;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::truncate;
use ansi_term::Colour;

/// Widest "operation (target)" column before truncation.
const OP_WIDTH: usize = 40;

/// ANSI colour for each audited operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "drop" => Colour::Purple,
        "create" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // orange
        _ => Colour::White,
    }
}

pub struct LogEntry {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub struct LogLogic;

impl LogLogic {
    pub fn load(db_path: &str) -> AppResult<Vec<LogEntry>> {
        let pool = DbPool::new(db_path)?;
        ensure_log_table(&pool.conn)?;

        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let raw_date: String = row.get(1)?;
            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            Ok(LogEntry {
                id: row.get(0)?,
                date,
                operation: row.get(2)?,
                target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                message: row.get(4)?,
            })
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }
        Ok(entries)
    }

    pub fn print_log(db_path: &str) -> AppResult<()> {
        let entries = Self::load(db_path)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let color = color_for_operation(&e.operation);

            // padding is computed on the visible text, colour is added after
            let rest = if e.target.is_empty() {
                String::new()
            } else {
                let room = OP_WIDTH.saturating_sub(e.operation.len());
                truncate(&format!(" ({})", e.target), room)
            };
            let visible_len = e.operation.len() + rest.chars().count();
            let padding = " ".repeat(OP_WIDTH.saturating_sub(visible_len));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{}{} => {}",
                e.id,
                e.date,
                color.paint(e.operation.as_str()),
                rest,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
