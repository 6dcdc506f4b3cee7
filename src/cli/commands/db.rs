use crate::cli::parser::{Commands, DbAction};
use crate::config::Config;
use crate::db::log::audit;
use crate::db::stats;
use crate::db::pool::DbPool;
use crate::db::tables::{
    create_table, delete_rows, drop_tables_with_pattern, insert_row, quote_ident, select_rows,
};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::formatting::value_to_string;
use crate::utils::table::Table;
use rusqlite::types::Value;

/// Split `NAME<sep>REST` arguments such as `guid:TEXT` or `name=armbar`.
fn split_pair<'a>(arg: &'a str, sep: char, what: &str) -> AppResult<(&'a str, &'a str)> {
    arg.split_once(sep)
        .map(|(k, v)| (k.trim(), v))
        .ok_or_else(|| {
            AppError::Other(format!(
                "Invalid {} '{}': expected NAME{}VALUE",
                what, arg, sep
            ))
        })
}

fn column_names(db_path: &str, table: &str) -> AppResult<Vec<String>> {
    let pool = DbPool::new(db_path)?;
    let sql = format!("SELECT * FROM {} LIMIT 0", quote_ident(table)?);
    let stmt = pool.conn.prepare(&sql)?;
    Ok(stmt.column_names().into_iter().map(str::to_string).collect())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db { action } = cmd else {
        return Ok(());
    };
    let db_path = cfg.database.as_str();

    match action {
        DbAction::Create { table, columns } => {
            let parsed = columns
                .iter()
                .map(|c| split_pair(c, ':', "column").map(|(n, t)| (n, t.trim())))
                .collect::<AppResult<Vec<_>>>()?;

            create_table(db_path, table, &parsed)?;
            audit(db_path, "create", table, &format!("Table '{}' created", table));
            success(format!("Table '{}' created successfully.", table));
        }

        DbAction::Insert { table, values } => {
            let parsed = values
                .iter()
                .map(|v| {
                    split_pair(v, '=', "value").map(|(n, v)| (n, Value::Text(v.to_string())))
                })
                .collect::<AppResult<Vec<_>>>()?;

            insert_row(db_path, table, &parsed)?;
            audit(db_path, "add", table, "Row inserted");
            success(format!("Row inserted into '{}'", table));
        }

        DbAction::Select {
            table,
            condition,
            raw,
        } => {
            let rows = select_rows(db_path, table, condition.as_deref(), *raw)?;

            if !*raw {
                let mut t = Table::new(&column_names(db_path, table)?);
                for row in &rows {
                    t.add_row(row.iter().map(value_to_string).collect());
                }
                print!("{}", t.render());
            }
            info(format!("{} row(s)", rows.len()));
        }

        DbAction::Delete {
            table,
            column,
            value,
        } => {
            let count = delete_rows(db_path, table, column, value)?;
            let msg = format!(
                "{} record(s) deleted from {} where {} = {}.",
                count, table, column, value
            );
            audit(db_path, "del", table, &msg);
            success(msg);
        }

        DbAction::Drop { pattern, yes } => {
            if !*yes
                && !ask_confirmation(&format!(
                    "Drop every table whose name contains '{}'? This action is irreversible.",
                    pattern
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            let dropped = drop_tables_with_pattern(db_path, Some(pattern.as_str()))?;
            if dropped.is_empty() {
                info(format!("No table name contains '{}'", pattern));
            } else {
                for t in &dropped {
                    println!("dropped: {}", t);
                }
                audit(db_path, "drop", pattern, &format!("Dropped {}", dropped.join(", ")));
                success(format!("{} table(s) dropped.", dropped.len()));
            }
        }

        DbAction::Info => stats::print_db_info(db_path)?,
    }

    Ok(())
}
