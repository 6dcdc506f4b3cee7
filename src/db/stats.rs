use crate::db::tables::{count_rows, list_tables};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TABLES AND ROW COUNTS
    //
    let tables = list_tables(db_path)?;
    println!("{}• Tables:{}", CYAN, RESET);

    if tables.is_empty() {
        println!("    {GREY}--{RESET}");
    }

    for t in tables {
        let count = count_rows(db_path, &t)?;
        println!("    {:<20} {}{}{} row(s)", t, GREEN, count, RESET);
    }

    println!();
    Ok(())
}
