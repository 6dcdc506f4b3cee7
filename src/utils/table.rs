//! Table rendering utilities for CLI outputs.

use super::colors::colorize_optional;
use super::formatting::truncate;

/// Widest cell rendered before truncation.
const MAX_CELL: usize = 40;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[String]) -> Self {
        Self {
            columns: headers
                .iter()
                .map(|h| Column {
                    header: h.clone(),
                    width: h.chars().count().min(MAX_CELL),
                })
                .collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.chars().count().min(MAX_CELL));
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&format!("{:<width$} ", col.header, width = col.width));
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&format!("{} ", "-".repeat(col.width)));
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let shown = truncate(cell, MAX_CELL);
                let pad = col.width.saturating_sub(shown.chars().count());
                out.push_str(&colorize_optional(&shown));
                if shown.trim().is_empty() {
                    // placeholder "--" is two characters wide
                    out.push_str(&" ".repeat(col.width.saturating_sub(2)));
                } else {
                    out.push_str(&" ".repeat(pad));
                }
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_follow_the_widest_cell() {
        let mut t = Table::new(&["id".to_string(), "class".to_string()]);
        t.add_row(vec!["1".into(), "submissions".into()]);
        assert_eq!(t.columns[0].width, 2);
        assert_eq!(t.columns[1].width, 11);

        let out = t.render();
        assert!(out.starts_with("id class"));
        assert!(out.contains("submissions"));
    }
}
