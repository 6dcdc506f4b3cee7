//! Formatting utilities used for CLI output.

use rusqlite::types::Value;

/// Render a database value as plain text (`NULL` becomes an empty string).
pub fn value_to_string(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::Integer(i) => i.to_string(),
        Value::Real(f) => f.to_string(),
        Value::Text(s) => s.clone(),
        Value::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

/// Tuple-style rendering of a row: `(1, 'escapes', NULL)`.
pub fn format_row(row: &[Value]) -> String {
    let cells: Vec<String> = row
        .iter()
        .map(|v| match v {
            Value::Null => "NULL".to_string(),
            Value::Text(s) => format!("'{}'", s),
            other => value_to_string(other),
        })
        .collect();
    format!("({})", cells.join(", "))
}

/// Cut `s` to `max` characters, marking the cut with "...".
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_render_like_tuples() {
        let row = vec![
            Value::Integer(1),
            Value::Text("guard".into()),
            Value::Null,
        ];
        assert_eq!(format_row(&row), "(1, 'guard', NULL)");
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghijkl", 8), "abcde...");
    }
}
