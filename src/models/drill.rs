use crate::errors::{AppError, AppResult};
use crate::utils::formatting::value_to_string;
use rusqlite::types::Value;
use serde::Serialize;

pub const DRILLS_TABLE: &str = "drills";

/// Schema used by `init`. Only the positions matter to the reader:
/// 1 = class, 2 = from, 4 = do.
pub const DRILL_COLUMNS: &[(&str, &str)] = &[
    ("id", "INTEGER PRIMARY KEY AUTOINCREMENT"),
    ("class", "TEXT NOT NULL DEFAULT ''"),
    ("from_desc", "TEXT NOT NULL DEFAULT ''"),
    ("to_desc", "TEXT NOT NULL DEFAULT ''"),
    ("do_desc", "TEXT NOT NULL DEFAULT ''"),
];

const CLASS_IDX: usize = 1;
const FROM_IDX: usize = 2;
const DO_IDX: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Drill {
    pub class: String,
    pub from: String,
    pub instruction: String,
}

impl Drill {
    /// Read a drill from a positional row.
    pub fn from_row(row: &[Value]) -> AppResult<Self> {
        if row.len() <= DO_IDX {
            return Err(AppError::InvalidDrillRow(format!(
                "expected at least {} columns, got {}",
                DO_IDX + 1,
                row.len()
            )));
        }

        Ok(Self {
            class: value_to_string(&row[CLASS_IDX]),
            from: value_to_string(&row[FROM_IDX]),
            instruction: value_to_string(&row[DO_IDX]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> Value {
        Value::Text(s.to_string())
    }

    #[test]
    fn from_row_uses_fixed_positions() {
        let row = vec![
            Value::Integer(7),
            t("escapes"),
            t("bottom side control"),
            t("half guard"),
            t("frame and shrimp"),
        ];
        let d = Drill::from_row(&row).unwrap();
        assert_eq!(d.class, "escapes");
        assert_eq!(d.from, "bottom side control");
        assert_eq!(d.instruction, "frame and shrimp");
    }

    #[test]
    fn short_rows_are_rejected() {
        let row = vec![Value::Integer(1), t("a"), t("b")];
        assert!(matches!(
            Drill::from_row(&row),
            Err(AppError::InvalidDrillRow(_))
        ));
    }
}
