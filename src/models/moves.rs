use super::record::{Record, generate_guid, now_timestamp, text};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// A transition between two positions. `from_*`/`to_*` are free-text
/// references; nothing checks that the positions exist.
///
/// Older files prefix every key with `m_`; both spellings are read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    #[serde(alias = "m_guid")]
    pub guid: String,
    #[serde(alias = "m_from_pos")]
    pub from_pos: String,
    #[serde(alias = "m_from_tb")]
    pub from_tb: String,
    #[serde(alias = "m_to_pos")]
    pub to_pos: String,
    #[serde(alias = "m_to_tb")]
    pub to_tb: String,
    #[serde(alias = "m_category")]
    pub category: String,
    #[serde(alias = "m_name")]
    pub name: String,
    #[serde(alias = "m_code")]
    pub code: String,
    #[serde(alias = "m_infos")]
    pub infos: String,
    #[serde(alias = "m_step1")]
    pub step1: String,
    #[serde(alias = "m_step2")]
    pub step2: String,
    #[serde(alias = "m_step3")]
    pub step3: String,
    #[serde(alias = "m_counter1")]
    pub counter1: String,
    #[serde(alias = "m_counter2")]
    pub counter2: String,
    #[serde(alias = "m_counter3")]
    pub counter3: String,
    #[serde(alias = "m_family")]
    pub family: String,
    #[serde(alias = "m_level")]
    pub level: String,
    #[serde(alias = "m_created_at")]
    pub created_at: String,
}

/// Labels of the move form fields, in form order.
pub const MOVE_FIELDS: [&str; 16] = [
    "From position",
    "From TB",
    "To position",
    "To TB",
    "Category",
    "Name",
    "Code",
    "Infos",
    "Step 1",
    "Step 2",
    "Step 3",
    "Counter 1",
    "Counter 2",
    "Counter 3",
    "Family",
    "Level",
];

impl Move {
    pub fn new() -> Self {
        Self::from_fields(Default::default())
    }

    /// Build from the values of `MOVE_FIELDS`, in the same order.
    pub fn from_fields(fields: [String; 16]) -> Self {
        let [
            from_pos,
            from_tb,
            to_pos,
            to_tb,
            category,
            name,
            code,
            infos,
            step1,
            step2,
            step3,
            counter1,
            counter2,
            counter3,
            family,
            level,
        ] = fields;

        Self {
            guid: generate_guid(),
            from_pos,
            from_tb,
            to_pos,
            to_tb,
            category,
            name,
            code,
            infos,
            step1,
            step2,
            step3,
            counter1,
            counter2,
            counter3,
            family,
            level,
            created_at: now_timestamp(),
        }
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::new()
    }
}

impl Record for Move {
    const TABLE: &'static str = "moves";
    const LABEL: &'static str = "Move";

    fn columns() -> &'static [(&'static str, &'static str)] {
        &[
            ("guid", "TEXT PRIMARY KEY"),
            ("from_pos", "TEXT NOT NULL DEFAULT ''"),
            ("from_tb", "TEXT NOT NULL DEFAULT ''"),
            ("to_pos", "TEXT NOT NULL DEFAULT ''"),
            ("to_tb", "TEXT NOT NULL DEFAULT ''"),
            ("category", "TEXT NOT NULL DEFAULT ''"),
            ("name", "TEXT NOT NULL DEFAULT ''"),
            ("code", "TEXT NOT NULL DEFAULT ''"),
            ("infos", "TEXT NOT NULL DEFAULT ''"),
            ("step1", "TEXT NOT NULL DEFAULT ''"),
            ("step2", "TEXT NOT NULL DEFAULT ''"),
            ("step3", "TEXT NOT NULL DEFAULT ''"),
            ("counter1", "TEXT NOT NULL DEFAULT ''"),
            ("counter2", "TEXT NOT NULL DEFAULT ''"),
            ("counter3", "TEXT NOT NULL DEFAULT ''"),
            ("family", "TEXT NOT NULL DEFAULT ''"),
            ("level", "TEXT NOT NULL DEFAULT ''"),
            ("created_at", "TEXT NOT NULL"),
        ]
    }

    fn to_row(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("guid", text(&self.guid)),
            ("from_pos", text(&self.from_pos)),
            ("from_tb", text(&self.from_tb)),
            ("to_pos", text(&self.to_pos)),
            ("to_tb", text(&self.to_tb)),
            ("category", text(&self.category)),
            ("name", text(&self.name)),
            ("code", text(&self.code)),
            ("infos", text(&self.infos)),
            ("step1", text(&self.step1)),
            ("step2", text(&self.step2)),
            ("step3", text(&self.step3)),
            ("counter1", text(&self.counter1)),
            ("counter2", text(&self.counter2)),
            ("counter3", text(&self.counter3)),
            ("family", text(&self.family)),
            ("level", text(&self.level)),
            ("created_at", text(&self.created_at)),
        ]
    }

    fn guid(&self) -> &str {
        &self.guid
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn stamp(&mut self) {
        self.created_at = now_timestamp();
    }

    fn summary(&self) -> String {
        format!(
            "{} | {} -> {} | {} | {}",
            self.created_at, self.from_pos, self.to_pos, self.code, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_matches_column_schema() {
        let m = Move::new();
        let row_cols: Vec<&str> = m.to_row().iter().map(|(c, _)| *c).collect();
        let schema_cols: Vec<&str> = Move::columns().iter().map(|(c, _)| *c).collect();
        assert_eq!(row_cols, schema_cols);
    }

    #[test]
    fn each_move_gets_its_own_guid() {
        assert_ne!(Move::new().guid, Move::new().guid);
    }
}
