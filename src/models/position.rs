use super::realm::Realm;
use super::record::{Record, generate_guid, now_timestamp, text};
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub guid: String,
    pub realm: Realm,
    pub class: String,
    pub family: String,
    pub name: String,
    pub id: String,
    pub code: String,
    pub btg_top: String,
    pub btg_pass: String,
    pub btg_dom: String,
    pub variant: String,
    #[serde(alias = "specfics")]
    pub specifics: String,
    pub level: String,
    pub alt_names: String,
    pub created_at: String, // ISO 8601, set at submission
}

/// Labels of the free-text fields, in form order.
pub const POSITION_FIELDS: [&str; 12] = [
    "Class",
    "Family",
    "Name",
    "ID",
    "Code",
    "BTG Top",
    "BTG Pass",
    "BTG Dom",
    "Variant",
    "Specifics",
    "Level",
    "Alternative names",
];

impl Position {
    /// Empty position with a fresh guid and the current timestamp.
    pub fn new(realm: Realm) -> Self {
        Self {
            guid: generate_guid(),
            realm,
            class: String::new(),
            family: String::new(),
            name: String::new(),
            id: String::new(),
            code: String::new(),
            btg_top: String::new(),
            btg_pass: String::new(),
            btg_dom: String::new(),
            variant: String::new(),
            specifics: String::new(),
            level: String::new(),
            alt_names: String::new(),
            created_at: now_timestamp(),
        }
    }

    /// Build from the values of `POSITION_FIELDS`, in the same order.
    pub fn from_fields(realm: Realm, fields: [String; 12]) -> Self {
        let [
            class,
            family,
            name,
            id,
            code,
            btg_top,
            btg_pass,
            btg_dom,
            variant,
            specifics,
            level,
            alt_names,
        ] = fields;

        Self {
            class,
            family,
            name,
            id,
            code,
            btg_top,
            btg_pass,
            btg_dom,
            variant,
            specifics,
            level,
            alt_names,
            ..Self::new(realm)
        }
    }
}

impl Record for Position {
    const TABLE: &'static str = "positions";
    const LABEL: &'static str = "Position";

    fn columns() -> &'static [(&'static str, &'static str)] {
        &[
            ("guid", "TEXT PRIMARY KEY"),
            ("realm", "TEXT NOT NULL"),
            ("class", "TEXT NOT NULL DEFAULT ''"),
            ("family", "TEXT NOT NULL DEFAULT ''"),
            ("name", "TEXT NOT NULL DEFAULT ''"),
            ("id", "TEXT NOT NULL DEFAULT ''"),
            ("code", "TEXT NOT NULL DEFAULT ''"),
            ("btg_top", "TEXT NOT NULL DEFAULT ''"),
            ("btg_pass", "TEXT NOT NULL DEFAULT ''"),
            ("btg_dom", "TEXT NOT NULL DEFAULT ''"),
            ("variant", "TEXT NOT NULL DEFAULT ''"),
            ("specifics", "TEXT NOT NULL DEFAULT ''"),
            ("level", "TEXT NOT NULL DEFAULT ''"),
            ("alt_names", "TEXT NOT NULL DEFAULT ''"),
            ("created_at", "TEXT NOT NULL"),
        ]
    }

    fn to_row(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("guid", text(&self.guid)),
            ("realm", text(self.realm.as_str())),
            ("class", text(&self.class)),
            ("family", text(&self.family)),
            ("name", text(&self.name)),
            ("id", text(&self.id)),
            ("code", text(&self.code)),
            ("btg_top", text(&self.btg_top)),
            ("btg_pass", text(&self.btg_pass)),
            ("btg_dom", text(&self.btg_dom)),
            ("variant", text(&self.variant)),
            ("specifics", text(&self.specifics)),
            ("level", text(&self.level)),
            ("alt_names", text(&self.alt_names)),
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
            "{} | {:<10} | {} | {}",
            self.created_at, self.realm, self.code, self.name
        )
    }
}
