//! Behaviour shared by the records the forms produce.

use rusqlite::types::Value;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A flat, append-only catalogue record (position or move).
pub trait Record: Serialize + DeserializeOwned {
    /// Target table for database saves.
    const TABLE: &'static str;
    /// Human label used in messages ("Position", "Move").
    const LABEL: &'static str;

    /// Column definitions used when the table is created by `init`.
    fn columns() -> &'static [(&'static str, &'static str)];

    /// Column/value pairs in table order.
    fn to_row(&self) -> Vec<(&'static str, Value)>;

    fn guid(&self) -> &str;

    fn created_at(&self) -> &str;

    /// Reset `created_at` to now; called when a save is confirmed.
    fn stamp(&mut self);

    /// One-line description for listings.
    fn summary(&self) -> String;
}

/// Fresh identifier for a new record.
pub fn generate_guid() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Creation timestamp (local time, RFC 3339).
pub fn now_timestamp() -> String {
    chrono::Local::now().to_rfc3339()
}

/// Helper for `to_row` implementations.
pub(crate) fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}
