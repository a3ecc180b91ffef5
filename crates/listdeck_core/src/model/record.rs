//! Shared record contract for persisted list collections.
//!
//! # Responsibility
//! - Describe what a list store needs from a record type.
//! - Decode the identifier field of a persisted entry.
//!
//! # Invariants
//! - `from_stored` never panics on arbitrary JSON input.
//! - A record decoded without an id carries an empty id until the store
//!   assigns a fresh one.

use serde::Serialize;
use serde_json::{Map, Value};

/// Opaque identifier, unique within one collection.
pub type RecordId = String;

/// A record that can live in a persisted list.
pub trait Record: Clone + Serialize {
    /// Short collection name used in log events (`students`, `todos`).
    const KIND: &'static str;

    /// Returns the stable identifier.
    fn id(&self) -> &str;

    /// Replaces the identifier. Only used while loading entries without one.
    fn set_id(&mut self, id: RecordId);

    /// Shape rule for one persisted entry.
    ///
    /// Returns `None` when the entry must be dropped. A missing id is
    /// returned as an empty string.
    fn from_stored(entry: &Value) -> Option<Self>;
}

/// Reads the `id` field of a persisted entry.
///
/// Strings are taken as-is, numbers are stringified, anything else
/// (including absence) yields an empty id.
pub fn stored_id(object: &Map<String, Value>) -> RecordId {
    match object.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => RecordId::new(),
    }
}

/// Trims text input and rejects whitespace-only values.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_text, stored_id};
    use serde_json::json;

    #[test]
    fn stored_id_accepts_strings_and_numbers() {
        let string_id = json!({ "id": "abc" });
        let number_id = json!({ "id": 1700000000123_u64 });
        let bool_id = json!({ "id": true });
        let missing = json!({});

        assert_eq!(stored_id(string_id.as_object().unwrap()), "abc");
        assert_eq!(stored_id(number_id.as_object().unwrap()), "1700000000123");
        assert_eq!(stored_id(bool_id.as_object().unwrap()), "");
        assert_eq!(stored_id(missing.as_object().unwrap()), "");
    }

    #[test]
    fn normalize_text_trims_and_rejects_blank() {
        assert_eq!(normalize_text("  Ann  ").as_deref(), Some("Ann"));
        assert_eq!(normalize_text(" \t\n"), None);
        assert_eq!(normalize_text(""), None);
    }
}
