//! Todo item record.
//!
//! # Invariants
//! - `text` is trimmed and non-empty.
//! - New items start incomplete.

use crate::model::record::{normalize_text, stored_id, Record, RecordId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: RecordId,
    pub text: String,
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: RecordId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Partial edit of a todo item.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoUpdate {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl TodoUpdate {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
        }
    }
}

/// List view filter. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TodoFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TodoFilter {
    pub fn matches(self, item: &TodoItem) -> bool {
        match self {
            Self::All => true,
            Self::Active => !item.completed,
            Self::Completed => item.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

impl Record for TodoItem {
    const KIND: &'static str = "todos";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn from_stored(entry: &Value) -> Option<Self> {
        let object = entry.as_object()?;
        let text = normalize_text(object.get("text")?.as_str()?)?;
        let completed = object.get("completed").is_some_and(is_truthy);

        Some(Self {
            id: stored_id(object),
            text,
            completed,
        })
    }
}

/// JavaScript truthiness of a stored flag value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::{TodoFilter, TodoItem};
    use crate::model::record::Record;
    use serde_json::json;

    #[test]
    fn from_stored_defaults_missing_completion_flag() {
        let item = TodoItem::from_stored(&json!({ "id": 7, "text": " milk " })).unwrap();
        assert_eq!(item.id, "7");
        assert_eq!(item.text, "milk");
        assert!(!item.completed);
    }

    #[test]
    fn from_stored_drops_bad_entries() {
        assert!(TodoItem::from_stored(&json!({ "text": "   " })).is_none());
        assert!(TodoItem::from_stored(&json!({ "text": 12 })).is_none());
        assert!(TodoItem::from_stored(&json!("text")).is_none());
    }

    #[test]
    fn filter_matches_by_completion() {
        let mut item = TodoItem::new("t-1".to_string(), "read".to_string());
        assert!(TodoFilter::All.matches(&item));
        assert!(TodoFilter::Active.matches(&item));
        assert!(!TodoFilter::Completed.matches(&item));

        item.completed = true;
        assert!(!TodoFilter::Active.matches(&item));
        assert!(TodoFilter::Completed.matches(&item));
    }

    #[test]
    fn from_stored_coerces_non_bool_completion_flag() {
        let completed = |flag: serde_json::Value| {
            TodoItem::from_stored(&json!({ "text": "a", "completed": flag }))
                .unwrap()
                .completed
        };
        assert!(completed(json!(1)));
        assert!(completed(json!("yes")));
        assert!(completed(json!([])));
        assert!(!completed(json!(0)));
        assert!(!completed(json!("")));
        assert!(!completed(json!(null)));
        assert!(!completed(json!(false)));
    }
}
