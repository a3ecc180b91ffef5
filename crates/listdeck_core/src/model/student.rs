//! Student record for the marks dashboard.
//!
//! # Invariants
//! - `name` is trimmed and non-empty.
//! - `marks` is finite and within `[MIN_MARKS, MAX_MARKS]`.

use crate::analytics::Scored;
use crate::model::record::{normalize_text, stored_id, Record, RecordId};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

pub const MIN_MARKS: f64 = 0.0;
pub const MAX_MARKS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    /// Whole marks are written as JSON integers (`87`, not `87.0`).
    #[serde(serialize_with = "serialize_marks")]
    pub marks: f64,
}

/// Validated form input, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    pub name: String,
    pub marks: f64,
}

impl StudentDraft {
    /// Validates raw form input.
    ///
    /// Returns `None` for a blank name or marks that do not parse to a finite
    /// number. Parsed marks are clamped into range.
    pub fn parse(raw_name: &str, raw_marks: &str) -> Option<Self> {
        let name = normalize_text(raw_name)?;
        let marks = parse_marks(raw_marks)?;
        Some(Self { name, marks })
    }

    pub fn into_student(self, id: RecordId) -> Student {
        Student {
            id,
            name: self.name,
            marks: self.marks,
        }
    }
}

impl Student {
    /// Whether these marks reach the given pass threshold.
    pub fn passed(&self, pass_mark: f64) -> bool {
        self.marks >= pass_mark
    }
}

/// Dashboard view filter by pass status. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StudentFilter {
    #[default]
    All,
    Pass,
    Fail,
}

impl StudentFilter {
    pub fn matches(self, student: &Student, pass_mark: f64) -> bool {
        match self {
            Self::All => true,
            Self::Pass => student.passed(pass_mark),
            Self::Fail => !student.passed(pass_mark),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Pass => "pass",
            Self::Fail => "fail",
        }
    }
}

impl Record for Student {
    const KIND: &'static str = "students";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn from_stored(entry: &Value) -> Option<Self> {
        let object = entry.as_object()?;
        let name = normalize_text(object.get("name")?.as_str()?)?;
        let marks = object.get("marks")?.as_f64()?;
        if !marks.is_finite() {
            return None;
        }

        Some(Self {
            id: stored_id(object),
            name,
            marks: clamp_marks(marks),
        })
    }
}

impl Scored for Student {
    fn score(&self) -> f64 {
        self.marks
    }
}

/// Parses a marks field the way the entry form accepts it.
///
/// Surrounding whitespace is ignored; blank input, `NaN` and infinities are
/// rejected; everything else is clamped into `[0, 100]`.
pub fn parse_marks(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let value = trimmed.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(clamp_marks(value))
}

pub fn clamp_marks(value: f64) -> f64 {
    value.clamp(MIN_MARKS, MAX_MARKS)
}

fn serialize_marks<S: Serializer>(marks: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if marks.fract() == 0.0 && marks.abs() < 1e15 {
        serializer.serialize_i64(*marks as i64)
    } else {
        serializer.serialize_f64(*marks)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_marks, Student, StudentDraft, StudentFilter};
    use crate::model::record::Record;
    use serde_json::json;

    #[test]
    fn draft_rejects_blank_name() {
        assert_eq!(StudentDraft::parse("", "50"), None);
        assert_eq!(StudentDraft::parse("   ", "50"), None);
    }

    #[test]
    fn draft_clamps_marks() {
        let high = StudentDraft::parse("Ann", "150").unwrap();
        assert_eq!(high.marks, 100.0);
        let low = StudentDraft::parse(" Bob ", "-3").unwrap();
        assert_eq!(low.name, "Bob");
        assert_eq!(low.marks, 0.0);
    }

    #[test]
    fn parse_marks_rejects_non_finite_and_garbage() {
        assert_eq!(parse_marks("abc"), None);
        assert_eq!(parse_marks("NaN"), None);
        assert_eq!(parse_marks("inf"), None);
        assert_eq!(parse_marks(""), None);
        assert_eq!(parse_marks(" 72.5 "), Some(72.5));
        assert_eq!(parse_marks("1e1"), Some(10.0));
    }

    #[test]
    fn from_stored_validates_shape() {
        let valid = json!({ "id": "a", "name": "  Ann ", "marks": 87 });
        let student = Student::from_stored(&valid).unwrap();
        assert_eq!(student.id, "a");
        assert_eq!(student.name, "Ann");
        assert_eq!(student.marks, 87.0);

        assert!(Student::from_stored(&json!({ "name": "Ann", "marks": "87" })).is_none());
        assert!(Student::from_stored(&json!({ "name": "", "marks": 87 })).is_none());
        assert!(Student::from_stored(&json!({ "marks": 87 })).is_none());
        assert!(Student::from_stored(&json!(null)).is_none());
        assert!(Student::from_stored(&json!([1, 2])).is_none());
    }

    #[test]
    fn from_stored_clamps_and_tolerates_missing_id() {
        let student = Student::from_stored(&json!({ "name": "Cy", "marks": 240 })).unwrap();
        assert_eq!(student.id, "");
        assert_eq!(student.marks, 100.0);
    }

    #[test]
    fn whole_marks_serialize_as_integers() {
        let whole = Student {
            id: "s-1".to_string(),
            name: "Ann".to_string(),
            marks: 87.0,
        };
        let half = Student {
            marks: 87.5,
            ..whole.clone()
        };
        assert_eq!(
            serde_json::to_string(&whole).unwrap(),
            r#"{"id":"s-1","name":"Ann","marks":87}"#
        );
        assert_eq!(
            serde_json::to_string(&half).unwrap(),
            r#"{"id":"s-1","name":"Ann","marks":87.5}"#
        );
    }

    #[test]
    fn filter_splits_on_pass_mark() {
        let borderline = Student {
            id: "s-1".to_string(),
            name: "Ann".to_string(),
            marks: 40.0,
        };
        let below = Student {
            marks: 39.5,
            ..borderline.clone()
        };
        assert!(StudentFilter::All.matches(&below, 40.0));
        assert!(StudentFilter::Pass.matches(&borderline, 40.0));
        assert!(!StudentFilter::Fail.matches(&borderline, 40.0));
        assert!(StudentFilter::Fail.matches(&below, 40.0));
    }
}
