//! Render boundary: state projected into display-ready rows and labels.
//!
//! Front ends print these as they are; every render rebuilds them from the
//! current collection.

use crate::analytics::{PassStatus, Stat, Summary};
use crate::model::record::RecordId;
use crate::model::student::Student;
use crate::model::todo::TodoItem;

/// Placeholder shown for an aggregate of an empty collection.
pub const EMPTY_PLACEHOLDER: &str = "–";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassLabel {
    Pass,
    Fail,
}

impl PassLabel {
    pub fn for_student(student: &Student, pass_mark: f64) -> Self {
        if student.passed(pass_mark) {
            Self::Pass
        } else {
            Self::Fail
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "Pass",
            Self::Fail => "Fail",
        }
    }
}

/// One table row of the marks dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRow {
    /// 1-based position in the rendered order.
    pub position: usize,
    /// Target of the row's delete action.
    pub id: RecordId,
    pub name: String,
    pub marks: String,
    pub status: PassLabel,
}

/// Text of the dashboard's metric cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub count: String,
    pub average: String,
    pub topper: String,
    pub topper_marks: String,
    pub pass_status: String,
    pub pass_note: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRow {
    pub id: RecordId,
    pub text: String,
    pub completed: bool,
}

pub fn student_rows<'a, I>(students: I, pass_mark: f64) -> Vec<StudentRow>
where
    I: IntoIterator<Item = &'a Student>,
{
    students
        .into_iter()
        .enumerate()
        .map(|(index, student)| StudentRow {
            position: index + 1,
            id: student.id.clone(),
            name: student.name.clone(),
            marks: format_marks(student.marks),
            status: PassLabel::for_student(student, pass_mark),
        })
        .collect()
}

pub fn summary_view(summary: &Summary<'_, Student>, pass_mark: f64) -> SummaryView {
    let average = match summary.average {
        Stat::Empty => EMPTY_PLACEHOLDER.to_string(),
        Stat::Value(mean) => format_average(mean),
    };

    let (topper, topper_marks) = match summary.topper {
        Stat::Empty => (EMPTY_PLACEHOLDER.to_string(), String::new()),
        Stat::Value(top) => (top.name.clone(), format!("{} marks", format_marks(top.marks))),
    };

    let (pass_status, pass_note) = match summary.pass {
        PassStatus::Empty => (EMPTY_PLACEHOLDER.to_string(), String::new()),
        PassStatus::AllPassed => (
            "Yes".to_string(),
            format!(
                "Every student has at least {} marks.",
                format_marks(pass_mark)
            ),
        ),
        PassStatus::SomeFailed { passed, total } => (
            "No".to_string(),
            format!("{passed}/{total} students passed."),
        ),
    };

    SummaryView {
        count: summary.count.to_string(),
        average,
        topper,
        topper_marks,
        pass_status,
        pass_note,
    }
}

pub fn todo_rows<'a, I>(items: I) -> Vec<TodoRow>
where
    I: IntoIterator<Item = &'a TodoItem>,
{
    items
        .into_iter()
        .map(|item| TodoRow {
            id: item.id.clone(),
            text: item.text.clone(),
            completed: item.completed,
        })
        .collect()
}

/// Label of the sort toggle for the current direction.
pub fn sort_label(descending: bool) -> &'static str {
    if descending {
        "Sort by Marks ↓"
    } else {
        "Sort by Marks ↑"
    }
}

pub fn items_left_label(remaining: usize) -> String {
    if remaining == 1 {
        "1 item left".to_string()
    } else {
        format!("{remaining} items left")
    }
}

/// Whole marks print without a fraction (`87`, `87.5`).
pub fn format_marks(marks: f64) -> String {
    format!("{marks}")
}

/// Two decimals, with a trailing `.00` dropped (`50`, `66.67`, `72.50`).
pub fn format_average(mean: f64) -> String {
    let fixed = format!("{mean:.2}");
    match fixed.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => fixed,
    }
}
