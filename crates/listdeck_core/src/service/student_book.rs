//! Student-marks dashboard use-cases.
//!
//! # Responsibility
//! - Turn raw form input into validated student records.
//! - Expose sorted views and analytics for one render.
//!
//! # Invariants
//! - Invalid input is ignored: the collection and the store stay untouched.
//! - Sorting is a view; stored order is insertion order.
//! - Clearing requires a confirmation whenever there is something to clear.

use crate::analytics::{summarize, Summary};
use crate::model::id::IdGenerator;
use crate::model::student::{Student, StudentDraft, StudentFilter};
use crate::service::list_store::ListStore;
use crate::storage::KeyValueStore;
use log::{debug, info};
use std::cmp::Ordering;

/// Fixed storage key of the dashboard collection.
pub const STUDENTS_STORAGE_KEY: &str = "studentDashboard:students";

/// Column a student view can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Marks,
    Name,
}

impl SortKey {
    fn compare(self, left: &Student, right: &Student) -> Ordering {
        match self {
            Self::Marks => left.marks.total_cmp(&right.marks),
            Self::Name => left
                .name
                .to_lowercase()
                .cmp(&right.name.to_lowercase()),
        }
    }

    fn directed(self, left: &Student, right: &Student, descending: bool) -> Ordering {
        let ordering = self.compare(left, right);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

/// Dashboard state: the owned student collection.
pub struct StudentBook<S, G> {
    list: ListStore<Student, S, G>,
}

impl<S: KeyValueStore, G: IdGenerator> StudentBook<S, G> {
    /// Loads the dashboard from `store` under [`STUDENTS_STORAGE_KEY`].
    pub fn load(store: S, ids: G) -> Self {
        Self::load_with_key(store, STUDENTS_STORAGE_KEY, ids)
    }

    pub fn load_with_key(store: S, key: impl Into<String>, ids: G) -> Self {
        Self {
            list: ListStore::load(store, key, ids),
        }
    }

    /// Students in insertion order.
    pub fn students(&self) -> &[Student] {
        self.list.records()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Adds one student from raw form fields.
    ///
    /// Returns `None` (and changes nothing) for a blank name or marks that
    /// are not a finite number. Marks are clamped into `[0, 100]`.
    pub fn add(&mut self, raw_name: &str, raw_marks: &str) -> Option<Student> {
        let Some(draft) = StudentDraft::parse(raw_name, raw_marks) else {
            debug!("event=student_add module=service status=rejected reason=invalid_input");
            return None;
        };

        let id = self.list.next_id();
        let student = self.list.push(draft.into_student(id)).ok()?.clone();
        info!(
            "event=student_add module=service status=ok id={} count={}",
            student.id,
            self.list.len()
        );
        Some(student)
    }

    /// Deletes by id. Absent ids are a no-op.
    pub fn delete(&mut self, id: &str) -> Option<Student> {
        let removed = self.list.remove(id);
        info!(
            "event=student_delete module=service status={} id={}",
            if removed.is_some() { "ok" } else { "not_found" },
            id
        );
        removed
    }

    /// Removes every student once `confirm` agrees.
    ///
    /// `confirm` receives the number of students about to be removed and is
    /// not called for an empty dashboard. Returns the removed count.
    pub fn clear_all<F>(&mut self, confirm: F) -> usize
    where
        F: FnOnce(usize) -> bool,
    {
        if self.list.is_empty() {
            return 0;
        }
        if !confirm(self.list.len()) {
            info!("event=student_clear module=service status=cancelled");
            return 0;
        }
        let removed = self.list.clear();
        info!("event=student_clear module=service status=ok removed={removed}");
        removed
    }

    /// Stable-sorted view by `key`.
    ///
    /// Equal keys keep their insertion order in both directions.
    pub fn sort_by(&self, key: SortKey, descending: bool) -> Vec<&Student> {
        self.list
            .sorted_by(|left, right| key.directed(left, right, descending))
    }

    /// Students matching `filter` against `pass_mark`, in insertion order.
    pub fn visible(&self, filter: StudentFilter, pass_mark: f64) -> Vec<&Student> {
        self.list.filtered(|student| filter.matches(student, pass_mark))
    }

    /// Filtered and stable-sorted view: what one dashboard render shows.
    pub fn view(
        &self,
        filter: StudentFilter,
        key: SortKey,
        descending: bool,
        pass_mark: f64,
    ) -> Vec<&Student> {
        let mut shown = self.visible(filter, pass_mark);
        shown.sort_by(|left, right| key.directed(left, right, descending));
        shown
    }

    /// Count, mean, topper and pass tally over all students.
    pub fn summary(&self, pass_mark: f64) -> Summary<'_, Student> {
        summarize(self.list.records(), pass_mark)
    }

    pub fn list(&self) -> &ListStore<Student, S, G> {
        &self.list
    }

    pub fn into_store(self) -> S {
        self.list.into_store()
    }
}
