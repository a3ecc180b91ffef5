//! Todo list use-cases.
//!
//! # Responsibility
//! - Create, toggle, edit and delete todo items.
//! - Provide filtered views and the remaining-items counter.
//!
//! # Invariants
//! - New items are placed first.
//! - An edit that leaves the text blank deletes the item.

use crate::model::id::IdGenerator;
use crate::model::record::normalize_text;
use crate::model::todo::{TodoFilter, TodoItem, TodoUpdate};
use crate::service::list_store::ListStore;
use crate::storage::KeyValueStore;
use log::{debug, info};

/// Fixed storage key of the todo collection.
pub const TODOS_STORAGE_KEY: &str = "todo_app_items_v1";

/// Result of [`TodoList::update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoUpdateOutcome {
    Updated(TodoItem),
    /// Blank text turned the edit into a delete.
    Deleted(TodoItem),
    NotFound,
}

pub struct TodoList<S, G> {
    list: ListStore<TodoItem, S, G>,
}

impl<S: KeyValueStore, G: IdGenerator> TodoList<S, G> {
    pub fn load(store: S, ids: G) -> Self {
        Self::load_with_key(store, TODOS_STORAGE_KEY, ids)
    }

    pub fn load_with_key(store: S, key: impl Into<String>, ids: G) -> Self {
        Self {
            list: ListStore::load(store, key, ids),
        }
    }

    /// Items in stored order (newest first).
    pub fn items(&self) -> &[TodoItem] {
        self.list.records()
    }

    pub fn get(&self, id: &str) -> Option<&TodoItem> {
        self.list.get(id)
    }

    /// Creates an incomplete item from raw input; blank text is ignored.
    pub fn create(&mut self, raw_text: &str) -> Option<TodoItem> {
        let Some(text) = normalize_text(raw_text) else {
            debug!("event=todo_create module=service status=rejected reason=blank_text");
            return None;
        };

        let id = self.list.next_id();
        let item = self.list.push_front(TodoItem::new(id, text)).ok()?.clone();
        info!(
            "event=todo_create module=service status=ok id={} count={}",
            item.id,
            self.list.len()
        );
        Some(item)
    }

    /// Flips the completion flag. Returns the item after the flip.
    pub fn toggle(&mut self, id: &str) -> Option<TodoItem> {
        let toggled = self
            .list
            .modify(id, |item| item.completed = !item.completed)
            .cloned();
        debug!(
            "event=todo_toggle module=service status={} id={}",
            if toggled.is_some() { "ok" } else { "not_found" },
            id
        );
        toggled
    }

    /// Applies a partial edit; blank text deletes the item instead.
    pub fn update(&mut self, id: &str, update: TodoUpdate) -> TodoUpdateOutcome {
        let text = match update.text.as_deref() {
            Some(raw) => match normalize_text(raw) {
                Some(text) => Some(text),
                None => {
                    return match self.delete(id) {
                        Some(removed) => TodoUpdateOutcome::Deleted(removed),
                        None => TodoUpdateOutcome::NotFound,
                    };
                }
            },
            None => None,
        };

        let updated = self.list.modify(id, |item| {
            if let Some(text) = text {
                item.text = text;
            }
            if let Some(completed) = update.completed {
                item.completed = completed;
            }
        });

        match updated {
            Some(item) => {
                info!("event=todo_update module=service status=ok id={id}");
                TodoUpdateOutcome::Updated(item.clone())
            }
            None => TodoUpdateOutcome::NotFound,
        }
    }

    pub fn delete(&mut self, id: &str) -> Option<TodoItem> {
        let removed = self.list.remove(id);
        info!(
            "event=todo_delete module=service status={} id={}",
            if removed.is_some() { "ok" } else { "not_found" },
            id
        );
        removed
    }

    /// Drops all completed items. Returns the removed count.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.list.retain(TodoItem::is_active);
        info!("event=todo_clear_completed module=service status=ok removed={removed}");
        removed
    }

    /// Removes every item once `confirm` agrees; an empty list never asks.
    pub fn clear_all<F>(&mut self, confirm: F) -> usize
    where
        F: FnOnce(usize) -> bool,
    {
        if self.list.is_empty() || !confirm(self.list.len()) {
            return 0;
        }
        let removed = self.list.clear();
        info!("event=todo_clear module=service status=ok removed={removed}");
        removed
    }

    pub fn visible(&self, filter: TodoFilter) -> Vec<&TodoItem> {
        self.list.filtered(|item| filter.matches(item))
    }

    /// Number of items not yet completed.
    pub fn items_left(&self) -> usize {
        self.list.records().iter().filter(|item| item.is_active()).count()
    }

    pub fn list(&self) -> &ListStore<TodoItem, S, G> {
        &self.list
    }

    pub fn into_store(self) -> S {
        self.list.into_store()
    }
}
