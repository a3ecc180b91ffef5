//! Generic persisted list.
//!
//! # Responsibility
//! - Own one collection of records plus its backing store and id source.
//! - Persist the whole collection after every mutation.
//! - Provide ordered and filtered views without touching stored order.
//!
//! # Invariants
//! - Record ids are unique and non-empty for the lifetime of the store.
//! - A record's id never changes once it is in the collection.
//! - Persistence failures are logged by `persist` and never surface here.

use crate::model::id::IdGenerator;
use crate::model::record::{Record, RecordId};
use crate::persist::{fresh_id, load_records, save_records};
use crate::storage::KeyValueStore;
use log::info;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    DuplicateId(RecordId),
    EmptyId,
}

impl Display for ListError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "record id already in collection: {id}"),
            Self::EmptyId => write!(f, "record id cannot be empty"),
        }
    }
}

impl Error for ListError {}

/// Collection of `R` persisted under one key of `S`, with ids from `G`.
pub struct ListStore<R, S, G> {
    key: String,
    records: Vec<R>,
    store: S,
    ids: G,
}

impl<R, S, G> ListStore<R, S, G>
where
    R: Record,
    S: KeyValueStore,
    G: IdGenerator,
{
    /// Loads the collection under `key`; starts empty when nothing usable is
    /// stored.
    pub fn load(store: S, key: impl Into<String>, mut ids: G) -> Self {
        let key = key.into();
        let records = load_records(&store, &key, &mut ids);
        info!(
            "event=list_load module=service status=ok kind={} key={} count={}",
            R::KIND,
            key,
            records.len()
        );
        Self {
            key,
            records,
            store,
            ids,
        }
    }

    /// Records in stored order.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Mints an id that no current record uses.
    pub fn next_id(&mut self) -> RecordId {
        let taken: HashSet<String> = self
            .records
            .iter()
            .map(|record| record.id().to_string())
            .collect();
        fresh_id(&taken, &mut self.ids)
    }

    /// Appends a record and persists.
    pub fn push(&mut self, record: R) -> Result<&R, ListError> {
        self.check_insertable(&record)?;
        self.records.push(record);
        self.persist();
        Ok(&self.records[self.records.len() - 1])
    }

    /// Inserts a record at the front and persists.
    pub fn push_front(&mut self, record: R) -> Result<&R, ListError> {
        self.check_insertable(&record)?;
        self.records.insert(0, record);
        self.persist();
        Ok(&self.records[0])
    }

    /// Removes the record with `id`. Persists even when nothing matched.
    pub fn remove(&mut self, id: &str) -> Option<R> {
        let removed = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .map(|index| self.records.remove(index));
        self.persist();
        removed
    }

    /// Applies `edit` to the record with `id` in place and persists.
    ///
    /// Returns `None` without persisting when no record matches.
    pub fn modify<F>(&mut self, id: &str, edit: F) -> Option<&R>
    where
        F: FnOnce(&mut R),
    {
        let index = self.records.iter().position(|record| record.id() == id)?;
        let record = &mut self.records[index];
        let original_id = record.id().to_string();
        edit(record);
        if record.id() != original_id {
            record.set_id(original_id);
        }
        self.persist();
        Some(&self.records[index])
    }

    /// Keeps only records matching `keep`, persists, and returns how many
    /// were removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&R) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|record| keep(record));
        self.persist();
        before - self.records.len()
    }

    /// Removes every record and persists.
    pub fn clear(&mut self) -> usize {
        let removed = self.records.len();
        self.records.clear();
        self.persist();
        removed
    }

    /// Stable-sorted view. Stored order is unchanged.
    pub fn sorted_by<F>(&self, mut compare: F) -> Vec<&R>
    where
        F: FnMut(&R, &R) -> Ordering,
    {
        let mut view: Vec<&R> = self.records.iter().collect();
        view.sort_by(|left, right| compare(left, right));
        view
    }

    /// Filtered view in stored order.
    pub fn filtered<F>(&self, mut keep: F) -> Vec<&R>
    where
        F: FnMut(&R) -> bool,
    {
        self.records.iter().filter(|record| keep(record)).collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn check_insertable(&self, record: &R) -> Result<(), ListError> {
        if record.id().is_empty() {
            return Err(ListError::EmptyId);
        }
        if self.contains(record.id()) {
            return Err(ListError::DuplicateId(record.id().to_string()));
        }
        Ok(())
    }

    fn persist(&mut self) -> bool {
        save_records(&mut self.store, &self.key, &self.records)
    }
}
