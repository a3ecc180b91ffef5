//! Collection persistence over a key-value store.
//!
//! # Responsibility
//! - Serialize a whole collection to one JSON array string and back.
//! - Validate entry shape on load and repair missing identifiers.
//!
//! # Invariants
//! - `load_records` never fails: unreadable or malformed data loads as an
//!   empty collection and is only logged.
//! - `save_records` never fails: write errors are logged and reported as
//!   `false`, never propagated.
//! - Loaded collections have unique, non-empty ids. The first entry wins on
//!   duplicate ids.

use crate::model::id::IdGenerator;
use crate::model::record::Record;
use crate::storage::KeyValueStore;
use log::{debug, error, warn};
use serde_json::Value;
use std::collections::HashSet;

/// Loads the collection stored under `key`.
///
/// Entries failing the record shape rule are dropped silently (counted in
/// the debug log only). Entries without an id get one from `ids`.
pub fn load_records<R, S, G>(store: &S, key: &str, ids: &mut G) -> Vec<R>
where
    R: Record,
    S: KeyValueStore + ?Sized,
    G: IdGenerator + ?Sized,
{
    let raw = match store.get_item(key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => return Vec::new(),
        Err(err) => {
            warn!(
                "event=collection_load module=persist status=error kind={} key={} error_code=read_failed error={}",
                R::KIND,
                key,
                err
            );
            return Vec::new();
        }
    };

    let entries = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!(
                "event=collection_load module=persist status=error kind={} key={} error_code=not_an_array",
                R::KIND,
                key
            );
            return Vec::new();
        }
        Err(err) => {
            warn!(
                "event=collection_load module=persist status=error kind={} key={} error_code=parse_failed error={}",
                R::KIND,
                key,
                err
            );
            return Vec::new();
        }
    };

    let total = entries.len();
    let decoded: Vec<R> = entries.iter().filter_map(R::from_stored).collect();

    // Stored ids are claimed before any fresh id is minted, so a generated id
    // can never shadow a later stored one.
    let mut seen: HashSet<String> = HashSet::with_capacity(decoded.len());
    let mut records: Vec<R> = Vec::with_capacity(decoded.len());
    let mut duplicates = 0_usize;
    for record in decoded {
        if record.id().is_empty() {
            records.push(record);
        } else if seen.insert(record.id().to_string()) {
            records.push(record);
        } else {
            duplicates += 1;
        }
    }

    for record in records.iter_mut().filter(|record| record.id().is_empty()) {
        let id = fresh_id(&seen, ids);
        seen.insert(id.clone());
        record.set_id(id);
    }

    debug!(
        "event=collection_load module=persist status=ok kind={} key={} stored={} loaded={} dropped={} duplicates={}",
        R::KIND,
        key,
        total,
        records.len(),
        total - records.len() - duplicates,
        duplicates
    );
    records
}

/// Writes the full collection under `key`.
///
/// Returns whether the write reached the store.
pub fn save_records<R, S>(store: &mut S, key: &str, records: &[R]) -> bool
where
    R: Record,
    S: KeyValueStore + ?Sized,
{
    let serialized = match serde_json::to_string(records) {
        Ok(serialized) => serialized,
        Err(err) => {
            error!(
                "event=collection_save module=persist status=error kind={} key={} error_code=serialize_failed error={}",
                R::KIND,
                key,
                err
            );
            return false;
        }
    };

    match store.set_item(key, &serialized) {
        Ok(()) => {
            debug!(
                "event=collection_save module=persist status=ok kind={} key={} count={} bytes={}",
                R::KIND,
                key,
                records.len(),
                serialized.len()
            );
            true
        }
        Err(err) => {
            error!(
                "event=collection_save module=persist status=error kind={} key={} error_code=write_failed error={}",
                R::KIND,
                key,
                err
            );
            false
        }
    }
}

/// Draws ids until one is non-empty and unused.
///
/// A generator that keeps repeating itself gets a numeric suffix instead of
/// looping forever.
pub(crate) fn fresh_id<G>(taken: &HashSet<String>, ids: &mut G) -> String
where
    G: IdGenerator + ?Sized,
{
    const MAX_DRAWS: usize = 8;

    let mut candidate = ids.next_id();
    for _ in 1..MAX_DRAWS {
        if !candidate.is_empty() && !taken.contains(&candidate) {
            return candidate;
        }
        candidate = ids.next_id();
    }

    let base = if candidate.is_empty() {
        "id".to_string()
    } else {
        candidate
    };
    let mut suffix = 1_usize;
    loop {
        let suffixed = format!("{base}-{suffix}");
        if !taken.contains(&suffixed) {
            return suffixed;
        }
        suffix += 1;
    }
}
