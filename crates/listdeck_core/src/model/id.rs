//! Identifier generation.
//!
//! # Responsibility
//! - Provide the single injection point for new record ids.
//! - Offer random, clock-based and deterministic generators.
//!
//! # Invariants
//! - Generators never return an empty id.
//! - Collision checks against an existing collection are the store's job,
//!   not the generator's.

use crate::model::record::RecordId;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Source of fresh record identifiers.
///
/// Any `FnMut() -> RecordId` closure is a generator too, so tests can pass
/// a closure instead of a named type.
pub trait IdGenerator {
    fn next_id(&mut self) -> RecordId;
}

impl<F> IdGenerator for F
where
    F: FnMut() -> RecordId,
{
    fn next_id(&mut self) -> RecordId {
        self()
    }
}

/// Random v4 UUID ids. Default generator for real collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> RecordId {
        Uuid::new_v4().to_string()
    }
}

/// Time-based ids (epoch milliseconds), strictly increasing per generator.
///
/// Used where random ids are not wanted; two ids minted within the same
/// millisecond are bumped by one.
#[derive(Debug, Clone, Default)]
pub struct ClockIdGenerator {
    last: u128,
}

impl IdGenerator for ClockIdGenerator {
    fn next_id(&mut self) -> RecordId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or(0);
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}

/// Deterministic `<prefix>-<n>` ids starting at 1.
#[derive(Debug, Clone)]
pub struct SequenceIdGenerator {
    prefix: String,
    next: u64,
}

impl SequenceIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&mut self) -> RecordId {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
