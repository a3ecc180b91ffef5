//! Record shapes kept by the list widgets.
//!
//! # Responsibility
//! - Define the persisted record types (students, todo items).
//! - Own the per-record validation rules used on create and on load.
//! - Provide injectable identifier generation.
//!
//! # Invariants
//! - Every record is addressed by an opaque string id, unique per collection.
//! - Text fields are trimmed and never empty once a record exists.

pub mod id;
pub mod record;
pub mod student;
pub mod todo;
