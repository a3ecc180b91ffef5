//! Collection use-case services.
//!
//! # Responsibility
//! - Hold list state as owned values (no process-wide globals).
//! - Orchestrate validation, mutation and persistence per user action.
//! - Keep front ends decoupled from storage details.

pub mod list_store;
pub mod student_book;
pub mod todo_list;
