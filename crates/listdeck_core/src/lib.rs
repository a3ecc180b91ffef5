//! Core logic for listdeck: persisted list widgets (student marks dashboard,
//! todo list) and the random-user fetch widget.
//! Front ends only wire user actions to these APIs and print the views.

pub mod analytics;
pub mod config;
pub mod logging;
pub mod model;
pub mod persist;
pub mod remote;
pub mod service;
pub mod storage;
pub mod view;

pub use analytics::{PassStatus, Scored, Stat, Summary, PASS_MARK};
pub use config::{AppConfig, ConfigError, ConfigOverrides};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::id::{ClockIdGenerator, IdGenerator, SequenceIdGenerator, UuidIdGenerator};
pub use model::record::{Record, RecordId};
pub use model::student::{Student, StudentFilter};
pub use model::todo::{TodoFilter, TodoItem, TodoUpdate};
pub use persist::{load_records, save_records};
pub use remote::{FetchOutcome, RandomUserClient, RandomUserWidget, UserCard, UserSource};
pub use service::list_store::{ListError, ListStore};
pub use service::student_book::{SortKey, StudentBook, STUDENTS_STORAGE_KEY};
pub use service::todo_list::{TodoList, TodoUpdateOutcome, TODOS_STORAGE_KEY};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageError, StorageResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
