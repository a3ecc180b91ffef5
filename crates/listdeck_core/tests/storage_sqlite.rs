use listdeck_core::storage::migrations::latest_version;
use listdeck_core::storage::{open_store, open_store_in_memory};
use listdeck_core::{
    KeyValueStore, SequenceIdGenerator, StorageError, StudentBook, TodoList,
};
use rusqlite::Connection;

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn in_memory_store_applies_all_migrations() {
    let store = open_store_in_memory().unwrap();
    assert_eq!(schema_version(store.connection()), latest_version());

    let exists: i64 = store
        .connection()
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'kv_entries'
            );",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1);
}

#[test]
fn set_get_remove_roundtrip() {
    let mut store = open_store_in_memory().unwrap();
    assert_eq!(store.get_item("k").unwrap(), None);

    store.set_item("k", "first").unwrap();
    store.set_item("k", "second").unwrap();
    assert_eq!(store.get_item("k").unwrap().as_deref(), Some("second"));

    store.remove_item("k").unwrap();
    store.remove_item("k").unwrap();
    assert_eq!(store.get_item("k").unwrap(), None);
}

#[test]
fn collections_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("listdeck.sqlite3");

    let (student_id, todo_id) = {
        let mut book = StudentBook::load(open_store(&path).unwrap(), SequenceIdGenerator::new("s"));
        let student_id = book.add("Ann", "91").unwrap().id;

        let mut todos = TodoList::load(open_store(&path).unwrap(), SequenceIdGenerator::new("t"));
        let todo_id = todos.create("ship it").unwrap().id;
        todos.toggle(&todo_id).unwrap();
        (student_id, todo_id)
    };

    let book = StudentBook::load(open_store(&path).unwrap(), SequenceIdGenerator::new("s2"));
    assert_eq!(book.students().len(), 1);
    assert_eq!(book.students()[0].id, student_id);
    assert_eq!(book.students()[0].marks, 91.0);

    let todos = TodoList::load(open_store(&path).unwrap(), SequenceIdGenerator::new("t2"));
    assert!(todos.get(&todo_id).unwrap().completed);
}

#[test]
fn opening_store_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_store(&path) {
        Err(StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        }) => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("newer schema must be rejected"),
    }
}
