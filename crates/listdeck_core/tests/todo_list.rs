use listdeck_core::{
    MemoryStore, SequenceIdGenerator, TodoFilter, TodoList, TodoUpdate, TodoUpdateOutcome,
    TODOS_STORAGE_KEY,
};

fn setup() -> TodoList<MemoryStore, SequenceIdGenerator> {
    TodoList::load(MemoryStore::new(), SequenceIdGenerator::new("t"))
}

fn texts(list: &TodoList<MemoryStore, SequenceIdGenerator>, filter: TodoFilter) -> Vec<String> {
    list.visible(filter)
        .into_iter()
        .map(|item| item.text.clone())
        .collect()
}

#[test]
fn create_prepends_incomplete_item() {
    let mut list = setup();
    list.create("first").unwrap();
    let second = list.create("  second  ").unwrap();

    assert_eq!(second.text, "second");
    assert!(!second.completed);
    assert_eq!(texts(&list, TodoFilter::All), vec!["second", "first"]);
}

#[test]
fn blank_text_is_rejected() {
    let mut list = setup();
    assert!(list.create("   ").is_none());
    assert!(list.items().is_empty());
}

#[test]
fn toggle_twice_restores_flag() {
    let mut list = setup();
    let item = list.create("read").unwrap();

    assert!(list.toggle(&item.id).unwrap().completed);
    assert!(!list.toggle(&item.id).unwrap().completed);
    assert!(list.toggle("missing").is_none());
}

#[test]
fn update_replaces_text_and_flag() {
    let mut list = setup();
    let item = list.create("draft").unwrap();

    let outcome = list.update(
        &item.id,
        TodoUpdate {
            text: Some(" final ".to_string()),
            completed: Some(true),
        },
    );
    match outcome {
        TodoUpdateOutcome::Updated(updated) => {
            assert_eq!(updated.text, "final");
            assert!(updated.completed);
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn update_with_blank_text_deletes_item() {
    let mut list = setup();
    let keep = list.create("keep").unwrap();
    let doomed = list.create("doomed").unwrap();

    let outcome = list.update(&doomed.id, TodoUpdate::text("  "));
    assert_eq!(outcome, TodoUpdateOutcome::Deleted(doomed.clone()));
    assert!(list.get(&doomed.id).is_none());
    assert!(list.get(&keep.id).is_some());
}

#[test]
fn update_of_unknown_id_reports_not_found() {
    let mut list = setup();
    assert_eq!(
        list.update("missing", TodoUpdate::completed(true)),
        TodoUpdateOutcome::NotFound
    );
    assert_eq!(
        list.update("missing", TodoUpdate::text("")),
        TodoUpdateOutcome::NotFound
    );
}

#[test]
fn filters_and_items_left() {
    let mut list = setup();
    let a = list.create("a").unwrap();
    list.create("b").unwrap();
    list.create("c").unwrap();
    list.toggle(&a.id).unwrap();

    assert_eq!(texts(&list, TodoFilter::Active), vec!["c", "b"]);
    assert_eq!(texts(&list, TodoFilter::Completed), vec!["a"]);
    assert_eq!(list.items_left(), 2);
}

#[test]
fn clear_completed_keeps_active_items() {
    let mut list = setup();
    let a = list.create("a").unwrap();
    let b = list.create("b").unwrap();
    list.create("c").unwrap();
    list.toggle(&a.id).unwrap();
    list.toggle(&b.id).unwrap();

    assert_eq!(list.clear_completed(), 2);
    assert_eq!(texts(&list, TodoFilter::All), vec!["c"]);
}

#[test]
fn clear_all_respects_confirmation() {
    let mut list = setup();
    list.create("a").unwrap();

    assert_eq!(list.clear_all(|_| false), 0);
    assert_eq!(list.items().len(), 1);
    assert_eq!(list.clear_all(|_| true), 1);
    assert!(list.items().is_empty());
}

#[test]
fn todos_survive_reload() {
    let mut list = setup();
    let a = list.create("a").unwrap();
    list.create("b").unwrap();
    list.toggle(&a.id).unwrap();
    let saved = list.items().to_vec();

    let reloaded = TodoList::load(list.into_store(), SequenceIdGenerator::new("x"));
    assert_eq!(reloaded.items(), saved.as_slice());
}

#[test]
fn stored_non_bool_flags_are_coerced_not_dropped() {
    let raw = r#"[
        {"id":"a","text":"x","completed":1},
        {"id":"b","text":"y","completed":"yes"},
        {"id":"c","text":"z","completed":0},
        {"id":"d","text":"w","completed":""}
    ]"#;
    let store = MemoryStore::new().with_entry(TODOS_STORAGE_KEY, raw);
    let list = TodoList::load(store, SequenceIdGenerator::new("t"));

    let flags: Vec<(&str, bool)> = list
        .items()
        .iter()
        .map(|item| (item.id.as_str(), item.completed))
        .collect();
    assert_eq!(
        flags,
        vec![("a", true), ("b", true), ("c", false), ("d", false)]
    );
    assert_eq!(list.items_left(), 2);
}
