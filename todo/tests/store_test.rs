//! Integration tests for the todo store
//!
//! Exercises the store end-to-end against both in-memory and file-backed
//! storage, plus a property check on the derived counts.

use proptest::prelude::*;
use tempfile::TempDir;

use todostore::{
    FileStorage, MemoryStorage, SequentialIdGenerator, StoreError, Todo, TodoId, TodoStore,
};

fn memory_store() -> TodoStore<MemoryStorage> {
    TodoStore::open(MemoryStorage::new(), Box::new(SequentialIdGenerator::default())).unwrap()
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_collection_round_trips_through_disk() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    let before = {
        let storage = FileStorage::open(temp.path()).unwrap();
        let mut store =
            TodoStore::open(storage, Box::new(SequentialIdGenerator::default())).unwrap();
        store.add("first").unwrap();
        store.add("second").unwrap();
        store.add("third").unwrap();
        let id = store.todos()[1].id.clone();
        store.toggle(&id).unwrap();
        store.todos().to_vec()
    };

    let storage = FileStorage::open(temp.path()).unwrap();
    let store = TodoStore::open(storage, Box::new(SequentialIdGenerator::default())).unwrap();
    assert_eq!(store.todos(), before.as_slice());
}

#[test]
fn test_corrupted_file_degrades_to_empty() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(temp.path().join("todos.json"), "not json at all {{{").unwrap();

    let storage = FileStorage::open(temp.path()).unwrap();
    let store = TodoStore::open(storage, Box::new(SequentialIdGenerator::default())).unwrap();
    assert!(store.todos().is_empty());
}

#[test]
fn test_delete_all_persists_empty_collection() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    {
        let storage = FileStorage::open(temp.path()).unwrap();
        let mut store =
            TodoStore::open(storage, Box::new(SequentialIdGenerator::default())).unwrap();
        store.add("one").unwrap();
        store.add("two").unwrap();
        let pending = store.request_delete_all().unwrap();
        store.confirm(pending).unwrap();
    }

    let raw = std::fs::read_to_string(temp.path().join("todos.json")).unwrap();
    let parsed: Vec<Todo> = serde_json::from_str(&raw).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn test_noop_delete_still_rewrites_storage() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let storage = FileStorage::open(temp.path()).unwrap();
    let mut store = TodoStore::open(storage, Box::new(SequentialIdGenerator::default())).unwrap();

    // The file does not exist until a mutation happens
    assert!(!temp.path().join("todos.json").exists());

    store.delete(&TodoId::from("missing")).unwrap();
    assert!(temp.path().join("todos.json").exists());
}

// =============================================================================
// Operation semantics
// =============================================================================

#[test]
fn test_add_appends_last() {
    let mut store = memory_store();
    store.add("a").unwrap();
    store.add("b").unwrap();
    store.add("c").unwrap();

    let texts: Vec<&str> = store.todos().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "b", "c"]);
}

#[test]
fn test_whitespace_only_text_is_rejected() {
    let mut store = memory_store();
    let err = store.add(" \t ").unwrap_err();
    assert!(matches!(err, StoreError::EmptyText));
    assert!(err.is_warning());
    assert_eq!(store.summary().total, 0);
}

#[test]
fn test_clear_completed_keeps_active_in_place() {
    let mut store = memory_store();
    store.add("done-1").unwrap();
    store.add("open").unwrap();
    store.add("done-2").unwrap();
    let first = store.todos()[0].id.clone();
    let last = store.todos()[2].id.clone();
    store.toggle(&first).unwrap();
    store.toggle(&last).unwrap();

    let pending = store.request_clear_completed().unwrap();
    store.confirm(pending).unwrap();

    assert_eq!(store.todos().len(), 1);
    assert_eq!(store.todos()[0].text, "open");
}

#[test]
fn test_declined_confirmation_changes_nothing() {
    let mut store = memory_store();
    store.add("keep me").unwrap();
    let id = store.todos()[0].id.clone();
    store.toggle(&id).unwrap();

    let pending = store.request_delete_all().unwrap();
    store.cancel(pending);
    assert_eq!(store.summary().total, 1);

    let pending = store.request_clear_completed().unwrap();
    store.cancel(pending);
    assert_eq!(store.summary().completed, 1);
}

// =============================================================================
// Properties
// =============================================================================

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Toggle(usize),
    Delete(usize),
    DeleteAll,
    ClearCompleted,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        "[a-z ]{0,8}".prop_map(Op::Add),
        (0usize..8).prop_map(Op::Toggle),
        (0usize..8).prop_map(Op::Delete),
        Just(Op::DeleteAll),
        Just(Op::ClearCompleted),
    ]
}

fn nth_id(store: &TodoStore<MemoryStorage>, n: usize) -> Option<TodoId> {
    let todos = store.todos();
    if todos.is_empty() {
        None
    } else {
        Some(todos[n % todos.len()].id.clone())
    }
}

proptest! {
    #[test]
    fn prop_active_equals_total_minus_completed(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut store = memory_store();

        for op in ops {
            match op {
                Op::Add(text) => {
                    // Whitespace-only inputs are rejected; that path is part
                    // of the property too.
                    let _ = store.add(&text);
                }
                Op::Toggle(n) => {
                    if let Some(id) = nth_id(&store, n) {
                        store.toggle(&id).unwrap();
                    }
                }
                Op::Delete(n) => {
                    if let Some(id) = nth_id(&store, n) {
                        store.delete(&id).unwrap();
                    }
                }
                Op::DeleteAll => {
                    if let Ok(pending) = store.request_delete_all() {
                        store.confirm(pending).unwrap();
                    }
                }
                Op::ClearCompleted => {
                    if let Ok(pending) = store.request_clear_completed() {
                        store.confirm(pending).unwrap();
                    }
                }
            }

            let summary = store.summary();
            prop_assert_eq!(summary.active, summary.total - summary.completed);
            prop_assert!(store.todos().iter().all(|t| !t.text.trim().is_empty()));
        }
    }
}
