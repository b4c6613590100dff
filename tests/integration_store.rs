// =====================================================================
// File: integration_store.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Record Manager Project
// Date: Oct. 17, 2026
//
// Description:
//   Integration tests for the record manager. These tests exercise the
//   full end-to-end flow through the public API, including:
//
//   - Adding, removing, and updating records in a `RecordStore`
//   - Keeping the name index, id lookup, and listings in agreement
//   - Driving the store through parsed REPL commands
//   - The change log as seen by a user
//
// Goal:
//   To confirm that the index layer, the store layer, and REPL command
//   handling work correctly together.
// =====================================================================
use recordstore::{
    AvlIndex, CommandResult, NaturalOrder, RecordDraft, RecordPatch, RecordStore, SortField,
    StoreConfig, StoreError, handle_command, parse_command,
};

/// Helper - run one REPL line against the store
fn run(store: &mut RecordStore, line: &str) -> CommandResult {
    let (cmd, args) = parse_command(line);
    handle_command(&cmd, &args, "Usage", store)
}


/// Helper - names of a listing in order
fn listed_names(store: &RecordStore, field: SortField) -> Vec<String> {
    store
        .list_sorted(field)
        .iter()
        .map(|record| record.name().to_string())
        .collect()
}


#[test]
fn test_zoo_session_through_api() {
    let mut store = RecordStore::new();
    let lion = store.add(RecordDraft::new("Lion", "Gold", "Large", "190kg")).id();
    let bear = store.add(RecordDraft::new("Bear", "Brown", "Large", "300kg")).id();
    let zebra = store.add(RecordDraft::new("Zebra", "Striped", "Medium", "250kg")).id();
    assert_eq!((lion, bear, zebra), (1, 2, 3));

    assert_eq!(listed_names(&store, SortField::Name), vec!["Bear", "Lion", "Zebra"]);

    assert!(store.remove(bear).is_some());
    assert!(store.search_by_name("Bear").is_empty());
    assert!(store.search_by_id(bear).is_none());

    let changes = store.recent_changes();
    assert_eq!(
        changes,
        vec![
            "Removed: Id: 2, Name: Bear, Color: Brown, Size: Large, Weight: 300kg",
            "Added: Id: 3, Name: Zebra, Color: Striped, Size: Medium, Weight: 250kg",
            "Added: Id: 2, Name: Bear, Color: Brown, Size: Large, Weight: 300kg",
            "Added: Id: 1, Name: Lion, Color: Gold, Size: Large, Weight: 190kg",
        ]
    );
}


#[test]
fn test_zoo_session_through_commands() {
    let mut store = RecordStore::new();

    assert_eq!(run(&mut store, "ADD Lion Gold Large 190kg"), CommandResult::Continue);
    run(&mut store, "add Bear Brown Large 300kg");
    run(&mut store, "Add Zebra Striped Medium 250kg");
    run(&mut store, "UPDATE 3 weight=255kg color=");
    run(&mut store, "REMOVE 2");

    assert_eq!(store.len(), 2);
    assert_eq!(listed_names(&store, SortField::Name), vec!["Lion", "Zebra"]);

    let zebra = store.search_by_id(3).expect("zebra still present");
    assert_eq!(zebra.weight, "255kg");
    assert_eq!(zebra.color, "Striped");

    let changes = store.recent_changes();
    assert!(changes[0].starts_with("Removed: Id: 2"));
    assert!(changes[1].starts_with("Updated: Id: 3"));

    assert_eq!(run(&mut store, "exit"), CommandResult::Exit);
}


#[test]
fn test_listing_after_updates_uses_new_values() {
    let mut store = RecordStore::new();
    store.add(RecordDraft::new("Owl", "Brown", "Small", "2kg"));
    store.add(RecordDraft::new("Crow", "Black", "Small", "1kg"));

    assert_eq!(listed_names(&store, SortField::Color), vec!["Crow", "Owl"]);

    store.update(
        2,
        RecordPatch {
            color: Some("White".into()),
            ..Default::default()
        },
    );
    assert_eq!(listed_names(&store, SortField::Color), vec!["Owl", "Crow"]);

    // Name never changes, so the name listing is unaffected
    assert_eq!(listed_names(&store, SortField::Name), vec!["Crow", "Owl"]);
}


#[test]
fn test_invalid_sort_field_lists_nothing() {
    let mut store = RecordStore::new();
    store.add(RecordDraft::new("Owl", "Brown", "Small", "2kg"));

    let result = store.list_sorted_by("habitat");
    assert_eq!(result.err(), Some(StoreError::InvalidSortField("habitat".to_string())));
}


#[test]
fn test_empty_store_listings_are_empty() {
    let store = RecordStore::new();
    for field in SortField::ALL {
        assert!(store.list_sorted(field).is_empty());
    }
    assert!(store.search_by_name("").is_empty());
}


#[test]
fn test_many_records_keep_index_in_step() {
    let mut store = RecordStore::with_config(StoreConfig { change_log_depth: 5 });
    for i in 0..500 {
        store.add(RecordDraft::new(format!("n{:04}", (i * 7919) % 500), "c", "s", "w"));
    }
    for id in (2..=500).step_by(2) {
        assert!(store.remove(id).is_some());
    }

    let index = store.name_index();
    assert_eq!(index.len(), store.len());
    assert_eq!(store.len(), 250);

    // Name listing is sorted and matches the index traversal
    let names = listed_names(&store, SortField::Name);
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    // 250 nodes fit in an AVL tree of height at most 11
    assert!(index.height() <= 11, "height {}", index.height());
    assert_eq!(store.recent_changes().len(), 5);
}


#[test]
fn test_index_usable_on_its_own() {
    let mut index = AvlIndex::new(NaturalOrder);
    for word in ["kiwi", "apple", "mango", "banana", "cherry"] {
        index.insert(word.to_string());
    }
    index.remove(&"mango".to_string());

    let words: Vec<&str> = index.iter().map(String::as_str).collect();
    assert_eq!(words, vec!["apple", "banana", "cherry", "kiwi"]);
    assert_eq!(index.first().map(String::as_str), Some("apple"));
    assert_eq!(index.last().map(String::as_str), Some("kiwi"));
}
