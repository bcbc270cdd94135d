use std::fs;

use recipe_scout::{BookmarkStore, Ingredient, JsonFileStore, MemoryStore, Recipe, ScoutError};

fn bookmark(id: &str) -> Recipe {
    Recipe {
        id: id.to_string(),
        title: "Pizza".to_string(),
        publisher: "Closet Cooking".to_string(),
        source_url: "https://example.com/pizza".to_string(),
        image_url: "https://example.com/pizza.jpg".to_string(),
        servings: 4,
        cooking_time: 45,
        ingredients: vec![Ingredient {
            quantity: Some(0.5),
            unit: "kg".to_string(),
            description: "flour".to_string(),
        }],
        bookmarked: true,
        key: None,
    }
}

#[test]
fn test_missing_file_is_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("bookmarks.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_bookmarks_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("bookmarks.json"));

    let bookmarks = vec![bookmark("a"), bookmark("b")];
    store.save(&bookmarks).unwrap();
    assert_eq!(store.load().unwrap(), bookmarks);
}

#[test]
fn test_save_rewrites_the_whole_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("bookmarks.json"));

    store.save(&[bookmark("a"), bookmark("b")]).unwrap();
    store.save(&[bookmark("b")]).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "b");
}

#[test]
fn test_corrupt_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bookmarks.json");
    fs::write(&path, "not json at all").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(store.load(), Err(ScoutError::Persist(_))));
}

#[test]
fn test_memory_store_round_trip() {
    let store = MemoryStore::default();
    assert!(store.load().unwrap().is_empty());

    store.save(&[bookmark("a")]).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "a");
}
