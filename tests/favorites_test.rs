//! Favorites persistence across store instances

use listing_scout::favorites::{FavoritesStorage, FAVORITES_KEY};
use listing_scout::search::{query, Criteria};
use listing_scout::{Catalog, FavoritesStore, FileStorage, Property};
use tempfile::tempdir;

fn listing(id: &str) -> Property {
    Property {
        id: id.to_string(),
        name: id.to_uppercase(),
        description: String::new(),
        address: String::new(),
        city: "Santos".to_string(),
        price: 100.0,
        bedrooms: 1,
        bathrooms: 1,
        area_sqm: 40.0,
        tags: Vec::new(),
        images: vec![format!("{}.jpg", id)],
        is_featured: false,
        kind: None,
        timestamp: 0,
    }
}

#[test]
fn favorites_survive_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut store = FavoritesStore::open(FileStorage::new(dir.path()));
    assert!(store.toggle("cn-001"));
    assert!(store.toggle("cn-004"));
    drop(store);

    let store = FavoritesStore::open(FileStorage::new(dir.path()));
    assert_eq!(store.size(), 2);
    assert!(store.is_favorite("cn-001"));
    assert!(store.is_favorite("cn-004"));
}

#[test]
fn double_toggle_restores_file_contents() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut store = FavoritesStore::open(FileStorage::new(dir.path()));
    store.toggle("a");

    let before = FileStorage::new(dir.path()).read(FAVORITES_KEY).unwrap();
    let was = store.is_favorite("b");
    assert_eq!(store.toggle("b"), !was);
    assert_eq!(store.toggle("b"), was);
    let after = FileStorage::new(dir.path()).read(FAVORITES_KEY).unwrap();

    assert_eq!(before, after);
}

#[test]
fn corrupt_slot_starts_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("favorites.json"), "[\"a\",").unwrap();

    let store = FavoritesStore::open(FileStorage::new(dir.path()));
    assert_eq!(store.size(), 0);
}

#[test]
fn toggles_are_visible_to_the_next_query() {
    let dir = tempdir().expect("Failed to create temp dir");
    let catalog = Catalog::from_records(vec![listing("a"), listing("b")], 0);
    let mut store = FavoritesStore::open(FileStorage::new(dir.path()));
    let criteria = Criteria {
        favorites_only: true,
        ..Default::default()
    };

    assert!(query(&catalog, store.ids(), &criteria).is_empty());
    store.toggle("a");
    let result = query(&catalog, store.ids(), &criteria);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "a");
}

#[test]
fn double_toggle_restores_unsorted_file_slot() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("favorites.json"), r#"["cn-004","cn-001"]"#).unwrap();

    let mut store = FavoritesStore::open(FileStorage::new(dir.path()));
    store.toggle("cn-002");
    store.toggle("cn-002");

    let saved = std::fs::read_to_string(dir.path().join("favorites.json")).unwrap();
    assert_eq!(saved, r#"["cn-004","cn-001"]"#);
}
