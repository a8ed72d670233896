//! Tests for the shop store and id sequence

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use chrono::Utc;

use super::*;
use crate::dataset::LocationsParser;
use crate::shop::ShopStatus;

fn make_shop(id: ShopId) -> Shop {
    Shop::from_row(id, "Test Shop", "1 Test St", "37.78", "-122.41", Utc::now())
}

fn seeded_store() -> ShopStore {
    let dataset = LocationsParser::parse_str(
        "1, Equator, 986 Market St, 37.782394, -122.409973\n\
         2, Four Barrel, 375 Valencia St, 37.7671, -122.4219",
    )
    .unwrap();
    ShopStore::from_dataset(dataset)
}

#[test]
fn test_next_id_starts_at_one_for_empty_store() {
    let store = ShopStore::new();
    assert_eq!(store.next_id(), 1);
    assert_eq!(store.next_id(), 2);
}

#[test]
fn test_next_id_resumes_after_imported_max() {
    let store = seeded_store();
    assert_eq!(store.next_id(), 3, "sequence continues at max(imported) + 1");
    assert_eq!(store.next_id(), 4);
}

#[test]
fn test_next_id_concurrent_callers_get_distinct_ids_no_gaps() {
    let store = Arc::new(ShopStore::new());
    let threads = 8;
    let per_thread = 50;

    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || (0..per_thread).map(|_| store.next_id()).collect::<Vec<_>>())
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.extend(handle.join().unwrap());
    }

    let unique: HashSet<ShopId> = ids.iter().copied().collect();
    assert_eq!(unique.len(), threads * per_thread, "no duplicates");

    let min = *ids.iter().min().unwrap();
    let max = *ids.iter().max().unwrap();
    assert_eq!(min, 1);
    assert_eq!(
        max as usize,
        threads * per_thread,
        "no gaps relative to the starting sequence"
    );
}

#[test]
fn test_put_then_find_by_id() {
    let store = ShopStore::new();
    store.put(make_shop(10));

    let found = store.find_by_id(10).unwrap();
    assert_eq!(found.id, 10);
    assert_eq!(found.name, "Test Shop");
}

#[test]
fn test_find_by_id_missing_is_not_found() {
    let store = ShopStore::new();
    let err = store.find_by_id(42).unwrap_err();
    assert_eq!(err, StoreError::NotFound(42));
}

#[test]
fn test_find_by_id_sees_deleted_records() {
    let store = ShopStore::new();
    let mut shop = make_shop(5);
    shop.status = ShopStatus::Deleted;
    store.put(shop);

    let found = store.find_by_id(5).unwrap();
    assert_eq!(found.status, ShopStatus::Deleted);
}

#[test]
fn test_put_overwrites_existing_entry() {
    let store = ShopStore::new();
    store.put(make_shop(1));

    let mut updated = make_shop(1);
    updated.name = "Renamed".to_string();
    updated.version = 1;
    store.put(updated);

    assert_eq!(store.len(), 1);
    let found = store.find_by_id(1).unwrap();
    assert_eq!(found.name, "Renamed");
    assert_eq!(found.version, 1);
}

#[test]
fn test_count_only_counts_active() {
    let store = ShopStore::new();
    store.put(make_shop(1));

    let mut deleted = make_shop(2);
    deleted.status = ShopStatus::Deleted;
    store.put(deleted);

    let invalid = Shop::from_row(3, "Busted", "1 Nowhere Ln", "xx", "yy", Utc::now());
    store.put(invalid);

    assert_eq!(store.count(), 1);
    assert_eq!(store.len(), 3, "all statuses stay in the map");
}

#[test]
fn test_active_snapshot_is_sorted_and_filtered() {
    let store = ShopStore::new();
    store.put(make_shop(30));
    store.put(make_shop(10));

    let mut deleted = make_shop(20);
    deleted.status = ShopStatus::Deleted;
    store.put(deleted);

    let active = store.active();
    let ids: Vec<ShopId> = active.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![10, 30], "ascending ids, deleted excluded");
}

#[test]
fn test_dataset_rows_are_all_retrievable() {
    let store = seeded_store();

    for id in [1, 2] {
        let shop = store.find_by_id(id).unwrap();
        assert_eq!(shop.id, id);
    }
    assert_eq!(store.count(), 2);
}

#[test]
fn test_default_store_is_empty() {
    let store = ShopStore::default();
    assert!(store.is_empty());
    assert_eq!(store.count(), 0);
}
