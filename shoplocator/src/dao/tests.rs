//! Tests for the mutation engine

use std::thread;
use std::time::Duration;

use super::*;

fn dao() -> ShopDao {
    ShopDao::new(Arc::new(ShopStore::new()))
}

fn valid_input() -> ShopInput {
    ShopInput {
        id: None,
        name: Some("Ritual".to_string()),
        address: Some("1026 Valencia St".to_string()),
        lat: Some(37.7562),
        lng: Some(-122.4214),
    }
}

#[test]
fn test_validate_accepts_complete_payload() {
    assert!(ShopDao::validate(&valid_input()).is_empty());
}

#[test]
fn test_validate_requires_name_and_address() {
    let input = ShopInput {
        name: Some("   ".to_string()),
        address: None,
        ..valid_input()
    };

    let errors = ShopDao::validate(&input);
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("name"));
    assert!(errors[1].contains("address"));
}

#[test]
fn test_validate_zero_coordinates_yield_two_errors() {
    // Zero is treated as "unset" for both axes
    let input = ShopInput {
        id: None,
        name: Some("X".to_string()),
        address: Some("Y".to_string()),
        lat: Some(0.0),
        lng: Some(0.0),
    };

    let errors = ShopDao::validate(&input);
    assert_eq!(errors.len(), 2);
    assert!(errors[0].contains("latitude"));
    assert!(errors[1].contains("longitude"));
}

#[test]
fn test_validate_rejects_non_finite_coordinates() {
    let input = ShopInput {
        lat: Some(f64::NAN),
        lng: Some(f64::INFINITY),
        ..valid_input()
    };

    assert_eq!(ShopDao::validate(&input).len(), 2);
}

#[test]
fn test_create_assigns_id_and_zeroes_version() {
    let dao = dao();
    let shop = dao.upsert(valid_input()).unwrap();

    assert_eq!(shop.id, 1);
    assert_eq!(shop.version, 0);
    assert_eq!(shop.status, ShopStatus::Active);
    assert_eq!(shop.date_created, shop.last_updated);
    assert_eq!(dao.store().count(), 1);
}

#[test]
fn test_create_twice_assigns_distinct_ids() {
    let dao = dao();
    let first = dao.upsert(valid_input()).unwrap();
    let second = dao.upsert(valid_input()).unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(dao.store().count(), 2);
}

#[test]
fn test_update_bumps_version_and_preserves_creation_time() {
    let dao = dao();
    let created = dao.upsert(valid_input()).unwrap();

    // Ensure the clock moves between create and update
    thread::sleep(Duration::from_millis(5));

    let update = ShopInput {
        id: Some(created.id),
        name: Some("Ritual Roasters".to_string()),
        ..valid_input()
    };
    let updated = dao.upsert(update).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.version, created.version + 1);
    assert_eq!(updated.date_created, created.date_created);
    assert!(
        updated.last_updated > created.last_updated,
        "last_updated must move forward on update"
    );
    assert_eq!(updated.name, "Ritual Roasters");
    assert_eq!(dao.store().count(), 1, "update does not grow the store");
}

#[test]
fn test_update_with_unknown_id_is_rejected() {
    let dao = dao();
    let input = ShopInput {
        id: Some(999),
        ..valid_input()
    };

    let err = dao.upsert(input).unwrap_err();
    assert_eq!(err, DaoError::NotFound(999));
    assert!(dao.store().is_empty(), "foreign-id insert must not create");
}

#[test]
fn test_validation_failure_leaves_store_untouched() {
    let dao = dao();
    let input = ShopInput {
        name: None,
        ..valid_input()
    };

    let err = dao.upsert(input).unwrap_err();
    assert!(matches!(err, DaoError::ValidationFailed(ref errors) if errors.len() == 1));
    assert!(dao.store().is_empty());
}

#[test]
fn test_delete_flips_status_and_bumps_version() {
    let dao = dao();
    let created = dao.upsert(valid_input()).unwrap();
    assert_eq!(dao.store().count(), 1);

    let deleted = dao.delete(created.id).unwrap();
    assert_eq!(deleted.status, ShopStatus::Deleted);
    assert_eq!(deleted.version, created.version + 1);
    assert_eq!(deleted.date_created, created.date_created);
    assert_eq!(dao.store().count(), 0, "count drops by one on delete");
}

#[test]
fn test_delete_twice_is_already_deleted() {
    let dao = dao();
    let created = dao.upsert(valid_input()).unwrap();

    dao.delete(created.id).unwrap();
    let err = dao.delete(created.id).unwrap_err();
    assert_eq!(err, DaoError::AlreadyDeleted(created.id));
}

#[test]
fn test_delete_unknown_id_is_not_found() {
    let dao = dao();
    let err = dao.delete(404).unwrap_err();
    assert_eq!(err, DaoError::NotFound(404));
}

#[test]
fn test_deleted_record_stays_retrievable_by_id() {
    let dao = dao();
    let created = dao.upsert(valid_input()).unwrap();
    dao.delete(created.id).unwrap();

    let found = dao.find_by_id(created.id).unwrap();
    assert_eq!(found.status, ShopStatus::Deleted);
}

#[test]
fn test_update_of_deleted_record_stays_deleted() {
    // Soft delete has no return path; the payload carries no status
    let dao = dao();
    let created = dao.upsert(valid_input()).unwrap();
    dao.delete(created.id).unwrap();

    let update = ShopInput {
        id: Some(created.id),
        ..valid_input()
    };
    let updated = dao.upsert(update).unwrap();

    assert_eq!(updated.status, ShopStatus::Deleted);
    assert_eq!(updated.version, 2);
    assert_eq!(dao.store().count(), 0);
}

#[test]
fn test_concurrent_creates_get_distinct_ids() {
    let dao = dao();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let dao = dao.clone();
            thread::spawn(move || dao.upsert(valid_input()).unwrap().id)
        })
        .collect();

    let mut ids: Vec<ShopId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 8, "every create received its own id");
    assert_eq!(dao.store().count(), 8);
}

#[test]
fn test_find_by_id_unknown_is_not_found() {
    let dao = dao();
    assert_eq!(dao.find_by_id(1).unwrap_err(), DaoError::NotFound(1));
}
