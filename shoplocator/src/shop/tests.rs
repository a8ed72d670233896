//! Tests for the shop record model

use chrono::Utc;

use super::*;

#[test]
fn test_from_row_valid_coordinates() {
    let now = Utc::now();
    let shop = Shop::from_row(1, "Equator", "986 Market St", "37.782394", "-122.409973", now);

    assert_eq!(shop.id, 1);
    assert_eq!(shop.name, "Equator");
    assert_eq!(shop.address, "986 Market St");
    assert_eq!(shop.status, ShopStatus::Active);
    assert_eq!(shop.version, 0);
    assert_eq!(shop.date_created, now);
    assert_eq!(shop.last_updated, now);

    let loc = shop.location.expect("coordinates should parse");
    assert!((loc.lat - 37.782394).abs() < 1e-9);
    assert!((loc.lng - (-122.409973)).abs() < 1e-9);
}

#[test]
fn test_from_row_unparsable_latitude_tags_invalid() {
    let shop = Shop::from_row(7, "Busted", "1 Nowhere Ln", "not-a-number", "-122.4", Utc::now());

    assert_eq!(shop.status, ShopStatus::Invalid);
    assert!(shop.location.is_none());
    assert!(!shop.is_active());
}

#[test]
fn test_from_row_unparsable_longitude_tags_invalid() {
    let shop = Shop::from_row(8, "Busted", "1 Nowhere Ln", "37.78", "east", Utc::now());

    assert_eq!(shop.status, ShopStatus::Invalid);
    assert!(shop.location.is_none());
}

#[test]
fn test_from_row_nan_literal_tags_invalid() {
    // "NaN" parses as an f64 but is not a usable coordinate
    let shop = Shop::from_row(9, "Busted", "1 Nowhere Ln", "NaN", "-122.4", Utc::now());

    assert_eq!(shop.status, ShopStatus::Invalid);
    assert!(shop.location.is_none());
}

#[test]
fn test_status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ShopStatus::Active).unwrap(),
        "\"active\""
    );
    assert_eq!(
        serde_json::to_string(&ShopStatus::Deleted).unwrap(),
        "\"deleted\""
    );
    assert_eq!(
        serde_json::to_string(&ShopStatus::Invalid).unwrap(),
        "\"invalid\""
    );
}

#[test]
fn test_status_display_matches_wire_form() {
    assert_eq!(ShopStatus::Active.to_string(), "active");
    assert_eq!(ShopStatus::Deleted.to_string(), "deleted");
    assert_eq!(ShopStatus::Invalid.to_string(), "invalid");
}

#[test]
fn test_shop_serializes_wire_shape() {
    let shop = Shop::from_row(2, "Four Barrel", "375 Valencia St", "37.7671", "-122.4219", Utc::now());
    let value = serde_json::to_value(&shop).unwrap();

    assert_eq!(value["id"], 2);
    assert_eq!(value["name"], "Four Barrel");
    assert_eq!(value["address"], "375 Valencia St");
    assert!((value["lat"].as_f64().unwrap() - 37.7671).abs() < 1e-9);
    assert!((value["lng"].as_f64().unwrap() - (-122.4219)).abs() < 1e-9);
    assert_eq!(value["status"], "active");
    assert_eq!(value["version"], 0);
    assert!(value["dateCreated"].is_string(), "camelCase timestamp field");
    assert!(value["lastUpdated"].is_string(), "camelCase timestamp field");
}

#[test]
fn test_invalid_shop_serializes_without_coordinates() {
    let shop = Shop::from_row(3, "Busted", "1 Nowhere Ln", "xx", "yy", Utc::now());
    let value = serde_json::to_value(&shop).unwrap();

    assert_eq!(value["status"], "invalid");
    assert!(value.get("lat").is_none(), "no lat key for invalid records");
    assert!(value.get("lng").is_none(), "no lng key for invalid records");
}

#[test]
fn test_shop_input_deserializes_create_payload() {
    let json = r#"{ "name": "Ritual", "address": "1026 Valencia St", "lat": 37.7562, "lng": -122.4214 }"#;
    let input: ShopInput = serde_json::from_str(json).unwrap();

    assert!(input.id.is_none(), "absent id signals create");
    assert_eq!(input.name.as_deref(), Some("Ritual"));
    assert_eq!(input.address.as_deref(), Some("1026 Valencia St"));
    assert!((input.lat.unwrap() - 37.7562).abs() < 1e-9);
    assert!((input.lng.unwrap() - (-122.4214)).abs() < 1e-9);
}

#[test]
fn test_shop_input_deserializes_update_payload() {
    let json = r#"{ "id": 12, "name": "Ritual", "address": "1026 Valencia St", "lat": 37.7562, "lng": -122.4214 }"#;
    let input: ShopInput = serde_json::from_str(json).unwrap();

    assert_eq!(input.id, Some(12));
}
