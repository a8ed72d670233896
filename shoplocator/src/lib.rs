//! ShopLocator - location-based coffee shop directory service
//!
//! This library provides the core functionality for a small in-memory
//! directory of coffee shops: identity lookups, geo-radius queries,
//! nearest-neighbor search, and versioned mutations with soft deletion.
//!
//! # Architecture Modules
//!
//! - **`shop`**: The record model — shop entity, status enumeration, and
//!   field coercion from loosely-typed row data.
//! - **`dataset`**: The bootstrap loader. Parses the five-column locations
//!   file into validated records and establishes the id sequence.
//! - **`store`**: The in-memory id → record map. Owns id generation, the
//!   active/deleted partition, and snapshot reads for geo scans.
//! - **`dao`**: The mutation engine. Validates incoming payloads, applies
//!   create-vs-update branching, and performs soft deletes with optimistic
//!   version bumps.
//! - **`geo`**: Great-circle distance and the proximity queries
//!   (radius filter, nearest-neighbor scan) over the active record set.
//! - **`geocode`**: Address → coordinates lookup against an external
//!   geocoding JSON API.
//! - **`api`**: HTTP surface — axum routes, handlers, API-key middleware,
//!   and the shutdown handle.
//! - **`config`** / **`logging`**: INI configuration and tracing setup.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use shoplocator::dao::ShopDao;
//! use shoplocator::shop::ShopInput;
//! use shoplocator::store::ShopStore;
//!
//! let store = Arc::new(ShopStore::new());
//! let dao = ShopDao::new(store);
//!
//! let input = ShopInput {
//!     name: Some("Equator".to_string()),
//!     address: Some("986 Market St".to_string()),
//!     lat: Some(37.782394),
//!     lng: Some(-122.409973),
//!     ..ShopInput::default()
//! };
//!
//! let shop = dao.upsert(input).expect("valid payload");
//! assert_eq!(shop.version, 0);
//! ```

pub mod api;
pub mod config;
pub mod dao;
pub mod dataset;
pub mod geo;
pub mod geocode;
pub mod logging;
pub mod shop;
pub mod store;

/// Version of the shoplocator library and CLI.
///
/// Synchronized across all components in the workspace; defined in
/// `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name used in the info banner and log file naming.
pub const SERVICE_NAME: &str = "shoplocator";
