//! Route paths and data transfer objects for the HTTP API.
//!
//! The request payload for creates and updates is
//! [`ShopInput`](crate::shop::ShopInput) and responses carry
//! [`Shop`](crate::shop::Shop) records directly; the types here cover
//! everything else on the wire.

use serde::{Deserialize, Serialize};

// --- Routes ---

/// Service banner.
pub const ROUTE_INFO: &str = "/";
/// Create or update a shop (POST).
pub const ROUTE_ITEM: &str = "/shop/v1/item";
/// Find (GET) or soft-delete (DELETE) a shop by id.
pub const ROUTE_ITEM_BY_ID: &str = "/shop/v1/item/:id";
/// Radius query around a point.
pub const ROUTE_ITEMS_GEO: &str = "/shop/v1/items/geo/:lat/:lng";
/// Nearest-neighbor query around a point.
pub const ROUTE_ITEMS_NEAREST: &str = "/shop/v1/items/nearest/:lat/:lng";
/// Active record count.
pub const ROUTE_ITEMS_COUNT: &str = "/shop/v1/items/count";
/// Address → coordinates lookup.
pub const ROUTE_LOCATE: &str = "/shop/v1/locate";
/// Loopback-only process shutdown (POST).
pub const ROUTE_SHUTDOWN: &str = "/shutdown";

/// Name of the shared-secret request header.
pub const API_KEY_HEADER: &str = "x-api-key";

// --- DTOs ---

/// JSON error body returned for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable summary of the failure.
    pub error: String,
    /// Individual rule violations, present for validation failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl ErrorResponse {
    /// Error body without per-rule details.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Body of the active-count endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    /// Number of active records.
    pub count: usize,
}

/// Body of the service banner endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}

/// Query parameters for the radius endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RadiusQuery {
    /// Search radius in kilometers; defaults to the 50-mile radius.
    pub radius_km: Option<f64>,
}

/// Query parameters for the locate endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LocateQuery {
    /// Street address, required.
    pub street: String,
    /// City; falls back to the configured default.
    pub city: Option<String>,
    /// State; falls back to the configured default.
    pub state: Option<String>,
    /// ZIP code; empty when omitted.
    pub zip: Option<String>,
}
