//! Shop record model.
//!
//! A [`Shop`] is the central entity of the directory: identity, location,
//! lifecycle status, and optimistic version counter. Records are built
//! either from a dataset row ([`Shop::from_row`]) or persisted from a
//! client payload ([`ShopInput`]) by the mutation engine.
//!
//! Row construction is pure and never fails: a row whose coordinates do
//! not parse as finite numbers produces a record tagged
//! [`ShopStatus::Invalid`] with no location, which downstream readers
//! exclude from geo queries and the active count.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;

/// Unique record identifier, assigned by the store's id sequence.
pub type ShopId = u64;

/// Lifecycle status of a shop record.
///
/// `Active → Deleted` is the only runtime transition (soft delete, no
/// return). `Invalid` is terminal and assigned only at construction, when
/// a source row carries unparsable coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShopStatus {
    /// Eligible for geo queries and counted by the store.
    Active,
    /// Soft-deleted; retrievable by id, excluded everywhere else.
    Deleted,
    /// Coordinates failed to parse at construction; never queryable.
    Invalid,
}

impl std::fmt::Display for ShopStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ShopStatus::Active => "active",
            ShopStatus::Deleted => "deleted",
            ShopStatus::Invalid => "invalid",
        };
        f.write_str(label)
    }
}

/// A persisted coffee shop record.
///
/// Serializes to the wire shape
/// `{ id, name, address, lat, lng, status, version, dateCreated, lastUpdated }`;
/// records without a parsed location omit `lat`/`lng`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Shop {
    /// Unique id, never reused for the life of the process.
    pub id: ShopId,
    /// Shop name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Parsed coordinates; `None` when the source values were unparsable.
    #[serde(flatten)]
    pub location: Option<GeoPoint>,
    /// Lifecycle status.
    pub status: ShopStatus,
    /// Optimistic version counter: 0 at creation, +1 per mutation.
    pub version: u64,
    /// Set once at first persist, immutable thereafter.
    pub date_created: DateTime<Utc>,
    /// Set on every successful persist.
    pub last_updated: DateTime<Utc>,
}

impl Shop {
    /// Build a record from loosely-typed row fields.
    ///
    /// Coordinates are coerced to floats; when either fails to parse as a
    /// finite number the record is tagged [`ShopStatus::Invalid`] instead
    /// of erroring. Status defaults to active, version to 0, and both
    /// timestamps to `now`.
    pub fn from_row(
        id: ShopId,
        name: &str,
        address: &str,
        lat: &str,
        lng: &str,
        now: DateTime<Utc>,
    ) -> Self {
        let location = match (lat.parse::<f64>(), lng.parse::<f64>()) {
            (Ok(lat), Ok(lng)) if lat.is_finite() && lng.is_finite() => {
                Some(GeoPoint::new(lat, lng))
            }
            _ => None,
        };

        let status = if location.is_some() {
            ShopStatus::Active
        } else {
            ShopStatus::Invalid
        };

        Self {
            id,
            name: name.to_string(),
            address: address.to_string(),
            location,
            status,
            version: 0,
            date_created: now,
            last_updated: now,
        }
    }

    /// True when the record is eligible for geo queries and the count.
    pub fn is_active(&self) -> bool {
        self.status == ShopStatus::Active
    }
}

/// Client payload for create and update requests.
///
/// Every field is optional at the wire level; the mutation engine's
/// validation decides what is acceptable. An absent `id` signals a create,
/// a present `id` an update of an existing record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShopInput {
    /// Target record id; omitted for creates.
    pub id: Option<ShopId>,
    /// Shop name, required non-empty.
    pub name: Option<String>,
    /// Street address, required non-empty.
    pub address: Option<String>,
    /// Latitude in decimal degrees; zero is treated as unset.
    pub lat: Option<f64>,
    /// Longitude in decimal degrees; zero is treated as unset.
    pub lng: Option<f64>,
}

#[cfg(test)]
mod tests;
