//! Geo query engine: great-circle distance and proximity searches.
//!
//! Distances are computed with the haversine formula on a spherical Earth
//! approximation. Latitude and longitude are plain degree floats; no datum
//! or projection correction is applied.
//!
//! Both queries operate on the store's active snapshot, which is ordered by
//! ascending id. That fixed order makes the nearest-neighbor tie-break
//! reproducible: the lowest-id record among equidistant candidates wins.
//!
//! # Example
//!
//! ```
//! use shoplocator::geo::GeoPoint;
//!
//! let equator = GeoPoint::new(37.782394, -122.409973);
//! let four_barrel = GeoPoint::new(37.7671, -122.4219);
//! let km = equator.distance_km(&four_barrel);
//! assert!(km > 1.0 && km < 3.0);
//! ```

use std::f64::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shop::Shop;
use crate::store::ShopStore;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per statute mile.
pub const KM_PER_MILE: f64 = 1.609344;

/// Default search radius: 50 miles expressed in kilometers.
pub const DEFAULT_RADIUS_KM: f64 = 50.0 * KM_PER_MILE;

/// Degrees to radians conversion factor.
const DEG_TO_RAD: f64 = PI / 180.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in decimal degrees, positive north.
    pub lat: f64,
    /// Longitude in decimal degrees, positive east.
    pub lng: f64,
}

impl GeoPoint {
    /// Create a point from decimal-degree coordinates.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in kilometers.
    ///
    /// Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
    /// Accurate to ~0.5% against the ellipsoid, which is plenty for a
    /// 50-mile shop search.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat * DEG_TO_RAD;
        let lat2 = other.lat * DEG_TO_RAD;
        let d_lat = (other.lat - self.lat) * DEG_TO_RAD;
        let d_lng = (other.lng - self.lng) * DEG_TO_RAD;

        let half_chord = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

        2.0 * EARTH_RADIUS_KM * half_chord.sqrt().asin()
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Error type for proximity queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoQueryError {
    /// The active record set is empty; nearest-neighbor has no answer.
    #[error("no active shops available")]
    NoActiveShops,
}

/// Return all active shops strictly closer than `radius_km` to `target`.
///
/// Deleted and invalid records never appear in the result. Results come
/// back in the store's ascending-id snapshot order.
pub fn within_radius(store: &ShopStore, target: GeoPoint, radius_km: f64) -> Vec<Shop> {
    let matches: Vec<Shop> = store
        .active()
        .into_iter()
        .filter(|shop| match shop.location {
            Some(loc) => loc.distance_km(&target) < radius_km,
            None => false,
        })
        .collect();

    tracing::debug!(
        target = %target,
        radius_km,
        hits = matches.len(),
        "radius query"
    );

    matches
}

/// Return the single active shop closest to `target`.
///
/// Scans the full active set. A candidate replaces the current best only
/// when strictly closer, so among equidistant shops the first one in
/// ascending-id order wins.
///
/// Fails with [`GeoQueryError::NoActiveShops`] when no active records
/// exist.
pub fn nearest(store: &ShopStore, target: GeoPoint) -> Result<Shop, GeoQueryError> {
    let mut best: Option<(f64, Shop)> = None;

    for shop in store.active() {
        let Some(loc) = shop.location else {
            continue;
        };
        let dist = loc.distance_km(&target);
        let closer = match &best {
            Some((best_dist, _)) => dist < *best_dist,
            None => true,
        };
        if closer {
            best = Some((dist, shop));
        }
    }

    match best {
        Some((dist, shop)) => {
            tracing::debug!(target = %target, id = shop.id, dist_km = dist, "nearest shop");
            Ok(shop)
        }
        None => Err(GeoQueryError::NoActiveShops),
    }
}
