//! Mutation engine: validated create/update/delete with optimistic
//! versioning.
//!
//! The [`ShopDao`] is the only writer of the store. Every mutation runs
//! its read-modify-write cycle under a write gate, so version numbers
//! never skip or repeat even when requests race. Reads go straight to the
//! store's own lock.
//!
//! Status machine: `Active → Deleted`, exactly once, no return. `Invalid`
//! is assigned only at row construction; an update can never transition a
//! record into it because validation rejects bad coordinates first.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::geo::GeoPoint;
use crate::shop::{Shop, ShopId, ShopInput, ShopStatus};
use crate::store::ShopStore;

/// Error type for mutations and DAO lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DaoError {
    /// No record exists for the id. Also covers update payloads carrying a
    /// foreign id: those are rejected rather than silently created, to
    /// keep the id sequence collision-free.
    #[error("shop not found for id: {0}")]
    NotFound(ShopId),

    /// The payload failed validation; nothing was persisted.
    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    /// The record was already soft-deleted; deleting twice is an error.
    #[error("shop {0} is already deleted")]
    AlreadyDeleted(ShopId),
}

/// Data access object over the shop store.
///
/// Cheap to clone; clones share the same store and write gate.
#[derive(Debug, Clone)]
pub struct ShopDao {
    store: Arc<ShopStore>,
    /// Serializes read-modify-write cycles across concurrent mutators.
    write_gate: Arc<Mutex<()>>,
}

impl ShopDao {
    /// Create a DAO over a shared store.
    pub fn new(store: Arc<ShopStore>) -> Self {
        Self {
            store,
            write_gate: Arc::new(Mutex::new(())),
        }
    }

    /// The underlying store, for read-side callers (geo queries, count).
    pub fn store(&self) -> &ShopStore {
        &self.store
    }

    /// Find a record by id, any status.
    pub fn find_by_id(&self, id: ShopId) -> Result<Shop, DaoError> {
        self.store.get(id).ok_or(DaoError::NotFound(id))
    }

    /// Check a payload against the write rules.
    ///
    /// Pure function, no side effects. Returns one human-readable message
    /// per violated rule; an empty list means the payload is acceptable.
    /// Zero coordinates are treated as unset.
    pub fn validate(input: &ShopInput) -> Vec<String> {
        let mut errors = Vec::new();

        match &input.name {
            Some(name) if !name.trim().is_empty() => {}
            _ => errors.push("name is required and must be a non-empty string".to_string()),
        }

        match &input.address {
            Some(address) if !address.trim().is_empty() => {}
            _ => errors.push("address is required and must be a non-empty string".to_string()),
        }

        match input.lat {
            Some(lat) if lat != 0.0 && lat.is_finite() => {}
            _ => errors.push("latitude is required and must be a non-zero number".to_string()),
        }

        match input.lng {
            Some(lng) if lng != 0.0 && lng.is_finite() => {}
            _ => errors.push("longitude is required and must be a non-zero number".to_string()),
        }

        errors
    }

    /// Create or update a record from a client payload.
    ///
    /// A payload without an id is a create: it receives the next id from
    /// the sequence, version 0, and matching created/updated timestamps.
    /// A payload with an id must name an existing record; the update bumps
    /// the version by exactly one, preserves the creation timestamp and
    /// the current status, and refreshes `last_updated`.
    pub fn upsert(&self, input: ShopInput) -> Result<Shop, DaoError> {
        let errors = Self::validate(&input);
        if !errors.is_empty() {
            return Err(DaoError::ValidationFailed(errors));
        }

        // Validation guarantees these are present and usable.
        let name = input.name.unwrap_or_default();
        let address = input.address.unwrap_or_default();
        let location = match (input.lat, input.lng) {
            (Some(lat), Some(lng)) => GeoPoint::new(lat, lng),
            _ => unreachable!("validate() requires both coordinates"),
        };

        let _gate = self.write_gate.lock().expect("dao write gate poisoned");
        let now = Utc::now();

        let shop = match input.id {
            None => {
                let id = self.store.next_id();
                Shop {
                    id,
                    name,
                    address,
                    location: Some(location),
                    status: ShopStatus::Active,
                    version: 0,
                    date_created: now,
                    last_updated: now,
                }
            }
            Some(id) => {
                let existing = self.store.get(id).ok_or(DaoError::NotFound(id))?;
                Shop {
                    id,
                    name,
                    address,
                    location: Some(location),
                    status: existing.status,
                    version: existing.version + 1,
                    date_created: existing.date_created,
                    last_updated: now,
                }
            }
        };

        self.store.put(shop.clone());
        tracing::info!(id = shop.id, version = shop.version, "shop persisted");
        Ok(shop)
    }

    /// Soft-delete a record: flip status to deleted and bump the version.
    ///
    /// Fails with [`DaoError::NotFound`] for unknown ids and
    /// [`DaoError::AlreadyDeleted`] when the record was deleted before.
    /// The record stays retrievable by id afterwards.
    pub fn delete(&self, id: ShopId) -> Result<Shop, DaoError> {
        let _gate = self.write_gate.lock().expect("dao write gate poisoned");

        let existing = self.store.get(id).ok_or(DaoError::NotFound(id))?;
        if existing.status == ShopStatus::Deleted {
            return Err(DaoError::AlreadyDeleted(id));
        }

        let shop = Shop {
            status: ShopStatus::Deleted,
            version: existing.version + 1,
            last_updated: Utc::now(),
            ..existing
        };

        self.store.put(shop.clone());
        tracing::info!(id, version = shop.version, "shop soft-deleted");
        Ok(shop)
    }
}

#[cfg(test)]
mod tests;
