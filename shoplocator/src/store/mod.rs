//! In-memory shop store and id sequence.
//!
//! The [`ShopStore`] owns the canonical id → record mapping. It is a pure
//! key-value container: no validation happens here, that is the mutation
//! engine's job. Records are never physically removed — soft deletion is a
//! status flip upstream, so the full id history lives in the map for the
//! life of the process.
//!
//! # Thread Safety
//!
//! - Map access is guarded by a single `RwLock`: readers run concurrently,
//!   writers are exclusive, and a geo scan always sees a consistent
//!   snapshot.
//! - The id sequence is an `AtomicU64`; concurrent callers of
//!   [`ShopStore::next_id`] never observe the same value.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use crate::dataset::Dataset;
use crate::shop::{Shop, ShopId};

/// Error type for store lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No record exists for the id.
    #[error("shop not found for id: {0}")]
    NotFound(ShopId),
}

/// In-memory id → record map plus the id-generation sequence.
#[derive(Debug)]
pub struct ShopStore {
    shops: RwLock<HashMap<ShopId, Shop>>,
    /// Next id to hand out; starts at 1 or `max(imported) + 1`.
    id_seq: AtomicU64,
}

impl ShopStore {
    /// Create an empty store with the id sequence starting at 1.
    pub fn new() -> Self {
        Self {
            shops: RwLock::new(HashMap::new()),
            id_seq: AtomicU64::new(1),
        }
    }

    /// Build a store from a bootstrap dataset.
    ///
    /// Inserts every record into the index and resumes the id sequence at
    /// `dataset.max_id + 1`. Performed once at startup, before the store
    /// is shared with request handlers.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let mut map = HashMap::with_capacity(dataset.shops.len());
        for shop in dataset.shops {
            map.insert(shop.id, shop);
        }

        tracing::info!(count = map.len(), next_id = dataset.max_id + 1, "shop store seeded");

        Self {
            shops: RwLock::new(map),
            id_seq: AtomicU64::new(dataset.max_id + 1),
        }
    }

    /// Return the next id in the sequence. Strictly increasing; safe for
    /// concurrent callers.
    pub fn next_id(&self) -> ShopId {
        self.id_seq.fetch_add(1, Ordering::SeqCst)
    }

    /// Look up a record by id, any status.
    pub fn get(&self, id: ShopId) -> Option<Shop> {
        let shops = self.shops.read().expect("shop store lock poisoned");
        shops.get(&id).cloned()
    }

    /// Look up a record by id, failing with [`StoreError::NotFound`].
    ///
    /// Deleted and invalid records are still visible here; they are only
    /// excluded from [`count`](Self::count) and [`active`](Self::active).
    pub fn find_by_id(&self, id: ShopId) -> Result<Shop, StoreError> {
        self.get(id).ok_or(StoreError::NotFound(id))
    }

    /// Insert or overwrite the entry for `shop.id`. No validation.
    pub fn put(&self, shop: Shop) {
        let mut shops = self.shops.write().expect("shop store lock poisoned");
        shops.insert(shop.id, shop);
    }

    /// Number of records whose status is active.
    pub fn count(&self) -> usize {
        let shops = self.shops.read().expect("shop store lock poisoned");
        shops.values().filter(|shop| shop.is_active()).count()
    }

    /// Total number of records of any status.
    pub fn len(&self) -> usize {
        let shops = self.shops.read().expect("shop store lock poisoned");
        shops.len()
    }

    /// True when the store holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all active records in ascending-id order.
    ///
    /// The fixed order gives geo queries a reproducible iteration order;
    /// taking a clone under the read lock means scans never observe a
    /// half-written record.
    pub fn active(&self) -> Vec<Shop> {
        let shops = self.shops.read().expect("shop store lock poisoned");
        let mut active: Vec<Shop> = shops.values().filter(|s| s.is_active()).cloned().collect();
        active.sort_by_key(|shop| shop.id);
        active
    }
}

impl Default for ShopStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
