//! Equipment listing store backed by the `equipmentData` key.

use std::sync::Arc;

use tracing::{debug, info, warn};

use agri_core::{EquipmentDraft, EquipmentListing, ListingId};

use crate::error::{StoreError, StoreResult};
use crate::kv::{KvStorage, EQUIPMENT_KEY};
use crate::seed::seed_equipment;
use crate::store::next_listing_id;

/// The equipment collection; same rules as the crop store.
///
/// Deserializing an equipment blob also validates its pricing (a record
/// with neither a rental rate nor a purchase price is rejected), so a
/// pricing-violating blob lands in the same corrupt-data fallback as
/// malformed JSON.
#[derive(Debug)]
pub struct EquipmentStore {
    kv: Arc<KvStorage>,
    records: Vec<EquipmentListing>,
    last_id: u64,
}

impl EquipmentStore {
    /// Loads the equipment collection, seeding it if absent or corrupt.
    pub fn open(kv: Arc<KvStorage>) -> StoreResult<Self> {
        let records = match kv.get_json::<Vec<EquipmentListing>>(EQUIPMENT_KEY) {
            Ok(Some(records)) => {
                debug!(count = records.len(), "Loaded equipment listings");
                records
            }
            Ok(None) => {
                info!("No equipment data found, seeding sample listings");
                let seeded = seed_equipment();
                kv.put_json(EQUIPMENT_KEY, &seeded)?;
                seeded
            }
            Err(StoreError::Corrupt { reason, .. }) => {
                warn!(%reason, "Equipment data corrupt, falling back to seed listings");
                let seeded = seed_equipment();
                kv.put_json(EQUIPMENT_KEY, &seeded)?;
                seeded
            }
            Err(other) => return Err(other),
        };

        let last_id = records.iter().map(|e| e.id.value()).max().unwrap_or(0);
        Ok(EquipmentStore {
            kv,
            records,
            last_id,
        })
    }

    /// Inserts a new listing at the front of the collection.
    pub fn add(&mut self, draft: EquipmentDraft) -> StoreResult<EquipmentListing> {
        let id = next_listing_id(self.last_id);
        let listing = draft.into_listing(id);

        // Persist a candidate collection first; in-memory state and the
        // id watermark only advance once the write has committed.
        let mut candidate = self.records.clone();
        candidate.insert(0, listing.clone());
        self.kv.put_json(EQUIPMENT_KEY, &candidate)?;

        self.records = candidate;
        self.last_id = id.value();

        info!(%id, name = %listing.name, "Equipment listing added");
        Ok(listing)
    }

    /// Removes a listing by id, returning the removed record.
    pub fn remove(&mut self, id: ListingId) -> StoreResult<EquipmentListing> {
        let index = self
            .records
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::not_found("Equipment listing", id))?;

        let mut candidate = self.records.clone();
        let removed = candidate.remove(index);
        self.kv.put_json(EQUIPMENT_KEY, &candidate)?;
        self.records = candidate;

        info!(%id, name = %removed.name, "Equipment listing removed");
        Ok(removed)
    }

    /// Looks up a listing by id.
    pub fn get(&self, id: ListingId) -> Option<&EquipmentListing> {
        self.records.iter().find(|e| e.id == id)
    }

    /// Returns the collection in its stored order (newest first).
    pub fn all(&self) -> &[EquipmentListing] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agri_core::{Condition, EquipmentImage, Pricing};
    use tempfile::tempdir;

    fn open_store() -> (tempfile::TempDir, EquipmentStore) {
        let dir = tempdir().unwrap();
        let kv = Arc::new(KvStorage::open(dir.path().join("test.redb")).unwrap());
        let store = EquipmentStore::open(kv).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_seeds_empty_database() {
        let (_dir, store) = open_store();
        assert_eq!(store.len(), 4);
        assert_eq!(store.all()[0].name, "Tractor");
    }

    #[test]
    fn test_add_rental_only_listing() {
        let (_dir, mut store) = open_store();

        let added = store
            .add(EquipmentDraft {
                name: "Seed Drill".to_string(),
                category: "Planting".to_string(),
                pricing: Pricing::Rental {
                    rate: "₹1,200/day".to_string(),
                },
                location: "Haryana".to_string(),
                owner: "Demo Farmer".to_string(),
                condition: Condition::Good,
                image: EquipmentImage::Default,
                delivery: true,
            })
            .unwrap();

        assert_eq!(store.all()[0].id, added.id);
        assert!(added.pricing.offers_rental());
        assert!(!added.pricing.offers_purchase());
    }

    #[test]
    fn test_memory_matches_persisted_snapshot_after_each_mutation() {
        let dir = tempdir().unwrap();
        let kv = Arc::new(KvStorage::open(dir.path().join("test.redb")).unwrap());
        let mut store = EquipmentStore::open(kv.clone()).unwrap();

        let removed = store.remove(ListingId::new(2)).unwrap();
        assert_eq!(removed.name, "Harvester");

        let stored: Vec<EquipmentListing> = kv.get_json(EQUIPMENT_KEY).unwrap().unwrap();
        assert_eq!(stored, store.all());
    }

    #[test]
    fn test_remove_missing_id_is_not_found() {
        let (_dir, mut store) = open_store();
        assert!(matches!(
            store.remove(ListingId::new(42)),
            Err(StoreError::NotFound { .. })
        ));
        assert_eq!(store.len(), 4);
    }
}
