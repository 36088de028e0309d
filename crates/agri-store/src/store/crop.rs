//! Crop listing store backed by the `cropsData` key.

use std::sync::Arc;

use tracing::{debug, info, warn};

use agri_core::{CropDraft, CropListing, ListingId};

use crate::error::{StoreError, StoreResult};
use crate::kv::{KvStorage, CROPS_KEY};
use crate::seed::seed_crops;
use crate::store::next_listing_id;

/// The crop collection: an in-memory working copy plus its persisted blob.
///
/// ## Rules
/// - New listings go to the FRONT of the collection (newest first)
/// - Every mutation persists the whole collection before returning
/// - A missing or corrupt blob is replaced by the seed data
#[derive(Debug)]
pub struct CropStore {
    kv: Arc<KvStorage>,
    records: Vec<CropListing>,
    last_id: u64,
}

impl CropStore {
    /// Loads the crop collection, seeding it if absent or corrupt.
    pub fn open(kv: Arc<KvStorage>) -> StoreResult<Self> {
        let records = match kv.get_json::<Vec<CropListing>>(CROPS_KEY) {
            Ok(Some(records)) => {
                debug!(count = records.len(), "Loaded crop listings");
                records
            }
            Ok(None) => {
                info!("No crop data found, seeding sample listings");
                let seeded = seed_crops();
                kv.put_json(CROPS_KEY, &seeded)?;
                seeded
            }
            Err(StoreError::Corrupt { reason, .. }) => {
                warn!(%reason, "Crop data corrupt, falling back to seed listings");
                let seeded = seed_crops();
                kv.put_json(CROPS_KEY, &seeded)?;
                seeded
            }
            Err(other) => return Err(other),
        };

        let last_id = records.iter().map(|c| c.id.value()).max().unwrap_or(0);
        Ok(CropStore {
            kv,
            records,
            last_id,
        })
    }

    /// Inserts a new listing at the front of the collection.
    ///
    /// The returned record carries the freshly allocated id.
    pub fn add(&mut self, draft: CropDraft) -> StoreResult<CropListing> {
        let id = next_listing_id(self.last_id);
        let listing = draft.into_listing(id);

        // Persist a candidate collection first; in-memory state and the
        // id watermark only advance once the write has committed.
        let mut candidate = self.records.clone();
        candidate.insert(0, listing.clone());
        self.kv.put_json(CROPS_KEY, &candidate)?;

        self.records = candidate;
        self.last_id = id.value();

        info!(%id, name = %listing.name, "Crop listing added");
        Ok(listing)
    }

    /// Removes a listing by id, returning the removed record.
    ///
    /// ## Returns
    /// * `Err(StoreError::NotFound)` - no listing has that id
    pub fn remove(&mut self, id: ListingId) -> StoreResult<CropListing> {
        let index = self
            .records
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| StoreError::not_found("Crop listing", id))?;

        let mut candidate = self.records.clone();
        let removed = candidate.remove(index);
        self.kv.put_json(CROPS_KEY, &candidate)?;
        self.records = candidate;

        info!(%id, name = %removed.name, "Crop listing removed");
        Ok(removed)
    }

    /// Looks up a listing by id.
    pub fn get(&self, id: ListingId) -> Option<&CropListing> {
        self.records.iter().find(|c| c.id == id)
    }

    /// Returns the collection in its stored order (newest first).
    pub fn all(&self) -> &[CropListing] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
