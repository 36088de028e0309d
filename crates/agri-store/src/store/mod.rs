//! # Listing & Preference Stores
//!
//! One store per storage key, each owning an in-memory working copy that is
//! re-persisted in full on every mutation.
//!
//! ## Store Map
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Stores                                          │
//! │                                                                         │
//! │  CropStore      ──► cropsData       seeded, id-allocating, prepend      │
//! │  EquipmentStore ──► equipmentData   seeded, id-allocating, prepend      │
//! │  SessionStore   ──► currentUser     present = logged in                 │
//! │  LocaleStore    ──► lang            absent/unknown = English            │
//! │                                                                         │
//! │  Listing stores fall back to seed data when their blob is absent OR    │
//! │  corrupt; the session store propagates corruption instead (reseeding   │
//! │  an identity claim makes no sense).                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod crop;
mod equipment;
mod prefs;
mod session;

pub use crop::CropStore;
pub use equipment::EquipmentStore;
pub use prefs::LocaleStore;
pub use session::SessionStore;

use chrono::Utc;

use agri_core::ListingId;

/// Allocates the next listing id for a collection.
///
/// Time-seeded from epoch millis, but strictly greater than every id
/// already in the collection, so rapid successive inserts can never
/// collide.
pub(crate) fn next_listing_id(last_id: u64) -> ListingId {
    let now_millis = Utc::now().timestamp_millis().max(0) as u64;
    ListingId::new((last_id + 1).max(now_millis))
}
