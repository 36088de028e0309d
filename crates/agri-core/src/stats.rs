//! # Derived Statistics (Dashboard)
//!
//! Read-only aggregates for a single user's own listings.
//!
//! ## What Is Derived vs Placeholder
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Dashboard Figures                                 │
//! │                                                                         │
//! │  Active listings ── DERIVED: count of crops whose farmer equals the    │
//! │                     session name exactly                               │
//! │  Total earnings ─── PLACEHOLDER: fixed "₹12,500"                       │
//! │  Total sales ────── PLACEHOLDER: fixed 8                               │
//! │                                                                         │
//! │  Earnings and sales are fixed demo figures; only the listing count     │
//! │  reacts to data.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::session::Session;
use crate::types::CropListing;

/// Placeholder total-earnings figure (not derived from data).
pub const PLACEHOLDER_EARNINGS: &str = "₹12,500";

/// Placeholder total-sales figure (not derived from data).
pub const PLACEHOLDER_SALES: u32 = 8;

/// The dashboard's summary figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    /// Fixed placeholder; see [`PLACEHOLDER_EARNINGS`].
    pub total_earnings: String,

    /// Count of the session owner's crop listings.
    ///
    /// Exact string match on the farmer field: case or whitespace
    /// differences cause misses.
    pub active_listings: usize,

    /// Fixed placeholder; see [`PLACEHOLDER_SALES`].
    pub total_sales: u32,
}

impl DashboardStats {
    /// Computes the dashboard figures for the given session.
    ///
    /// Pure read: neither the collection nor the session is mutated, and
    /// changing the session identity changes only the derived count.
    pub fn for_user(crops: &[CropListing], session: &Session) -> Self {
        DashboardStats {
            total_earnings: PLACEHOLDER_EARNINGS.to_string(),
            active_listings: user_listings(crops, session).len(),
            total_sales: PLACEHOLDER_SALES,
        }
    }
}

/// Returns the session owner's own listings, for the "my listings" view.
pub fn user_listings<'a>(crops: &'a [CropListing], session: &Session) -> Vec<&'a CropListing> {
    crops
        .iter()
        .filter(|crop| crop.farmer == session.name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CropImage, ListingId};
    use chrono::NaiveDate;

    fn crop(id: u64, farmer: &str) -> CropListing {
        CropListing {
            id: ListingId::new(id),
            name: format!("Crop {id}"),
            category: "Grains".to_string(),
            quantity: "10 kg".to_string(),
            price: "₹100".to_string(),
            location: "Punjab".to_string(),
            quality: "Standard".to_string(),
            farmer: farmer.to_string(),
            image: CropImage::Default,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        }
    }

    fn session(name: &str) -> Session {
        Session {
            name: name.to_string(),
            phone: "1".to_string(),
            location: "Punjab".to_string(),
            farm_size: None,
            joined: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn test_active_listings_counts_exact_owner_matches() {
        let crops = vec![
            crop(1, "Harpreet Singh"),
            crop(2, "Rajesh Kumar"),
            crop(3, "Harpreet Singh"),
        ];

        let stats = DashboardStats::for_user(&crops, &session("Harpreet Singh"));
        assert_eq!(stats.active_listings, 2);
        assert_eq!(stats.total_earnings, PLACEHOLDER_EARNINGS);
        assert_eq!(stats.total_sales, PLACEHOLDER_SALES);
    }

    #[test]
    fn test_owner_match_is_exact_no_normalization() {
        let crops = vec![crop(1, "Harpreet Singh")];

        // Case difference misses.
        assert_eq!(
            DashboardStats::for_user(&crops, &session("harpreet singh")).active_listings,
            0
        );
        // Trailing whitespace misses.
        assert_eq!(
            DashboardStats::for_user(&crops, &session("Harpreet Singh ")).active_listings,
            0
        );
    }

    #[test]
    fn test_changing_session_changes_count_without_mutating_store() {
        let crops = vec![crop(1, "A"), crop(2, "B"), crop(3, "B")];
        let before = crops.clone();

        assert_eq!(DashboardStats::for_user(&crops, &session("A")).active_listings, 1);
        assert_eq!(DashboardStats::for_user(&crops, &session("B")).active_listings, 2);
        assert_eq!(crops, before);
    }

    #[test]
    fn test_user_listings_returns_own_records() {
        let crops = vec![crop(1, "A"), crop(2, "B")];
        let mine = user_listings(&crops, &session("B"));
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].id, ListingId::new(2));
    }
}
