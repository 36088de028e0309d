//! # Query Engine
//!
//! Pure filter/search evaluation over listing collections.
//!
//! ## How Filtering Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Filter Composition                                  │
//! │                                                                         │
//! │  User changes a filter control                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CropQuery { category: Some("Grains"), location: Some("Punjab"),       │
//! │              search: Some("rice") }                                    │
//! │       │                                                                 │
//! │       ▼ apply(collection)                                              │
//! │  ┌─────────────────────────────────────────┐                           │
//! │  │ keep record iff                         │                           │
//! │  │   category matches  AND                 │  each criterion is a      │
//! │  │   location matches  AND                 │  pure narrowing predicate │
//! │  │   search matches                        │  → order cannot matter    │
//! │  └─────────────────────────────────────────┘                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Filtered view (input order preserved) → Presentation Adapter          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine carries no loading/error state: an empty result is just an
//! empty collection, and "no criteria yet" is the default query, which keeps
//! everything.

use crate::error::ValidationError;
use crate::types::{CropListing, EquipmentListing};
use crate::validation::validate_search_query;

// =============================================================================
// Crop Query
// =============================================================================

/// Filter criteria over the crop collection.
///
/// `None` means unrestricted, the typed replacement for an `"all"`
/// sentinel option value. An empty or whitespace-only search term is
/// also unrestricted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CropQuery {
    /// Exact, case-sensitive match on the crop category.
    pub category: Option<String>,
    /// Exact, case-sensitive match on the region.
    pub location: Option<String>,
    /// Case-insensitive substring match OR-ed across name, category,
    /// location and farmer.
    pub search: Option<String>,
}

impl CropQuery {
    /// A query with no restrictions (keeps every record).
    pub fn all() -> Self {
        CropQuery::default()
    }

    /// Builds a search-only query from a user-typed term.
    ///
    /// ## Returns
    /// * `Err(ValidationError::TooLong)` - term exceeds the search length cap
    pub fn search(term: impl Into<String>) -> Result<Self, ValidationError> {
        let term = validate_search_query(&term.into())?;
        Ok(CropQuery {
            search: Some(term),
            ..CropQuery::default()
        })
    }

    /// Produces the filtered view of `crops`, preserving input order.
    ///
    /// Pure function: the input collection is never mutated.
    pub fn apply(&self, crops: &[CropListing]) -> Vec<CropListing> {
        // Lowercase the term once, not per record.
        let term = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase);

        crops
            .iter()
            .filter(|crop| self.matches(crop, term.as_deref()))
            .cloned()
            .collect()
    }

    fn matches(&self, crop: &CropListing, term: Option<&str>) -> bool {
        if let Some(category) = &self.category {
            if &crop.category != category {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if &crop.location != location {
                return false;
            }
        }

        if let Some(term) = term {
            if !search_matches(crop, term) {
                return false;
            }
        }

        true
    }
}

/// Substring match across the searchable crop fields.
///
/// `term` must already be lowercased. A record matches if ANY field
/// contains the term (logical OR).
fn search_matches(crop: &CropListing, term: &str) -> bool {
    crop.name.to_lowercase().contains(term)
        || crop.category.to_lowercase().contains(term)
        || crop.location.to_lowercase().contains(term)
        || crop.farmer.to_lowercase().contains(term)
}

// =============================================================================
// Equipment Query
// =============================================================================

/// Availability restriction for equipment listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    /// No restriction.
    #[default]
    All,
    /// Keep records offered for rent.
    Rental,
    /// Keep records with a purchase price.
    Purchase,
}

/// Filter criteria over the equipment collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentQuery {
    /// Exact, case-sensitive match on the equipment category.
    pub category: Option<String>,
    /// Exact, case-sensitive match on the region.
    pub location: Option<String>,
    /// Rental/purchase availability.
    pub availability: Availability,
}

impl EquipmentQuery {
    /// A query with no restrictions (keeps every record).
    pub fn all() -> Self {
        EquipmentQuery::default()
    }

    /// Produces the filtered view of `equipment`, preserving input order.
    pub fn apply(&self, equipment: &[EquipmentListing]) -> Vec<EquipmentListing> {
        equipment
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }

    fn matches(&self, item: &EquipmentListing) -> bool {
        if let Some(category) = &self.category {
            if &item.category != category {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if &item.location != location {
                return false;
            }
        }

        match self.availability {
            Availability::All => true,
            Availability::Rental => item.pricing.offers_rental(),
            Availability::Purchase => item.pricing.offers_purchase(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Condition, CropImage, EquipmentImage, ListingId, Pricing};
    use chrono::NaiveDate;

    fn crop(id: u64, name: &str, category: &str, location: &str, farmer: &str) -> CropListing {
        CropListing {
            id: ListingId::new(id),
            name: name.to_string(),
            category: category.to_string(),
            quantity: "100 kg".to_string(),
            price: "₹1,000".to_string(),
            location: location.to_string(),
            quality: "Standard".to_string(),
            farmer: farmer.to_string(),
            image: CropImage::Default,
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        }
    }

    /// The four-crop seed scenario from the marketplace sample data.
    fn sample_crops() -> Vec<CropListing> {
        vec![
            crop(1, "Organic Wheat", "Grains", "Karnataka", "Rajesh Kumar"),
            crop(2, "Fresh Tomatoes", "Vegetables", "Maharashtra", "Sunita Patil"),
            crop(3, "Basmati Rice", "Grains", "Punjab", "Harpreet Singh"),
            crop(4, "Alphonso Mangoes", "Fruits", "Maharashtra", "Vikram Desai"),
        ]
    }

    fn equipment(id: u64, name: &str, location: &str, pricing: Pricing) -> EquipmentListing {
        EquipmentListing {
            id: ListingId::new(id),
            name: name.to_string(),
            category: "Heavy Equipment".to_string(),
            pricing,
            location: location.to_string(),
            owner: "Farm Equipment Rentals".to_string(),
            condition: Condition::Good,
            image: EquipmentImage::Default,
            delivery: false,
        }
    }

    fn rent_and_buy(rate: &str, price: &str) -> Pricing {
        Pricing::RentalAndPurchase {
            rate: rate.to_string(),
            price: price.to_string(),
        }
    }

    fn names(crops: &[CropListing]) -> Vec<&str> {
        crops.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_default_query_keeps_everything() {
        let crops = sample_crops();
        assert_eq!(CropQuery::all().apply(&crops), crops);
    }

    #[test]
    fn test_type_filter_narrows_to_grains() {
        let crops = sample_crops();
        let query = CropQuery {
            category: Some("Grains".to_string()),
            ..CropQuery::default()
        };
        assert_eq!(names(&query.apply(&crops)), ["Organic Wheat", "Basmati Rice"]);
    }

    #[test]
    fn test_type_and_location_filters_combine_with_and() {
        let crops = sample_crops();
        let query = CropQuery {
            category: Some("Grains".to_string()),
            location: Some("Punjab".to_string()),
            ..CropQuery::default()
        };
        assert_eq!(names(&query.apply(&crops)), ["Basmati Rice"]);
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let crops = sample_crops();
        let query = CropQuery {
            category: Some("grains".to_string()),
            ..CropQuery::default()
        };
        assert!(query.apply(&crops).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let crops = sample_crops();

        // "rice" must match "Basmati Rice" (substring, not whole word)
        assert_eq!(names(&CropQuery::search("rice").unwrap().apply(&crops)), ["Basmati Rice"]);

        // "maha" matches on location across two records
        assert_eq!(
            names(&CropQuery::search("maha").unwrap().apply(&crops)),
            ["Fresh Tomatoes", "Alphonso Mangoes"]
        );

        // farmer field participates in the OR
        assert_eq!(
            names(&CropQuery::search("harpreet").unwrap().apply(&crops)),
            ["Basmati Rice"]
        );
    }

    #[test]
    fn test_blank_search_is_unrestricted() {
        let crops = sample_crops();
        assert_eq!(CropQuery::search("   ").unwrap().apply(&crops).len(), crops.len());
    }

    #[test]
    fn test_search_constructor_enforces_length_cap() {
        let long_term = "x".repeat(crate::MAX_SEARCH_LEN + 1);
        assert!(matches!(
            CropQuery::search(long_term),
            Err(ValidationError::TooLong { field: "query", .. })
        ));

        // Terms are trimmed on the way in.
        assert_eq!(
            CropQuery::search("  rice  ").unwrap().search.as_deref(),
            Some("rice")
        );
    }

    #[test]
    fn test_composition_equals_intersection_of_single_filters() {
        let crops = sample_crops();

        let by_type = CropQuery {
            category: Some("Grains".to_string()),
            ..CropQuery::default()
        };
        let by_location = CropQuery {
            location: Some("Punjab".to_string()),
            ..CropQuery::default()
        };
        let by_search = CropQuery::search("a").unwrap();

        let composed = CropQuery {
            category: by_type.category.clone(),
            location: by_location.location.clone(),
            search: by_search.search.clone(),
        };

        let ids = |v: Vec<CropListing>| -> Vec<ListingId> { v.into_iter().map(|c| c.id).collect() };

        let intersection: Vec<ListingId> = ids(by_type.apply(&crops))
            .into_iter()
            .filter(|id| ids(by_location.apply(&crops)).contains(id))
            .filter(|id| ids(by_search.apply(&crops)).contains(id))
            .collect();

        assert_eq!(ids(composed.apply(&crops)), intersection);

        // Narrowing predicates commute: filtering the already-filtered set
        // in the other order gives the same records.
        let type_then_location = by_location.apply(&by_type.apply(&crops));
        let location_then_type = by_type.apply(&by_location.apply(&crops));
        assert_eq!(type_then_location, location_then_type);
    }

    #[test]
    fn test_equipment_availability_with_all_rental_seed() {
        // All four seed items offer both rental and purchase.
        let fleet = vec![
            equipment(1, "Tractor", "Karnataka", rent_and_buy("₹8,000/day", "₹5,50,000")),
            equipment(2, "Harvester", "Punjab", rent_and_buy("₹12,000/day", "₹8,75,000")),
            equipment(3, "Irrigation System", "Maharashtra", rent_and_buy("₹2,500/day", "₹1,20,000")),
            equipment(4, "Sprayer", "Tamil Nadu", rent_and_buy("₹800/day", "₹45,000")),
        ];

        let purchase = EquipmentQuery {
            availability: Availability::Purchase,
            ..EquipmentQuery::default()
        };
        assert_eq!(purchase.apply(&fleet).len(), 4);

        // A rental-only record is excluded by the purchase filter and kept
        // by the rental filter — exercises the null purchase field.
        let mut fleet = fleet;
        fleet.push(equipment(
            5,
            "Seed Drill",
            "Punjab",
            Pricing::Rental { rate: "₹600/day".to_string() },
        ));

        assert_eq!(purchase.apply(&fleet).len(), 4);

        let rental = EquipmentQuery {
            availability: Availability::Rental,
            ..EquipmentQuery::default()
        };
        assert_eq!(rental.apply(&fleet).len(), 5);
    }

    #[test]
    fn test_equipment_filters_combine() {
        let fleet = vec![
            equipment(1, "Tractor", "Karnataka", rent_and_buy("₹8,000/day", "₹5,50,000")),
            equipment(2, "Harvester", "Punjab", rent_and_buy("₹12,000/day", "₹8,75,000")),
        ];

        let query = EquipmentQuery {
            category: Some("Heavy Equipment".to_string()),
            location: Some("Punjab".to_string()),
            availability: Availability::Rental,
        };

        let filtered = query.apply(&fleet);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Harvester");
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let crops = sample_crops();
        let before = crops.clone();
        let _ = CropQuery::search("wheat").unwrap().apply(&crops);
        assert_eq!(crops, before);
    }
}
