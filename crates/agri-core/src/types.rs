//! # Domain Types
//!
//! Core domain types for the Agri Market demo.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   CropListing   │   │EquipmentListing │   │    Pricing      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  id (u64)       │   │  Rental         │       │
//! │  │  name, category │   │  name, category │   │  Purchase       │       │
//! │  │  price, farmer  │   │  pricing, owner │   │  RentalAnd-     │       │
//! │  │  date           │   │  condition      │   │    Purchase     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Condition    │   │  CropImage      │   │  DeletePolicy   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  New..Fair      │   │  wheat → 🌾     │   │  AnyCaller      │       │
//! │  └─────────────────┘   │  mango → 🥭     │   │  OwnerOnly      │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persisted Shape
//! The serde attributes reproduce the stored record layout exactly: crop
//! records carry a `type` field (Rust: `category`), equipment records carry
//! the `price`/`rental`/`purchase` triple which is bridged to the validated
//! [`Pricing`] enum on deserialization.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// =============================================================================
// Listing Identifier
// =============================================================================

/// Unique identifier of a listing within its collection.
///
/// ## Why Not Wall-Clock Millis?
/// Raw epoch-millis ids can collide under rapid successive inserts.
/// Stores allocate ids as
/// `max(last_id + 1, now_epoch_millis)`: still time-seeded and monotonically
/// increasing, but collision-free within a collection.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct ListingId(u64);

impl ListingId {
    /// Creates a listing id from a raw value.
    #[inline]
    pub const fn new(value: u64) -> Self {
        ListingId(value)
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Display Glyphs
// =============================================================================

/// Category key of a crop listing's placeholder image.
///
/// Persisted as the lowercase key string; unknown keys from older data
/// fall back to [`CropImage::Default`] instead of failing the whole blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CropImage {
    Wheat,
    Tomato,
    Rice,
    Mango,
    #[default]
    #[serde(other)]
    Default,
}

impl CropImage {
    /// Returns the display glyph for this image key.
    pub const fn glyph(&self) -> &'static str {
        match self {
            CropImage::Wheat => "🌾",
            CropImage::Tomato => "🍅",
            CropImage::Rice => "🍚",
            CropImage::Mango => "🥭",
            CropImage::Default => "🌱",
        }
    }
}

/// Category key of an equipment listing's placeholder image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EquipmentImage {
    Tractor,
    Harvester,
    Irrigation,
    Sprayer,
    #[default]
    #[serde(other)]
    Default,
}

impl EquipmentImage {
    /// Returns the display glyph for this image key.
    pub const fn glyph(&self) -> &'static str {
        match self {
            EquipmentImage::Tractor => "🚜",
            EquipmentImage::Harvester => "🌾",
            EquipmentImage::Irrigation => "💧",
            EquipmentImage::Sprayer => "🧴",
            EquipmentImage::Default => "⚙️",
        }
    }
}

// =============================================================================
// Equipment Condition
// =============================================================================

/// The advertised condition of an equipment listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    New,
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
}

impl Condition {
    /// Parses a condition label as it appears on the listing form.
    ///
    /// Returns `None` for unrecognized labels; the form layer decides
    /// whether that is an error or a default.
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "New" => Some(Condition::New),
            "Excellent" => Some(Condition::Excellent),
            "Very Good" => Some(Condition::VeryGood),
            "Good" => Some(Condition::Good),
            "Fair" => Some(Condition::Fair),
            _ => None,
        }
    }

    /// Returns the display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::Excellent => "Excellent",
            Condition::VeryGood => "Very Good",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Equipment Pricing
// =============================================================================

/// Validated dual-pricing of an equipment listing.
///
/// ## Why a Variant Type?
/// The stored record shape is `rental: bool` plus two nullable price
/// strings, and on its own it permits a record with neither price, a
/// listing no buyer could act on. Constructing `Pricing` only through
/// [`Pricing::new`] makes that state unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pricing {
    /// Offered for rent only (rate is a formatted string, e.g. "₹8,000/day").
    Rental { rate: String },
    /// Offered for sale only (formatted price, e.g. "₹5,50,000").
    Purchase { price: String },
    /// Offered both for rent and for sale.
    RentalAndPurchase { rate: String, price: String },
}

impl Pricing {
    /// Builds a pricing variant from the optional rental rate and purchase
    /// price a form (or a persisted record) provides.
    ///
    /// ## Returns
    /// * `Err(ValidationError::PricingRequired)` - both inputs absent
    pub fn new(
        rental_rate: Option<String>,
        purchase_price: Option<String>,
    ) -> Result<Self, ValidationError> {
        match (rental_rate, purchase_price) {
            (Some(rate), Some(price)) => Ok(Pricing::RentalAndPurchase { rate, price }),
            (Some(rate), None) => Ok(Pricing::Rental { rate }),
            (None, Some(price)) => Ok(Pricing::Purchase { price }),
            (None, None) => Err(ValidationError::PricingRequired),
        }
    }

    /// Returns the rental rate, if the equipment is offered for rent.
    pub fn rental_rate(&self) -> Option<&str> {
        match self {
            Pricing::Rental { rate } | Pricing::RentalAndPurchase { rate, .. } => Some(rate),
            Pricing::Purchase { .. } => None,
        }
    }

    /// Returns the purchase price, if the equipment is offered for sale.
    pub fn purchase_price(&self) -> Option<&str> {
        match self {
            Pricing::Purchase { price } | Pricing::RentalAndPurchase { price, .. } => Some(price),
            Pricing::Rental { .. } => None,
        }
    }

    /// Whether the equipment can be rented.
    #[inline]
    pub fn offers_rental(&self) -> bool {
        self.rental_rate().is_some()
    }

    /// Whether the equipment can be bought outright.
    #[inline]
    pub fn offers_purchase(&self) -> bool {
        self.purchase_price().is_some()
    }
}

// =============================================================================
// Crop Listing
// =============================================================================

/// A crop offered for sale on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropListing {
    /// Unique within the crop collection, time-seeded and monotonic.
    pub id: ListingId,

    /// Display name shown on the listing card.
    pub name: String,

    /// Category used by the exact-match type filter (e.g. "Grains").
    #[serde(rename = "type")]
    pub category: String,

    /// Free-text magnitude, e.g. "500 kg".
    pub quantity: String,

    /// Formatted currency string, e.g. "₹2,500".
    pub price: String,

    /// Region string used by the exact-match location filter.
    pub location: String,

    /// Free-text grade, e.g. "Grade A".
    pub quality: String,

    /// Owner display name; matched exactly against the session name
    /// by the dashboard.
    pub farmer: String,

    /// Placeholder image key.
    pub image: CropImage,

    /// Calendar date the listing was created.
    pub date: NaiveDate,
}

/// A crop listing minus its identifier — what a validated form produces
/// and what the store turns into a [`CropListing`] on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropDraft {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub location: String,
    pub quality: String,
    pub farmer: String,
    pub image: CropImage,
    pub date: NaiveDate,
}

impl CropDraft {
    /// Attaches a store-allocated id, completing the record.
    pub fn into_listing(self, id: ListingId) -> CropListing {
        CropListing {
            id,
            name: self.name,
            category: self.category,
            quantity: self.quantity,
            price: self.price,
            location: self.location,
            quality: self.quality,
            farmer: self.farmer,
            image: self.image,
            date: self.date,
        }
    }
}

// =============================================================================
// Equipment Listing
// =============================================================================

/// A piece of farm equipment offered for rent and/or sale.
///
/// Serialization round-trips through [`EquipmentRecord`], the raw persisted
/// shape, so stored data keeps the original `price`/`rental`/`purchase`
/// triple while in-memory code only ever sees validated [`Pricing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EquipmentRecord", into = "EquipmentRecord")]
pub struct EquipmentListing {
    /// Unique within the equipment collection.
    pub id: ListingId,

    /// Display name shown on the listing card.
    pub name: String,

    /// Category used by the exact-match type filter (e.g. "Heavy Equipment").
    pub category: String,

    /// Validated rental/purchase pricing.
    pub pricing: Pricing,

    /// Region string used by the exact-match location filter.
    pub location: String,

    /// Owner display name.
    pub owner: String,

    /// Advertised condition.
    pub condition: Condition,

    /// Placeholder image key.
    pub image: EquipmentImage,

    /// Whether the owner offers delivery.
    pub delivery: bool,
}

/// An equipment listing minus its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentDraft {
    pub name: String,
    pub category: String,
    pub pricing: Pricing,
    pub location: String,
    pub owner: String,
    pub condition: Condition,
    pub image: EquipmentImage,
    pub delivery: bool,
}

impl EquipmentDraft {
    /// Attaches a store-allocated id, completing the record.
    pub fn into_listing(self, id: ListingId) -> EquipmentListing {
        EquipmentListing {
            id,
            name: self.name,
            category: self.category,
            pricing: self.pricing,
            location: self.location,
            owner: self.owner,
            condition: self.condition,
            image: self.image,
            delivery: self.delivery,
        }
    }
}

/// Raw persisted shape of an equipment record.
///
/// Matches the stored JSON field-for-field: `price` is the rental rate (or
/// null), `rental` flags rentability, `purchase` is the purchase price (or
/// null). Deserialization validates the triple into [`Pricing`]; a record
/// with neither price is rejected, which the store treats as corrupt data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentRecord {
    pub id: ListingId,
    pub name: String,
    #[serde(rename = "type")]
    pub category: String,
    pub price: Option<String>,
    pub rental: bool,
    pub purchase: Option<String>,
    pub location: String,
    pub owner: String,
    pub condition: Condition,
    pub image: EquipmentImage,
    #[serde(default)]
    pub delivery: bool,
}

impl TryFrom<EquipmentRecord> for EquipmentListing {
    type Error = ValidationError;

    fn try_from(record: EquipmentRecord) -> Result<Self, Self::Error> {
        // A rental flag without a rate is as unactionable as no price at all.
        let rental_rate = if record.rental { record.price } else { None };
        let pricing = Pricing::new(rental_rate, record.purchase)?;

        Ok(EquipmentListing {
            id: record.id,
            name: record.name,
            category: record.category,
            pricing,
            location: record.location,
            owner: record.owner,
            condition: record.condition,
            image: record.image,
            delivery: record.delivery,
        })
    }
}

impl From<EquipmentListing> for EquipmentRecord {
    fn from(listing: EquipmentListing) -> Self {
        EquipmentRecord {
            id: listing.id,
            name: listing.name,
            category: listing.category,
            price: listing.pricing.rental_rate().map(str::to_owned),
            rental: listing.pricing.offers_rental(),
            purchase: listing.pricing.purchase_price().map(str::to_owned),
            location: listing.location,
            owner: listing.owner,
            condition: listing.condition,
            image: listing.image,
            delivery: listing.delivery,
        }
    }
}

// =============================================================================
// Locale
// =============================================================================

/// Persisted UI locale preference.
///
/// Only the two-letter code is modeled here; the translation tables
/// themselves live with the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// English (the default when the stored key is missing or unrecognized).
    #[default]
    En,
    /// Tamil.
    Ta,
}

impl Locale {
    /// Parses a stored locale code, falling back to the default.
    pub fn from_code(code: &str) -> Self {
        match code {
            "ta" => Locale::Ta,
            _ => Locale::En,
        }
    }

    /// Returns the two-letter code this locale persists as.
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ta => "ta",
        }
    }
}

// =============================================================================
// Delete Policy
// =============================================================================

/// Who may delete a crop listing.
///
/// The demo behavior lets any caller delete any listing by id. Whether a
/// deployment wants that convenience or strict ownership is a judgment
/// call, so the choice is surfaced as configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeletePolicy {
    /// Demo fidelity: any caller may delete any listing.
    #[default]
    AnyCaller,
    /// Hardened: the session name must match the listing's farmer.
    OwnerOnly,
}

// =============================================================================
// Unit Tests
// =============================================================================
