//! # Form Payloads
//!
//! The submitted form shapes for the three mutation entry points (sell a
//! crop, list equipment, sign up) and their validated conversion into
//! domain records.
//!
//! ## Conversion Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form → Draft → Listing                               │
//! │                                                                         │
//! │  CropForm (raw strings, as submitted)                                  │
//! │       │                                                                 │
//! │       ▼ into_draft(farmer, today)  ← validation happens here           │
//! │  CropDraft (clean fields, no id yet)                                   │
//! │       │                                                                 │
//! │       ▼ CropStore::add  ← id allocation + persistence                  │
//! │  CropListing (complete record)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The conversion takes `today` as a parameter rather than reading the
//! clock: this crate stays pure, and the storage layer supplies the date.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::types::{Condition, CropDraft, CropImage, EquipmentDraft, EquipmentImage, Pricing};
use crate::validation::{validate_amount, validate_listing_name, validate_required};
use crate::{ANONYMOUS_FARMER, ANONYMOUS_OWNER};

// =============================================================================
// Crop Form
// =============================================================================

/// Raw fields of the "sell your crop" form.
#[derive(Debug, Clone, Default)]
pub struct CropForm {
    pub name: String,
    pub category: String,
    /// Numeric magnitude, combined with `unit` into the stored string.
    pub quantity: String,
    /// Unit label, e.g. "kg" or "quintal".
    pub unit: String,
    /// Numeric amount; stored formatted as "₹{amount}".
    pub price: String,
    pub location: String,
    /// Free-text grade; defaults to "Standard" when left blank.
    pub quality: String,
}

impl CropForm {
    /// Validates the form and builds a draft listing.
    ///
    /// ## Arguments
    /// * `farmer` - Session display name; `None` stamps the anonymous owner
    /// * `today` - Listing date (supplied by the caller, not read here)
    pub fn into_draft(
        self,
        farmer: Option<&str>,
        today: NaiveDate,
    ) -> Result<CropDraft, ValidationError> {
        let name = validate_listing_name(&self.name)?;
        let category = validate_required("type", &self.category)?;
        let quantity = validate_amount("quantity", &self.quantity)?;
        let unit = validate_required("unit", &self.unit)?;
        let price = validate_amount("price", &self.price)?;
        let location = validate_required("location", &self.location)?;

        let quality = match self.quality.trim() {
            "" => "Standard".to_string(),
            grade => grade.to_string(),
        };

        Ok(CropDraft {
            name,
            category,
            quantity: format!("{quantity} {unit}"),
            price: format!("₹{price}"),
            location,
            quality,
            farmer: farmer.unwrap_or(ANONYMOUS_FARMER).to_string(),
            image: CropImage::Default,
            date: today,
        })
    }
}

// =============================================================================
// Equipment Form
// =============================================================================

/// Raw fields of the "list your equipment" form.
///
/// Either price field may be left blank, but not both — the [`Pricing`]
/// factory enforces that during conversion.
#[derive(Debug, Clone, Default)]
pub struct EquipmentForm {
    pub name: String,
    pub category: String,
    /// Daily rental amount; blank means not offered for rent.
    pub rental_price: String,
    /// Outright purchase amount; blank means not offered for sale.
    pub purchase_price: String,
    pub location: String,
    /// Condition label; defaults to "Good" when left blank.
    pub condition: String,
    pub delivery: bool,
}

impl EquipmentForm {
    /// Validates the form and builds a draft listing.
    ///
    /// ## Arguments
    /// * `owner` - Session display name; `None` stamps the anonymous owner
    pub fn into_draft(self, owner: Option<&str>) -> Result<EquipmentDraft, ValidationError> {
        let name = validate_listing_name(&self.name)?;
        let category = validate_required("type", &self.category)?;
        let location = validate_required("location", &self.location)?;

        let rental_rate = match self.rental_price.trim() {
            "" => None,
            raw => Some(format!("₹{}/day", validate_amount("rental price", raw)?)),
        };
        let purchase_price = match self.purchase_price.trim() {
            "" => None,
            raw => Some(format!("₹{}", validate_amount("purchase price", raw)?)),
        };
        let pricing = Pricing::new(rental_rate, purchase_price)?;

        let condition = match self.condition.trim() {
            "" => Condition::Good,
            label => {
                Condition::parse(label).ok_or_else(|| ValidationError::InvalidFormat {
                    field: "condition",
                    reason: format!("unknown condition '{label}'"),
                })?
            }
        };

        Ok(EquipmentDraft {
            name,
            category,
            pricing,
            location,
            owner: owner.unwrap_or(ANONYMOUS_OWNER).to_string(),
            condition,
            image: EquipmentImage::Default,
            delivery: self.delivery,
        })
    }
}

// =============================================================================
// Signup Form
// =============================================================================

/// Raw fields of the signup form; consumed by
/// [`Session::from_signup`](crate::session::Session::from_signup).
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub phone: String,
    pub location: String,
    /// Optional farm size, e.g. "5 acres".
    pub farm_size: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
    }

    #[test]
    fn test_crop_form_builds_formatted_fields() {
        let form = CropForm {
            name: "Organic Wheat".into(),
            category: "Grains".into(),
            quantity: "500".into(),
            unit: "kg".into(),
            price: "2500".into(),
            location: "Karnataka".into(),
            quality: "".into(),
        };

        let draft = form.into_draft(Some("Rajesh Kumar"), sample_date()).unwrap();
        assert_eq!(draft.quantity, "500 kg");
        assert_eq!(draft.price, "₹2500");
        assert_eq!(draft.quality, "Standard");
        assert_eq!(draft.farmer, "Rajesh Kumar");
        assert_eq!(draft.image, CropImage::Default);
        assert_eq!(draft.date, sample_date());
    }

    #[test]
    fn test_crop_form_without_session_is_anonymous() {
        let form = CropForm {
            name: "Tomatoes".into(),
            category: "Vegetables".into(),
            quantity: "20".into(),
            unit: "kg".into(),
            price: "400".into(),
            location: "Maharashtra".into(),
            quality: "Fresh".into(),
        };

        let draft = form.into_draft(None, sample_date()).unwrap();
        assert_eq!(draft.farmer, ANONYMOUS_FARMER);
    }

    #[test]
    fn test_crop_form_rejects_missing_fields() {
        let form = CropForm {
            name: "".into(),
            ..CropForm::default()
        };
        assert!(form.into_draft(None, sample_date()).is_err());

        let form = CropForm {
            name: "Wheat".into(),
            category: "Grains".into(),
            quantity: "abc".into(),
            unit: "kg".into(),
            price: "100".into(),
            location: "Punjab".into(),
            quality: "".into(),
        };
        assert!(matches!(
            form.into_draft(None, sample_date()),
            Err(ValidationError::InvalidFormat { field: "quantity", .. })
        ));
    }

    #[test]
    fn test_equipment_form_pricing_variants() {
        let base = EquipmentForm {
            name: "Sprayer".into(),
            category: "Crop Protection".into(),
            location: "Tamil Nadu".into(),
            condition: "".into(),
            delivery: true,
            ..EquipmentForm::default()
        };

        // Rental only
        let form = EquipmentForm {
            rental_price: "800".into(),
            ..base.clone()
        };
        let draft = form.into_draft(Some("Agro Tools")).unwrap();
        assert_eq!(draft.pricing, Pricing::Rental { rate: "₹800/day".into() });
        assert_eq!(draft.condition, Condition::Good); // blank defaults
        assert!(draft.delivery);

        // Both prices
        let form = EquipmentForm {
            rental_price: "800".into(),
            purchase_price: "45000".into(),
            condition: "Very Good".into(),
            ..base.clone()
        };
        let draft = form.into_draft(None).unwrap();
        assert_eq!(draft.pricing.purchase_price(), Some("₹45000"));
        assert_eq!(draft.condition, Condition::VeryGood);
        assert_eq!(draft.owner, ANONYMOUS_OWNER);

        // Neither price
        let form = base.clone();
        assert!(matches!(
            form.into_draft(None),
            Err(ValidationError::PricingRequired)
        ));
    }

    #[test]
    fn test_equipment_form_rejects_unknown_condition() {
        let form = EquipmentForm {
            name: "Tractor".into(),
            category: "Heavy Equipment".into(),
            rental_price: "8000".into(),
            location: "Karnataka".into(),
            condition: "Rusty".into(),
            ..EquipmentForm::default()
        };
        assert!(matches!(
            form.into_draft(None),
            Err(ValidationError::InvalidFormat { field: "condition", .. })
        ));
    }
}
