//! # Seed Data
//!
//! The sample listings a fresh (or corrupted) store starts from.
//!
//! ## Why Seed at All?
//! The marketplace is a demo: an empty grid makes nothing explorable. Both
//! collections therefore bootstrap with four recognizable records apiece,
//! so a first open always has something to browse, filter and search.

use chrono::NaiveDate;

use agri_core::{
    Condition, CropImage, CropListing, EquipmentImage, EquipmentListing, ListingId, Pricing,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed dates are compile-time constants; the unwrap cannot fire.
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Returns the four sample crop listings, newest first.
pub fn seed_crops() -> Vec<CropListing> {
    vec![
        CropListing {
            id: ListingId::new(1),
            name: "Organic Wheat".to_string(),
            category: "Grains".to_string(),
            quantity: "500 kg".to_string(),
            price: "₹2,500".to_string(),
            location: "Karnataka".to_string(),
            quality: "Grade A".to_string(),
            farmer: "Rajesh Kumar".to_string(),
            image: CropImage::Wheat,
            date: date(2024, 1, 15),
        },
        CropListing {
            id: ListingId::new(2),
            name: "Fresh Tomatoes".to_string(),
            category: "Vegetables".to_string(),
            quantity: "200 kg".to_string(),
            price: "₹1,800".to_string(),
            location: "Maharashtra".to_string(),
            quality: "Fresh Harvest".to_string(),
            farmer: "Sunita Patil".to_string(),
            image: CropImage::Tomato,
            date: date(2024, 1, 14),
        },
        CropListing {
            id: ListingId::new(3),
            name: "Basmati Rice".to_string(),
            category: "Grains".to_string(),
            quantity: "1000 kg".to_string(),
            price: "₹4,200".to_string(),
            location: "Punjab".to_string(),
            quality: "Premium".to_string(),
            farmer: "Harpreet Singh".to_string(),
            image: CropImage::Rice,
            date: date(2024, 1, 13),
        },
        CropListing {
            id: ListingId::new(4),
            name: "Alphonso Mangoes".to_string(),
            category: "Fruits".to_string(),
            quantity: "300 kg".to_string(),
            price: "₹3,500".to_string(),
            location: "Maharashtra".to_string(),
            quality: "Export Quality".to_string(),
            farmer: "Vikram Desai".to_string(),
            image: CropImage::Mango,
            date: date(2024, 1, 12),
        },
    ]
}

/// Returns the four sample equipment listings, newest first.
///
/// Every seed machine offers both rental and purchase; the availability
/// filter only becomes selective once rental-only or purchase-only records
/// are added.
pub fn seed_equipment() -> Vec<EquipmentListing> {
    vec![
        EquipmentListing {
            id: ListingId::new(1),
            name: "Tractor".to_string(),
            category: "Heavy Equipment".to_string(),
            pricing: Pricing::RentalAndPurchase {
                rate: "₹8,000/day".to_string(),
                price: "₹5,50,000".to_string(),
            },
            location: "Karnataka".to_string(),
            owner: "Farm Equipment Rentals".to_string(),
            condition: Condition::Excellent,
            image: EquipmentImage::Tractor,
            delivery: false,
        },
        EquipmentListing {
            id: ListingId::new(2),
            name: "Harvester".to_string(),
            category: "Harvesting".to_string(),
            pricing: Pricing::RentalAndPurchase {
                rate: "₹12,000/day".to_string(),
                price: "₹8,75,000".to_string(),
            },
            location: "Punjab".to_string(),
            owner: "Green Fields Co.".to_string(),
            condition: Condition::Good,
            image: EquipmentImage::Harvester,
            delivery: false,
        },
        EquipmentListing {
            id: ListingId::new(3),
            name: "Irrigation System".to_string(),
            category: "Water Management".to_string(),
            pricing: Pricing::RentalAndPurchase {
                rate: "₹2,500/day".to_string(),
                price: "₹1,20,000".to_string(),
            },
            location: "Maharashtra".to_string(),
            owner: "Water Solutions Ltd.".to_string(),
            condition: Condition::New,
            image: EquipmentImage::Irrigation,
            delivery: false,
        },
        EquipmentListing {
            id: ListingId::new(4),
            name: "Sprayer".to_string(),
            category: "Crop Protection".to_string(),
            pricing: Pricing::RentalAndPurchase {
                rate: "₹800/day".to_string(),
                price: "₹45,000".to_string(),
            },
            location: "Tamil Nadu".to_string(),
            owner: "Agro Tools".to_string(),
            condition: Condition::VeryGood,
            image: EquipmentImage::Sprayer,
            delivery: false,
        },
    ]
}
