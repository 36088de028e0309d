//! # Marketplace Console Walkthrough
//!
//! Exercises the full marketplace flow from a terminal: browse, filter,
//! search, log in, list a crop, check the dashboard, delete, log out.
//!
//! ## Usage
//! ```bash
//! cargo run -p agri-store --bin market-demo
//!
//! # Point at a different database file
//! AGRI_DB_PATH=./data/demo.redb cargo run -p agri-store --bin market-demo
//! ```
//!
//! The console card renderer here is one [`ListingView`] implementation;
//! a GUI would provide another against the same contract.

use tracing_subscriber::EnvFilter;

use agri_core::{
    CropForm, CropListing, CropQuery, EquipmentListing, EquipmentQuery, ListingView, Notification,
    Severity, ViewState,
};
use agri_store::{Marketplace, StoreConfig};

/// Renders listing collections as console cards.
struct ConsoleView {
    heading: &'static str,
}

impl ConsoleView {
    fn new(heading: &'static str) -> Self {
        ConsoleView { heading }
    }
}

impl ListingView<CropListing> for ConsoleView {
    fn render(&mut self, state: ViewState<'_, CropListing>) {
        println!();
        println!("── {} ──", self.heading);
        match state {
            ViewState::Loading => println!("  (loading...)"),
            ViewState::Empty => println!("  No listings found."),
            ViewState::Listings(crops) => {
                for crop in crops {
                    println!(
                        "  {} {} — {} · {} · {} · {} [{}]",
                        crop.image.glyph(),
                        crop.name,
                        crop.quantity,
                        crop.price,
                        crop.location,
                        crop.farmer,
                        crop.category,
                    );
                }
            }
        }
    }
}

impl ListingView<EquipmentListing> for ConsoleView {
    fn render(&mut self, state: ViewState<'_, EquipmentListing>) {
        println!();
        println!("── {} ──", self.heading);
        match state {
            ViewState::Loading => println!("  (loading...)"),
            ViewState::Empty => println!("  No listings found."),
            ViewState::Listings(machines) => {
                for machine in machines {
                    let rate = machine.pricing.rental_rate().unwrap_or("not for rent");
                    let price = machine.pricing.purchase_price().unwrap_or("not for sale");
                    println!(
                        "  {} {} — rent {} · buy {} · {} · {}",
                        machine.image.glyph(),
                        machine.name,
                        rate,
                        price,
                        machine.condition,
                        machine.location,
                    );
                }
            }
        }
    }
}

fn notify(notification: &Notification) {
    let tag = match notification.severity {
        Severity::Info => "ℹ",
        Severity::Success => "✓",
        Severity::Error => "✗",
    };
    println!("{} {}", tag, notification.message);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,agri_core=debug,agri_store=debug"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Nothing is loaded yet: the view shows its loading state.
    ConsoleView::new("Crop Listings").render(ViewState::<CropListing>::Loading);

    let mut market = Marketplace::open(StoreConfig::from_env())?;

    // Browse everything.
    let crops = market.crops(&CropQuery::all());
    ConsoleView::new("Crop Listings").render(ViewState::loaded(&crops));

    let machines = market.equipment(&EquipmentQuery::default());
    ConsoleView::new("Equipment Listings").render(ViewState::loaded(&machines));

    // Narrow by category, then by search term.
    let grains = market.crops(&CropQuery {
        category: Some("Grains".to_string()),
        ..CropQuery::default()
    });
    ConsoleView::new("Grains Only").render(ViewState::loaded(&grains));

    let rice = market.crops(&CropQuery::search("rice")?);
    ConsoleView::new("Search: rice").render(ViewState::loaded(&rice));

    // Log in and list a crop of our own.
    let session = market.login("9876543210")?;
    notify(&Notification::success(format!("Welcome, {}!", session.name)));

    let listing = market.submit_crop(CropForm {
        name: "Green Chillies".to_string(),
        category: "Vegetables".to_string(),
        quantity: "40".to_string(),
        unit: "kg".to_string(),
        price: "1200".to_string(),
        location: "Karnataka".to_string(),
        quality: String::new(),
    })?;
    notify(&Notification::success("Crop listed successfully!"));

    // The dashboard reflects the new listing.
    let stats = market.dashboard()?;
    println!();
    println!("── Dashboard ──");
    println!("  Active listings: {}", stats.active_listings);
    println!("  Total earnings:  {}", stats.total_earnings);
    println!("  Total sales:     {}", stats.total_sales);

    // Clean up our listing and log out.
    market.delete_crop(listing.id)?;
    notify(&Notification::success("Listing deleted successfully"));

    market.logout()?;
    notify(&Notification::info("Logged out"));

    Ok(())
}
