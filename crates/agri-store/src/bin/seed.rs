//! # Seed Data Loader
//!
//! Populates the marketplace database with the sample listings.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p agri-store --bin seed
//!
//! # Specify database path
//! cargo run -p agri-store --bin seed -- --db ./data/agri_market.redb
//! ```
//!
//! Seeding is skipped when either collection already holds data; delete the
//! database file to regenerate.

use std::env;
use std::sync::Arc;

use agri_store::kv::{KvStorage, CROPS_KEY, EQUIPMENT_KEY};
use agri_store::seed::{seed_crops, seed_equipment};
use agri_store::DEFAULT_DB_PATH;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from(DEFAULT_DB_PATH);

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Agri Market Seed Data Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Agri Market Seed Data Loader");
    println!("===============================");
    println!("Database: {}", db_path);
    println!();

    let kv = Arc::new(KvStorage::open(&db_path)?);
    println!("✓ Opened database");

    // Check existing data
    let has_crops = kv.get(CROPS_KEY)?.is_some();
    let has_equipment = kv.get(EQUIPMENT_KEY)?.is_some();
    if has_crops || has_equipment {
        println!("⚠ Database already contains listing data");
        println!("  Skipping seed to avoid clobbering listings.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let crops = seed_crops();
    kv.put_json(CROPS_KEY, &crops)?;
    println!("✓ Seeded {} crop listings", crops.len());

    let equipment = seed_equipment();
    kv.put_json(EQUIPMENT_KEY, &equipment)?;
    println!("✓ Seeded {} equipment listings", equipment.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
