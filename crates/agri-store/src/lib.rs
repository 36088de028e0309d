//! # agri-store: Storage Layer for Agri Market
//!
//! This crate owns all persistence: the embedded key-value database, the
//! per-key stores, the seed data and the [`Marketplace`](app::Marketplace)
//! context that assembles everything.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Agri Market Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 agri-core (Pure Business Logic)                 │   │
//! │  │          types, queries, forms, stats — no I/O at all           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ drafts in, listings out               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ agri-store (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │    kv     │  │   store   │  │   seed    │  │    app    │  │   │
//! │  │   │   redb    │  │ Crop/Equip│  │  sample   │  │Marketplace│  │   │
//! │  │   │  wrapper  │  │ Session.. │  │  records  │  │  context  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │                     agri_market.redb (single file)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod error;
pub mod kv;
pub mod seed;
pub mod store;

pub use app::{Marketplace, StoreConfig, DB_PATH_ENV, DEFAULT_DB_PATH};
pub use error::{MarketError, MarketResult, StoreError, StoreResult};
pub use kv::KvStorage;
pub use store::{CropStore, EquipmentStore, LocaleStore, SessionStore};
