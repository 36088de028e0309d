//! # agri-core: Pure Business Logic for Agri Market
//!
//! This crate is the **heart** of the Agri Market demo. It contains all
//! business logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Agri Market Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation Adapter (external)                │   │
//! │  │    Listing cards ──► Empty state ──► Loading indicator          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ ViewState<T>                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ agri-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   query   │  │   stats   │  │ validation│  │   │
//! │  │   │  Listing  │  │ CropQuery │  │ Dashboard │  │   rules   │  │   │
//! │  │   │  Pricing  │  │ EquipQry  │  │  counts   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    agri-store (Storage Layer)                   │   │
//! │  │            redb key-value blobs, stores, seed data              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CropListing, EquipmentListing, Pricing, etc.)
//! - [`forms`] - Submitted form payloads and their validated conversion
//! - [`query`] - Pure filter/search evaluation over listing collections
//! - [`stats`] - Derived dashboard aggregates
//! - [`session`] - The unauthenticated identity claim
//! - [`view`] - Presentation adapter contract and notifications
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Filtering is a function of (collection, criteria)
//! 2. **No I/O**: Database, network, file system, clock access is FORBIDDEN
//! 3. **Validated Construction**: Equipment pricing cannot be built without
//!    at least one price (rental or purchase)
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use agri_core::query::CropQuery;
//!
//! let query = CropQuery {
//!     category: Some("Grains".to_string()),
//!     location: None,
//!     search: None,
//! };
//!
//! // Pure narrowing: no listings in, no listings out
//! assert!(query.apply(&[]).is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod forms;
pub mod query;
pub mod session;
pub mod stats;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use agri_core::CropListing` instead of
// `use agri_core::types::CropListing`

pub use error::{CoreError, CoreResult, ValidationError};
pub use forms::{CropForm, EquipmentForm, SignupForm};
pub use query::{Availability, CropQuery, EquipmentQuery};
pub use session::Session;
pub use stats::{user_listings, DashboardStats, PLACEHOLDER_EARNINGS, PLACEHOLDER_SALES};
pub use types::*;
pub use view::{ListingView, Notification, Severity, ViewState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Owner display name stamped on crop listings submitted without a session.
///
/// ## Why a constant?
/// The marketplace is a demo: anyone may submit the sell form, and listings
/// created while logged out still need an owner string for display and for
/// the dashboard's exact-match ownership count.
pub const ANONYMOUS_FARMER: &str = "Anonymous Farmer";

/// Owner display name stamped on equipment listings submitted without a session.
pub const ANONYMOUS_OWNER: &str = "Anonymous Owner";

/// Maximum length of a listing name.
///
/// ## Business Reason
/// Prevents runaway card titles; names are rendered untruncated, so the
/// limit lives here.
pub const MAX_NAME_LEN: usize = 120;

/// Maximum length of a free-text search query.
pub const MAX_SEARCH_LEN: usize = 100;
