//! # Error Types
//!
//! Domain-specific error types for agri-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  agri-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  agri-store errors (separate crate)                                    │
//! │  └── StoreError       - Storage operation failures                     │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → Notification → User  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (listing id, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Every user-visible failure maps to a dismissible notification,
//!    never a panic

use thiserror::Error;

use crate::types::ListingId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations. They should be caught
/// and translated to notifications, not shown raw.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An operation that needs an identity was attempted while logged out.
    ///
    /// ## When This Occurs
    /// - Deleting a listing under `DeletePolicy::OwnerOnly` with no session
    #[error("Please login to perform this action")]
    NotLoggedIn,

    /// The caller does not own the listing it tried to mutate.
    ///
    /// ## When This Occurs
    /// Only under `DeletePolicy::OwnerOnly`; the demo-fidelity default
    /// (`AnyCaller`) never produces this.
    #[error("Listing {id} belongs to another farmer")]
    NotOwner { id: ListingId },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a submitted form doesn't meet requirements.
/// Used for early validation before a listing record is built.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    /// A numeric field must be a positive amount.
    #[error("{field} must be a positive amount")]
    MustBePositive { field: &'static str },

    /// Invalid format (e.g., unparseable number, unknown condition).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: String,
    },

    /// Equipment was submitted with neither a rental rate nor a purchase
    /// price. The `Pricing` factory rejects this, so no record with zero
    /// actionable prices can exist.
    #[error("at least one of rental or purchase price is required")]
    PricingRequired,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
