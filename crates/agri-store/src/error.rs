//! # Storage Error Types
//!
//! Error types for storage and marketplace operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  redb error (database / transaction / table)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MarketError ← Joins domain errors from agri-core                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Notification (severity: error) shown to the user                      │
//! │                                                                         │
//! │  A silent no-op would conflate "nothing to do" with "this failed";     │
//! │  here every outcome is a distinct variant.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use agri_core::{CoreError, ListingId};

// =============================================================================
// Store Error
// =============================================================================

/// Storage operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Listing not found in its collection.
    ///
    /// ## When This Occurs
    /// - Deleting by an id that is absent from the collection
    #[error("{entity} not found: {id}")]
    NotFound {
        entity: &'static str,
        id: ListingId,
    },

    /// A persisted blob failed to deserialize.
    ///
    /// ## When This Occurs
    /// - Hand-edited or truncated stored data
    /// - A record shape violation (e.g. equipment with no price at all)
    ///
    /// Listing stores recover from this by falling back to the seed data;
    /// it only propagates for the session record, where reseeding makes
    /// no sense and "logged out" is the safe interpretation.
    #[error("Corrupt data under key '{key}': {reason}")]
    Corrupt { key: &'static str, reason: String },

    /// The underlying key-value database failed.
    ///
    /// ## When This Occurs
    /// - Database file can't be created or opened
    /// - File permissions issue, disk full
    /// - Another process holds the file lock
    #[error("Storage failure: {0}")]
    Storage(#[from] redb::Error),

    /// Serializing a collection for persistence failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: &'static str, id: ListingId) -> Self {
        StoreError::NotFound { entity, id }
    }

    /// Creates a Corrupt error for a given storage key.
    pub fn corrupt(key: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Corrupt {
            key,
            reason: reason.into(),
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Market Error
// =============================================================================

/// Errors surfaced by the [`Marketplace`](crate::app::Marketplace) entry
/// points: either a domain rule rejected the operation or storage failed.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error(transparent)]
    Domain(#[from] CoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<agri_core::ValidationError> for MarketError {
    fn from(err: agri_core::ValidationError) -> Self {
        MarketError::Domain(CoreError::Validation(err))
    }
}

/// Result type for marketplace operations.
pub type MarketResult<T> = Result<T, MarketError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = StoreError::not_found("Crop listing", ListingId::new(7));
        assert_eq!(err.to_string(), "Crop listing not found: 7");
    }

    #[test]
    fn test_validation_flows_into_market_error() {
        let err: MarketError = agri_core::ValidationError::PricingRequired.into();
        assert!(matches!(err, MarketError::Domain(CoreError::Validation(_))));
    }
}
