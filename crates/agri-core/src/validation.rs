//! # Validation Module
//!
//! Input validation for submitted marketplace forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form payload (this module)                                   │
//! │  ├── Required fields, length limits, numeric amounts                   │
//! │  └── Runs before any record is built                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Type construction (types.rs)                                 │
//! │  ├── Pricing factory rejects price-less equipment                      │
//! │  └── Persisted records re-validate on deserialization                  │
//! │                                                                         │
//! │  A field that fails here is rejected with a typed error, never         │
//! │  silently defaulted to a placeholder value.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_NAME_LEN, MAX_SEARCH_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required free-text field.
///
/// ## Rules
/// - Must not be empty after trimming
///
/// ## Returns
/// The trimmed value.
pub fn validate_required(field: &'static str, value: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    Ok(value.to_string())
}

/// Validates a listing name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most [`MAX_NAME_LEN`] characters
///
/// ## Example
/// ```rust
/// use agri_core::validation::validate_listing_name;
///
/// assert!(validate_listing_name("Organic Wheat").is_ok());
/// assert!(validate_listing_name("").is_err());
/// ```
pub fn validate_listing_name(name: &str) -> ValidationResult<String> {
    let name = validate_required("name", name)?;

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LEN,
        });
    }

    Ok(name)
}

/// Validates a free-text search query.
///
/// ## Rules
/// - Can be empty (no restriction)
/// - Maximum [`MAX_SEARCH_LEN`] characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::TooLong {
            field: "query",
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a form amount field (quantity, price).
///
/// Forms submit amounts as digit strings; the stored records keep them as
/// formatted display strings, so validation parses without reformatting.
///
/// ## Rules
/// - Must parse as an unsigned integer
/// - Must be positive (> 0)
///
/// ## Returns
/// The parsed amount.
pub fn validate_amount(field: &'static str, value: &str) -> ValidationResult<u64> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }

    let amount: u64 = value.parse().map_err(|_| ValidationError::InvalidFormat {
        field,
        reason: "must be a whole number".to_string(),
    })?;

    if amount == 0 {
        return Err(ValidationError::MustBePositive { field });
    }

    Ok(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
