//! # Presentation Adapter Contract & Notifications
//!
//! The core never renders anything itself; it hands a [`ViewState`] to
//! whatever [`ListingView`] implementation the embedding application
//! provides (a DOM card grid, a console table, a test recorder).
//!
//! ## The Three States
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      ViewState Lifecycle                                │
//! │                                                                         │
//! │  Store not opened yet ──────────► Loading   (spinner)                  │
//! │  Store loaded, query empty ─────► Empty     (empty-state indicator)    │
//! │  Store loaded, records found ───► Listings  (one card per record)      │
//! │                                                                         │
//! │  Exactly these three; the adapter never sees a fourth.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! User-visible failures travel through [`Notification`] values — the
//! non-blocking, dismissible, severity-tagged channel — never through
//! panics or silently dropped operations.

// =============================================================================
// View State
// =============================================================================

/// What the presentation adapter should currently show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState<'a, T> {
    /// Data has not been loaded yet.
    Loading,
    /// Data is loaded and the (possibly filtered) collection is empty.
    Empty,
    /// One card per record, in collection order.
    Listings(&'a [T]),
}

impl<'a, T> ViewState<'a, T> {
    /// Classifies a loaded collection: empty slice → [`ViewState::Empty`],
    /// otherwise [`ViewState::Listings`].
    pub fn loaded(records: &'a [T]) -> Self {
        if records.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Listings(records)
        }
    }
}

/// A renderer of listing collections — the external presentation adapter.
pub trait ListingView<T> {
    /// Renders the given state, replacing whatever was shown before.
    fn render(&mut self, state: ViewState<'_, T>);
}

// =============================================================================
// Notifications
// =============================================================================

/// Severity tag of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A non-blocking, dismissible message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    /// Builds an informational notification.
    pub fn info(message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    /// Builds a success notification.
    pub fn success(message: impl Into<String>) -> Self {
        Notification {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// Builds an error notification from any displayable error.
    pub fn error(err: impl std::fmt::Display) -> Self {
        Notification {
            severity: Severity::Error,
            message: err.to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loaded_classifies_empty_and_nonempty() {
        let none: &[u8] = &[];
        assert_eq!(ViewState::loaded(none), ViewState::Empty);

        let some = [1u8, 2];
        assert_eq!(ViewState::loaded(&some), ViewState::Listings(&some));
    }

    #[test]
    fn test_notification_constructors() {
        assert_eq!(Notification::success("Crop listed successfully!").severity, Severity::Success);
        assert_eq!(
            Notification::error("boom").message,
            "boom"
        );
    }
}
