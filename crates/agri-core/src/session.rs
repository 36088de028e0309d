//! # Session
//!
//! The unauthenticated identity claim representing "the current actor".
//!
//! ## What This Is (and Isn't)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Session = Identity Claim                           │
//! │                                                                         │
//! │  Login form ──► Session::from_login(phone)   ── fabricates the demo    │
//! │  Signup form ─► Session::from_signup(form)   ── copies the fields      │
//! │                                                                         │
//! │  NO credential verification of any kind happens. The session exists    │
//! │  to stamp ownership on new listings and to drive the dashboard's       │
//! │  "my listings" count. It is NOT a security boundary.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::forms::SignupForm;

/// Display name fabricated for logins (the login form has no name field).
pub const DEMO_FARMER_NAME: &str = "Demo Farmer";

/// Region fabricated for logins.
pub const DEMO_FARMER_LOCATION: &str = "Karnataka";

/// The current actor's identity claim.
///
/// Persisted under its own storage key; absence of the key means logged out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display name; the dashboard matches listing owners against this
    /// exactly (no case or whitespace normalization).
    pub name: String,

    /// Phone number as typed into the form.
    pub phone: String,

    /// Home region.
    pub location: String,

    /// Optional farm size from the signup form.
    #[serde(rename = "farmSize", skip_serializing_if = "Option::is_none", default)]
    pub farm_size: Option<String>,

    /// When the session was created.
    pub joined: DateTime<Utc>,
}

impl Session {
    /// Fabricates a session from the login form.
    ///
    /// The login form only carries a phone number; name and location are
    /// fixed demo values. `joined` is supplied by the caller so this crate
    /// never reads the clock.
    pub fn from_login(phone: impl Into<String>, joined: DateTime<Utc>) -> Self {
        Session {
            name: DEMO_FARMER_NAME.to_string(),
            phone: phone.into(),
            location: DEMO_FARMER_LOCATION.to_string(),
            farm_size: None,
            joined,
        }
    }

    /// Fabricates a session from the signup form.
    pub fn from_signup(form: SignupForm, joined: DateTime<Utc>) -> Self {
        let farm_size = match form.farm_size.trim() {
            "" => None,
            size => Some(size.to_string()),
        };

        Session {
            name: form.name,
            phone: form.phone,
            location: form.location,
            farm_size,
            joined,
        }
    }
}
