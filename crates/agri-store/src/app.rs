//! # Marketplace Context
//!
//! The single explicit entry point that wires the stores, the current
//! session and the configured policies together.
//!
//! ## Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Marketplace                                      │
//! │                                                                         │
//! │   submit_crop ──► CropForm::into_draft ──► CropStore::add              │
//! │   submit_equipment ──► EquipmentForm::into_draft ──► EquipmentStore    │
//! │   crops / equipment ──► Query::apply over the store snapshot           │
//! │   login / signup / logout ──► SessionStore                             │
//! │   delete_crop ──► DeletePolicy check ──► CropStore::remove             │
//! │   dashboard ──► DashboardStats::for_user                               │
//! │                                                                         │
//! │   Session, policy and store state all live here; every operation       │
//! │   goes through one owned context instead of globals.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use chrono::Utc;
use tracing::{info, warn};

use agri_core::{
    CoreError, CropForm, CropListing, CropQuery, DashboardStats, DeletePolicy, EquipmentForm,
    EquipmentListing, EquipmentQuery, ListingId, Locale, Session, SignupForm,
};

use crate::error::{MarketResult, StoreError, StoreResult};
use crate::kv::KvStorage;
use crate::store::{CropStore, EquipmentStore, LocaleStore, SessionStore};

/// Environment variable overriding the database file location.
pub const DB_PATH_ENV: &str = "AGRI_DB_PATH";

/// Default database file, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "agri_market.redb";

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for opening a [`Marketplace`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database file path.
    pub path: PathBuf,
    /// Who may delete listings.
    pub delete_policy: DeletePolicy,
}

impl StoreConfig {
    /// Configuration pointing at the given database file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            path: path.into(),
            delete_policy: DeletePolicy::default(),
        }
    }

    /// Default configuration, honoring the `AGRI_DB_PATH` override.
    pub fn from_env() -> Self {
        let path = std::env::var(DB_PATH_ENV).unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        StoreConfig::new(path)
    }

    /// Sets the delete policy.
    pub fn with_delete_policy(mut self, policy: DeletePolicy) -> Self {
        self.delete_policy = policy;
        self
    }
}

// =============================================================================
// Marketplace
// =============================================================================

/// The assembled marketplace: listing stores, session state and policies.
#[derive(Debug)]
pub struct Marketplace {
    crops: CropStore,
    equipment: EquipmentStore,
    sessions: SessionStore,
    locales: LocaleStore,
    session: Option<Session>,
    delete_policy: DeletePolicy,
}

impl Marketplace {
    /// Opens the marketplace, loading (and seeding if necessary) both
    /// listing collections and restoring any persisted session.
    pub fn open(config: StoreConfig) -> MarketResult<Self> {
        let kv = std::sync::Arc::new(KvStorage::open(&config.path)?);

        let crops = CropStore::open(kv.clone())?;
        let equipment = EquipmentStore::open(kv.clone())?;
        let sessions = SessionStore::new(kv.clone());
        let locales = LocaleStore::new(kv);

        // A corrupt session record reads as logged out rather than
        // blocking the whole marketplace.
        let session = match sessions.load() {
            Ok(session) => session,
            Err(StoreError::Corrupt { reason, .. }) => {
                warn!(%reason, "Session record corrupt, treating as logged out");
                sessions.clear()?;
                None
            }
            Err(other) => return Err(other.into()),
        };

        info!(
            path = %config.path.display(),
            crops = crops.len(),
            equipment = equipment.len(),
            logged_in = session.is_some(),
            "Marketplace opened"
        );

        Ok(Marketplace {
            crops,
            equipment,
            sessions,
            locales,
            session,
            delete_policy: config.delete_policy,
        })
    }

    // -------------------------------------------------------------------------
    // Browsing
    // -------------------------------------------------------------------------

    /// Returns the crop listings matching a query, newest first.
    pub fn crops(&self, query: &CropQuery) -> Vec<CropListing> {
        query.apply(self.crops.all())
    }

    /// Returns the equipment listings matching a query, newest first.
    pub fn equipment(&self, query: &EquipmentQuery) -> Vec<EquipmentListing> {
        query.apply(self.equipment.all())
    }

    // -------------------------------------------------------------------------
    // Listing mutations
    // -------------------------------------------------------------------------

    /// Validates a crop form and persists the new listing.
    ///
    /// The listing is stamped with the session name (or the anonymous
    /// owner) and today's date.
    pub fn submit_crop(&mut self, form: CropForm) -> MarketResult<CropListing> {
        let farmer = self.session.as_ref().map(|s| s.name.as_str());
        let draft = form.into_draft(farmer, Utc::now().date_naive())?;
        Ok(self.crops.add(draft)?)
    }

    /// Validates an equipment form and persists the new listing.
    pub fn submit_equipment(&mut self, form: EquipmentForm) -> MarketResult<EquipmentListing> {
        let owner = self.session.as_ref().map(|s| s.name.as_str());
        let draft = form.into_draft(owner)?;
        Ok(self.equipment.add(draft)?)
    }

    /// Deletes a crop listing, subject to the configured delete policy.
    pub fn delete_crop(&mut self, id: ListingId) -> MarketResult<CropListing> {
        if self.delete_policy == DeletePolicy::OwnerOnly {
            let session = self.session.as_ref().ok_or(CoreError::NotLoggedIn)?;
            if let Some(listing) = self.crops.get(id) {
                if listing.farmer != session.name {
                    return Err(CoreError::NotOwner { id }.into());
                }
            }
        }
        Ok(self.crops.remove(id)?)
    }

    // -------------------------------------------------------------------------
    // Session
    // -------------------------------------------------------------------------

    /// Logs in with a phone number, fabricating the demo identity.
    ///
    /// No credential verification happens; this is an identity claim only.
    pub fn login(&mut self, phone: impl Into<String>) -> MarketResult<Session> {
        let session = Session::from_login(phone, Utc::now());
        self.sessions.save(&session)?;
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Creates a session from the signup form.
    pub fn signup(&mut self, form: SignupForm) -> MarketResult<Session> {
        let session = Session::from_signup(form, Utc::now());
        self.sessions.save(&session)?;
        self.session = Some(session.clone());
        Ok(session)
    }

    /// Ends the current session. A no-op when already logged out.
    pub fn logout(&mut self) -> MarketResult<()> {
        self.sessions.clear()?;
        self.session = None;
        Ok(())
    }

    /// Returns the current session, if logged in.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    // -------------------------------------------------------------------------
    // Dashboard
    // -------------------------------------------------------------------------

    /// Computes the dashboard figures for the logged-in user.
    ///
    /// ## Returns
    /// * `Err(CoreError::NotLoggedIn)` - no session; the dashboard is the
    ///   one surface that requires one
    pub fn dashboard(&self) -> MarketResult<DashboardStats> {
        let session = self.session.as_ref().ok_or(CoreError::NotLoggedIn)?;
        Ok(DashboardStats::for_user(self.crops.all(), session))
    }

    /// Returns the logged-in user's own crop listings.
    pub fn my_listings(&self) -> MarketResult<Vec<CropListing>> {
        let session = self.session.as_ref().ok_or(CoreError::NotLoggedIn)?;
        Ok(agri_core::user_listings(self.crops.all(), session)
            .into_iter()
            .cloned()
            .collect())
    }

    // -------------------------------------------------------------------------
    // Preferences
    // -------------------------------------------------------------------------

    /// Returns the persisted locale preference.
    pub fn locale(&self) -> StoreResult<Locale> {
        self.locales.get()
    }

    /// Persists a locale preference.
    pub fn set_locale(&self, locale: Locale) -> StoreResult<()> {
        self.locales.set(locale)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarketError;
    use tempfile::tempdir;

    fn open_market(policy: DeletePolicy) -> (tempfile::TempDir, Marketplace) {
        let dir = tempdir().unwrap();
        let config =
            StoreConfig::new(dir.path().join("market.redb")).with_delete_policy(policy);
        let market = Marketplace::open(config).unwrap();
        (dir, market)
    }

    fn crop_form(name: &str) -> CropForm {
        CropForm {
            name: name.to_string(),
            category: "Grains".to_string(),
            quantity: "50".to_string(),
            unit: "kg".to_string(),
            price: "900".to_string(),
            location: "Punjab".to_string(),
            quality: String::new(),
        }
    }

    #[test]
    fn test_open_seeds_both_collections() {
        let (_dir, market) = open_market(DeletePolicy::AnyCaller);
        assert_eq!(market.crops(&CropQuery::all()).len(), 4);
        assert_eq!(market.equipment(&EquipmentQuery::default()).len(), 4);
        assert!(market.session().is_none());
    }

    #[test]
    fn test_submit_crop_stamps_session_owner() {
        let (_dir, mut market) = open_market(DeletePolicy::AnyCaller);

        market.login("9876543210").unwrap();
        let listing = market.submit_crop(crop_form("Green Chillies")).unwrap();
        assert_eq!(listing.farmer, "Demo Farmer");

        // Newest first.
        assert_eq!(market.crops(&CropQuery::all())[0].id, listing.id);
    }

    #[test]
    fn test_submit_crop_without_session_is_anonymous() {
        let (_dir, mut market) = open_market(DeletePolicy::AnyCaller);
        let listing = market.submit_crop(crop_form("Onions")).unwrap();
        assert_eq!(listing.farmer, agri_core::ANONYMOUS_FARMER);
    }

    #[test]
    fn test_any_caller_policy_allows_foreign_delete() {
        let (_dir, mut market) = open_market(DeletePolicy::AnyCaller);
        // Seed listing 1 belongs to Rajesh Kumar; no session at all.
        let removed = market.delete_crop(ListingId::new(1)).unwrap();
        assert_eq!(removed.name, "Organic Wheat");
    }

    #[test]
    fn test_owner_only_policy_rejects_foreign_delete() {
        let (_dir, mut market) = open_market(DeletePolicy::OwnerOnly);

        // Logged out: rejected outright.
        assert!(matches!(
            market.delete_crop(ListingId::new(1)),
            Err(MarketError::Domain(CoreError::NotLoggedIn))
        ));

        // Logged in as someone else: rejected as not the owner.
        market.login("9876543210").unwrap();
        assert!(matches!(
            market.delete_crop(ListingId::new(1)),
            Err(MarketError::Domain(CoreError::NotOwner { .. }))
        ));

        // Own listing: allowed.
        let own = market.submit_crop(crop_form("Okra")).unwrap();
        assert!(market.delete_crop(own.id).is_ok());
    }

    #[test]
    fn test_dashboard_requires_login_and_counts_own_listings() {
        let (_dir, mut market) = open_market(DeletePolicy::AnyCaller);

        assert!(matches!(
            market.dashboard(),
            Err(MarketError::Domain(CoreError::NotLoggedIn))
        ));

        market.login("9876543210").unwrap();
        assert_eq!(market.dashboard().unwrap().active_listings, 0);

        market.submit_crop(crop_form("Okra")).unwrap();
        market.submit_crop(crop_form("Millet")).unwrap();
        let stats = market.dashboard().unwrap();
        assert_eq!(stats.active_listings, 2);
        assert_eq!(stats.total_earnings, agri_core::PLACEHOLDER_EARNINGS);
        assert_eq!(stats.total_sales, agri_core::PLACEHOLDER_SALES);
    }

    #[test]
    fn test_logout_clears_session() {
        let (_dir, mut market) = open_market(DeletePolicy::AnyCaller);
        market.signup(SignupForm {
            name: "Sunita Patil".into(),
            phone: "9000000000".into(),
            location: "Maharashtra".into(),
            farm_size: "5 acres".into(),
        })
        .unwrap();
        assert_eq!(market.session().unwrap().name, "Sunita Patil");

        market.logout().unwrap();
        assert!(market.session().is_none());
        // Logging out twice is harmless.
        market.logout().unwrap();
    }

    #[test]
    fn test_locale_preference_round_trip() {
        let (_dir, market) = open_market(DeletePolicy::AnyCaller);
        assert_eq!(market.locale().unwrap(), Locale::En);
        market.set_locale(Locale::Ta).unwrap();
        assert_eq!(market.locale().unwrap(), Locale::Ta);
    }
}
