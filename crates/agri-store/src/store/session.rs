//! Session persistence backed by the `currentUser` key.

use std::sync::Arc;

use tracing::{debug, info};

use agri_core::Session;

use crate::error::StoreResult;
use crate::kv::{KvStorage, SESSION_KEY};

/// Persists the current actor's session record.
///
/// Absence of the key means logged out. Unlike the listing stores there is
/// no seed fallback: a corrupt session blob propagates as an error and the
/// caller treats the actor as logged out.
#[derive(Debug)]
pub struct SessionStore {
    kv: Arc<KvStorage>,
}

impl SessionStore {
    pub fn new(kv: Arc<KvStorage>) -> Self {
        SessionStore { kv }
    }

    /// Loads the persisted session, if any.
    pub fn load(&self) -> StoreResult<Option<Session>> {
        let session = self.kv.get_json::<Session>(SESSION_KEY)?;
        debug!(logged_in = session.is_some(), "Loaded session state");
        Ok(session)
    }

    /// Persists a session, replacing any previous one.
    pub fn save(&self, session: &Session) -> StoreResult<()> {
        self.kv.put_json(SESSION_KEY, session)?;
        info!(name = %session.name, "Session saved");
        Ok(())
    }

    /// Clears the persisted session.
    ///
    /// Logging out while logged out is a harmless no-op.
    pub fn clear(&self) -> StoreResult<()> {
        if self.kv.remove(SESSION_KEY)? {
            info!("Session cleared");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    #[test]
    fn test_session_round_trip_and_clear() {
        let dir = tempdir().unwrap();
        let kv = Arc::new(KvStorage::open(dir.path().join("test.redb")).unwrap());
        let store = SessionStore::new(kv);

        assert_eq!(store.load().unwrap(), None);

        let session = Session::from_login("9876543210", Utc::now());
        store.save(&session).unwrap();
        assert_eq!(store.load().unwrap(), Some(session));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);

        // Clearing again stays a no-op.
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_session_propagates() {
        let dir = tempdir().unwrap();
        let kv = Arc::new(KvStorage::open(dir.path().join("test.redb")).unwrap());
        kv.put(SESSION_KEY, "{broken").unwrap();

        let store = SessionStore::new(kv);
        assert!(store.load().is_err());
    }
}
