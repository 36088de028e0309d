//! Locale preference backed by the `lang` key.

use std::sync::Arc;

use tracing::debug;

use agri_core::Locale;

use crate::error::StoreResult;
use crate::kv::{KvStorage, LOCALE_KEY};

/// Persists the UI locale preference.
///
/// The stored value is the bare two-letter code; anything missing or
/// unrecognized reads back as the default locale rather than an error.
#[derive(Debug)]
pub struct LocaleStore {
    kv: Arc<KvStorage>,
}

impl LocaleStore {
    pub fn new(kv: Arc<KvStorage>) -> Self {
        LocaleStore { kv }
    }

    /// Returns the stored locale, defaulting when absent or unrecognized.
    pub fn get(&self) -> StoreResult<Locale> {
        let locale = match self.kv.get(LOCALE_KEY)? {
            Some(code) => Locale::from_code(&code),
            None => Locale::default(),
        };
        debug!(code = locale.code(), "Loaded locale preference");
        Ok(locale)
    }

    /// Stores a locale preference.
    pub fn set(&self, locale: Locale) -> StoreResult<()> {
        self.kv.put(LOCALE_KEY, locale.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_locale_defaults_then_round_trips() {
        let dir = tempdir().unwrap();
        let kv = Arc::new(KvStorage::open(dir.path().join("test.redb")).unwrap());
        let store = LocaleStore::new(kv.clone());

        assert_eq!(store.get().unwrap(), Locale::En);

        store.set(Locale::Ta).unwrap();
        assert_eq!(store.get().unwrap(), Locale::Ta);

        // An unrecognized stored code falls back to the default.
        kv.put(LOCALE_KEY, "fr").unwrap();
        assert_eq!(store.get().unwrap(), Locale::En);
    }
}
