//! # Key-Value Storage
//!
//! The durable keyed-blob layer every store writes through.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              redb database: one `storage` table                         │
//! │                                                                         │
//! │   key             │  value (JSON string)                                │
//! │  ─────────────────┼──────────────────────────────────────────────────   │
//! │   cropsData       │  [ {crop record}, ... ]      newest first           │
//! │   equipmentData   │  [ {equipment record}, ... ] newest first           │
//! │   currentUser     │  { session record }          absent = logged out    │
//! │   lang            │  "en" | "ta"                 absent = default       │
//! │                                                                         │
//! │  Whole-value writes only: a mutation re-persists its entire            │
//! │  collection in one transaction, so the in-memory state always equals   │
//! │  the last committed snapshot.                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! redb holds an exclusive file lock, so a second process fails fast
//! instead of silently clobbering writes.

use std::path::{Path, PathBuf};

use redb::{Database, ReadableTable, TableDefinition};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Key of the persisted crop collection.
pub const CROPS_KEY: &str = "cropsData";

/// Key of the persisted equipment collection.
pub const EQUIPMENT_KEY: &str = "equipmentData";

/// Key of the persisted session record.
pub const SESSION_KEY: &str = "currentUser";

/// Key of the persisted locale code.
pub const LOCALE_KEY: &str = "lang";

// The single keyed-blob table.
const STORAGE: TableDefinition<&str, &str> = TableDefinition::new("storage");

/// The embedded key-value database.
///
/// ## Usage
/// ```rust,ignore
/// let kv = KvStorage::open("./agri_market.redb")?;
/// kv.put_json(CROPS_KEY, &crops)?;
/// let crops: Option<Vec<CropListing>> = kv.get_json(CROPS_KEY)?;
/// ```
pub struct KvStorage {
    db: Database,
    path: PathBuf,
}

impl std::fmt::Debug for KvStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KvStorage").field("path", &self.path).finish()
    }
}

impl KvStorage {
    /// Opens (or creates) the database at the given path.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let db = Database::create(&path).map_err(|e| StoreError::Storage(e.into()))?;

        // Ensure the table exists so first reads don't fail.
        let write_txn = db
            .begin_write()
            .map_err(|e| StoreError::Storage(e.into()))?;
        write_txn
            .open_table(STORAGE)
            .map_err(|e| StoreError::Storage(e.into()))?;
        write_txn
            .commit()
            .map_err(|e| StoreError::Storage(e.into()))?;

        debug!(path = %path.display(), "Opened key-value storage");

        Ok(KvStorage { db, path })
    }

    /// Returns the database file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the raw string value under a key.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - key present
    /// * `Ok(None)` - key absent
    pub fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let read_txn = self
            .db
            .begin_read()
            .map_err(|e| StoreError::Storage(e.into()))?;
        let table = read_txn
            .open_table(STORAGE)
            .map_err(|e| StoreError::Storage(e.into()))?;

        let value = table
            .get(key)
            .map_err(|e| StoreError::Storage(e.into()))?
            .map(|guard| guard.value().to_string());

        Ok(value)
    }

    /// Writes a raw string value under a key, replacing any previous value.
    pub fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StoreError::Storage(e.into()))?;
        {
            let mut table = write_txn
                .open_table(STORAGE)
                .map_err(|e| StoreError::Storage(e.into()))?;
            table
                .insert(key, value)
                .map_err(|e| StoreError::Storage(e.into()))?;
        }
        write_txn
            .commit()
            .map_err(|e| StoreError::Storage(e.into()))?;

        debug!(key, bytes = value.len(), "Persisted value");
        Ok(())
    }

    /// Removes a key.
    ///
    /// ## Returns
    /// Whether the key was present.
    pub fn remove(&self, key: &str) -> StoreResult<bool> {
        let write_txn = self
            .db
            .begin_write()
            .map_err(|e| StoreError::Storage(e.into()))?;
        let removed;
        {
            let mut table = write_txn
                .open_table(STORAGE)
                .map_err(|e| StoreError::Storage(e.into()))?;
            removed = table
                .remove(key)
                .map_err(|e| StoreError::Storage(e.into()))?
                .is_some();
        }
        write_txn
            .commit()
            .map_err(|e| StoreError::Storage(e.into()))?;

        if removed {
            debug!(key, "Removed value");
        }
        Ok(removed)
    }

    /// Reads and deserializes the JSON blob under a key.
    ///
    /// ## Returns
    /// * `Ok(Some(value))` - key present and well-formed
    /// * `Ok(None)` - key absent
    /// * `Err(StoreError::Corrupt)` - key present but the blob doesn't
    ///   deserialize; callers decide whether that is recoverable
    pub fn get_json<T: DeserializeOwned>(&self, key: &'static str) -> StoreResult<Option<T>> {
        match self.get(key)? {
            Some(raw) => {
                let value = serde_json::from_str(&raw)
                    .map_err(|e| StoreError::corrupt(key, e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serializes a value to JSON and writes it under a key.
    pub fn put_json<T: Serialize>(&self, key: &'static str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.put(key, &raw)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn scratch() -> (tempfile::TempDir, KvStorage) {
        let dir = tempdir().unwrap();
        let kv = KvStorage::open(dir.path().join("test.redb")).unwrap();
        (dir, kv)
    }

    #[test]
    fn test_get_absent_key_is_none() {
        let (_dir, kv) = scratch();
        assert_eq!(kv.get("missing").unwrap(), None);
    }

    #[test]
    fn test_put_get_remove_round_trip() {
        let (_dir, kv) = scratch();

        kv.put(LOCALE_KEY, "ta").unwrap();
        assert_eq!(kv.get(LOCALE_KEY).unwrap().as_deref(), Some("ta"));

        assert!(kv.remove(LOCALE_KEY).unwrap());
        assert_eq!(kv.get(LOCALE_KEY).unwrap(), None);
        assert!(!kv.remove(LOCALE_KEY).unwrap());
    }

    #[test]
    fn test_json_round_trip() {
        let (_dir, kv) = scratch();

        kv.put_json(CROPS_KEY, &vec![1u64, 2, 3]).unwrap();
        let back: Option<Vec<u64>> = kv.get_json(CROPS_KEY).unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_malformed_json_reports_corrupt() {
        let (_dir, kv) = scratch();

        kv.put(CROPS_KEY, "not json at all").unwrap();
        let result: StoreResult<Option<Vec<u64>>> = kv.get_json(CROPS_KEY);
        assert!(matches!(result, Err(StoreError::Corrupt { key: "cropsData", .. })));
    }
}
