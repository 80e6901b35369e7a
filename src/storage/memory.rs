//! In-memory backend adapter.

use crate::Result;
use crate::models::{Record, RecordKey};
use crate::storage::traits::StoreBackend;
use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

type Identity = (String, String);

/// Process-local backend keeping all records in a `HashMap`.
///
/// The reference adapter for the [`StoreBackend`] contract: used as the fake
/// collaborator in tests and usable directly for ephemeral stores. Per-key
/// last-write-wins comes from the exclusive write lock around each upsert;
/// nothing is held across awaits.
#[derive(Debug, Default)]
pub struct InMemoryBackend {
    records: RwLock<HashMap<Identity, Record>>,
}

impl InMemoryBackend {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of stored records across all collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns `true` if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A poisoned lock only means another thread panicked mid-write; the map
    // itself is still structurally sound, so recover the guard.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Identity, Record>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Identity, Record>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn identity(collection: &str, key: &RecordKey) -> Identity {
        (collection.to_string(), key.as_str().to_string())
    }
}

#[async_trait]
impl StoreBackend for InMemoryBackend {
    async fn fetch(&self, collection: &str, key: &RecordKey) -> Result<Option<Record>> {
        Ok(self.read().get(&Self::identity(collection, key)).cloned())
    }

    async fn upsert(&self, record: Record) -> Result<()> {
        let identity = (record.collection.clone(), record.key.as_str().to_string());
        self.write().insert(identity, record);
        Ok(())
    }

    async fn delete(&self, collection: &str, key: &RecordKey) -> Result<bool> {
        Ok(self
            .write()
            .remove(&Self::identity(collection, key))
            .is_some())
    }

    async fn scan_collection(&self, collection: &str) -> Result<Vec<Record>> {
        Ok(self
            .read()
            .values()
            .filter(|r| r.collection == collection)
            .cloned()
            .collect())
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        let distinct: BTreeSet<String> = self
            .read()
            .keys()
            .map(|(collection, _)| collection.clone())
            .collect();
        Ok(distinct.into_iter().collect())
    }
}
