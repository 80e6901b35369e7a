//! Keyed memory store facade.

use crate::models::{Record, RecordKey, ScoredMatch, SearchRequest};
use crate::search::rank_top_k;
use crate::storage::StoreBackend;
use crate::Result;
use chrono::Utc;
use tracing::{debug, warn};

/// Facade over a [`StoreBackend`] exposing get/put/delete, collection
/// listing and top-K similarity search.
///
/// The backend is a generic injection rather than a trait object so the
/// facade stays zero-cost over concrete adapters; wrap the backend in an
/// `Arc` yourself if it must be shared.
///
/// Every operation is async and cancellation-safe by drop: no detached
/// tasks are spawned and no state is left half-written by this layer, so
/// dropping a returned future stops consuming the backend promptly.
#[derive(Debug)]
pub struct MemoryStore<B> {
    backend: B,
}

impl<B> MemoryStore<B> {
    /// Creates a store over the given backend.
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Returns a reference to the backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}

impl<B: StoreBackend> MemoryStore<B> {
    /// Fetches a record by collection and raw key.
    ///
    /// The key is normalized before the lookup. Returns `None` both when the
    /// record does not exist and when the backend read fails; a failed read
    /// is downgraded to a warning-logged miss so the read path stays
    /// resilient to backend outages. Callers that must distinguish the two
    /// are not supported by this contract.
    pub async fn get(&self, collection: &str, key: &str) -> Option<Record> {
        let key = RecordKey::normalize(key);
        match self.backend.fetch(collection, &key).await {
            Ok(found) => found,
            Err(error) => {
                warn!(
                    collection,
                    key = key.as_str(),
                    %error,
                    "backend read failed, treating as miss"
                );
                None
            }
        }
    }

    /// Upserts a record into `collection`, replacing any existing record
    /// with the same identity wholesale.
    ///
    /// The record's key is already normalized by construction; the
    /// collection field is rewritten to the target collection and
    /// `updated_at` is stamped with the write time. The stored record is
    /// returned as confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`](crate::Error::Backend) when the upsert fails.
    pub async fn put(&self, collection: &str, mut record: Record) -> Result<Record> {
        if record.collection != collection {
            record.collection = collection.to_string();
        }
        record.updated_at = Utc::now();
        self.backend.upsert(record.clone()).await?;
        Ok(record)
    }

    /// Deletes a record by collection and raw key. Idempotent: deleting an
    /// absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`](crate::Error::Backend) when the delete fails.
    pub async fn delete(&self, collection: &str, key: &str) -> Result<()> {
        let key = RecordKey::normalize(key);
        let existed = self.backend.delete(collection, &key).await?;
        if !existed {
            debug!(collection, key = key.as_str(), "delete of absent key");
        }
        Ok(())
    }

    /// Returns the distinct collection identifiers currently present.
    /// Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`](crate::Error::Backend) when the query fails.
    pub async fn list_collections(&self) -> Result<Vec<String>> {
        self.backend.list_collections().await
    }

    /// Runs a top-K cosine similarity search over one collection.
    ///
    /// Scans every record in the collection (fetch-all, no index), scores
    /// each against the query and keeps the best `limit` matches at or above
    /// `min_score`, sorted descending. A `limit` of zero returns empty
    /// without issuing a scan.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`](crate::Error::Backend) when the scan fails
    /// and [`Error::DimensionMismatch`](crate::Error::DimensionMismatch) when
    /// any scanned embedding disagrees with the query length.
    pub async fn search(&self, request: SearchRequest) -> Result<Vec<ScoredMatch>> {
        if request.limit == 0 {
            debug!(collection = %request.collection, "search with limit 0, skipping scan");
            return Ok(Vec::new());
        }
        let records = self.backend.scan_collection(&request.collection).await?;
        rank_top_k(&request.query, records, request.limit, request.min_score)
    }
}
