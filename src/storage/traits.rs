//! Backend collaborator trait.
//!
//! The durable keyed store behind the facade is an external collaborator:
//! a remote database, a local file, or the in-memory adapter shipped with
//! this crate. The trait pins down exactly what the retrieval layer needs
//! and nothing more — point reads, wholesale upserts, deletes, a fetch-all
//! collection scan and a distinct-collections query.
//!
//! # Implementor Notes
//!
//! - Methods take `&self` so backends can be shared via `Arc<dyn StoreBackend>`;
//!   use interior mutability for mutable state.
//! - All keys arriving here are already normalized ([`RecordKey`] is
//!   normalized by construction), so implementations never canonicalize.
//! - `scan_collection` has fetch-all semantics: no pagination contract is
//!   exposed inward. Backends that page underneath must drain their pages
//!   before returning.
//! - Every method is async and must honor cancellation by drop: unwind
//!   promptly and release open response streams when the future is dropped.

use crate::Result;
use crate::models::{Record, RecordKey};
use async_trait::async_trait;

/// Trait for keyed record store backends.
///
/// Implementations should be thread-safe (`Send + Sync`). Concurrent writes
/// against the same `(collection, key)` identity race at whatever granularity
/// the backend provides per key (last write wins); this layer adds no
/// ordering of its own.
#[async_trait]
pub trait StoreBackend: Send + Sync {
    /// Fetches one record by identity.
    ///
    /// Returns `Ok(None)` when the record does not exist; absence is a
    /// normal outcome, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`](crate::Error::Backend) on transport failure.
    async fn fetch(&self, collection: &str, key: &RecordKey) -> Result<Option<Record>>;

    /// Inserts or wholesale-replaces a record under its `(collection, key)`
    /// identity.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`](crate::Error::Backend) on transport failure.
    async fn upsert(&self, record: Record) -> Result<()>;

    /// Deletes a record by identity.
    ///
    /// Returns whether a record existed. Deleting an absent key succeeds
    /// with `Ok(false)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`](crate::Error::Backend) on transport failure.
    async fn delete(&self, collection: &str, key: &RecordKey) -> Result<bool>;

    /// Returns every record in a collection.
    ///
    /// An unknown or empty collection yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`](crate::Error::Backend) on transport failure.
    async fn scan_collection(&self, collection: &str) -> Result<Vec<Record>>;

    /// Returns the distinct collection identifiers currently present.
    ///
    /// Order is unspecified.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Backend`](crate::Error::Backend) on transport failure.
    async fn list_collections(&self) -> Result<Vec<String>>;
}
