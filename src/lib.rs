//! # Memvault
//!
//! A keyed vector memory store partitioned into named collections.
//!
//! Memvault persists (key, embedding, metadata) records through a pluggable
//! backend and retrieves the K records in a collection whose embeddings are
//! most similar to a query vector under cosine similarity. Retrieval is an
//! exact, brute-force scan of the target collection with a bounded top-K
//! accumulator; there is deliberately no approximate index, so results are
//! exact and memory usage during a search is O(K).
//!
//! ## Example
//!
//! ```rust,ignore
//! use memvault::{Embedding, InMemoryBackend, MemoryStore, Record, SearchRequest};
//!
//! let store = MemoryStore::new(InMemoryBackend::new());
//! let record = Record::new("notes", "My Key/1", Some(vec![1.0, 0.0].into()), "{}".to_string());
//! store.put("notes", record).await?;
//!
//! let request = SearchRequest::new("notes", vec![1.0, 0.0].into(), 5).with_min_score(0.5);
//! let matches = store.search(request).await?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod models;
pub mod search;
pub mod storage;
pub mod store;

// Re-exports for convenience
pub use models::{Embedding, Record, RecordKey, ScoredMatch, SearchRequest};
pub use search::{BoundedTopK, cosine_similarity, rank_top_k};
pub use storage::{InMemoryBackend, StoreBackend};
pub use store::MemoryStore;

/// Error type for memvault operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `DimensionMismatch` | Comparing embeddings of unequal length |
/// | `InvalidInput` | Constructing a zero-capacity top-K accumulator |
/// | `Backend` | The external backend rejects or fails an operation |
///
/// A missing record is never an error: `get` returns `None` and `delete` is
/// idempotent. A record scanned without an embedding payload is skipped and
/// counted, not raised.
#[derive(Debug, ThisError)]
pub enum Error {
    /// Two embeddings of unequal length were compared.
    ///
    /// Fatal to the enclosing search call: a single mismatched record means
    /// the collection violates its schema, so the scan must not silently
    /// drop it and continue.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length of the query-side embedding.
        expected: usize,
        /// Length of the offending embedding.
        actual: usize,
    },

    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - A `BoundedTopK` is constructed with capacity 0
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A backend operation failed.
    ///
    /// Transport-level failures from the external collaborator. Propagated
    /// to the caller on `put`, `delete`, scan and list operations; `get`
    /// downgrades this variant to a warning-logged miss.
    #[error("backend operation '{operation}' failed: {cause}")]
    Backend {
        /// The backend operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

impl Error {
    /// Builds an [`Error::Backend`] from an operation name and any displayable cause.
    #[must_use]
    pub fn backend(operation: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Backend {
            operation: operation.into(),
            cause: cause.to_string(),
        }
    }
}

/// Result type alias for memvault operations.
pub type Result<T> = std::result::Result<T, Error>;
