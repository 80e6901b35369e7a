//! Record and embedding types.

use super::RecordKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fixed-length embedding vector.
///
/// Components are stored as `f32`; the similarity metric accumulates in
/// `f64` internally, so there is no generic numeric parameter here. The
/// serde representation is the bare numeric array, which preserves component
/// order and precision on a round trip through any self-describing format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Embedding(Vec<f32>);

impl Embedding {
    /// Creates an embedding from raw components.
    #[must_use]
    pub const fn new(components: Vec<f32>) -> Self {
        Self(components)
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the embedding has no components.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the components as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }
}

impl From<Vec<f32>> for Embedding {
    fn from(components: Vec<f32>) -> Self {
        Self(components)
    }
}

impl AsRef<[f32]> for Embedding {
    fn as_ref(&self) -> &[f32] {
        &self.0
    }
}

/// A stored memory record.
///
/// Identity is `(collection, key)`. A `put` with the same identity replaces
/// the record wholesale; there is no partial merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Normalized record key.
    pub key: RecordKey,
    /// Collection this record belongs to.
    ///
    /// A collection has no stored object of its own; it is the set of all
    /// records sharing this field value.
    pub collection: String,
    /// Embedding vector, absent when the record has not been embedded yet.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub embedding: Option<Embedding>,
    /// Opaque serialized metadata payload. The format is owned by the caller.
    pub metadata: String,
    /// Timestamp of the last write (UTC).
    pub updated_at: DateTime<Utc>,
}

impl Record {
    /// Creates a record, normalizing the raw key and stamping the current time.
    #[must_use]
    pub fn new(
        collection: impl Into<String>,
        key: &str,
        embedding: Option<Embedding>,
        metadata: String,
    ) -> Self {
        Self {
            key: RecordKey::normalize(key),
            collection: collection.into(),
            embedding,
            metadata,
            updated_at: Utc::now(),
        }
    }
}
