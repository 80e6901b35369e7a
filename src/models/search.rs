//! Search request and result types.

use super::{Embedding, Record};

/// A top-K similarity query against one collection.
///
/// `min_score` defaults to `0.0`, so negatively correlated matches are
/// excluded unless the caller lowers the threshold explicitly.
///
/// # Example
///
/// ```
/// use memvault::SearchRequest;
///
/// let request = SearchRequest::new("notes", vec![1.0, 0.0].into(), 5)
///     .with_min_score(0.7);
/// assert_eq!(request.limit, 5);
/// ```
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Collection to scan.
    pub collection: String,
    /// Query embedding.
    pub query: Embedding,
    /// Maximum number of matches to return. `0` is a documented no-op: the
    /// search returns empty without issuing a scan.
    pub limit: usize,
    /// Minimum cosine similarity a record must reach to be considered.
    pub min_score: f32,
}

impl SearchRequest {
    /// Creates a request with the default minimum score of `0.0`.
    #[must_use]
    pub fn new(collection: impl Into<String>, query: Embedding, limit: usize) -> Self {
        Self {
            collection: collection.into(),
            query,
            limit,
            min_score: 0.0,
        }
    }

    /// Sets the minimum score threshold.
    #[must_use]
    pub const fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = min_score;
        self
    }
}

/// A record paired with its similarity score for one query.
///
/// Ephemeral: constructed during a search call and discarded with the result
/// sequence; never persisted.
#[derive(Debug, Clone)]
pub struct ScoredMatch {
    /// The matched record.
    pub record: Record,
    /// Cosine similarity against the query, clamped to `[-1.0, 1.0]`.
    pub score: f32,
}
