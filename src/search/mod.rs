//! Nearest-neighbor retrieval over an unindexed collection scan.
//!
//! The algorithm is deliberately brute force: score every record in the
//! target collection against the query and keep the best K in a bounded
//! accumulator. There is no ANN graph, tree or quantization, so results are
//! exact; a search is a single pass with O(K) memory and O(N log K) time.

mod similarity;
mod topk;

pub use similarity::cosine_similarity;
pub use topk::BoundedTopK;

use crate::models::{Embedding, Record, ScoredMatch};
use crate::Result;

/// Ranks a record sequence against a query, keeping the top `limit` matches
/// with score at least `min_score`.
///
/// This is the core of a search call, factored out of the store facade so it
/// stays unit-testable without any backend. Records without an embedding
/// payload are skipped silently — the source data shape allows records that
/// were not yet embedded — but the skip count is logged and recorded on the
/// `memvault_malformed_records_total` counter. Only absent embeddings can
/// reach this path: `Embedding` is typed, so a corrupt payload fails inside
/// the backend adapter's decode and never produces a `Record` to skip here.
///
/// `limit == 0` yields an empty result without touching the input.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if any scanned embedding disagrees
/// with the query length. One mismatched record indicates a store-wide
/// schema violation, so the whole search aborts rather than masking it by
/// skipping.
///
/// [`Error::DimensionMismatch`]: crate::Error::DimensionMismatch
pub fn rank_top_k(
    query: &Embedding,
    records: impl IntoIterator<Item = Record>,
    limit: usize,
    min_score: f32,
) -> Result<Vec<ScoredMatch>> {
    if limit == 0 {
        return Ok(Vec::new());
    }

    let mut top = BoundedTopK::new(limit)?;
    let mut skipped: u64 = 0;
    for record in records {
        let Some(embedding) = record.embedding.as_ref() else {
            skipped += 1;
            continue;
        };
        let score = cosine_similarity(query, embedding)?;
        if score < min_score {
            continue;
        }
        top.offer(record, score);
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped records without an embedding payload");
        metrics::counter!("memvault_malformed_records_total").increment(skipped);
    }

    Ok(top
        .drain_sorted()
        .into_iter()
        .map(|(record, score)| ScoredMatch { record, score })
        .collect())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::Error;

    fn record(key: &str, embedding: Option<Vec<f32>>) -> Record {
        Record::new("c", key, embedding.map(Into::into), String::new())
    }

    #[test]
    fn test_zero_limit_returns_empty() {
        let records = vec![record("a", Some(vec![1.0, 0.0]))];
        let out = rank_top_k(&vec![1.0, 0.0].into(), records, 0, 0.0).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_ranks_descending_and_applies_threshold() {
        let records = vec![
            record("a", Some(vec![1.0, 0.0])),
            record("b", Some(vec![0.0, 1.0])),
            record("d", Some(vec![0.9, 0.1])),
        ];
        let out = rank_top_k(&vec![1.0, 0.0].into(), records, 2, 0.5).unwrap();
        let keys: Vec<&str> = out.iter().map(|m| m.record.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "D"]);
        assert!((out[0].score - 1.0).abs() < 1e-6);
        assert!((out[1].score - 0.993_9).abs() < 1e-3);
    }

    #[test]
    fn test_records_without_embedding_are_skipped() {
        let records = vec![
            record("a", Some(vec![1.0, 0.0])),
            record("missing", None),
            record("also-missing", None),
        ];
        let out = rank_top_k(&vec![1.0, 0.0].into(), records, 10, 0.0).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].record.key.as_str(), "A");
    }

    #[test]
    fn test_dimension_mismatch_aborts_the_search() {
        let records = vec![
            record("ok", Some(vec![1.0, 0.0])),
            record("bad", Some(vec![1.0, 0.0, 0.0])),
        ];
        let err = rank_top_k(&vec![1.0, 0.0].into(), records, 10, 0.0).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_empty_input_returns_empty() {
        let out = rank_top_k(&vec![1.0].into(), Vec::new(), 3, 0.0).unwrap();
        assert!(out.is_empty());
    }
}
