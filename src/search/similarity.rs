//! Cosine similarity between embeddings.

// The final cast back to f32 is intentional: scores are stored and compared
// as f32, only the accumulation runs in f64.
#![allow(clippy::cast_possible_truncation)]

use crate::models::Embedding;
use crate::{Error, Result};

/// Computes the cosine similarity between two equal-length embeddings.
///
/// Dot product and norms accumulate in `f64` regardless of the `f32` storage
/// precision, which avoids catastrophic cancellation on high-dimensional
/// vectors. The result is clamped to `[-1.0, 1.0]` to absorb floating-point
/// drift before callers compare it against thresholds.
///
/// If either vector has a zero norm the similarity is defined as `0.0`:
/// similarity to a null vector is "no similarity", not NaN and not an error.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] when the lengths differ. Unequal
/// lengths are never truncated silently.
pub fn cosine_similarity(a: &Embedding, b: &Embedding) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (&x, &y) in a.as_slice().iter().zip(b.as_slice()) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    let cosine = dot / (norm_a.sqrt() * norm_b.sqrt());
    Ok(cosine.clamp(-1.0, 1.0) as f32)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::cast_precision_loss)]
mod tests {
    use super::*;

    fn emb(components: &[f32]) -> Embedding {
        components.to_vec().into()
    }

    #[test]
    fn test_self_similarity_is_one() {
        let v = emb(&[0.3, -1.2, 4.5, 0.0001]);
        let score = cosine_similarity(&v, &v).unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_orthogonal_vectors() {
        let a = emb(&[1.0, 0.0]);
        let b = emb(&[0.0, 1.0]);
        assert!(cosine_similarity(&a, &b).unwrap().abs() < 1e-6);
    }

    #[test]
    fn test_opposite_vectors() {
        let a = emb(&[1.0, 0.0]);
        let b = emb(&[-1.0, 0.0]);
        assert!((cosine_similarity(&a, &b).unwrap() + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_symmetry() {
        let a = emb(&[0.9, 0.1, -0.4]);
        let b = emb(&[0.2, 0.7, 0.3]);
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = emb(&[1.0, 0.0, 0.0]);
        let b = emb(&[1.0, 0.0]);
        let err = cosine_similarity(&a, &b).unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_zero_vector_is_exactly_zero() {
        let a = emb(&[0.0, 0.0, 0.0]);
        let b = emb(&[1.0, 2.0, 3.0]);
        assert_eq!(cosine_similarity(&a, &b).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&b, &a).unwrap(), 0.0);
        assert_eq!(cosine_similarity(&a, &a).unwrap(), 0.0);
    }

    #[test]
    fn test_result_is_clamped() {
        // Parallel vectors whose f32 arithmetic can drift past 1.0.
        let a = emb(&[1e-4, 2e-4, 3e-4]);
        let b = emb(&[2e-4, 4e-4, 6e-4]);
        let score = cosine_similarity(&a, &b).unwrap();
        assert!(score <= 1.0);
        assert!((score - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_high_dimensional_accumulation() {
        // 4096 dims of small components; f64 accumulation keeps self-similarity at 1.
        let v: Vec<f32> = (0..4096).map(|i| ((i % 7) as f32).mul_add(1e-3, 1e-4)).collect();
        let v = Embedding::from(v);
        let score = cosine_similarity(&v, &v).unwrap();
        assert!((score - 1.0).abs() < 1e-6);
    }
}
