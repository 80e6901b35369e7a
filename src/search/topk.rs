//! Bounded top-K accumulator.

use crate::{Error, Result};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One admitted item with its score and admission sequence number.
#[derive(Debug)]
struct Entry<T> {
    score: f32,
    seq: u64,
    item: T,
}

impl<T> Entry<T> {
    /// Orders by score ascending; among equal scores the latest-admitted
    /// entry sorts first, so it is the eviction candidate and earlier
    /// incumbents survive a tie at the minimum.
    fn cmp_key(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_key(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_key(other)
    }
}

/// An online accumulator retaining the K highest-scoring items seen so far.
///
/// Backed by a min-heap over (score, admission order), so each [`offer`] is
/// O(log K) and memory stays O(K) no matter how long the input sequence is.
/// No full sort happens until [`drain_sorted`].
///
/// Tie policy: an offer whose score equals the current minimum of a full
/// accumulator is discarded — the incumbent wins, keeping result sets
/// deterministic under equal-scoring inputs.
///
/// [`offer`]: BoundedTopK::offer
/// [`drain_sorted`]: BoundedTopK::drain_sorted
#[derive(Debug)]
pub struct BoundedTopK<T> {
    capacity: usize,
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

impl<T> BoundedTopK<T> {
    /// Creates an accumulator holding at most `capacity` items.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when `capacity` is zero. Callers that
    /// want "no results" should short-circuit to an empty result instead of
    /// constructing this structure.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidInput(
                "top-k capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        })
    }

    /// Returns the configured capacity.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns how many items are currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing has been admitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Offers an item with its score.
    ///
    /// Below capacity the item is admitted unconditionally. At capacity the
    /// item replaces the current minimum only when its score is strictly
    /// greater; an equal or lower score is discarded.
    pub fn offer(&mut self, item: T, score: f32) {
        if self.heap.len() < self.capacity {
            self.admit(item, score);
            return;
        }
        let beats_minimum = self
            .heap
            .peek()
            .is_some_and(|Reverse(min)| score > min.score);
        if beats_minimum {
            self.heap.pop();
            self.admit(item, score);
        }
    }

    fn admit(&mut self, item: T, score: f32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { score, seq, item }));
    }

    /// Consumes the held items, sorted by score descending.
    ///
    /// Ties are broken by admission order (stable). The accumulator is empty
    /// afterwards; subsequent offers start fresh.
    #[must_use]
    pub fn drain_sorted(&mut self) -> Vec<(T, f32)> {
        let mut entries: Vec<Entry<T>> = self.heap.drain().map(|Reverse(e)| e).collect();
        entries.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.seq.cmp(&b.seq))
        });
        self.next_seq = 0;
        entries.into_iter().map(|e| (e.item, e.score)).collect()
    }
}
