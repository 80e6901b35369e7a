//! Record key normalization.
//!
//! The backing store forbids a handful of characters in identifiers and is
//! case-sensitive, so user-supplied keys are canonicalized before they ever
//! reach a backend. Two raw keys that differ only by forbidden characters or
//! case map to the same stored identity.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized, backend-safe record key.
///
/// The only way to build a `RecordKey` is through [`RecordKey::normalize`]
/// (or the `From` conversions, which call it), so holding one is proof that
/// the key is already canonical.
///
/// Normalization rules, applied in order:
/// 1. Trim leading and trailing whitespace.
/// 2. Replace each space with `-`.
/// 3. Replace each of `/`, `\`, `?`, `#` with `_`.
/// 4. Uppercase the result using locale-invariant (Unicode simple) casing.
///
/// The mapping is idempotent: normalizing an already-normalized key returns
/// it unchanged. Any string is acceptable input, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(String);

impl RecordKey {
    /// Canonicalizes a raw user-supplied key.
    ///
    /// ```
    /// use memvault::RecordKey;
    ///
    /// assert_eq!(RecordKey::normalize("My Key/1").as_str(), "MY-KEY_1");
    /// assert_eq!(RecordKey::normalize("a?b#c\\d").as_str(), "A_B_C_D");
    /// ```
    #[must_use]
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        let mut out = String::with_capacity(trimmed.len());
        for ch in trimmed.chars() {
            match ch {
                ' ' => out.push('-'),
                '/' | '\\' | '?' | '#' => out.push('_'),
                c => out.extend(c.to_uppercase()),
            }
        }
        Self(out)
    }

    /// Returns the normalized key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the key is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordKey {
    fn from(s: &str) -> Self {
        Self::normalize(s)
    }
}

impl From<String> for RecordKey {
    fn from(s: String) -> Self {
        Self::normalize(&s)
    }
}
