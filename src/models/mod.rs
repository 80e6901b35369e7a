//! Core data types for records, keys and search requests.

mod key;
mod record;
mod search;

pub use key::RecordKey;
pub use record::{Embedding, Record};
pub use search::{ScoredMatch, SearchRequest};
