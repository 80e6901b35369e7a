//! Storage layer abstraction.
//!
//! The durable store is an injected capability: the facade talks to any
//! [`StoreBackend`] implementation. This crate ships one adapter,
//! [`InMemoryBackend`], which doubles as the fake collaborator for tests.

pub mod memory;
pub mod traits;

pub use memory::InMemoryBackend;
pub use traits::StoreBackend;
