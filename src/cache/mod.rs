//! Persistent key/value storage for derived data.
//!
//! The embedding strategy persists its per-corpus vector list here, keyed by
//! corpus fingerprint. Stores are synchronous and small; callers treat every
//! failure as a cache miss.

pub mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore};
