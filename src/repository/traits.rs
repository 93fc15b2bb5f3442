//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for durable storage.
//! Implementations can use SQLite, in-memory, etc.

use std::sync::Arc;

use crate::domain::DomainResult;

/// Durable key-value storage behind every repository.
///
/// Collections are stored as JSON strings under fixed logical keys. A
/// backend may refuse a write (e.g. over capacity); callers treat that as
/// non-fatal and keep serving from memory.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value under `key`, `None` if the key was never written
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Write the raw value under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}

/// Shared handle to a storage backend
pub type SharedStore = Arc<dyn KeyValueStore>;
