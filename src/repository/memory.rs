//! In-memory Key-Value Store
//!
//! HashMap-backed [`KeyValueStore`] with an optional capacity quota, used in
//! tests to stand in for a real backend (and to exercise over-capacity
//! behavior without one).

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

use super::traits::KeyValueStore;

/// Volatile store; contents are lost on drop
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    /// Total value bytes allowed, `None` = unlimited
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that rejects writes once total stored bytes would exceed `quota`
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            quota: Some(quota),
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| DomainError::Internal("store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| DomainError::Internal("store lock poisoned".to_string()))?;

        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(_, v)| v.len())
                .sum();
            if others + value.len() > quota {
                return Err(DomainError::Storage(format!(
                    "write of {} bytes to '{}' exceeds quota",
                    value.len(),
                    key
                )));
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let store = MemoryStore::with_quota(8);
        store.set("a", "1234").unwrap();
        let err = store.set("b", "12345").unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
        // The first key is untouched
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1234"));
    }

    #[test]
    fn test_quota_allows_overwrite_of_same_key() {
        let store = MemoryStore::with_quota(8);
        store.set("a", "1234".repeat(2).as_str()).unwrap();
        // Replacing the only key frees its old bytes
        store.set("a", "87654321").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("87654321"));
    }
}
