//! # In-Memory Storage
//!
//! A [`KeyValueStorage`] held entirely in process memory. Used by tests and
//! anywhere a throwaway store is enough. An optional byte quota mimics the
//! browser's `localStorage` limit so write failures can be exercised.

use log::warn;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::traits::{KeyValueStorage, StorageError};

#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota_bytes: Option<usize>,
}

impl MemoryStorage {
    /// Create an unbounded in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once keys plus values would
    /// exceed `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Total bytes currently held (keys plus values)
    pub fn used_bytes(&self) -> usize {
        self.entries
            .lock()
            .map(|entries| entries.iter().map(|(k, v)| k.len() + v.len()).sum())
            .unwrap_or(0)
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory storage lock poisoned".to_string()))
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.lock()?;

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let attempted = others + key.len() + value.len();
            if attempted > limit {
                warn!("⚠️ Rejecting write to '{}': {} bytes over {} byte quota", key, attempted, limit);
                return Err(StorageError::QuotaExceeded { attempted, limit });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();

        assert_eq!(storage.get_item("theme").unwrap(), None);
        storage.set_item("theme", "dark").unwrap();
        assert_eq!(storage.get_item("theme").unwrap(), Some("dark".to_string()));

        storage.remove_item("theme").unwrap();
        assert_eq!(storage.get_item("theme").unwrap(), None);
        storage.remove_item("theme").unwrap();
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();

        storage.set_item("k", "v").unwrap();
        assert_eq!(clone.get_item("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let storage = MemoryStorage::with_quota(10);

        storage.set_item("k", "12345").unwrap();
        assert_eq!(storage.used_bytes(), 6);

        let err = storage.set_item("k2", "123456").unwrap_err();
        assert_eq!(err, StorageError::QuotaExceeded { attempted: 14, limit: 10 });
        assert_eq!(storage.get_item("k2").unwrap(), None);
    }

    #[test]
    fn test_quota_counts_replacement_not_old_value() {
        let storage = MemoryStorage::with_quota(10);

        storage.set_item("k", "123456789").unwrap();
        // Replacing the same key only counts the new value
        storage.set_item("k", "12345").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), Some("12345".to_string()));
    }
}
