//! InMemoryStorage - HashMap-backed storage for testing and development.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::KeyValueStorage;
use crate::error::StorageError;

/// In-memory key-value storage backed by a HashMap.
///
/// Clone-friendly via Arc: clones share the same entries, the way every
/// tab of a browser shares one local storage area.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryStorage {
    /// Create a new empty storage with no quota.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that rejects writes once the total stored bytes
    /// (keys plus values) would exceed `quota`.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(quota),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::LockPoisoned("storage read"))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::LockPoisoned("storage write"))?;

        if let Some(quota) = self.quota {
            let used: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = key.len() + value.len();
            let available = quota.saturating_sub(used);
            if needed > available {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    available,
                });
            }
        }

        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
