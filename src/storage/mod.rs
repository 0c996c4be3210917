//! Storage - durable string key-value backends under the content and project stores.
//!
//! The stores only ever read and write whole values, so a backend needs
//! nothing beyond `get` and `set`.

mod file;
mod in_memory;

use crate::error::StorageError;

/// Synchronous key-value storage scoped to one site.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`. Returns None if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

pub use file::FileStorage;
pub use in_memory::InMemoryStorage;
