//! The local persistence medium: a synchronous, string-keyed key/value store.
//!
//! In the browser this is `window.localStorage` (see the frontend's
//! `LocalStorageMedium`); [`MemoryStore`] backs native tests and can simulate a
//! quota so rejected writes are exercised too.

pub mod keys;

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The medium refused the write because it is full.
    #[error("Storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },

    /// No storage is available (private browsing, disabled cookies, ...).
    #[error("Local storage is unavailable")]
    Unavailable,

    #[error("Storage write rejected: {0}")]
    Rejected(String),
}

/// Synchronous key/value storage with whole-value reads and writes.
///
/// Methods take `&self`: the browser medium is a shared handle, and
/// implementations use interior mutability where they need it.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory medium with an optional capacity in bytes (keys + values).
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    capacity: Option<usize>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// Number of accepted `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    fn used_without(&self, key: &str) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Some(capacity) = self.capacity {
            if self.used_without(key) + key.len() + value.len() > capacity {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                });
            }
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_enforces_capacity() {
        let store = MemoryStore::with_capacity(10);
        assert!(store.set("k", "12345").is_ok());
        // Overwriting the same key does not count the old value twice.
        assert!(store.set("k", "123456789").is_ok());
        assert_eq!(
            store.set("other", "x"),
            Err(StorageError::QuotaExceeded {
                key: "other".into()
            })
        );
        assert_eq!(store.get("k").as_deref(), Some("123456789"));
        assert_eq!(store.write_count(), 2);
    }

    #[test]
    fn remove_deletes_the_entry() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k"), None);
    }
}
