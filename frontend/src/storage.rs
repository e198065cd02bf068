//! `window.localStorage` as the local persistence medium.

use common::storage::{KeyValueStore, StorageError};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DomException, Storage};

/// Handle on the browser's local storage. Missing storage (disabled by the
/// user, sandboxed frames) reads as empty and rejects writes.
pub struct LocalStorageMedium {
    storage: Option<Storage>,
}

impl LocalStorageMedium {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            warn!("localStorage is unavailable; collections will not persist");
        }
        Self { storage }
    }

    fn write_error(key: &str, err: JsValue) -> StorageError {
        match err.dyn_ref::<DomException>() {
            Some(e) if e.name() == "QuotaExceededError" => StorageError::QuotaExceeded {
                key: key.to_string(),
            },
            Some(e) => StorageError::Rejected(e.message()),
            None => StorageError::Rejected(format!("{:?}", err)),
        }
    }
}

impl KeyValueStore for LocalStorageMedium {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| Self::write_error(key, e))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .remove_item(key)
            .map_err(|e| Self::write_error(key, e))
    }
}
