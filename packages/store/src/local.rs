//! localStorage-backed KeyValueStore for the web platform.
//!
//! All methods silently swallow storage errors (returning `None` for reads,
//! doing nothing for writes). A blocked or unavailable localStorage degrades
//! to "signed out" rather than crashing the UI; the backend remains the
//! authority on accounts either way.

use crate::session::KeyValueStore;

/// Browser localStorage wrapper. Zero-size; the storage handle is re-fetched
/// on every call.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
