//! # Browser `localStorage` store
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It reads and
//! writes the window's `localStorage` through [`web_sys::Storage`], so the session
//! survives page reloads exactly like any other single-page app.
//!
//! ## Handle management
//!
//! `LocalStorage` is a zero-size struct that looks up `window.localStorage` on every
//! call. `web_sys::Storage` is a JS handle that is not `Send`, and the lookup is cheap.
//!
//! ## Error handling
//!
//! Storage can be unavailable (private browsing, quota exceeded, disabled cookies).
//! Reads then return `None` and writes are logged and dropped, so the app degrades to
//! an anonymous session instead of crashing.

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {e:?}");
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::error!("Failed to write {key} to localStorage: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {key} from localStorage: {e:?}");
        }
    }
}
