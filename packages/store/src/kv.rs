//! # Key/value storage seam
//!
//! Everything the client persists between reloads (the session token, the signed-in
//! user's id and display name) is a plain string under a well-known key. The
//! [`KeyValueStore`] trait is the single interface over the platform backends:
//!
//! | Backend | Platform | Module |
//! |---------|----------|--------|
//! | [`crate::LocalStorage`] | browser (`wasm32` + `web` feature) | `local_storage` |
//! | [`crate::FileStore`] | desktop | `file_store` |
//! | [`crate::MemoryStore`] | tests, fallback | `memory` |
//!
//! All methods are synchronous. Backends never panic on I/O failure: reads degrade to
//! `None` and failed writes are logged, so a broken storage layer looks like an
//! anonymous visitor rather than a crashed view.

/// Synchronous string storage keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}
