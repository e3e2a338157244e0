//! Platform wiring shared by the launchers.
//!
//! Picks the [`store::KeyValueStore`] that backs the session and loads the client
//! configuration:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`];
//!   the API URL can be baked in at build time with `NEWSPORTAL_API_URL`.
//! - **Desktop** (native): one file per key under `<data_dir>/newsportal/` via
//!   [`store::FileStore`]; settings come from `<config_dir>/newsportal/newsportal.toml`
//!   and the `NEWSPORTAL_API_URL` environment variable.

use std::sync::Arc;

use api::NewsClient;
use store::{ClientConfig, SessionStore};

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
const API_URL_VAR: &str = "NEWSPORTAL_API_URL";

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::FileStore;

/// Session store over the platform's persistent storage.
pub fn make_session() -> SessionStore<PlatformStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        SessionStore::new(store::LocalStorage)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("newsportal");
        SessionStore::new(store::FileStore::new(base))
    }
}

/// Client configuration for this platform, falling back to defaults.
pub fn load_config() -> ClientConfig {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        let config = ClientConfig::default();
        match option_env!("NEWSPORTAL_API_URL") {
            Some(url) if !url.trim().is_empty() => config.with_api_base_url(url.trim()),
            _ => config,
        }
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let config = read_config_file().unwrap_or_default();
        match std::env::var(API_URL_VAR) {
            Ok(url) if !url.trim().is_empty() => config.with_api_base_url(url.trim()),
            _ => config,
        }
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn read_config_file() -> Option<ClientConfig> {
    let path = dirs::config_dir()?
        .join("newsportal")
        .join(ClientConfig::filename());
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("Failed to read {}: {e}", path.display());
            return None;
        }
    };
    match ClientConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            tracing::error!("Invalid {}: {e}", path.display());
            None
        }
    }
}

/// HTTP client that reads its bearer token from `session` on every request.
pub fn make_client(config: &ClientConfig, session: &SessionStore<PlatformStore>) -> NewsClient {
    tracing::debug!("API base URL: {}", config.api.base_url);
    NewsClient::new(config.api.base_url.clone(), Arc::new(session.clone()))
}
