//! # Filesystem-backed key/value store
//!
//! [`FileStore`] is the [`KeyValueStore`] used by the desktop shell to keep the session
//! across app restarts. Each key is one small file holding the raw string value.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token
//! ├── user
//! └── userName
//! ```
//!
//! ## Platform data directories
//!
//! Use [`dirs::data_dir()`] to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/newsportal/` |
//! | Linux | `~/.local/share/newsportal/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\newsportal\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        // Keys are flat names; anything path-like is flattened so it cannot escape `base`.
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' || c == '.' { '_' } else { c })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Some(value),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read {key} from {}: {e}", self.base.display());
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::error!("Failed to create {}: {e}", self.base.display());
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::error!("Failed to write {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove {key}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionStore, SessionUser};

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("newsportal"));

        assert!(store.get("token").is_none());
        store.set("token", "jwt-value");
        assert_eq!(store.get("token").as_deref(), Some("jwt-value"));

        store.remove("token");
        assert!(store.get("token").is_none());
        // Removing twice is fine
        store.remove("token");
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let session = SessionStore::new(FileStore::new(dir.path().to_path_buf()));
        session.set_token("jwt-value");
        session.set_user(&SessionUser::new("u1", "alice"));

        // Re-open from same directory
        let reopened = SessionStore::new(FileStore::new(dir.path().to_path_buf()));
        assert!(reopened.is_authenticated());
        assert_eq!(reopened.get_user(), Some(SessionUser::new("u1", "alice")));
    }

    #[test]
    fn test_path_like_keys_stay_inside_base() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());

        store.set("../escape", "x");
        assert_eq!(store.get("../escape").as_deref(), Some("x"));
        assert!(dir.path().join("___escape").exists());
    }
}
