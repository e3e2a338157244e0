pub mod config;
pub mod kv;
pub mod session;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::{ClientConfig, CommentMode, LoginMode};
pub use kv::KeyValueStore;
pub use session::{Session, SessionStore, SessionUser};
