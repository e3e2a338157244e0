//! This crate contains all shared UI for the workspace.
//!
//! Views take navigation callbacks instead of routes so the web and desktop
//! launchers can each own their `Route` enum.

pub mod access;
pub mod components;
pub mod forms;
pub mod listing;

mod platform;
pub use platform::{load_config, make_client, make_session, PlatformStore};

pub mod views;

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_client, use_config, use_session, AuthProvider, LogoutButton, SessionHandle};
