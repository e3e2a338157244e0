//! # Client configuration: `newsportal.toml`
//!
//! Defines the TOML configuration that tells the client where the API lives and which
//! of the server's historical behaviours to use (filename:
//! [`ClientConfig::filename`] = `"newsportal.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//!
//! [list]
//! page_size = 6
//!
//! [login]
//! mode = "password"      # or "select_user"
//!
//! [comments]
//! mode = "resource"      # or "embedded"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config with builder helpers, TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Base URL of the REST API. |
//! | [`ListConfig`] | Page size of the article list, default **6**. |
//! | [`LoginConfig`] | [`LoginMode`]: password form or pick-a-user. |
//! | [`CommentsConfig`] | [`CommentMode`]: dedicated comment endpoints or comments embedded in the article document. |
//!
//! Every section derives `Default`, so a missing or empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Top-level configuration stored in `newsportal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub comments: CommentsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Articles per page. Zero is treated as one.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// How the login screen identifies the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginMode {
    /// Username and password against `POST /login`; stores the returned token.
    #[default]
    Password,
    /// Pick an existing user from `GET /users`; no password, no token.
    SelectUser,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginConfig {
    #[serde(default)]
    pub mode: LoginMode,
}

/// Where comments live on the server.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentMode {
    /// `GET/POST /news/:id/comments`, `DELETE /comments/:id`. Requires a signed-in user.
    #[default]
    Resource,
    /// A `comments` array inside the article, persisted with a full-document PATCH.
    /// Visitors without a session may comment under a guest name.
    Embedded,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentsConfig {
    #[serde(default)]
    pub mode: CommentMode,
}

impl ClientConfig {
    /// Create a config pointing at the given API.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::default().with_api_base_url(base_url)
    }

    /// Builder method to set the API base URL. A trailing slash is dropped.
    pub fn with_api_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_login_mode(mut self, mode: LoginMode) -> Self {
        self.login.mode = mode;
        self
    }

    pub fn with_comment_mode(mut self, mode: CommentMode) -> Self {
        self.comments.mode = mode;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.list.page_size = page_size;
        self
    }

    /// Page size, never zero.
    pub fn page_size(&self) -> usize {
        self.list.page_size.max(1)
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "newsportal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let config: Self = toml::from_str(s)?;
        let base_url = config.api.base_url.clone();
        Ok(config.with_api_base_url(base_url))
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
