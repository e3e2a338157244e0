//! # Session store
//!
//! The only piece of state shared between views is the signed-in identity. It lives in
//! client storage under three plain-string keys:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`TOKEN_KEY`] (`"token"`) | opaque bearer token returned by `POST /login` |
//! | [`USER_KEY`] (`"user"`) | the signed-in user's id |
//! | [`USER_NAME_KEY`] (`"userName"`) | the display name shown in the navbar and on comments |
//!
//! [`SessionStore`] wraps a [`KeyValueStore`] and is the single place that reads or
//! writes those keys. Views never touch storage directly; they call
//! [`SessionStore::current`] whenever they need the identity, so there is no cached
//! copy that could go stale across views.
//!
//! ## Invariant
//!
//! A token implies a user name. A session with a token but no name (or a user id
//! without a name) is partial: [`SessionStore::load`] treats it as logged out and
//! clears every key.

use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";
pub const USER_NAME_KEY: &str = "userName";

/// Snapshot of the persisted session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: Option<String>,
    pub user_name: Option<String>,
    pub token: Option<String>,
}

impl Session {
    /// A user is signed in. Select-user logins carry no token, so this only needs
    /// an id and a name.
    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some() && self.user_name.is_some()
    }

    /// Token or id present without the name that must accompany it.
    pub fn is_partial(&self) -> bool {
        let orphaned = self.token.is_some() || self.user_id.is_some();
        (orphaned && self.user_name.is_none()) || (self.user_name.is_some() && self.user_id.is_none())
    }

    pub fn user(&self) -> Option<SessionUser> {
        Some(SessionUser {
            id: self.user_id.clone()?,
            name: self.user_name.clone()?,
        })
    }

    /// Whether the signed-in user is `author_id`.
    pub fn owns(&self, author_id: Option<&str>) -> bool {
        match (self.user_id.as_deref(), author_id) {
            (Some(me), Some(author)) => me == author,
            _ => false,
        }
    }
}

/// Identity stored alongside the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
}

impl SessionUser {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Session helper over a persistent KeyValueStore.
#[derive(Clone, Debug)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn read(&self, key: &str) -> Option<String> {
        self.store.get(key).filter(|v| !v.trim().is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
    }

    pub fn get_token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    pub fn remove_token(&self) {
        self.store.remove(TOKEN_KEY);
    }

    /// True iff a token is stored. The token is not validated against the server.
    pub fn is_authenticated(&self) -> bool {
        self.get_token().is_some()
    }

    pub fn set_user(&self, user: &SessionUser) {
        self.store.set(USER_KEY, &user.id);
        self.store.set(USER_NAME_KEY, &user.name);
    }

    pub fn get_user(&self) -> Option<SessionUser> {
        self.current().user()
    }

    pub fn remove_user(&self) {
        self.store.remove(USER_KEY);
        self.store.remove(USER_NAME_KEY);
    }

    /// Clear token and user. Afterwards `is_authenticated()` is false and
    /// `get_user()` is `None`.
    pub fn logout(&self) {
        self.remove_token();
        self.remove_user();
        tracing::debug!("Session cleared");
    }

    /// Read the session fresh from storage.
    pub fn current(&self) -> Session {
        Session {
            user_id: self.read(USER_KEY),
            user_name: self.read(USER_NAME_KEY),
            token: self.get_token(),
        }
    }

    /// Read the session at start-up, clearing it if it is partial.
    pub fn load(&self) -> Session {
        let session = self.current();
        if session.is_partial() {
            tracing::warn!("Discarding partial session (token or user id without a user name)");
            self.logout();
            return Session::default();
        }
        session
    }

    /// Store a complete session in one go.
    pub fn sign_in(&self, user: &SessionUser, token: Option<&str>) {
        match token {
            Some(token) => self.set_token(token),
            None => self.remove_token(),
        }
        self.set_user(user);
        tracing::info!("Signed in as {}", user.name);
    }

    /// Whether the current session user is `author_id`.
    pub fn owns(&self, author_id: Option<&str>) -> bool {
        self.current().owns(author_id)
    }
}
