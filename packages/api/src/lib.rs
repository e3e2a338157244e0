//! # API crate: HTTP adapter for the news portal
//!
//! Every request the frontends make to the news REST API goes through
//! [`NewsClient`]. Views never build URLs or headers themselves.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | [`ApiError`] and the message shown to the user for each failure |
//! | [`models`] | Wire records for users, articles and comments, and their normalised forms |
//! | `client` | [`NewsClient`] and the [`TokenSource`] it reads the bearer token from |
//!
//! ## Authentication
//!
//! The client is built once with a [`TokenSource`]. In the apps that source is the
//! shared [`store::SessionStore`], so the token is whatever the session holds when a
//! request is sent. Logging in or out never requires a new client.

mod client;
pub mod error;
pub mod models;

pub use client::{NewsClient, NoAuth, StaticToken, TokenSource};
pub use error::ApiError;
pub use models::{
    Article, ArticleComments, ArticlePatch, Comment, Commenter, NewArticle, NewComment,
    RegisterRequest, UserInfo, DEFAULT_CATEGORY,
};
