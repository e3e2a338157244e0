//! # Comments
//!
//! Two historical shapes coexist:
//!
//! - **Resource** comments from `GET /news/:id/comments`:
//!   `{id, news_id, user_id, username, full_name, text, created_at}`.
//! - **Embedded** comments stored in the article's `comments` array:
//!   `{id, text, user_id | authorId, guest_name | guestName, timestamp}`.
//!
//! [`CommentRecord`] accepts both; [`Comment::from_record`] reduces it to a
//! [`Commenter`]: a user id, else a guest name, else an anonymous author the server
//! could not resolve. Anonymous comments are shown but belong to no one.

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use super::ids;
use super::timestamp::{parse_timestamp, Timestamp};

/// Who wrote a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commenter {
    User { id: String, name: Option<String> },
    Guest { name: String },
    /// No user id and no guest name, e.g. a deleted account.
    Anonymous { name: Option<String> },
}

impl Commenter {
    pub fn display_name(&self) -> &str {
        match self {
            Commenter::User { name: Some(name), .. } => name,
            Commenter::User { name: None, .. } => "Anonymous",
            Commenter::Guest { name } => name,
            Commenter::Anonymous { name: Some(name) } => name,
            Commenter::Anonymous { name: None } => "Anonymous",
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Commenter::User { id, .. } => Some(id),
            Commenter::Guest { .. } | Commenter::Anonymous { .. } => None,
        }
    }

    pub fn is_guest(&self) -> bool {
        matches!(self, Commenter::Guest { .. })
    }
}

/// Normalised comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: String,
    pub text: String,
    pub commenter: Commenter,
    pub created_at: Option<Timestamp>,
}

/// A comment about to be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub text: String,
    pub commenter: Commenter,
}

impl NewComment {
    /// Entry for an article's embedded `comments` array.
    pub fn to_embedded_value(&self, id: i64, at: Timestamp) -> serde_json::Value {
        let mut entry = serde_json::json!({
            "id": id,
            "text": self.text,
            "timestamp": at.to_rfc3339_opts(SecondsFormat::Millis, true),
        });
        match &self.commenter {
            Commenter::User { id, name } => {
                // json-server ids are integers; keep them that way.
                entry["user_id"] = match id.parse::<i64>() {
                    Ok(n) => n.into(),
                    Err(_) => id.as_str().into(),
                };
                if let Some(name) = name {
                    entry["username"] = name.as_str().into();
                }
            }
            Commenter::Guest { name } => entry["guest_name"] = name.as_str().into(),
            Commenter::Anonymous { name: Some(name) } => entry["username"] = name.as_str().into(),
            Commenter::Anonymous { name: None } => {}
        }
        entry
    }
}

/// Comment as it appears on the wire, in either shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CommentRecord {
    #[serde(deserialize_with = "ids::id")]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "ids::opt_id", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(
        rename = "authorId",
        default,
        deserialize_with = "ids::opt_id",
        skip_serializing
    )]
    pub author_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    #[serde(rename = "guestName", default, skip_serializing)]
    pub guest_name_camel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Comment {
    /// Normalise a wire record.
    pub fn from_record(record: CommentRecord) -> Self {
        let user_id = record.user_id.or(record.author_id);
        let guest = non_blank(record.guest_name.or(record.guest_name_camel));
        let name = non_blank(record.full_name).or_else(|| non_blank(record.username));

        let commenter = match (user_id, guest) {
            (Some(id), _) => Commenter::User { id, name },
            (None, Some(name)) => Commenter::Guest { name },
            (None, None) => Commenter::Anonymous { name },
        };

        let created_at = record
            .created_at
            .or(record.timestamp)
            .as_deref()
            .and_then(parse_timestamp);

        Self {
            id: record.id,
            text: record.text,
            commenter,
            created_at,
        }
    }

    /// Parse one JSON value, dropping anything that does not look like a comment.
    pub fn from_value(value: serde_json::Value) -> Option<Self> {
        match serde_json::from_value::<CommentRecord>(value) {
            Ok(record) => Some(Self::from_record(record)),
            Err(e) => {
                tracing::warn!("Skipping malformed comment: {e}");
                None
            }
        }
    }

    /// Whether the user `user_id` wrote this comment. Guest comments belong to no one.
    pub fn is_by(&self, user_id: Option<&str>) -> bool {
        matches!((self.commenter.user_id(), user_id), (Some(a), Some(b)) if a == b)
    }
}

/// Newest first; comments without a timestamp go last.
pub(crate) fn sort_newest_first(comments: &mut [Comment]) {
    comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
