//! # User model and auth payloads
//!
//! [`UserInfo`] is the read-only view of a user as returned by `GET /users`,
//! `GET /users/:id`, `GET /users/me` and inside the `POST /login` response. The
//! JSON-server backend names the display field `name`; the FastAPI backend sends
//! `username` plus an optional `full_name`. Both are accepted.
//!
//! [`UserInfo::display_name`] picks the best label: full name, then username (or
//! `name`), then `"Anonymous"`.
//!
//! [`LoginRequest`]/[`LoginResponse`] and [`RegisterRequest`]/[`RegisterResponse`] are
//! the bodies of the two auth endpoints.

use serde::{Deserialize, Serialize};
use store::SessionUser;

use super::ids;

/// User information as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    #[serde(deserialize_with = "ids::id")]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    /// JSON-server display name.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl UserInfo {
    /// Get display name, falling back to the username and finally "Anonymous".
    pub fn display_name(&self) -> &str {
        [&self.full_name, &self.username, &self.name]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .find(|v| !v.trim().is_empty())
            .unwrap_or("Anonymous")
    }

    /// The identity to persist in the session store.
    pub fn to_session_user(&self) -> SessionUser {
        SessionUser::new(self.id.clone(), self.display_name())
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /login` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: UserInfo,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// `POST /register` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "ids::opt_id")]
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallbacks() {
        let user: UserInfo = serde_json::from_value(serde_json::json!({
            "id": "u1", "username": "ada", "full_name": "Ada Lovelace"
        }))
        .unwrap();
        assert_eq!(user.display_name(), "Ada Lovelace");

        let user: UserInfo =
            serde_json::from_value(serde_json::json!({"id": 2, "name": "Grace"})).unwrap();
        assert_eq!(user.id, "2");
        assert_eq!(user.display_name(), "Grace");

        let user: UserInfo =
            serde_json::from_value(serde_json::json!({"id": 3, "full_name": " "})).unwrap();
        assert_eq!(user.display_name(), "Anonymous");
    }

    #[test]
    fn test_login_response() {
        let resp: LoginResponse = serde_json::from_value(serde_json::json!({
            "access_token": "jwt",
            "token_type": "bearer",
            "user": {"id": "65a1", "username": "ada", "email": "ada@example.com", "full_name": null}
        }))
        .unwrap();
        assert_eq!(resp.access_token, "jwt");
        assert_eq!(resp.user.to_session_user(), SessionUser::new("65a1", "ada"));
    }
}
