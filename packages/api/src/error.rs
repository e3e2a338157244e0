/// Client-side API error.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP {status}: {message}")]
    Server { status: u16, message: String },

    #[error("network: {0}")]
    Network(#[from] reqwest::Error),

    #[error("decode: {0}")]
    Decode(String),
}

const GENERIC_MESSAGE: &str = "Something went wrong. Please try again.";

impl ApiError {
    /// Build a server error from a non-2xx response body.
    ///
    /// FastAPI answers `{"detail": "..."}`, Flask and JSON-server `{"message": "..."}`.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["detail", "message", "error"]
                    .iter()
                    .find_map(|key| value.get(*key)?.as_str().map(str::to_string))
            })
            .unwrap_or_default();
        ApiError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            ApiError::Network(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// Message fit for showing in the UI: the server's own text when it sent one,
    /// otherwise a generic line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server { message, .. } if !message.trim().is_empty() => message.clone(),
            ApiError::Server { status: 401, .. } => "Please log in again.".to_string(),
            ApiError::Server { status: 403, .. } => {
                "You are not allowed to do that.".to_string()
            }
            ApiError::Server { status: 404, .. } => "Not found.".to_string(),
            ApiError::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            _ => GENERIC_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_message() {
        let err = ApiError::from_response(404, r#"{"detail": "News not found"}"#);
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "News not found");
    }

    #[test]
    fn test_message_field() {
        let err = ApiError::from_response(401, r#"{"message": "Invalid credentials"}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_validation_detail_array_falls_back() {
        let err = ApiError::from_response(422, r#"{"detail": [{"loc": ["body"], "msg": "x"}]}"#);
        assert_eq!(err.user_message(), GENERIC_MESSAGE);
    }

    #[test]
    fn test_non_json_body() {
        let err = ApiError::from_response(403, "<html>nope</html>");
        assert!(err.is_forbidden());
        assert_eq!(err.user_message(), "You are not allowed to do that.");
        assert_eq!(err.to_string(), "HTTP 403: ");
    }
}
