//! Form validation and the submit state machine.
//!
//! Every form validates locally before any request is sent. A rejected draft never
//! reaches the network.
//!
//! ```text
//! Idle ─ begin ─▶ Validating ─┬─ invalid ─▶ Idle { error }
//!                             └─ valid ───▶ Submitting ─┬─ succeed ─▶ Success
//!                                                       └─ fail ────▶ Idle { error }
//! ```

use api::{Commenter, NewComment, RegisterRequest};

use crate::access::CommentAccess;

pub const MIN_CONTENT_CHARS: usize = 20;
pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Content must be at least 20 characters")]
    ContentTooShort,
    #[error("Comment cannot be empty")]
    EmptyComment,
    #[error("Please enter your name to comment")]
    MissingGuestName,
    #[error("Please log in to comment")]
    LoginRequired,
    #[error("Please enter your username")]
    MissingUsername,
    #[error("Please enter your password")]
    MissingPassword,
    #[error("Please select a user")]
    NoUserSelected,
    #[error("Please enter a valid email")]
    InvalidEmail,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormPhase {
    Idle { error: Option<String> },
    Validating,
    Submitting,
    Success,
}

impl Default for FormPhase {
    fn default() -> Self {
        FormPhase::Idle { error: None }
    }
}

impl FormPhase {
    /// Run validation for a submit. Returns the validated value and moves to
    /// `Submitting`, or records the error and returns to `Idle`. A second submit
    /// while one is in flight is ignored.
    pub fn begin<T>(&mut self, validate: impl FnOnce() -> Result<T, ValidationError>) -> Option<T> {
        if self.is_busy() {
            return None;
        }
        *self = FormPhase::Validating;
        match validate() {
            Ok(value) => {
                *self = FormPhase::Submitting;
                Some(value)
            }
            Err(e) => {
                *self = FormPhase::Idle {
                    error: Some(e.to_string()),
                };
                None
            }
        }
    }

    pub fn succeed(&mut self) {
        *self = FormPhase::Success;
    }

    /// The request failed; the form stays filled in and shows `message`.
    pub fn fail(&mut self, message: impl Into<String>) {
        *self = FormPhase::Idle {
            error: Some(message.into()),
        };
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, FormPhase::Validating | FormPhase::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormPhase::Idle { error } => error.as_deref(),
            _ => None,
        }
    }
}

/// Create/edit form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleDraft {
    pub title: String,
    pub content: String,
    pub category: String,
}

/// A draft that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidArticle {
    pub title: String,
    pub content: String,
    /// `None` when left blank; the API fills in the default category.
    pub category: Option<String>,
}

impl ArticleDraft {
    pub fn validate(&self) -> Result<ValidArticle, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        let content = self.content.trim();
        if content.chars().count() < MIN_CONTENT_CHARS {
            return Err(ValidationError::ContentTooShort);
        }
        let category = self.category.trim();
        Ok(ValidArticle {
            title: title.to_string(),
            content: content.to_string(),
            category: (!category.is_empty()).then(|| category.to_string()),
        })
    }
}

/// Build the comment to post for whoever is allowed to comment.
pub fn validate_comment(
    text: &str,
    guest_name: &str,
    access: &CommentAccess,
) -> Result<NewComment, ValidationError> {
    let text = text.trim();
    let commenter = match access {
        CommentAccess::LoginRequired => return Err(ValidationError::LoginRequired),
        CommentAccess::Member(user) => Commenter::User {
            id: user.id.clone(),
            name: Some(user.name.clone()),
        },
        CommentAccess::Guest => {
            let name = guest_name.trim();
            if name.is_empty() && !text.is_empty() {
                return Err(ValidationError::MissingGuestName);
            }
            Commenter::Guest {
                name: name.to_string(),
            }
        }
    };
    if text.is_empty() {
        return Err(ValidationError::EmptyComment);
    }
    Ok(NewComment {
        text: text.to_string(),
        commenter,
    })
}

/// Username and password for `POST /login`.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), ValidationError> {
    let username = username.trim();
    if username.is_empty() {
        return Err(ValidationError::MissingUsername);
    }
    if password.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    Ok((username.to_string(), password.to_string()))
}

pub fn validate_selection(selected: &str) -> Result<String, ValidationError> {
    match selected.trim() {
        "" => Err(ValidationError::NoUserSelected),
        id => Ok(id.to_string()),
    }
}

/// Register form contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl RegisterDraft {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(ValidationError::MissingUsername);
        }
        let email = self.email.trim();
        if !email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::PasswordTooShort);
        }
        let full_name = self.full_name.trim();
        Ok(RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            full_name: (!full_name.is_empty()).then(|| full_name.to_string()),
        })
    }
}
