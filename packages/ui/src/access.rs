//! Client-side permission checks.
//!
//! These only decide what the UI offers. The server makes its own decision on every
//! write and its answer wins.

use api::Comment;
use store::{CommentMode, Session, SessionUser};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Denied {
    #[error("You need to log in first.")]
    NotLoggedIn,
    #[error("You can only change news you wrote.")]
    NotOwner,
}

/// The signed-in user, or [`Denied::NotLoggedIn`].
pub fn require_login(session: &Session) -> Result<SessionUser, Denied> {
    session.user().ok_or(Denied::NotLoggedIn)
}

/// Succeeds only when the session user wrote the article.
pub fn require_owner(session: &Session, author_id: Option<&str>) -> Result<SessionUser, Denied> {
    let user = require_login(session)?;
    if session.owns(author_id) {
        Ok(user)
    } else {
        Err(Denied::NotOwner)
    }
}

pub fn can_delete_comment(session: &Session, comment: &Comment) -> bool {
    comment.is_by(session.user_id.as_deref())
}

/// Who may post in the comment form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentAccess {
    Member(SessionUser),
    /// No session, but the thread accepts guest names.
    Guest,
    LoginRequired,
}

pub fn comment_access(mode: CommentMode, session: &Session) -> CommentAccess {
    match (session.user(), mode) {
        (Some(user), _) => CommentAccess::Member(user),
        (None, CommentMode::Embedded) => CommentAccess::Guest,
        (None, CommentMode::Resource) => CommentAccess::LoginRequired,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Commenter;

    fn session(id: &str) -> Session {
        Session {
            user_id: Some(id.to_string()),
            user_name: Some("Ada".to_string()),
            token: None,
        }
    }

    #[test]
    fn test_owner_check() {
        assert!(require_owner(&session("1"), Some("1")).is_ok());
        assert_eq!(require_owner(&session("1"), Some("2")), Err(Denied::NotOwner));
        assert_eq!(require_owner(&session("1"), None), Err(Denied::NotOwner));
        assert_eq!(
            require_owner(&Session::default(), Some("1")),
            Err(Denied::NotLoggedIn)
        );
    }

    #[test]
    fn test_comment_access() {
        assert_eq!(
            comment_access(CommentMode::Resource, &Session::default()),
            CommentAccess::LoginRequired
        );
        assert_eq!(
            comment_access(CommentMode::Embedded, &Session::default()),
            CommentAccess::Guest
        );
        assert!(matches!(
            comment_access(CommentMode::Resource, &session("1")),
            CommentAccess::Member(_)
        ));
    }

    #[test]
    fn test_only_author_deletes_comment() {
        let comment = Comment {
            id: "c1".into(),
            text: "hi".into(),
            commenter: Commenter::User { id: "1".into(), name: None },
            created_at: None,
        };
        assert!(can_delete_comment(&session("1"), &comment));
        assert!(!can_delete_comment(&session("2"), &comment));
        assert!(!can_delete_comment(&Session::default(), &comment));

        let guest = Comment {
            commenter: Commenter::Guest { name: "Visitor".into() },
            ..comment
        };
        assert!(!can_delete_comment(&session("1"), &guest));

        let orphan = Comment {
            commenter: Commenter::Anonymous { name: None },
            ..guest
        };
        assert!(!can_delete_comment(&session("1"), &orphan));
        assert!(!can_delete_comment(&Session::default(), &orphan));
    }
}
