//! Data models for the news API.
//!
//! Each resource has a loose *record* type that accepts every shape the backends have
//! produced over time, and a normalised type the views render. The `From`/`from_record`
//! conversions in each module are the adapter between the two.

mod article;
mod comment;
pub(crate) mod ids;
mod timestamp;
mod user;

pub use article::{
    Article, ArticleComments, ArticlePatch, ArticleRecord, AuthorInfo, ContentField, NewArticle,
    DEFAULT_CATEGORY,
};
pub use comment::{Comment, CommentRecord, Commenter, NewComment};
pub(crate) use comment::sort_newest_first;
pub use timestamp::{parse_timestamp, Timestamp};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserInfo};
