//! # Articles
//!
//! The article document has drifted between backends:
//!
//! | Concern | JSON-server | FastAPI |
//! |---------|-------------|---------|
//! | body field | `body` | `content` |
//! | owner | `author_id` / `authorId` (int), `author` via `_expand` | `author_id` (hex) + `author {id, username, full_name}` |
//! | comments | embedded `comments` array | separate resource |
//!
//! [`ArticleRecord`] accepts all of these. [`Article`] is the normalised view model:
//! one `content`, an optional [`AuthorInfo`], and an explicit [`ArticleComments`] tag
//! saying whether the thread came embedded or must be fetched. It also remembers which
//! body field the server used ([`ContentField`]) so updates are written back in the
//! same shape.

use serde::{Deserialize, Serialize};

use super::comment::{sort_newest_first, Comment, CommentRecord};
use super::ids;
use super::timestamp::{parse_timestamp, Timestamp};

pub const DEFAULT_CATEGORY: &str = "General";

/// Which field the server keeps the article body in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentField {
    #[default]
    Content,
    Body,
}

/// Author display info resolved from the article document.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorInfo {
    pub id: Option<String>,
    pub name: String,
}

/// Where an article's comments live.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticleComments {
    /// Comments embedded in the document, newest first.
    Embedded(Vec<Comment>),
    /// Comments must be fetched from `/news/:id/comments`.
    Remote,
}

/// Normalised article.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: Option<String>,
    pub author: Option<AuthorInfo>,
    pub category: String,
    pub image_url: Option<String>,
    pub created_at: Option<Timestamp>,
    pub updated_at: Option<Timestamp>,
    pub comments: ArticleComments,
    pub content_field: ContentField,
}

impl Article {
    /// Author name if the document carried one.
    pub fn author_name(&self) -> Option<&str> {
        self.author.as_ref().map(|a| a.name.as_str())
    }

    /// Embedded comments, or an empty slice for remote threads.
    pub fn embedded_comments(&self) -> &[Comment] {
        match &self.comments {
            ArticleComments::Embedded(comments) => comments,
            ArticleComments::Remote => &[],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorRecord {
    #[serde(default, deserialize_with = "ids::opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

impl AuthorRecord {
    fn display_name(&self) -> Option<String> {
        [&self.full_name, &self.username, &self.name]
            .into_iter()
            .flatten()
            .find(|v| !v.trim().is_empty())
            .cloned()
    }
}

/// Article as it appears on the wire, in any of its shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleRecord {
    #[serde(deserialize_with = "ids::id")]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default, deserialize_with = "ids::opt_id")]
    pub author_id: Option<String>,
    #[serde(rename = "authorId", default, deserialize_with = "ids::opt_id")]
    pub author_id_camel: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorRecord>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, alias = "updatedAt")]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub comments: Option<Vec<serde_json::Value>>,
}

impl From<ArticleRecord> for Article {
    fn from(record: ArticleRecord) -> Self {
        let (content, content_field) = match (record.content, record.body) {
            (Some(content), _) => (content, ContentField::Content),
            (None, Some(body)) => (body, ContentField::Body),
            (None, None) => (String::new(), ContentField::default()),
        };

        let embedded_author_id = record.author.as_ref().and_then(|a| a.id.clone());
        let author_id = record
            .author_id
            .or(record.author_id_camel)
            .or(embedded_author_id);

        let author_name = record
            .author
            .as_ref()
            .and_then(AuthorRecord::display_name)
            .or(record.author_name.filter(|n| !n.trim().is_empty()));
        let author = author_name.map(|name| AuthorInfo {
            id: author_id.clone(),
            name,
        });

        let comments = match record.comments {
            Some(values) => {
                let mut comments: Vec<Comment> =
                    values.into_iter().filter_map(Comment::from_value).collect();
                sort_newest_first(&mut comments);
                ArticleComments::Embedded(comments)
            }
            None => ArticleComments::Remote,
        };

        Article {
            id: record.id,
            title: record.title,
            content,
            author_id,
            author,
            category: record
                .category
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            image_url: record.image_url.filter(|u| !u.trim().is_empty()),
            created_at: record.created_at.as_deref().and_then(parse_timestamp),
            updated_at: record.updated_at.as_deref().and_then(parse_timestamp),
            comments,
            content_field,
        }
    }
}

/// Body of `POST /news`.
///
/// The body text is sent as both `content` and `body` so either backend stores it.
/// `author_id` is only read by backends that do not derive it from the token.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub author_id: Option<String>,
    /// Start the document with an empty `comments` array (embedded comment model).
    pub embedded_comments: bool,
}

#[derive(Serialize)]
struct NewArticleWire<'a> {
    title: &'a str,
    content: &'a str,
    body: &'a str,
    category: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    author_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<Vec<CommentRecord>>,
}

impl Serialize for NewArticle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        NewArticleWire {
            title: &self.title,
            content: &self.content,
            body: &self.content,
            category: self.category.as_deref().unwrap_or(DEFAULT_CATEGORY),
            author_id: self.author_id.as_deref(),
            comments: self.embedded_comments.then(Vec::new),
        }
        .serialize(serializer)
    }
}

/// Body of `PATCH /news/:id`. Only set fields are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArticlePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Raw entries, so fields this client does not model are written back as read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<serde_json::Value>>,
}

impl ArticlePatch {
    /// Edit of title, body and category, written in the shape the article came in.
    pub fn edit(article: &Article, title: String, content: String, category: String) -> Self {
        let mut patch = Self {
            title: Some(title),
            category: Some(category),
            ..Self::default()
        };
        match article.content_field {
            ContentField::Content => patch.content = Some(content),
            ContentField::Body => patch.body = Some(content),
        }
        patch
    }

    /// Replace the embedded comment array.
    pub fn comments(comments: Vec<serde_json::Value>) -> Self {
        Self {
            comments: Some(comments),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article(value: serde_json::Value) -> Article {
        serde_json::from_value::<ArticleRecord>(value).unwrap().into()
    }

    #[test]
    fn test_fastapi_shape() {
        let a = article(json!({
            "id": "65a1", "title": "Hello", "content": "A long enough body text",
            "category": "Tech", "image_url": null,
            "author_id": "u1",
            "author": {"id": "u1", "username": "ada", "full_name": "Ada Lovelace"},
            "created_at": "2024-03-01T10:00:00", "updated_at": "2024-03-02T10:00:00"
        }));
        assert_eq!(a.content, "A long enough body text");
        assert_eq!(a.content_field, ContentField::Content);
        assert_eq!(a.author_id.as_deref(), Some("u1"));
        assert_eq!(a.author_name(), Some("Ada Lovelace"));
        assert_eq!(a.category, "Tech");
        assert_eq!(a.comments, ArticleComments::Remote);
        assert!(a.created_at.is_some());
    }

    #[test]
    fn test_json_server_shape() {
        let a = article(json!({
            "id": 4, "title": "Old", "body": "legacy body", "author_id": 2,
            "comments": [
                {"id": 1, "text": "first", "user_id": 2, "timestamp": "2024-01-01T00:00:00.000Z"},
                {"id": 2, "text": "second", "guestName": "Visitor", "timestamp": "2024-02-01T00:00:00.000Z"},
                {"id": 3, "text": "broken"}
            ]
        }));
        assert_eq!(a.id, "4");
        assert_eq!(a.content, "legacy body");
        assert_eq!(a.content_field, ContentField::Body);
        assert_eq!(a.author_id.as_deref(), Some("2"));
        assert!(a.author.is_none());
        assert_eq!(a.category, DEFAULT_CATEGORY);

        let texts: Vec<_> = a.embedded_comments().iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["second", "first", "broken"]);
    }

    #[test]
    fn test_camel_case_author_and_expanded_author() {
        let a = article(json!({
            "id": 1, "title": "t", "body": "b", "authorId": 7,
            "author": {"id": 7, "name": "Grace"}
        }));
        assert_eq!(a.author_id.as_deref(), Some("7"));
        assert_eq!(a.author_name(), Some("Grace"));
    }

    #[test]
    fn test_author_id_from_embedded_author_only() {
        let a = article(json!({"id": 1, "title": "t", "content": "c", "author": {"id": "u9", "username": "zed"}}));
        assert_eq!(a.author_id.as_deref(), Some("u9"));
    }

    #[test]
    fn test_author_name_field() {
        let a = article(json!({"id": 1, "title": "t", "content": "c", "author_id": "u1", "author_name": "Ada"}));
        assert_eq!(a.author_name(), Some("Ada"));
    }

    #[test]
    fn test_new_article_sends_both_body_fields() {
        let new = NewArticle {
            title: "Title".into(),
            content: "Twenty characters or more".into(),
            category: None,
            author_id: Some("u1".into()),
            embedded_comments: true,
        };
        let value = serde_json::to_value(&new).unwrap();
        assert_eq!(value["content"], "Twenty characters or more");
        assert_eq!(value["body"], "Twenty characters or more");
        assert_eq!(value["category"], "General");
        assert_eq!(value["author_id"], "u1");
        assert_eq!(value["comments"], json!([]));
    }

    #[test]
    fn test_patch_follows_content_field() {
        let legacy = article(json!({"id": 1, "title": "t", "body": "b"}));
        let patch = ArticlePatch::edit(&legacy, "T".into(), "new body".into(), "News".into());
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({"title": "T", "body": "new body", "category": "News"}));

        let modern = article(json!({"id": 1, "title": "t", "content": "c"}));
        let patch = ArticlePatch::edit(&modern, "T".into(), "new".into(), "News".into());
        assert_eq!(patch.content.as_deref(), Some("new"));
        assert!(patch.body.is_none());
    }
}
