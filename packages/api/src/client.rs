//! # HTTP client adapter
//!
//! [`NewsClient`] is the only code that talks to the REST API. It owns the base URL
//! and a [`TokenSource`]; every request asks the token source for a bearer token at
//! the moment the request is built, so a login or logout in one view is seen by the
//! next request from any other view without re-creating the client.
//!
//! ## Endpoints
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`register`](NewsClient::register) | `POST /register` |
//! | [`login`](NewsClient::login) | `POST /login` |
//! | [`list_users`](NewsClient::list_users) | `GET /users` |
//! | [`get_user`](NewsClient::get_user) | `GET /users/:id` |
//! | [`current_user`](NewsClient::current_user) | `GET /users/me` |
//! | [`list_articles`](NewsClient::list_articles) | `GET /news` |
//! | [`get_article`](NewsClient::get_article) | `GET /news/:id` |
//! | [`create_article`](NewsClient::create_article) | `POST /news` |
//! | [`update_article`](NewsClient::update_article) | `PATCH /news/:id` |
//! | [`delete_article`](NewsClient::delete_article) | `DELETE /news/:id` |
//! | [`list_comments`](NewsClient::list_comments) | `GET /news/:id/comments` |
//! | [`add_comment`](NewsClient::add_comment) | `POST /news/:id/comments` |
//! | [`delete_comment`](NewsClient::delete_comment) | `DELETE /comments/:id` |
//!
//! [`append_embedded_comment`](NewsClient::append_embedded_comment) and
//! [`remove_embedded_comment`](NewsClient::remove_embedded_comment) implement the
//! embedded comment model as read-modify-write: fetch the article, change its raw
//! `comments` array, `PATCH` the whole array back. Entries are written back exactly
//! as read, including ones the views cannot display. Two people commenting at the same
//! time can overwrite each other's comment; the resource endpoints do not have this
//! problem.
//!
//! No call retries or times out on its own; errors are returned to the caller as
//! [`ApiError`].

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::{KeyValueStore, SessionStore};

use crate::error::ApiError;
use crate::models::ids::value_id;
use crate::models::{
    sort_newest_first, Article, ArticlePatch, ArticleRecord, Comment, LoginRequest,
    LoginResponse, NewArticle, NewComment, RegisterRequest, RegisterResponse, UserInfo,
};

/// Provides the bearer token for each request. Returns `None` to send the request
/// without an Authorization header.
pub trait TokenSource: Send + Sync + 'static {
    fn token(&self) -> Option<String>;
}

/// No authentication; requests go out anonymous.
pub struct NoAuth;

impl TokenSource for NoAuth {
    fn token(&self) -> Option<String> {
        None
    }
}

/// Static bearer token (already obtained externally).
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenSource for StaticToken {
    fn token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

impl<S> TokenSource for SessionStore<S>
where
    S: KeyValueStore + Send + Sync + 'static,
{
    fn token(&self) -> Option<String> {
        self.get_token()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CommentList {
    Wrapped { comments: Vec<serde_json::Value> },
    Bare(Vec<serde_json::Value>),
}

#[derive(Deserialize)]
struct CreatedResponse {
    #[serde(default, deserialize_with = "crate::models::ids::opt_id")]
    id: Option<String>,
    #[serde(default)]
    comment: Option<serde_json::Value>,
}

/// Client for the news REST API.
#[derive(Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    base_url: String,
    token_source: Arc<dyn TokenSource>,
}

impl std::fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl NewsClient {
    pub fn new(base_url: impl Into<String>, token_source: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_source,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, read now rather than at construction.
    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token_source.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let request = self.authed(builder).build()?;
        tracing::debug!("{} {}", request.method(), request.url());
        let resp = self.http.execute(request).await?;
        let status = resp.status();
        if !status.is_success() {
            let code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            let err = ApiError::from_response(code, &body);
            tracing::warn!("Request failed: {err}");
            return Err(err);
        }
        Ok(resp)
    }

    /// Parse an API response body.
    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ApiError> {
        resp.json::<R>()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.send(self.http.get(self.url(path))).await?;
        Self::parse(resp).await
    }

    // ── Auth ────────────────────────────────────────────────────────

    pub async fn register(&self, req: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        let resp = self.send(self.http.post(self.url("/register")).json(req)).await?;
        Self::parse(resp).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let resp = self.send(self.http.post(self.url("/login")).json(&req)).await?;
        Self::parse(resp).await
    }

    // ── Users ───────────────────────────────────────────────────────

    pub async fn list_users(&self) -> Result<Vec<UserInfo>, ApiError> {
        self.get_json("/users").await
    }

    pub async fn get_user(&self, id: &str) -> Result<UserInfo, ApiError> {
        self.get_json(&format!("/users/{id}")).await
    }

    pub async fn current_user(&self) -> Result<UserInfo, ApiError> {
        self.get_json("/users/me").await
    }

    /// Map author id → display name for `articles`.
    ///
    /// Names embedded in the documents are used as-is; every other distinct author id
    /// costs one `GET /users/:id`. Lookups that fail are logged and left out, and the
    /// view shows a placeholder for that author.
    pub async fn author_names(&self, articles: &[Article]) -> HashMap<String, String> {
        let mut names = HashMap::new();
        let mut missing = Vec::new();
        let mut seen = HashSet::new();

        for article in articles {
            let Some(author_id) = article.author_id.as_deref() else {
                continue;
            };
            match article.author_name() {
                Some(name) => {
                    names.insert(author_id.to_string(), name.to_string());
                }
                None => {
                    if seen.insert(author_id.to_string()) {
                        missing.push(author_id.to_string());
                    }
                }
            }
        }

        for id in missing {
            if names.contains_key(&id) {
                continue;
            }
            match self.get_user(&id).await {
                Ok(user) => {
                    names.insert(id, user.display_name().to_string());
                }
                Err(e) => tracing::warn!("Could not resolve author {id}: {e}"),
            }
        }
        names
    }

    // ── News ────────────────────────────────────────────────────────

    /// All articles. Entries that cannot be read as an article are skipped.
    pub async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        let values: Vec<serde_json::Value> = self.get_json("/news?_expand=author").await?;
        Ok(values
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<ArticleRecord>(value) {
                Ok(record) => Some(Article::from(record)),
                Err(e) => {
                    tracing::warn!("Skipping malformed article: {e}");
                    None
                }
            })
            .collect())
    }

    pub async fn get_article(&self, id: &str) -> Result<Article, ApiError> {
        let record: ArticleRecord = self.get_json(&format!("/news/{id}")).await?;
        Ok(record.into())
    }

    /// Create an article; returns the new id when the server reports one.
    /// A success with an empty body still counts as created.
    pub async fn create_article(&self, article: &NewArticle) -> Result<Option<String>, ApiError> {
        let resp = self.send(self.http.post(self.url("/news")).json(article)).await?;
        let body = resp.text().await?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let created: CreatedResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))?;
        Ok(created.id)
    }

    pub async fn update_article(&self, id: &str, patch: &ArticlePatch) -> Result<(), ApiError> {
        self.send(self.http.patch(self.url(&format!("/news/{id}"))).json(patch))
            .await?;
        Ok(())
    }

    pub async fn delete_article(&self, id: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(&format!("/news/{id}"))))
            .await?;
        Ok(())
    }

    // ── Comments (resource) ─────────────────────────────────────────

    /// Comments for an article, newest first.
    pub async fn list_comments(&self, news_id: &str) -> Result<Vec<Comment>, ApiError> {
        let list: CommentList = self.get_json(&format!("/news/{news_id}/comments")).await?;
        let values = match list {
            CommentList::Wrapped { comments } => comments,
            CommentList::Bare(values) => values,
        };
        let mut comments: Vec<Comment> = values.into_iter().filter_map(Comment::from_value).collect();
        sort_newest_first(&mut comments);
        Ok(comments)
    }

    /// Post a comment as the signed-in user. Returns the stored comment when the
    /// server echoes it back.
    pub async fn add_comment(&self, news_id: &str, text: &str) -> Result<Option<Comment>, ApiError> {
        let body = serde_json::json!({ "text": text });
        let resp = self
            .send(self.http.post(self.url(&format!("/news/{news_id}/comments"))).json(&body))
            .await?;
        let created: CreatedResponse = Self::parse(resp).await?;
        Ok(created.comment.and_then(Comment::from_value))
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<(), ApiError> {
        self.send(self.http.delete(self.url(&format!("/comments/{comment_id}"))))
            .await?;
        Ok(())
    }

    // ── Comments (embedded) ─────────────────────────────────────────

    /// The article's `comments` array as stored. A missing array reads as empty.
    async fn raw_embedded_comments(&self, article_id: &str) -> Result<Vec<serde_json::Value>, ApiError> {
        let mut doc: serde_json::Value = self.get_json(&format!("/news/{article_id}")).await?;
        match doc.get_mut("comments").map(serde_json::Value::take) {
            Some(serde_json::Value::Array(entries)) => Ok(entries),
            Some(serde_json::Value::Null) | None => Ok(Vec::new()),
            Some(other) => Err(ApiError::Decode(format!("comments is not an array: {other}"))),
        }
    }

    /// PATCH `entries` back and return them normalised, newest first.
    async fn write_embedded_comments(
        &self,
        article_id: &str,
        entries: Vec<serde_json::Value>,
    ) -> Result<Vec<Comment>, ApiError> {
        let mut comments: Vec<Comment> = entries
            .iter()
            .cloned()
            .filter_map(Comment::from_value)
            .collect();
        sort_newest_first(&mut comments);
        self.update_article(article_id, &ArticlePatch::comments(entries))
            .await?;
        Ok(comments)
    }

    /// Append a comment to the article's embedded array and PATCH the array back.
    /// Returns the thread as written, newest first.
    pub async fn append_embedded_comment(
        &self,
        article_id: &str,
        comment: NewComment,
    ) -> Result<Vec<Comment>, ApiError> {
        let mut entries = self.raw_embedded_comments(article_id).await?;
        let now = chrono::Utc::now();
        entries.push(comment.to_embedded_value(now.timestamp_millis(), now));
        self.write_embedded_comments(article_id, entries).await
    }

    /// Remove one comment from the article's embedded array and PATCH the array back.
    pub async fn remove_embedded_comment(
        &self,
        article_id: &str,
        comment_id: &str,
    ) -> Result<Vec<Comment>, ApiError> {
        let mut entries = self.raw_embedded_comments(article_id).await?;
        entries.retain(|entry| value_id(entry).as_deref() != Some(comment_id));
        self.write_embedded_comments(article_id, entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Commenter;
    use store::{MemoryStore, SessionUser};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn session() -> SessionStore<MemoryStore> {
        SessionStore::new(MemoryStore::new())
    }

    fn client_for(server: &MockServer, session: &SessionStore<MemoryStore>) -> NewsClient {
        NewsClient::new(server.uri(), Arc::new(session.clone()))
    }

    #[tokio::test]
    async fn token_is_read_at_request_time() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .and(header("authorization", "Bearer t0k3n"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "u1", "username": "ada"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = session();
        let client = client_for(&server, &session);
        // Log in after the client exists.
        session.sign_in(&SessionUser::new("u1", "ada"), Some("t0k3n"));

        let me = client.current_user().await.unwrap();
        assert_eq!(me.display_name(), "ada");
    }

    #[tokio::test]
    async fn no_authorization_header_when_logged_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "name": "Ada"}, {"id": 2, "name": "Grace"}
            ])))
            .mount(&server)
            .await;

        let session = session();
        session.sign_in(&SessionUser::new("1", "Ada"), Some("t0k3n"));
        let client = client_for(&server, &session);
        session.logout();

        let users = client.list_users().await.unwrap();
        assert_eq!(users.len(), 2);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn login_returns_token_and_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "access_token": "jwt", "token_type": "bearer",
                "user": {"id": "u1", "username": "ada", "email": "a@x.io", "full_name": null}
            })))
            .mount(&server)
            .await;

        let client = NewsClient::new(server.uri(), Arc::new(NoAuth));
        let resp = client.login("ada", "secret").await.unwrap();
        assert_eq!(resp.access_token, "jwt");
        assert_eq!(resp.user.id, "u1");

        let requests = server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body, serde_json::json!({"username": "ada", "password": "secret"}));
    }

    #[tokio::test]
    async fn login_failure_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"detail": "Invalid credentials"})),
            )
            .mount(&server)
            .await;

        let client = NewsClient::new(server.uri(), Arc::new(NoAuth));
        let err = client.login("ada", "wrong").await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.user_message(), "Invalid credentials");
    }

    #[tokio::test]
    async fn list_articles_normalises_both_shapes() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": "a1", "title": "Modern", "content": "c", "author_id": "u1",
                 "author": {"id": "u1", "username": "ada", "full_name": null}},
                {"id": 2, "title": "Legacy", "body": "b", "author_id": 5, "comments": []},
                {"title": "no id"}
            ])))
            .mount(&server)
            .await;

        let client = NewsClient::new(server.uri(), Arc::new(NoAuth));
        let articles = client.list_articles().await.unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].author_name(), Some("ada"));
        assert_eq!(articles[1].content, "b");
        assert_eq!(articles[1].author_id.as_deref(), Some("5"));
    }

    #[tokio::test]
    async fn get_missing_article_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/nope"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(serde_json::json!({"detail": "News not found"})),
            )
            .mount(&server)
            .await;

        let client = NewsClient::new(server.uri(), Arc::new(NoAuth));
        let err = client.get_article("nope").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.user_message(), "News not found");
    }

    #[tokio::test]
    async fn author_names_looks_up_each_missing_author_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/5"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 5, "name": "Grace"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/users/9"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let client = NewsClient::new(server.uri(), Arc::new(NoAuth));
        let articles: Vec<Article> = [
            serde_json::json!({"id": 1, "title": "a", "body": "x", "author_id": 5}),
            serde_json::json!({"id": 2, "title": "b", "body": "x", "author_id": 5}),
            serde_json::json!({"id": 3, "title": "c", "body": "x", "author_id": 9}),
            serde_json::json!({"id": 4, "title": "d", "content": "x", "author_id": "u1",
                               "author": {"id": "u1", "username": "ada"}}),
        ]
        .into_iter()
        .map(|v| serde_json::from_value::<ArticleRecord>(v).unwrap().into())
        .collect();

        let names = client.author_names(&articles).await;
        assert_eq!(names.get("5").map(String::as_str), Some("Grace"));
        assert_eq!(names.get("u1").map(String::as_str), Some("ada"));
        assert!(!names.contains_key("9"));
    }

    #[tokio::test]
    async fn list_comments_accepts_wrapped_and_bare_lists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/n1/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "news_id": "n1", "count": 2, "comments": [
                    {"id": "c1", "user_id": "u1", "username": "ada", "text": "older",
                     "created_at": "2024-01-01T00:00:00"},
                    {"id": "c2", "user_id": "u2", "username": "bob", "text": "newer",
                     "created_at": "2024-02-01T00:00:00"}
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/news/n2/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                {"id": 1, "user_id": 2, "text": "bare"}
            ])))
            .mount(&server)
            .await;

        let client = NewsClient::new(server.uri(), Arc::new(NoAuth));
        let wrapped = client.list_comments("n1").await.unwrap();
        let texts: Vec<_> = wrapped.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["newer", "older"]);

        let bare = client.list_comments("n2").await.unwrap();
        assert_eq!(bare.len(), 1);
    }

    #[tokio::test]
    async fn add_comment_posts_text_with_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/news/n1/comments"))
            .and(header("authorization", "Bearer t0k3n"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "message": "Comment created successfully", "id": "c9",
                "comment": {"id": "c9", "news_id": "n1", "user_id": "u1", "username": "ada",
                            "full_name": null, "text": "Great read", "created_at": "2024-03-01T10:00:00"}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let session = session();
        session.sign_in(&SessionUser::new("u1", "ada"), Some("t0k3n"));
        let client = client_for(&server, &session);

        let comment = client.add_comment("n1", "Great read").await.unwrap().unwrap();
        assert_eq!(comment.id, "c9");
        assert!(comment.is_by(Some("u1")));
    }

    async fn mount_legacy_article(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/news/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": 4, "title": "t", "body": "b", "author_id": 1,
                "comments": [
                    {"id": 1, "text": "first", "user_id": 1, "mood": "happy",
                     "timestamp": "2024-01-01T00:00:00.000Z"},
                    {"id": 2, "text": "ghost", "user_id": null}
                ]
            })))
            .mount(server)
            .await;
        Mock::given(method("PATCH"))
            .and(path("/news/4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn patched_comments(server: &MockServer) -> serde_json::Value {
        let requests = server.received_requests().await.unwrap();
        let patch = requests.iter().find(|r| r.method.as_str() == "PATCH").unwrap();
        let body: serde_json::Value = serde_json::from_slice(&patch.body).unwrap();
        assert!(body.get("title").is_none());
        body["comments"].clone()
    }

    #[tokio::test]
    async fn append_embedded_comment_keeps_stored_entries_verbatim() {
        let server = MockServer::start().await;
        mount_legacy_article(&server).await;

        let client = NewsClient::new(server.uri(), Arc::new(NoAuth));
        let thread = client
            .append_embedded_comment(
                "4",
                NewComment {
                    text: "second".into(),
                    commenter: Commenter::Guest { name: "Visitor".into() },
                },
            )
            .await
            .unwrap();
        assert_eq!(thread.len(), 3);
        assert_eq!(thread[0].text, "second");

        let comments = patched_comments(&server).await;
        let comments = comments.as_array().unwrap();
        assert_eq!(comments.len(), 3);
        assert_eq!(
            comments[0],
            serde_json::json!({"id": 1, "text": "first", "user_id": 1, "mood": "happy",
                               "timestamp": "2024-01-01T00:00:00.000Z"})
        );
        assert_eq!(comments[1], serde_json::json!({"id": 2, "text": "ghost", "user_id": null}));
        assert_eq!(comments[2]["guest_name"], "Visitor");
        assert!(comments[2]["id"].is_i64());
    }

    #[tokio::test]
    async fn remove_embedded_comment_leaves_other_entries_untouched() {
        let server = MockServer::start().await;
        mount_legacy_article(&server).await;

        let client = NewsClient::new(server.uri(), Arc::new(NoAuth));
        let thread = client.remove_embedded_comment("4", "1").await.unwrap();
        assert_eq!(thread.len(), 1);
        assert_eq!(thread[0].text, "ghost");

        let comments = patched_comments(&server).await;
        assert_eq!(
            comments,
            serde_json::json!([{"id": 2, "text": "ghost", "user_id": null}])
        );
    }

    #[tokio::test]
    async fn list_comments_keeps_unresolved_commenters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news/n1/comments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "news_id": "n1", "count": 2, "comments": [
                    {"id": "c1", "user_id": "u1", "username": "ada", "text": "mine",
                     "created_at": "2024-02-01T00:00:00"},
                    {"id": "c2", "user_id": null, "username": null, "full_name": null,
                     "text": "orphaned", "created_at": "2024-01-01T00:00:00"}
                ]
            })))
            .mount(&server)
            .await;

        let client = NewsClient::new(server.uri(), Arc::new(NoAuth));
        let comments = client.list_comments("n1").await.unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1].commenter.display_name(), "Anonymous");
        assert!(!comments[1].is_by(Some("u1")));
    }

    #[tokio::test]
    async fn create_article_accepts_empty_success_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/news"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let article = NewArticle {
            title: "Title".into(),
            content: "A body that is long enough".into(),
            category: None,
            author_id: None,
            embedded_comments: false,
        };
        let client = NewsClient::new(server.uri(), Arc::new(NoAuth));
        assert_eq!(client.create_article(&article).await.unwrap(), None);
    }

    #[tokio::test]
    async fn delete_article_maps_forbidden() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/news/a1"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "detail": "Not authorized to delete this news"
            })))
            .mount(&server)
            .await;

        let client = NewsClient::new(server.uri(), Arc::new(StaticToken::new("t")));
        let err = client.delete_article("a1").await.unwrap_err();
        assert!(err.is_forbidden());
        assert_eq!(err.user_message(), "Not authorized to delete this news");
    }
}
