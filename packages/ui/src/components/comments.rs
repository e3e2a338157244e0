//! Comment thread under an article.
//!
//! In `resource` mode comments come from `/news/:id/comments` and posting needs a
//! session. In `embedded` mode the thread is the article's own `comments` array and
//! visitors may post under a guest name. Either way the newest comment is on top.

use api::{Article, Comment};
use dioxus::prelude::*;
use store::CommentMode;

use super::{format_date, ConfirmDialog};
use crate::access::{can_delete_comment, comment_access, CommentAccess};
use crate::forms::{validate_comment, FormPhase};
use crate::{use_client, use_config, use_session};

#[component]
pub fn Comments(article: Article, on_login: EventHandler<()>) -> Element {
    let client = use_client();
    let session = use_session();
    let mode = use_config().comments.mode;
    let article_id = article.id.clone();

    let mut comments = use_signal(|| article.embedded_comments().to_vec());
    let mut loading = use_signal(|| mode == CommentMode::Resource);
    let mut error = use_signal(|| Option::<String>::None);
    let mut text = use_signal(String::new);
    let mut guest_name = use_signal(String::new);
    let mut phase = use_signal(FormPhase::default);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let _loader = use_resource({
        let client = client.clone();
        let article_id = article_id.clone();
        move || {
            let client = client.clone();
            let article_id = article_id.clone();
            async move {
                if mode != CommentMode::Resource {
                    return;
                }
                match client.list_comments(&article_id).await {
                    Ok(list) => comments.set(list),
                    Err(e) => {
                        tracing::error!("Failed to load comments for {article_id}: {e}");
                        error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            }
        }
    });

    let handle_submit = {
        let client = client.clone();
        let session = session.clone();
        let article_id = article_id.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            error.set(None);
            let access = comment_access(mode, &session.current());
            let Some(new_comment) = phase
                .write()
                .begin(|| validate_comment(&text.read(), &guest_name.read(), &access))
            else {
                return;
            };

            let client = client.clone();
            let article_id = article_id.clone();
            spawn(async move {
                let result = match mode {
                    CommentMode::Resource => match client.add_comment(&article_id, &new_comment.text).await {
                        Ok(Some(created)) => {
                            comments.write().insert(0, created);
                            Ok(())
                        }
                        Ok(None) => client
                            .list_comments(&article_id)
                            .await
                            .map(|list| comments.set(list)),
                        Err(e) => Err(e),
                    },
                    CommentMode::Embedded => client
                        .append_embedded_comment(&article_id, new_comment)
                        .await
                        .map(|list| comments.set(list)),
                };
                match result {
                    Ok(()) => {
                        text.set(String::new());
                        phase.set(FormPhase::default());
                    }
                    Err(e) => {
                        tracing::error!("Failed to post comment: {e}");
                        phase.write().fail(e.user_message());
                    }
                }
            });
        }
    };

    let confirm_delete = {
        let client = client.clone();
        let session = session.clone();
        let article_id = article_id.clone();
        move |_| {
            let Some(comment_id) = pending_delete() else {
                return;
            };
            pending_delete.set(None);

            let current = session.current();
            let allowed = comments
                .read()
                .iter()
                .any(|c| c.id == comment_id && can_delete_comment(&current, c));
            if !allowed {
                error.set(Some("You can only delete your own comments.".to_string()));
                return;
            }

            let client = client.clone();
            let article_id = article_id.clone();
            spawn(async move {
                let result = match mode {
                    CommentMode::Resource => client
                        .delete_comment(&comment_id)
                        .await
                        .map(|()| comments.write().retain(|c| c.id != comment_id)),
                    CommentMode::Embedded => client
                        .remove_embedded_comment(&article_id, &comment_id)
                        .await
                        .map(|list| comments.set(list)),
                };
                if let Err(e) = result {
                    tracing::error!("Failed to delete comment: {e}");
                    error.set(Some(e.user_message()));
                }
            });
        }
    };

    let snapshot = session.snapshot();
    let access = comment_access(mode, &snapshot);
    let login_required = access == CommentAccess::LoginRequired;
    let is_guest = access == CommentAccess::Guest;
    let list: Vec<Comment> = comments();
    let count = list.len();
    let form_error = phase.read().error().map(str::to_string);
    let busy = phase.read().is_busy();

    rsx! {
        section {
            class: "comments",
            h3 { "Comments ({count})" }

            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }

            if login_required {
                p {
                    class: "comments-login",
                    "Please "
                    button {
                        class: "link-button",
                        onclick: move |_| on_login.call(()),
                        "log in"
                    }
                    " to comment."
                }
            } else {
                form {
                    class: "comment-form",
                    onsubmit: handle_submit,
                    if let Some(err) = form_error {
                        div { class: "alert alert-error", "{err}" }
                    }
                    if is_guest {
                        input {
                            class: "input",
                            r#type: "text",
                            placeholder: "Your name",
                            value: "{guest_name}",
                            oninput: move |evt: FormEvent| guest_name.set(evt.value()),
                        }
                    }
                    textarea {
                        class: "input",
                        rows: "3",
                        placeholder: "Write a comment...",
                        value: "{text}",
                        oninput: move |evt: FormEvent| text.set(evt.value()),
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: busy,
                        if busy { "Posting..." } else { "Post comment" }
                    }
                }
            }

            if loading() {
                p { class: "muted", "Loading comments..." }
            } else if list.is_empty() {
                p { class: "muted", "No comments yet." }
            }

            ul {
                class: "comment-list",
                for comment in list.iter() {
                    li {
                        key: "{comment.id}",
                        class: "comment",
                        div {
                            class: "comment-header",
                            strong { "{comment.commenter.display_name()}" }
                            if comment.commenter.is_guest() {
                                span { class: "badge", "guest" }
                            }
                            if let Some(ts) = comment.created_at.as_ref() {
                                span { class: "comment-date", "{format_date(ts)}" }
                            }
                        }
                        p { class: "comment-text", "{comment.text}" }
                        if can_delete_comment(&snapshot, comment) {
                            button {
                                class: "btn btn-small btn-danger",
                                onclick: {
                                    let id = comment.id.clone();
                                    move |_| pending_delete.set(Some(id.clone()))
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    message: "Delete this comment?".to_string(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
