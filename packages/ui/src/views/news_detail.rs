use api::{Article, NewsClient};
use dioxus::prelude::*;

use super::Loaded;
use crate::access::require_owner;
use crate::components::{format_date, Comments, ConfirmDialog};
use crate::{use_client, use_session};

/// Author name from the document, or one `/users/:id` lookup.
async fn resolve_author(client: &NewsClient, article: &Article) -> Option<String> {
    if let Some(name) = article.author_name() {
        return Some(name.to_string());
    }
    let id = article.author_id.as_deref()?;
    match client.get_user(id).await {
        Ok(user) => Some(user.display_name().to_string()),
        Err(e) => {
            tracing::warn!("Could not resolve author {id}: {e}");
            None
        }
    }
}

/// Full article with its comment thread.
#[component]
pub fn NewsDetailView(
    id: String,
    on_back: EventHandler<()>,
    on_edit: EventHandler<String>,
    on_login: EventHandler<()>,
) -> Element {
    let client = use_client();
    let session = use_session();

    let mut loaded = use_signal(|| Loaded::<Article>::Loading);
    let mut author = use_signal(|| Option::<String>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut confirm_open = use_signal(|| false);

    let _loader = use_resource({
        let client = client.clone();
        use_reactive!(|(id,)| {
            let client = client.clone();
            async move {
                loaded.set(Loaded::Loading);
                author.set(None);
                match client.get_article(&id).await {
                    Ok(found) => {
                        author.set(resolve_author(&client, &found).await);
                        loaded.set(Loaded::Ready(found));
                    }
                    Err(e) if e.is_not_found() => loaded.set(Loaded::NotFound),
                    Err(e) => {
                        tracing::error!("Failed to load news {id}: {e}");
                        loaded.set(Loaded::Failed(e.user_message()));
                    }
                }
            }
        })
    });

    let confirm_delete = {
        let client = client.clone();
        let session = session.clone();
        move |_| {
            confirm_open.set(false);
            let Loaded::Ready(current) = loaded() else {
                return;
            };
            if let Err(denied) = require_owner(&session.current(), current.author_id.as_deref()) {
                error.set(Some(denied.to_string()));
                return;
            }
            let client = client.clone();
            spawn(async move {
                match client.delete_article(&current.id).await {
                    Ok(()) => {
                        tracing::info!("Deleted news {}", current.id);
                        on_back.call(());
                    }
                    Err(e) => {
                        tracing::error!("Failed to delete news {}: {e}", current.id);
                        error.set(Some(e.user_message()));
                    }
                }
            });
        }
    };

    let snapshot = session.snapshot();

    rsx! {
        div {
            class: "page",
            button {
                class: "link-button",
                onclick: move |_| on_back.call(()),
                "← Back to news"
            }

            {match loaded() {
                Loaded::Loading => rsx! {
                    p { class: "muted", "Loading..." }
                },
                Loaded::NotFound => rsx! {
                    div {
                        class: "alert alert-info",
                        "This news item does not exist or was removed."
                    }
                },
                Loaded::Failed(message) => rsx! {
                    div { class: "alert alert-error", "{message}" }
                },
                Loaded::Ready(current) => {
                    let is_owner = snapshot.owns(current.author_id.as_deref());
                    let date = current.created_at.as_ref().map(format_date);
                    let byline = author().unwrap_or_else(|| "Unknown author".to_string());
                    let edit_id = current.id.clone();
                    rsx! {
                        article {
                            div {
                                class: "article-card-meta",
                                span { class: "badge", "{current.category}" }
                                if let Some(date) = date {
                                    span { class: "article-date", "{date}" }
                                }
                            }
                            h1 { "{current.title}" }
                            p { class: "article-author", "By {byline}" }
                            if let Some(src) = current.image_url.as_ref() {
                                img { class: "article-image", src: "{src}", alt: "{current.title}" }
                            }
                            if let Some(err) = error() {
                                div { class: "alert alert-error", "{err}" }
                            }
                            if is_owner {
                                div {
                                    class: "article-actions",
                                    button {
                                        class: "btn",
                                        onclick: move |_| on_edit.call(edit_id.clone()),
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        onclick: move |_| confirm_open.set(true),
                                        "Delete"
                                    }
                                }
                            }
                            div { class: "article-content", "{current.content}" }
                        }
                        Comments {
                            key: "{current.id}",
                            article: current.clone(),
                            on_login: move |_| on_login.call(()),
                        }
                    }
                }
            }}

            if confirm_open() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this news?".to_string(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| confirm_open.set(false),
                }
            }
        }
    }
}
