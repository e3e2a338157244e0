use api::{Article, ArticlePatch, DEFAULT_CATEGORY};
use dioxus::prelude::*;

use super::{ArticleForm, Loaded};
use crate::access::{require_owner, Denied};
use crate::forms::{ArticleDraft, FormPhase};
use crate::{use_client, use_session};

/// Edit form for an existing article. Only its author gets the form.
#[component]
pub fn EditNewsView(id: String, on_done: EventHandler<()>) -> Element {
    let client = use_client();
    let session = use_session();

    let mut loaded = use_signal(|| Loaded::<Article>::Loading);
    let mut denied = use_signal(|| Option::<Denied>::None);
    let mut phase = use_signal(FormPhase::default);

    let _loader = use_resource({
        let client = client.clone();
        let session = session.clone();
        use_reactive!(|(id,)| {
            let client = client.clone();
            let session = session.clone();
            async move {
                loaded.set(Loaded::Loading);
                match client.get_article(&id).await {
                    Ok(article) => {
                        // Checked once here; the form is never shown to anyone else.
                        denied.set(require_owner(&session.current(), article.author_id.as_deref()).err());
                        loaded.set(Loaded::Ready(article));
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

    let handle_submit = {
        let client = client.clone();
        let session = session.clone();
        move |draft: ArticleDraft| {
            let Loaded::Ready(article) = loaded() else {
                return;
            };
            // The session may have changed since the form was shown.
            if let Err(e) = require_owner(&session.current(), article.author_id.as_deref()) {
                phase.write().fail(e.to_string());
                return;
            }
            let Some(valid) = phase.write().begin(|| draft.validate()) else {
                return;
            };
            let patch = ArticlePatch::edit(
                &article,
                valid.title,
                valid.content,
                valid.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            );
            let client = client.clone();
            spawn(async move {
                match client.update_article(&article.id, &patch).await {
                    Ok(()) => {
                        tracing::info!("Updated news {}", article.id);
                        phase.write().succeed();
                        on_done.call(());
                    }
                    Err(e) => {
                        tracing::error!("Failed to update news {}: {e}", article.id);
                        phase.write().fail(e.user_message());
                    }
                }
            });
        }
    };

    let busy = phase.read().is_busy();
    let error = phase.read().error().map(str::to_string);

    rsx! {
        div {
            class: "page-narrow",
            h1 { "Edit news" }
            {match (loaded(), denied()) {
                (Loaded::Loading, _) => rsx! {
                    p { class: "muted", "Loading..." }
                },
                (Loaded::NotFound, _) => rsx! {
                    div { class: "alert alert-info", "This news item does not exist or was removed." }
                },
                (Loaded::Failed(message), _) => rsx! {
                    div { class: "alert alert-error", "{message}" }
                },
                (Loaded::Ready(_), Some(reason)) => rsx! {
                    div { class: "alert alert-error", "{reason}" }
                    button {
                        class: "btn",
                        onclick: move |_| on_done.call(()),
                        "Back to news"
                    }
                },
                (Loaded::Ready(article), None) => rsx! {
                    ArticleForm {
                        key: "{article.id}",
                        initial: ArticleDraft {
                            title: article.title.clone(),
                            content: article.content.clone(),
                            category: article.category.clone(),
                        },
                        busy: busy,
                        error: error,
                        submit_label: "Save changes".to_string(),
                        on_submit: handle_submit,
                        on_cancel: move |_| on_done.call(()),
                    }
                },
            }}
        }
    }
}
