use api::NewArticle;
use dioxus::prelude::*;
use store::CommentMode;

use super::ArticleForm;
use crate::access::require_login;
use crate::forms::{ArticleDraft, FormPhase};
use crate::{use_client, use_config, use_session};

/// Form for publishing a new article. Only signed-in users get the form.
#[component]
pub fn CreateNewsView(on_done: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let client = use_client();
    let session = use_session();
    let embedded_comments = use_config().comments.mode == CommentMode::Embedded;
    let mut phase = use_signal(FormPhase::default);

    let handle_submit = {
        let session = session.clone();
        move |draft: ArticleDraft| {
            let user = match require_login(&session.current()) {
                Ok(user) => user,
                Err(denied) => {
                    phase.write().fail(denied.to_string());
                    return;
                }
            };
            let Some(valid) = phase.write().begin(|| draft.validate()) else {
                return;
            };
            let article = NewArticle {
                title: valid.title,
                content: valid.content,
                category: valid.category,
                author_id: Some(user.id),
                embedded_comments,
            };
            let client = client.clone();
            spawn(async move {
                match client.create_article(&article).await {
                    Ok(id) => {
                        tracing::info!("Created news {}", id.as_deref().unwrap_or("(no id)"));
                        phase.write().succeed();
                        on_done.call(());
                    }
                    Err(e) => {
                        tracing::error!("Failed to create news: {e}");
                        phase.write().fail(e.user_message());
                    }
                }
            });
        }
    };

    let logged_in = session.snapshot().is_logged_in();
    let busy = phase.read().is_busy();
    let error = phase.read().error().map(str::to_string);

    rsx! {
        div {
            class: "page-narrow",
            h1 { "Create news" }
            if logged_in {
                ArticleForm {
                    initial: ArticleDraft::default(),
                    busy: busy,
                    error: error,
                    submit_label: "Publish".to_string(),
                    on_submit: handle_submit,
                    on_cancel: move |_| on_done.call(()),
                }
            } else {
                div {
                    class: "alert alert-info",
                    "You must be logged in to create news. "
                    button {
                        class: "link-button",
                        onclick: move |_| on_login.call(()),
                        "Log in"
                    }
                }
            }
        }
    }
}
