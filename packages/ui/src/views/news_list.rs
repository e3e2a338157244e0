use std::collections::HashMap;

use dioxus::prelude::*;

use crate::access::require_owner;
use crate::components::{ArticleCard, ConfirmDialog, Pagination, SearchBar};
use crate::listing::{author_label, NewsListState};
use crate::{use_client, use_config, use_session};

/// Paginated, searchable list of all articles.
#[component]
pub fn NewsListView(
    on_open: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_create: EventHandler<()>,
) -> Element {
    let client = use_client();
    let session = use_session();
    let page_size = use_config().page_size();

    let mut state = use_signal(|| NewsListState::new(page_size));
    let mut authors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut pending_delete = use_signal(|| Option::<String>::None);

    let _loader = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                match client.list_articles().await {
                    Ok(articles) => {
                        let names = client.author_names(&articles).await;
                        authors.set(names);
                        state.write().set_articles(articles);
                    }
                    Err(e) => {
                        tracing::error!("Failed to load news: {e}");
                        error.set(Some(e.user_message()));
                    }
                }
                loading.set(false);
            }
        }
    });

    let confirm_delete = {
        let client = client.clone();
        let session = session.clone();
        move |_| {
            let Some(id) = pending_delete() else {
                return;
            };
            pending_delete.set(None);

            let author_id = state
                .read()
                .all()
                .iter()
                .find(|a| a.id == id)
                .and_then(|a| a.author_id.clone());
            if let Err(denied) = require_owner(&session.current(), author_id.as_deref()) {
                error.set(Some(denied.to_string()));
                return;
            }

            let client = client.clone();
            spawn(async move {
                match client.delete_article(&id).await {
                    Ok(()) => {
                        tracing::info!("Deleted news {id}");
                        state.write().remove(&id);
                    }
                    Err(e) => {
                        tracing::error!("Failed to delete news {id}: {e}");
                        error.set(Some(e.user_message()));
                    }
                }
            });
        }
    };

    let snapshot = session.snapshot();
    let logged_in = snapshot.is_logged_in();
    let view = state.read().clone();
    let names = authors();

    rsx! {
        div {
            class: "page",
            div {
                class: "page-header",
                h1 { "Latest news" }
                if logged_in {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_create.call(()),
                        "Create news"
                    }
                }
            }

            SearchBar {
                value: view.query().to_string(),
                on_input: move |query: String| state.write().set_query(query),
            }

            if let Some(err) = error() {
                div { class: "alert alert-error", "{err}" }
            }

            if loading() {
                p { class: "muted", "Loading news..." }
            } else if view.filtered().is_empty() {
                p {
                    class: "muted",
                    if view.all().is_empty() { "No news yet." } else { "No news matches your search." }
                }
            } else {
                div {
                    class: "article-grid",
                    for article in view.visible().iter().cloned() {
                        ArticleCard {
                            key: "{article.id}",
                            author: author_label(&article, &names),
                            is_owner: snapshot.owns(article.author_id.as_deref()),
                            article: article,
                            on_open: move |id: String| on_open.call(id),
                            on_edit: move |id: String| on_edit.call(id),
                            on_delete: move |id: String| pending_delete.set(Some(id)),
                        }
                    }
                }
                Pagination {
                    page: view.page(),
                    page_count: view.page_count(),
                    on_prev: move |_| state.write().prev_page(),
                    on_next: move |_| state.write().next_page(),
                }
            }

            if pending_delete().is_some() {
                ConfirmDialog {
                    message: "Are you sure you want to delete this news?".to_string(),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}
