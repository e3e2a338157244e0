use api::Article;
use dioxus::prelude::*;

use super::format_date;

const EXCERPT_CHARS: usize = 140;

fn excerpt(content: &str) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}…", head.trim_end())
    } else {
        head
    }
}

/// One article in the list. Edit and delete are only offered to the author.
#[component]
pub fn ArticleCard(
    article: Article,
    author: String,
    is_owner: bool,
    on_open: EventHandler<String>,
    on_edit: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let id = article.id.clone();
    let date = article.created_at.as_ref().map(format_date);
    let preview = excerpt(&article.content);

    rsx! {
        div {
            class: "article-card",
            if let Some(src) = article.image_url.as_ref() {
                img { class: "article-card-image", src: "{src}", alt: "{article.title}" }
            }
            div {
                class: "article-card-meta",
                span { class: "badge", "{article.category}" }
                if let Some(date) = date {
                    span { class: "article-date", "{date}" }
                }
            }
            h3 {
                class: "article-card-title",
                onclick: {
                    let id = id.clone();
                    move |_| on_open.call(id.clone())
                },
                "{article.title}"
            }
            p { class: "article-author", "By {author}" }
            p { class: "article-excerpt", "{preview}" }
            div {
                class: "article-card-actions",
                button {
                    class: "btn",
                    onclick: {
                        let id = id.clone();
                        move |_| on_open.call(id.clone())
                    },
                    "Read more"
                }
                if is_owner {
                    button {
                        class: "btn",
                        onclick: {
                            let id = id.clone();
                            move |_| on_edit.call(id.clone())
                        },
                        "Edit"
                    }
                    button {
                        class: "btn btn-danger",
                        onclick: {
                            let id = id.clone();
                            move |_| on_delete.call(id.clone())
                        },
                        "Delete"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short"), "short");
        let long = "word ".repeat(60);
        let cut = excerpt(&long);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= EXCERPT_CHARS + 1);
    }
}
