use dioxus::prelude::*;

use crate::forms::ArticleDraft;

/// Title / category / content form shared by the create and edit views.
#[component]
pub fn ArticleForm(
    initial: ArticleDraft,
    busy: bool,
    error: Option<String>,
    submit_label: String,
    on_submit: EventHandler<ArticleDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut draft = use_signal(|| initial);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        on_submit.call(draft());
    };

    let values = draft();

    rsx! {
        form {
            class: "form",
            onsubmit: handle_submit,

            if let Some(err) = error {
                div { class: "alert alert-error", "{err}" }
            }

            input {
                class: "input",
                r#type: "text",
                placeholder: "Title",
                value: "{values.title}",
                oninput: move |evt: FormEvent| draft.write().title = evt.value(),
            }
            input {
                class: "input",
                r#type: "text",
                placeholder: "Category (default: General)",
                value: "{values.category}",
                oninput: move |evt: FormEvent| draft.write().category = evt.value(),
            }
            textarea {
                class: "input",
                rows: "10",
                placeholder: "Content (at least 20 characters)",
                value: "{values.content}",
                oninput: move |evt: FormEvent| draft.write().content = evt.value(),
            }

            div {
                class: "article-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Saving..." } else { "{submit_label}" }
                }
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
