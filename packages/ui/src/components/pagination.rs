use dioxus::prelude::*;

/// Previous / next controls with a "Page x of y" label.
#[component]
pub fn Pagination(
    page: usize,
    page_count: usize,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "pagination",
            button {
                class: "btn",
                disabled: page <= 1,
                onclick: move |_| on_prev.call(()),
                "Previous"
            }
            span { class: "pagination-label", "Page {page} of {page_count}" }
            button {
                class: "btn",
                disabled: page >= page_count,
                onclick: move |_| on_next.call(()),
                "Next"
            }
        }
    }
}
