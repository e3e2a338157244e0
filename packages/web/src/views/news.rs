use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NewsList() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::NewsListView {
            on_open: move |id: String| {
                nav.push(Route::NewsDetails { id });
            },
            on_edit: move |id: String| {
                nav.push(Route::EditNews { id });
            },
            on_create: move |_| {
                nav.push(Route::CreateNews {});
            },
        }
    }
}

#[component]
pub fn NewsDetails(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::NewsDetailView {
            id,
            on_back: move |_| {
                nav.push(Route::NewsList {});
            },
            on_edit: move |id: String| {
                nav.push(Route::EditNews { id });
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn CreateNews() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::CreateNewsView {
            on_done: move |_| {
                nav.push(Route::NewsList {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn EditNews(id: String) -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::EditNewsView {
            id,
            on_done: move |_| {
                nav.push(Route::NewsList {});
            },
        }
    }
}
