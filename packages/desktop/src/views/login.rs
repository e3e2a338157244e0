use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::LoginView {
            on_logged_in: move |_| {
                nav.replace(Route::NewsList {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::views::RegisterView {
            on_registered: move |_| {
                nav.replace(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
