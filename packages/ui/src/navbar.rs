use dioxus::prelude::*;

use crate::{use_session, LogoutButton};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Top bar with the portal name and the session controls.
#[component]
pub fn Navbar(
    on_home: EventHandler<()>,
    on_create: EventHandler<()>,
    on_login: EventHandler<()>,
    on_logout: EventHandler<()>,
) -> Element {
    let session = use_session().snapshot();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar",
            button {
                class: "navbar-brand",
                onclick: move |_| on_home.call(()),
                "News Portal"
            }
            div {
                class: "navbar-actions",
                if let Some(user) = session.user() {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_create.call(()),
                        "Create news"
                    }
                    span { class: "navbar-user", "Hello, {user.name}" }
                    LogoutButton { class: "btn", on_logout: on_logout }
                } else {
                    button {
                        class: "btn",
                        onclick: move |_| on_login.call(()),
                        "Login"
                    }
                }
            }
        }
    }
}
