use dioxus::prelude::*;

use ui::AuthProvider;
use views::{AppLayout, CreateNews, EditNews, Login, NewsDetails, NewsList, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        NewsList {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/create")]
        CreateNews {},
        #[route("/news/:id")]
        NewsDetails { id: String },
        #[route("/edit/:id")]
        EditNews { id: String },
    #[end_layout]
    #[route("/:..segments")]
    Unknown { segments: Vec<String> },
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Any unknown path goes back to the news list.
#[component]
fn Unknown(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("Unknown route /{}, redirecting", segments.join("/"));
    nav.replace(Route::NewsList {});
    rsx! {}
}
