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

    // Session lives under <data_dir>/newsportal, settings in <config_dir>/newsportal/newsportal.toml.
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};

        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::new().with_window(WindowBuilder::new().with_title("News Portal")))
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
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

/// Anything else goes back to the news list.
#[component]
fn Unknown(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("Unknown route /{}, redirecting", segments.join("/"));
    nav.replace(Route::NewsList {});
    rsx! {}
}
