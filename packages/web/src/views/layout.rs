use dioxus::prelude::*;

use crate::Route;

/// Navbar above every page.
#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();

    rsx! {
        ui::Navbar {
            on_home: move |_| {
                nav.push(Route::NewsList {});
            },
            on_create: move |_| {
                nav.push(Route::CreateNews {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
        Outlet::<Route> {}
    }
}
