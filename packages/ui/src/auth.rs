//! Session context and hooks for the UI.

use api::NewsClient;
use dioxus::prelude::*;
use store::{ClientConfig, Session, SessionStore, SessionUser};

use crate::platform::{self, PlatformStore};

/// Handle to the persisted session.
///
/// `current()` always reads storage, so every view sees the same identity. The
/// `snapshot` signal mirrors the last write and exists only so components that
/// display the user (navbar, cards) re-render on login and logout.
#[derive(Clone)]
pub struct SessionHandle {
    store: SessionStore<PlatformStore>,
    snapshot: Signal<Session>,
}

impl SessionHandle {
    /// Read the session fresh from storage.
    pub fn current(&self) -> Session {
        self.store.current()
    }

    /// Reactive view of the session for rendering.
    pub fn snapshot(&self) -> Session {
        self.snapshot.read().clone()
    }

    pub fn sign_in(&self, user: &SessionUser, token: Option<&str>) {
        self.store.sign_in(user, token);
        self.refresh();
    }

    pub fn logout(&self) {
        self.store.logout();
        self.refresh();
    }

    fn refresh(&self) {
        let mut snapshot = self.snapshot;
        snapshot.set(self.store.current());
    }
}

/// Get the session handle.
pub fn use_session() -> SessionHandle {
    use_context::<SessionHandle>()
}

/// Get the shared HTTP client.
pub fn use_client() -> NewsClient {
    use_context::<NewsClient>()
}

pub fn use_config() -> ClientConfig {
    use_context::<ClientConfig>()
}

/// Provider component that loads the session and builds the API client.
/// Wrap your app with this component before any view that calls the API.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let store = use_hook(platform::make_session);
    let config = use_context_provider(platform::load_config);

    // Stale sessions are cleared once, before the first view reads the store.
    let snapshot = use_signal(|| store.load());

    use_context_provider(|| platform::make_client(&config, &store));
    use_context_provider(|| SessionHandle { store, snapshot });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    let onclick = move |_| {
        session.logout();
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
