use api::UserInfo;
use dioxus::prelude::*;
use store::LoginMode;

use crate::forms::{validate_credentials, validate_selection, FormPhase};
use crate::{use_client, use_config, use_session};

/// Shared login view.
///
/// `login.mode = "password"` posts credentials to `/login` and keeps the returned
/// token. `login.mode = "select_user"` lists `/users` and signs in as the chosen
/// user without a token.
#[component]
pub fn LoginView(on_logged_in: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let client = use_client();
    let session = use_session();
    let mode = use_config().login.mode;

    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut selected = use_signal(String::new);
    let mut users = use_signal(Vec::<UserInfo>::new);
    let mut loading_users = use_signal(|| mode == LoginMode::SelectUser);
    let mut phase = use_signal(FormPhase::default);

    // Already signed in
    use_effect({
        let session = session.clone();
        move || {
            if session.current().is_logged_in() {
                on_logged_in.call(());
            }
        }
    });

    let _users = use_resource({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                if mode != LoginMode::SelectUser {
                    return;
                }
                match client.list_users().await {
                    Ok(list) => users.set(list),
                    Err(e) => {
                        tracing::error!("Failed to load users: {e}");
                        phase.write().fail(e.user_message());
                    }
                }
                loading_users.set(false);
            }
        }
    });

    let handle_login = {
        let client = client.clone();
        let session = session.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            let session = session.clone();
            match mode {
                LoginMode::Password => {
                    let Some((name, pass)) = phase
                        .write()
                        .begin(|| validate_credentials(&username.read(), &password.read()))
                    else {
                        return;
                    };
                    spawn(async move {
                        match client.login(&name, &pass).await {
                            Ok(resp) => {
                                session.sign_in(&resp.user.to_session_user(), Some(&resp.access_token));
                                phase.write().succeed();
                                on_logged_in.call(());
                            }
                            Err(e) => {
                                tracing::warn!("Login failed for {name}: {e}");
                                phase.write().fail(e.user_message());
                            }
                        }
                    });
                }
                LoginMode::SelectUser => {
                    let Some(id) = phase.write().begin(|| validate_selection(&selected.read())) else {
                        return;
                    };
                    let user = users.read().iter().find(|u| u.id == id).cloned();
                    match user {
                        Some(user) => {
                            session.sign_in(&user.to_session_user(), None);
                            phase.write().succeed();
                            on_logged_in.call(());
                        }
                        None => phase.write().fail("Please select a user"),
                    }
                }
            }
        }
    };

    let busy = phase.read().is_busy();
    let error = phase.read().error().map(str::to_string);

    rsx! {
        div {
            class: "page-narrow",
            h1 { "Sign in" }

            form {
                class: "form",
                onsubmit: handle_login,

                if let Some(err) = error {
                    div { class: "alert alert-error", "{err}" }
                }

                if mode == LoginMode::SelectUser {
                    if loading_users() {
                        p { class: "muted", "Loading users..." }
                    } else {
                        select {
                            class: "input",
                            value: "{selected}",
                            onchange: move |evt: FormEvent| selected.set(evt.value()),
                            option { value: "", "Select a user" }
                            for user in users() {
                                option {
                                    key: "{user.id}",
                                    value: "{user.id}",
                                    "{user.display_name()}"
                                }
                            }
                        }
                    }
                } else {
                    input {
                        class: "input",
                        r#type: "text",
                        placeholder: "Username",
                        value: "{username}",
                        oninput: move |evt: FormEvent| username.set(evt.value()),
                    }
                    input {
                        class: "input",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy || loading_users(),
                    if busy { "Signing in..." } else { "Login" }
                }
            }

            if mode == LoginMode::Password {
                p {
                    class: "muted",
                    "No account? "
                    button {
                        class: "link-button",
                        onclick: move |_| on_register.call(()),
                        "Register"
                    }
                }
            }
        }
    }
}
