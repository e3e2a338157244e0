use dioxus::prelude::*;

use crate::forms::{FormPhase, RegisterDraft};
use crate::use_client;

/// Registration page with username/email/password form.
#[component]
pub fn RegisterView(on_registered: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let client = use_client();
    let mut draft = use_signal(RegisterDraft::default);
    let mut phase = use_signal(FormPhase::default);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = phase.write().begin(|| draft.read().validate()) else {
            return;
        };
        let client = client.clone();
        spawn(async move {
            match client.register(&request).await {
                Ok(_) => {
                    tracing::info!("Registered {}", request.username);
                    phase.write().succeed();
                    on_registered.call(());
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {e}");
                    phase.write().fail(e.user_message());
                }
            }
        });
    };

    let busy = phase.read().is_busy();
    let error = phase.read().error().map(str::to_string);
    let values = draft();

    rsx! {
        div {
            class: "page-narrow",
            h1 { "Create Account" }

            form {
                class: "form",
                onsubmit: handle_register,

                if let Some(err) = error {
                    div { class: "alert alert-error", "{err}" }
                }

                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Username",
                    value: "{values.username}",
                    oninput: move |evt: FormEvent| draft.write().username = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{values.email}",
                    oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "Full name (optional)",
                    value: "{values.full_name}",
                    oninput: move |evt: FormEvent| draft.write().full_name = evt.value(),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "Password (min 6 characters)",
                    value: "{values.password}",
                    oninput: move |evt: FormEvent| draft.write().password = evt.value(),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Creating account..." } else { "Sign up" }
                }
            }

            p {
                class: "muted",
                "Already have an account? "
                button {
                    class: "link-button",
                    onclick: move |_| on_login.call(()),
                    "Sign in"
                }
            }
        }
    }
}
