//! Login page: exchanges credentials for a bearer token and adopts it.

use api::LoginRequest;
use dioxus::prelude::*;
use ui::{notify, use_api, use_notifications, use_session, Severity};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let client = use_api();
    let mut session = use_session();
    let mut tray = use_notifications();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut busy = use_signal(|| false);

    // Already signed in: go straight to the console.
    if session().is_authenticated() {
        nav.replace(Route::AdminHome {});
        return rsx! {};
    }

    let submit = move |_| {
        let client = client.clone();
        async move {
            if email().trim().is_empty() || password().is_empty() {
                return;
            }
            busy.set(true);
            let request = LoginRequest {
                email: email().trim().to_string(),
                password: password(),
            };
            match client.login(&request).await {
                Ok(token) => {
                    session.write().login(&token);
                    nav.replace(Route::AdminHome {});
                }
                Err(err) => {
                    tracing::warn!(error = %err, "login rejected");
                    notify(
                        &mut tray,
                        Severity::Error,
                        "Login failed. Check your email and password.",
                    );
                    busy.set(false);
                }
            }
        }
    };

    rsx! {
        div {
            class: "login-container",
            h1 { "Sign in" }
            p { class: "login-hint", "Staff and administrators only." }

            div {
                class: "form-field",
                label { "Email" }
                input {
                    r#type: "email",
                    placeholder: "you@liftdesk.example",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { "Password" }
                input {
                    r#type: "password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: busy(),
                    onclick: submit,
                    if busy() {
                        "Signing in..."
                    } else {
                        "Sign in"
                    }
                }
            }
        }
    }
}
