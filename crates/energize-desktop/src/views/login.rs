//! # Login View
//!
//! Sign-in with email or username and password.

use dioxus::prelude::*;

use crate::router::Route;
use crate::state::AppState;

/// Login view component.
///
/// On success the token is stored by the client and the user lands on the
/// plant list. An already signed-in user is sent there directly.
#[component]
pub fn Login() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();

    let mut identifier = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    // If already authenticated, redirect to home
    if state.is_logged_in() {
        nav.replace(Route::Home {});
    }

    let mut do_login = move || {
        let identifier_val = identifier.read().trim().to_string();
        let password_val = password.read().clone();

        if identifier_val.is_empty() || password_val.is_empty() {
            error.set(Some("Please enter your email or username and password".to_string()));
            return;
        }

        loading.set(true);
        error.set(None);

        let client = state.client();

        spawn(async move {
            match client.login(&identifier_val, &password_val).await {
                Ok(_) => {
                    state.signed_in();
                    nav.push(Route::Home {});
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    error.set(Some(e.user_message()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "login-view",
            div { class: "login-card glass-panel",
                div { class: "login-header",
                    h1 { "Energize" }
                    p { class: "text-secondary", "Solar plant administration" }
                }

                div { class: "login-form",
                    div { class: "form-group",
                        label { r#for: "identifier", "Email or username" }
                        input {
                            id: "identifier",
                            r#type: "text",
                            placeholder: "you@example.com",
                            value: "{identifier}",
                            disabled: *loading.read(),
                            oninput: move |evt| identifier.set(evt.value()),
                        }
                    }

                    div { class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{password}",
                            disabled: *loading.read(),
                            oninput: move |evt| password.set(evt.value()),
                            onkeypress: move |evt| {
                                if evt.key() == Key::Enter && !*loading.read() {
                                    do_login();
                                }
                            },
                        }
                    }

                    if let Some(err) = error.read().as_ref() {
                        div { class: "alert alert-error", "{err}" }
                    }

                    button {
                        class: "btn-primary btn-lg btn-block",
                        disabled: *loading.read(),
                        onclick: move |_| do_login(),
                        if *loading.read() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
