//! # Client Registration View
//!
//! Sign-up form for client accounts. Rendered outside the shell: it has no
//! menus and no access to the selected plant.

use dioxus::prelude::*;
use energize_client::SignupRequest;

use crate::router::Route;
use crate::state::AppState;

/// Client registration view component.
#[component]
pub fn ClientRegistration() -> Element {
    let state = use_context::<AppState>();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut mobile = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let req = SignupRequest {
            name: name.read().trim().to_string(),
            email: email.read().trim().to_string(),
            mobile: mobile.read().trim().to_string(),
            password: password.read().clone(),
            ..SignupRequest::default()
        };

        let client = state.client();
        submitting.set(true);
        notice.set(None);
        error_msg.set(None);

        spawn(async move {
            match client.signup(&req).await {
                Ok(message) => {
                    notice.set(Some(message));
                    name.set(String::new());
                    email.set(String::new());
                    mobile.set(String::new());
                    password.set(String::new());
                }
                Err(e) => error_msg.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "client-registration-view",

            div { class: "login-card glass-panel",
                h2 { "Register Client" }

                form {
                    onsubmit: on_submit,

                    div { class: "form-field mb-md",
                        label { r#for: "client-name", "Name" }
                        input {
                            id: "client-name",
                            value: "{name}",
                            oninput: move |evt| name.set(evt.value()),
                        }
                    }
                    div { class: "form-field mb-md",
                        label { r#for: "client-email", "Email" }
                        input {
                            id: "client-email",
                            r#type: "email",
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "form-field mb-md",
                        label { r#for: "client-mobile", "Mobile" }
                        input {
                            id: "client-mobile",
                            r#type: "tel",
                            value: "{mobile}",
                            oninput: move |evt| mobile.set(evt.value()),
                        }
                    }
                    div { class: "form-field mb-md",
                        label { r#for: "client-password", "Password" }
                        input {
                            id: "client-password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }

                    if let Some(msg) = notice.read().as_ref() {
                        div { class: "alert alert-success mb-md", "{msg}" }
                    }
                    if let Some(err) = error_msg.read().as_ref() {
                        div { class: "alert alert-error mb-md", "{err}" }
                    }

                    div { class: "btn-group",
                        button {
                            class: "btn-primary",
                            r#type: "submit",
                            disabled: *submitting.read(),
                            if *submitting.read() { "Registering..." } else { "Register" }
                        }
                        Link {
                            to: Route::Home {},
                            class: "btn-glass",
                            "Back"
                        }
                    }
                }
            }
        }
    }
}
