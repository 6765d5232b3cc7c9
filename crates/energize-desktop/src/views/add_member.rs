//! # Add Member View
//!
//! Form for adding a member to the selected plant.

use dioxus::prelude::*;
use energize_client::AddMemberRequest;

use crate::components::PlantScope;
use crate::router::Route;
use crate::state::AppState;

/// Add member view component.
///
/// The role list comes from the selected plant; the new member is created
/// on that plant.
#[component]
pub fn AddMember() -> Element {
    let state = use_context::<AppState>();
    let scope = use_context::<PlantScope>();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role_id = use_signal(String::new);
    let mut creating = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let roles = use_resource(move || {
        let client = state.client();
        let plant_id = scope.plant_id();
        async move {
            match plant_id {
                Some(id) => client.list_roles(&id).await,
                None => Ok(Vec::new()),
            }
        }
    });

    let Some(plant) = scope.selected() else {
        return rsx! {
            div { class: "add-member-view",
                h2 { "Add Member" }
                p { class: "text-secondary", "Select a plant before adding members." }
            }
        };
    };

    let plant_id = plant.plant_id.clone();
    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let req = AddMemberRequest {
            name: name.read().trim().to_string(),
            email: email.read().trim().to_string(),
            password: password.read().clone(),
            role_id: role_id.read().clone(),
            plant_id: plant_id.clone(),
        };

        let client = state.client();
        creating.set(true);
        error_msg.set(None);

        spawn(async move {
            match client.add_member(&req).await {
                Ok(_) => {
                    navigator.push(Route::UserManagement {});
                }
                Err(e) => {
                    error_msg.set(Some(e.user_message()));
                    creating.set(false);
                }
            }
        });
    };

    rsx! {
        div {
            class: "add-member-view",

            Link {
                to: Route::UserManagement {},
                class: "back-link",
                "← Back to members"
            }

            h2 { class: "mb-lg", "Add Member to {plant.plant_name}" }

            form {
                class: "glass-panel-static",
                onsubmit: on_submit,

                div { class: "form-field mb-md",
                    label { r#for: "name", "Name" }
                    input {
                        id: "name",
                        value: "{name}",
                        disabled: *creating.read(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div { class: "form-field mb-md",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: "{email}",
                        disabled: *creating.read(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div { class: "form-field mb-md",
                    label { r#for: "password", "Password" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "{password}",
                        disabled: *creating.read(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                div { class: "form-field mb-md",
                    label { r#for: "role", "Role" }
                    match &*roles.read() {
                        Some(Ok(list)) => rsx! {
                            select {
                                id: "role",
                                value: "{role_id}",
                                disabled: *creating.read(),
                                onchange: move |evt| role_id.set(evt.value()),
                                option { value: "", "Select a role" }
                                for role in list.iter() {
                                    option { key: "{role.id}", value: "{role.id}", "{role.name}" }
                                }
                            }
                        },
                        Some(Err(err)) => rsx! {
                            div { class: "error", "Error loading roles: {err.user_message()}" }
                        },
                        None => rsx! {
                            div { class: "loading", "Loading roles..." }
                        },
                    }
                }

                if let Some(err) = error_msg.read().as_ref() {
                    div { class: "alert alert-error mb-md", "{err}" }
                }

                div {
                    class: "btn-group",

                    button {
                        class: "btn-primary",
                        r#type: "submit",
                        disabled: *creating.read(),
                        if *creating.read() { "Adding..." } else { "Add Member" }
                    }

                    Link {
                        to: Route::UserManagement {},
                        class: "btn-glass",
                        "Cancel"
                    }
                }
            }
        }
    }
}
