//! # Add Role View
//!
//! Form for creating a role on the selected plant.

use std::collections::BTreeSet;

use dioxus::prelude::*;
use energize_client::CreateRoleRequest;

use crate::components::PlantScope;
use crate::router::Route;
use crate::state::AppState;

/// Add role view component.
#[component]
pub fn AddRole() -> Element {
    let state = use_context::<AppState>();
    let scope = use_context::<PlantScope>();
    let navigator = use_navigator();

    let mut name = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut chosen = use_signal(BTreeSet::<String>::new);
    let mut creating = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let permissions = use_resource(move || {
        let client = state.client();
        async move { client.list_permissions().await }
    });

    let Some(plant) = scope.selected() else {
        return rsx! {
            div { class: "add-role-view",
                h2 { "Add Role" }
                p { class: "text-secondary", "Select a plant before creating roles." }
            }
        };
    };

    let plant_id = plant.plant_id.clone();
    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let req = CreateRoleRequest {
            name: name.read().trim().to_string(),
            description: description.read().trim().to_string(),
            permission_ids: chosen.read().iter().cloned().collect(),
            plant_id: plant_id.clone(),
        };

        let client = state.client();
        creating.set(true);
        error_msg.set(None);

        spawn(async move {
            match client.create_role(&req).await {
                Ok(_) => {
                    navigator.push(Route::RoleManagement {});
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
            class: "add-role-view",

            Link {
                to: Route::RoleManagement {},
                class: "back-link",
                "← Back to roles"
            }

            h2 { class: "mb-lg", "New Role for {plant.plant_name}" }

            form {
                class: "glass-panel-static",
                onsubmit: on_submit,

                div { class: "form-field mb-md",
                    label { r#for: "role-name", "Role name" }
                    input {
                        id: "role-name",
                        value: "{name}",
                        disabled: *creating.read(),
                        oninput: move |evt| name.set(evt.value()),
                    }
                }

                div { class: "form-field mb-md",
                    label { r#for: "role-description", "Description" }
                    textarea {
                        id: "role-description",
                        value: "{description}",
                        disabled: *creating.read(),
                        oninput: move |evt| description.set(evt.value()),
                    }
                }

                fieldset {
                    class: "permission-list mb-md",
                    legend { "Permissions" }

                    match &*permissions.read() {
                        Some(Ok(list)) => rsx! {
                            for permission in list.iter().cloned() {
                                label {
                                    key: "{permission.id}",
                                    class: "checkbox",
                                    input {
                                        r#type: "checkbox",
                                        checked: chosen.read().contains(&permission.id),
                                        onchange: {
                                            let id = permission.id.clone();
                                            move |evt: Event<FormData>| {
                                                if evt.checked() {
                                                    chosen.write().insert(id.clone());
                                                } else {
                                                    chosen.write().remove(&id);
                                                }
                                            }
                                        },
                                    }
                                    span { "{permission.name}" }
                                    if !permission.description.is_empty() {
                                        span { class: "text-tertiary", " - {permission.description}" }
                                    }
                                }
                            }
                        },
                        Some(Err(err)) => rsx! {
                            div { class: "error", "Error loading permissions: {err.user_message()}" }
                        },
                        None => rsx! {
                            div { class: "loading", "Loading permissions..." }
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
                        if *creating.read() { "Creating..." } else { "Create Role" }
                    }

                    Link {
                        to: Route::RoleManagement {},
                        class: "btn-glass",
                        "Cancel"
                    }
                }
            }
        }
    }
}
