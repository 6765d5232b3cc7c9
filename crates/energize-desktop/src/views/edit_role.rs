//! # Edit Role View
//!
//! Form for changing an existing role of the selected plant.

use std::collections::BTreeSet;

use dioxus::prelude::*;
use energize_client::{RoleDetail, UpdateRoleRequest};

use crate::components::PlantScope;
use crate::router::Route;
use crate::state::AppState;

/// Edit role view component.
///
/// Loads the role for the selected plant, then hands it to the form. The
/// role is re-fetched if the selected plant changes.
///
/// # Parameters
///
/// * `id` - Role identifier from the route
#[component]
pub fn EditRole(id: String) -> Element {
    let state = use_context::<AppState>();
    let scope = use_context::<PlantScope>();

    let role = use_resource(move || {
        let client = state.client();
        let plant_id = scope.plant_id();
        let role_id = id.clone();
        async move {
            match plant_id {
                Some(plant_id) => client.get_role(&role_id, &plant_id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let Some(plant) = scope.selected() else {
        return rsx! {
            div { class: "add-role-view",
                h2 { "Update Role" }
                p { class: "text-secondary", "Select a plant to edit its roles." }
            }
        };
    };

    rsx! {
        div {
            class: "add-role-view",

            Link {
                to: Route::RoleManagement {},
                class: "back-link",
                "← Back to roles"
            }

            h2 { class: "mb-lg", "Update Role on {plant.plant_name}" }

            match &*role.read() {
                Some(Ok(Some(detail))) => rsx! {
                    EditRoleForm { key: "{detail.id}", role: detail.clone() }
                },
                Some(Ok(None)) => rsx! {},
                Some(Err(err)) => rsx! {
                    div { class: "error", "Error loading role: {err.user_message()}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading role details..." }
                },
            }
        }
    }
}

#[component]
fn EditRoleForm(role: RoleDetail) -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();

    let mut name = use_signal(|| role.name.clone());
    let mut description = use_signal(|| role.description.clone());
    let mut chosen = use_signal(|| role.permission_ids().into_iter().collect::<BTreeSet<_>>());
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let permissions = use_resource(move || {
        let client = state.client();
        async move { client.list_permissions().await }
    });

    let role_id = role.id.clone();
    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if *saving.read() {
            return;
        }

        let req = UpdateRoleRequest {
            role_id: role_id.clone(),
            name: name.read().trim().to_string(),
            description: description.read().trim().to_string(),
            permission_ids: chosen.read().iter().cloned().collect(),
        };

        let client = state.client();
        saving.set(true);
        error_msg.set(None);

        spawn(async move {
            match client.update_role(&req).await {
                Ok(message) => {
                    tracing::info!(role_id = %req.role_id, %message, "Role updated");
                    navigator.push(Route::RoleManagement {});
                }
                Err(e) => {
                    error_msg.set(Some(e.user_message()));
                    saving.set(false);
                }
            }
        });
    };

    rsx! {
        form {
            class: "glass-panel-static",
            onsubmit: on_submit,

            div { class: "form-field mb-md",
                label { r#for: "role-name", "Role name" }
                input {
                    id: "role-name",
                    value: "{name}",
                    disabled: *saving.read(),
                    oninput: move |evt| name.set(evt.value()),
                }
            }

            div { class: "form-field mb-md",
                label { r#for: "role-description", "Description" }
                textarea {
                    id: "role-description",
                    value: "{description}",
                    disabled: *saving.read(),
                    oninput: move |evt| description.set(evt.value()),
                }
            }

            fieldset {
                class: "permission-list mb-md",
                legend { "Permissions" }

                match &*permissions.read() {
                    Some(Ok(list)) if list.is_empty() => rsx! {
                        p { class: "text-secondary", "No permissions available." }
                    },
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
                    disabled: *saving.read(),
                    if *saving.read() { "Saving..." } else { "Update Role" }
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
