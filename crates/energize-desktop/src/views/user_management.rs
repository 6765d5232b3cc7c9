//! # User Management View
//!
//! Members of the selected plant, with inline edit and removal.

use dioxus::prelude::*;
use energize_client::{Member, Role, UpdateMemberRequest};
use energize_core::Paginator;

use crate::components::{Pager, PlantScope};
use crate::router::Route;
use crate::state::AppState;

/// Member table for the selected plant.
///
/// The member and role lists are re-fetched whenever the selected plant
/// changes. Rows are paged client-side.
#[component]
pub fn UserManagement() -> Element {
    let state = use_context::<AppState>();
    let scope = use_context::<PlantScope>();

    let mut page = use_signal(|| 1_usize);
    let mut reload = use_signal(|| 0_u32);
    let mut editing = use_signal(|| Option::<Member>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let members = use_resource(move || {
        let client = state.client();
        let plant_id = scope.plant_id();
        let _ = reload.read();
        async move {
            match plant_id {
                Some(id) => client.list_members(&id).await.map(Some),
                None => Ok(None),
            }
        }
    });

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
            div { class: "user-management-view",
                h2 { "User Management" }
                p { class: "text-secondary", "Select a plant to manage its members." }
            }
        };
    };

    let (role_list, roles_error) = match &*roles.read() {
        Some(Ok(list)) => (list.clone(), None),
        Some(Err(err)) => (Vec::new(), Some(err.user_message())),
        None => (Vec::new(), None),
    };

    let mut on_delete = move |member: Member| {
        let client = state.client();
        let Some(plant_id) = scope.plant_id() else {
            return;
        };
        error_msg.set(None);
        spawn(async move {
            match client.delete_member(&member.user_id, &plant_id).await {
                Ok(message) => {
                    notice.set(Some(message));
                    reload += 1;
                }
                Err(e) => error_msg.set(Some(e.user_message())),
            }
        });
    };

    rsx! {
        div {
            class: "user-management-view",

            div {
                class: "page-header",
                h2 { "Members of {plant.plant_name}" }
                Link {
                    to: Route::AddMember {},
                    class: "btn-primary",
                    "+ Add Member"
                }
            }

            if let Some(msg) = notice.read().as_ref() {
                div { class: "alert alert-success", "{msg}" }
            }
            if let Some(err) = error_msg.read().as_ref() {
                div { class: "alert alert-error", "{err}" }
            }

            if let Some(member) = editing.cloned() {
                EditMember {
                    member,
                    roles: role_list.clone(),
                    roles_error: roles_error.clone(),
                    plant_id: plant.plant_id.clone(),
                    on_done: move |message: Option<String>| {
                        editing.set(None);
                        if let Some(message) = message {
                            notice.set(Some(message));
                            reload += 1;
                        }
                    },
                }
            }

            match &*members.read() {
                Some(Ok(Some(list))) => {
                    let mut pager = Paginator::default();
                    pager.set_total(list.len());
                    pager.go_to(*page.read());
                    let rows = pager.slice(list).to_vec();

                    rsx! {
                        if list.is_empty() {
                            p { class: "text-secondary", "This plant has no members yet." }
                        } else {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "Name" }
                                        th { "Email" }
                                        th { "Role" }
                                        th { "Permissions" }
                                        th { "" }
                                    }
                                }
                                tbody {
                                    for member in rows {
                                        tr {
                                            key: "{member.user_id}",
                                            td { "{member.name}" }
                                            td { "{member.email}" }
                                            td { "{member.role}" }
                                            td { class: "text-secondary", {member.permissions.join(", ")} }
                                            td {
                                                class: "row-actions",
                                                button {
                                                    class: "btn-sm btn-glass",
                                                    onclick: {
                                                        let member = member.clone();
                                                        move |_| editing.set(Some(member.clone()))
                                                    },
                                                    "Edit"
                                                }
                                                button {
                                                    class: "btn-sm btn-danger",
                                                    onclick: {
                                                        let member = member.clone();
                                                        move |_| on_delete(member.clone())
                                                    },
                                                    "Delete"
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            Pager {
                                page: pager.page(),
                                total_pages: pager.total_pages(),
                                on_change: move |p: usize| page.set(p),
                            }
                        }
                    }
                },
                Some(Ok(None)) => rsx! {},
                Some(Err(err)) => rsx! {
                    div { class: "error", "Error loading members: {err.user_message()}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading members..." }
                },
            }
        }
    }
}

/// Inline form for changing a member's name, email and role.
///
/// If the role list failed to load, the error is shown above the role
/// picker and only "Keep current role" is offered.
#[component]
fn EditMember(
    member: Member,
    roles: Vec<Role>,
    roles_error: Option<String>,
    plant_id: String,
    on_done: EventHandler<Option<String>>,
) -> Element {
    let state = use_context::<AppState>();

    let mut name = use_signal(|| member.name.clone());
    let mut email = use_signal(|| member.email.clone());
    let mut role_id = use_signal(|| {
        roles
            .iter()
            .find(|r| r.name == member.role)
            .map(|r| r.id.clone())
            .unwrap_or_default()
    });
    let mut saving = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let user_id = member.user_id.clone();
    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        let req = UpdateMemberRequest {
            user_id: user_id.clone(),
            name: name.read().trim().to_string(),
            email: email.read().trim().to_string(),
            role_id: role_id.read().clone(),
            plant_id: plant_id.clone(),
        };
        let client = state.client();
        saving.set(true);
        error_msg.set(None);

        spawn(async move {
            match client.update_member(&req).await {
                Ok(message) => on_done.call(Some(message)),
                Err(e) => {
                    error_msg.set(Some(e.user_message()));
                    saving.set(false);
                }
            }
        });
    };

    rsx! {
        form {
            class: "edit-member glass-panel-static",
            onsubmit: on_submit,

            h3 { "Edit {member.name}" }

            div { class: "form-field",
                label { r#for: "edit-name", "Name" }
                input {
                    id: "edit-name",
                    value: "{name}",
                    oninput: move |evt| name.set(evt.value()),
                }
            }
            div { class: "form-field",
                label { r#for: "edit-email", "Email" }
                input {
                    id: "edit-email",
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
            }
            if let Some(err) = roles_error.as_ref() {
                div { class: "alert alert-error", "Could not load roles: {err}" }
            }
            div { class: "form-field",
                label { r#for: "edit-role", "Role" }
                select {
                    id: "edit-role",
                    value: "{role_id}",
                    onchange: move |evt| role_id.set(evt.value()),
                    option { value: "", "Keep current role" }
                    for role in roles.iter() {
                        option { key: "{role.id}", value: "{role.id}", "{role.name}" }
                    }
                }
            }

            if let Some(err) = error_msg.read().as_ref() {
                div { class: "alert alert-error", "{err}" }
            }

            div { class: "btn-group",
                button {
                    class: "btn-primary",
                    r#type: "submit",
                    disabled: *saving.read(),
                    if *saving.read() { "Saving..." } else { "Save" }
                }
                button {
                    class: "btn-glass",
                    r#type: "button",
                    onclick: move |_| on_done.call(None),
                    "Cancel"
                }
            }
        }
    }
}
