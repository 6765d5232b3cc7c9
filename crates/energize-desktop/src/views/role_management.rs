//! # Role Management View
//!
//! Roles defined on the selected plant.

use dioxus::prelude::*;
use energize_core::Paginator;

use crate::components::{Pager, PlantScope};
use crate::router::Route;
use crate::state::AppState;

/// Role table for the selected plant.
#[component]
pub fn RoleManagement() -> Element {
    let state = use_context::<AppState>();
    let scope = use_context::<PlantScope>();
    let mut page = use_signal(|| 1_usize);

    let roles = use_resource(move || {
        let client = state.client();
        let plant_id = scope.plant_id();
        async move {
            match plant_id {
                Some(id) => client.list_roles(&id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    let Some(plant) = scope.selected() else {
        return rsx! {
            div { class: "role-management-view",
                h2 { "Roles Management" }
                p { class: "text-secondary", "Select a plant to manage its roles." }
            }
        };
    };

    rsx! {
        div {
            class: "role-management-view",

            div {
                class: "page-header",
                h2 { "Roles of {plant.plant_name}" }
                Link {
                    to: Route::AddRole {},
                    class: "btn-primary",
                    "+ Add Role"
                }
            }

            match &*roles.read() {
                Some(Ok(Some(list))) => {
                    let mut pager = Paginator::default();
                    pager.set_total(list.len());
                    pager.go_to(*page.read());
                    let rows = pager.slice(list).to_vec();

                    rsx! {
                        if list.is_empty() {
                            p { class: "text-secondary", "No roles defined for this plant." }
                        } else {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "Role" }
                                        th { "Description" }
                                        th { "Permissions" }
                                        th { "" }
                                    }
                                }
                                tbody {
                                    for role in rows {
                                        tr {
                                            key: "{role.id}",
                                            td { "{role.name}" }
                                            td { class: "text-secondary", "{role.description}" }
                                            td {
                                                for permission in role.permissions.iter() {
                                                    span { key: "{permission.id}", class: "badge", "{permission.name}" }
                                                }
                                            }
                                            td {
                                                class: "row-actions",
                                                Link {
                                                    to: Route::EditRole { id: role.id.clone() },
                                                    class: "btn-sm btn-glass",
                                                    "Edit"
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
                    div { class: "error", "Error loading roles: {err.user_message()}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading roles..." }
                },
            }
        }
    }
}
