//! # Home View
//!
//! Plant list dashboard.

use dioxus::prelude::*;

use crate::components::{Pager, PlantScope};
use crate::router::Route;
use crate::state::AppState;

const PLANTS_PER_PAGE: u64 = 10;

/// Home dashboard view.
///
/// Lists plants a page at a time. Clicking a row selects that plant for
/// the whole shell.
#[component]
pub fn Home() -> Element {
    let state = use_context::<AppState>();
    let mut scope = use_context::<PlantScope>();

    let mut filter = use_signal(String::new);
    let mut page = use_signal(|| 1_u64);

    let plants = use_resource(move || {
        let client = state.client();
        let search = filter.read().trim().to_string();
        let page = *page.read();
        async move { client.list_plants(&search, page, PLANTS_PER_PAGE).await }
    });

    let selected_id = scope.plant_id();

    rsx! {
        div {
            class: "home-view",

            div {
                class: "home-header",
                h2 { "Plants" }
                Link {
                    to: Route::ClientRegistration {},
                    class: "btn-glass btn-sm",
                    "Register Client"
                }
                Link {
                    to: Route::PlantRegistration {},
                    class: "btn-glass btn-sm",
                    "Register Plant"
                }
                input {
                    r#type: "search",
                    placeholder: "Filter by name",
                    value: "{filter}",
                    oninput: move |evt| {
                        filter.set(evt.value());
                        page.set(1);
                    },
                }
            }

            match &*plants.read() {
                Some(Ok(result)) => rsx! {
                    div {
                        class: "plant-list",

                        if result.plants.is_empty() {
                            p { class: "text-secondary", "No plants found." }
                        } else {
                            for plant in result.plants.iter().cloned() {
                                div {
                                    key: "{plant.plant_id}",
                                    class: if selected_id.as_deref() == Some(plant.plant_id.as_str()) { "plant-card selected" } else { "plant-card" },
                                    onclick: move |_| scope.select(Some(plant.clone())),

                                    h3 { "{plant.plant_name}" }
                                    div { class: "meta", "ID: {plant.plant_id}" }
                                    if selected_id.as_deref() == Some(plant.plant_id.as_str()) {
                                        Link {
                                            to: Route::PlantDetails {},
                                            class: "btn-glass btn-sm",
                                            "Details"
                                        }
                                    }
                                }
                            }
                        }

                        div { class: "meta", "{result.total_count} plants" }

                        Pager {
                            page: *page.read() as usize,
                            total_pages: result.total_pages as usize,
                            on_change: move |p: usize| page.set(p as u64),
                        }
                    }
                },
                Some(Err(err)) => rsx! {
                    div {
                        class: "error",
                        "Error loading plants: {err.user_message()}"
                    }
                },
                None => rsx! {
                    div {
                        class: "loading",
                        "Loading plants..."
                    }
                },
            }
        }
    }
}
