//! # Top Bar
//!
//! Plant picker and sign-out.

use dioxus::prelude::*;
use energize_core::{Plant, PlantSearch, SearchOutcome};

use super::PlantScope;
use crate::router::Route;
use crate::state::AppState;

/// Top bar component.
///
/// Typing in the picker searches plants after the configured settle time;
/// only the response to the latest keystroke fills the dropdown. Choosing a
/// result becomes the selected plant for every page in the shell, and any
/// search still in flight is dropped.
#[component]
pub fn TopBar() -> Element {
    let mut state = use_context::<AppState>();
    let mut scope = use_context::<PlantScope>();
    let nav = use_navigator();

    let search = use_signal(|| PlantSearch::new(state.settings.read().search_debounce()));
    let mut query = use_signal(String::new);
    let mut results = use_signal(Vec::<Plant>::new);
    let mut search_error = use_signal(|| Option::<String>::None);

    let selected = scope.selected();

    let on_input = move |evt: Event<FormData>| {
        let value = evt.value();
        query.set(value.clone());

        let search = search.read().clone();
        let client = state.client();
        let selected = scope.selected();
        spawn(async move {
            let outcome = search
                .run(&value, selected.as_ref(), |q| async move {
                    client.search_plants(&q).await
                })
                .await;

            match outcome {
                SearchOutcome::Applied(plants) => {
                    search_error.set(None);
                    results.set(plants);
                }
                SearchOutcome::Cleared => {
                    search_error.set(None);
                    results.set(Vec::new());
                }
                SearchOutcome::Superseded => {}
                SearchOutcome::Failed(msg) => {
                    search_error.set(Some(msg));
                    results.set(Vec::new());
                }
            }
        });
    };

    let on_logout = move |_| {
        state.logout();
        nav.replace(Route::Login {});
    };

    rsx! {
        header {
            class: "app-header",

            div {
                class: "plant-picker",

                input {
                    r#type: "search",
                    placeholder: "Search plants...",
                    value: "{query}",
                    oninput: on_input,
                }

                if !results.read().is_empty() {
                    ul {
                        class: "plant-dropdown glass-panel",
                        for plant in results.read().iter().cloned() {
                            li {
                                key: "{plant.plant_id}",
                                onclick: move |_| {
                                    search.read().invalidate();
                                    query.set(plant.plant_name.clone());
                                    results.set(Vec::new());
                                    scope.select(Some(plant.clone()));
                                },
                                "{plant.plant_name}"
                            }
                        }
                    }
                }

                if let Some(err) = search_error.read().as_ref() {
                    div { class: "alert alert-error", "{err}" }
                }
            }

            div { class: "header-right",
                match selected {
                    Some(plant) => rsx! {
                        div { class: "selected-plant",
                            span { class: "text-secondary", "Plant" }
                            span { class: "plant-name", "{plant.plant_name}" }
                            button {
                                class: "btn-sm btn-ghost",
                                onclick: move |_| {
                                    search.read().invalidate();
                                    query.set(String::new());
                                    results.set(Vec::new());
                                    scope.select(None);
                                },
                                "Clear"
                            }
                        }
                    },
                    None => rsx! {
                        span { class: "text-tertiary", "No plant selected" }
                    },
                }

                button {
                    class: "btn-sm btn-ghost",
                    onclick: on_logout,
                    "Logout"
                }
            }
        }
    }
}
