//! # Plant Details View
//!
//! Attributes of the selected plant, with an edit mode.

use dioxus::prelude::*;
use energize_client::UpdatePlantRequest;
use energize_core::Plant;

use crate::components::PlantScope;
use crate::router::Route;
use crate::state::AppState;

/// Plant details view component.
///
/// Fetched fresh from the backend for the selected plant, so attributes
/// the search results leave out are shown too.
#[component]
pub fn PlantDetails() -> Element {
    let state = use_context::<AppState>();
    let scope = use_context::<PlantScope>();
    let mut reload = use_signal(|| 0_u32);

    let plant = use_resource(move || {
        let client = state.client();
        let plant_id = scope.plant_id();
        let _ = reload.read();
        async move {
            match plant_id {
                Some(id) => client.get_plant(&id).await.map(Some),
                None => Ok(None),
            }
        }
    });

    if scope.plant_id().is_none() {
        return rsx! {
            div { class: "plant-details-view",
                h2 { "Plant Details" }
                p { class: "text-secondary", "Select a plant to see its details." }
            }
        };
    }

    rsx! {
        div {
            class: "plant-details-view",

            div {
                class: "page-header",
                h2 { "Plant Details" }
                Link {
                    to: Route::Home {},
                    class: "btn-glass btn-sm",
                    "← Back to Plants"
                }
            }

            match &*plant.read() {
                Some(Ok(Some(plant))) => rsx! {
                    PlantDetailsCard {
                        key: "{plant.plant_id}",
                        plant: plant.clone(),
                        on_saved: move |_| reload += 1,
                    }
                },
                Some(Ok(None)) => rsx! {},
                Some(Err(err)) => rsx! {
                    div { class: "error", "Error loading plant: {err.user_message()}" }
                },
                None => rsx! {
                    div { class: "loading", "Loading plant..." }
                },
            }
        }
    }
}

#[component]
fn PlantDetailsCard(plant: Plant, on_saved: EventHandler<()>) -> Element {
    let state = use_context::<AppState>();

    let original = UpdatePlantRequest::from_plant(&plant);
    let mut form = use_signal(|| original.clone());
    let mut editing = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let plant_id = plant.plant_id.clone();
    let on_save = move |_| {
        let req = form.read().clone();
        let plant_id = plant_id.clone();
        let client = state.client();
        saving.set(true);
        notice.set(None);
        error_msg.set(None);

        spawn(async move {
            match client.update_plant(&plant_id, &req).await {
                Ok(message) => {
                    notice.set(Some(message));
                    editing.set(false);
                    on_saved.call(());
                }
                Err(e) => error_msg.set(Some(e.user_message())),
            }
            saving.set(false);
        });
    };

    let on_cancel = move |_| {
        form.set(original.clone());
        editing.set(false);
    };

    let is_editing = *editing.read();
    let current = form.read().clone();
    let fields: [(&str, &str, String); 8] = [
        ("plantName", "Plant Name", current.plant_name.clone()),
        ("projectType", "Project Type", current.project_type.clone()),
        ("dcCapacity", "DC Capacity", current.dc_capacity.clone()),
        ("modules", "Modules", current.modules.clone()),
        ("acCapacity", "AC Capacity", current.ac_capacity.clone()),
        ("inverters", "Inverters", current.inverters.clone()),
        ("plantStartTime", "Start Time", current.plant_start_time.clone()),
        ("plantEndTime", "End Time", current.plant_end_time.clone()),
    ];

    rsx! {
        div {
            class: "glass-panel-static",

            div { class: "meta mb-md", "ID: {plant.plant_id}" }

            if let Some(msg) = notice.read().as_ref() {
                div { class: "alert alert-success mb-md", "{msg}" }
            }
            if let Some(err) = error_msg.read().as_ref() {
                div { class: "alert alert-error mb-md", "{err}" }
            }

            div {
                class: "details-grid mb-md",
                for (key, label, value) in fields {
                    div { key: "{key}", class: "form-field",
                        label { r#for: "plant-{key}", "{label}" }
                        input {
                            id: "plant-{key}",
                            value: "{value}",
                            disabled: !is_editing,
                            oninput: move |evt| set_field(&mut form.write(), key, evt.value()),
                        }
                    }
                }
            }

            div { class: "form-field mb-md",
                label { "Loggers" }
                for (index, logger) in current.loggers.iter().cloned().enumerate() {
                    div { key: "{index}", class: "logger-row",
                        input {
                            value: "{logger}",
                            disabled: !is_editing,
                            oninput: move |evt| {
                                if let Some(slot) = form.write().loggers.get_mut(index) {
                                    *slot = evt.value();
                                }
                            },
                        }
                        if is_editing {
                            button {
                                class: "btn-sm btn-danger",
                                r#type: "button",
                                onclick: move |_| {
                                    form.write().loggers.remove(index);
                                },
                                "Remove"
                            }
                        }
                    }
                }
                if current.loggers.is_empty() && !is_editing {
                    span { class: "text-tertiary", "No loggers" }
                }
                if is_editing {
                    button {
                        class: "btn-sm btn-glass",
                        r#type: "button",
                        onclick: move |_| form.write().loggers.push(String::new()),
                        "+ Add Logger"
                    }
                }
            }

            div { class: "btn-group",
                if is_editing {
                    button {
                        class: "btn-primary",
                        disabled: *saving.read(),
                        onclick: on_save,
                        if *saving.read() { "Saving..." } else { "Save Changes" }
                    }
                    button {
                        class: "btn-glass",
                        onclick: on_cancel,
                        "Cancel"
                    }
                } else {
                    button {
                        class: "btn-glass",
                        onclick: move |_| {
                            notice.set(None);
                            editing.set(true);
                        },
                        "Edit Plant"
                    }
                }
            }
        }
    }
}

fn set_field(form: &mut UpdatePlantRequest, key: &str, value: String) {
    let slot = match key {
        "plantName" => &mut form.plant_name,
        "projectType" => &mut form.project_type,
        "dcCapacity" => &mut form.dc_capacity,
        "modules" => &mut form.modules,
        "acCapacity" => &mut form.ac_capacity,
        "inverters" => &mut form.inverters,
        "plantStartTime" => &mut form.plant_start_time,
        "plantEndTime" => &mut form.plant_end_time,
        _ => return,
    };
    *slot = value;
}
