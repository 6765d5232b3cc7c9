//! # Plant Registration View
//!
//! Form for registering a new plant, with an owner lookup.

use std::str::FromStr;

use dioxus::prelude::*;
use energize_client::{PlantRegistrationRequest, UserSuggestion};
use energize_core::{PlantSearch, SearchOutcome};

use crate::router::Route;
use crate::state::AppState;

/// Form contents as typed.
#[derive(Debug, Clone, PartialEq)]
struct Draft {
    plant_name: String,
    plant_owner: String,
    dc_capacity: String,
    ac_capacity: String,
    inverters: String,
    smbs: String,
    modules: String,
    inverter_transformer: String,
    project_type: String,
    plant_start_time: String,
    plant_end_time: String,
    latitude: String,
    longitude: String,
    is_active: bool,
    is_schedule: bool,
    loggers: Vec<String>,
}

impl Default for Draft {
    fn default() -> Self {
        let defaults = PlantRegistrationRequest::default();
        Self {
            plant_name: String::new(),
            plant_owner: String::new(),
            dc_capacity: String::new(),
            ac_capacity: String::new(),
            inverters: String::new(),
            smbs: String::new(),
            modules: String::new(),
            inverter_transformer: String::new(),
            project_type: String::new(),
            plant_start_time: defaults.plant_start_time,
            plant_end_time: defaults.plant_end_time,
            latitude: String::new(),
            longitude: String::new(),
            is_active: defaults.is_active,
            is_schedule: defaults.is_schedule,
            loggers: vec![String::new()],
        }
    }
}

/// Text inputs in display order: key, label, required.
const TEXT_FIELDS: [(&str, &str, bool); 13] = [
    ("plantName", "Plant Name", true),
    ("plantOwner", "Plant Owner", true),
    ("dcCapacity", "DC Capacity (kWp)", true),
    ("acCapacity", "AC Capacity (kW)", false),
    ("inverters", "Inverters", true),
    ("smbs", "SMBs", true),
    ("modules", "Modules", true),
    ("inverterTransformer", "Inverter Transformer", true),
    ("projectType", "Project Type", true),
    ("plantStartTime", "Plant Start Time", false),
    ("plantEndTime", "Plant End Time", false),
    ("latitude", "Latitude", false),
    ("longitude", "Longitude", false),
];

impl Draft {
    fn field(&self, key: &str) -> &str {
        match key {
            "plantName" => &self.plant_name,
            "plantOwner" => &self.plant_owner,
            "dcCapacity" => &self.dc_capacity,
            "acCapacity" => &self.ac_capacity,
            "inverters" => &self.inverters,
            "smbs" => &self.smbs,
            "modules" => &self.modules,
            "inverterTransformer" => &self.inverter_transformer,
            "projectType" => &self.project_type,
            "plantStartTime" => &self.plant_start_time,
            "plantEndTime" => &self.plant_end_time,
            "latitude" => &self.latitude,
            "longitude" => &self.longitude,
            _ => "",
        }
    }

    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        Some(match key {
            "plantName" => &mut self.plant_name,
            "plantOwner" => &mut self.plant_owner,
            "dcCapacity" => &mut self.dc_capacity,
            "acCapacity" => &mut self.ac_capacity,
            "inverters" => &mut self.inverters,
            "smbs" => &mut self.smbs,
            "modules" => &mut self.modules,
            "inverterTransformer" => &mut self.inverter_transformer,
            "projectType" => &mut self.project_type,
            "plantStartTime" => &mut self.plant_start_time,
            "plantEndTime" => &mut self.plant_end_time,
            "latitude" => &mut self.latitude,
            "longitude" => &mut self.longitude,
            _ => return None,
        })
    }

    /// Parses the numeric fields. Field presence is left to the request's
    /// own validation.
    fn to_request(&self) -> Result<PlantRegistrationRequest, String> {
        Ok(PlantRegistrationRequest {
            plant_name: self.plant_name.trim().to_string(),
            plant_owner: self.plant_owner.trim().to_string(),
            dc_capacity: required("DC capacity", &self.dc_capacity)?,
            ac_capacity: optional("AC capacity", &self.ac_capacity)?.unwrap_or_default(),
            inverters: required("Inverters", &self.inverters)?,
            smbs: required("SMBs", &self.smbs)?,
            modules: required("Modules", &self.modules)?,
            inverter_transformer: self.inverter_transformer.trim().to_string(),
            project_type: self.project_type.trim().to_string(),
            plant_start_time: self.plant_start_time.trim().to_string(),
            plant_end_time: self.plant_end_time.trim().to_string(),
            is_active: self.is_active,
            is_schedule: self.is_schedule,
            latitude: optional("Latitude", &self.latitude)?,
            longitude: optional("Longitude", &self.longitude)?,
            loggers: self.loggers.iter().map(|l| l.trim().to_string()).collect(),
        })
    }
}

fn required<T: FromStr>(label: &str, raw: &str) -> Result<T, String> {
    optional(label, raw)?.ok_or_else(|| format!("{label} is required"))
}

fn optional<T: FromStr>(label: &str, raw: &str) -> Result<Option<T>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse()
        .map(Some)
        .map_err(|_| format!("{label} must be a number"))
}

/// Plant registration view component.
///
/// Typing in the owner field looks up users after the configured settle
/// time; picking one fills the field.
#[component]
pub fn PlantRegistration() -> Element {
    let state = use_context::<AppState>();
    let navigator = use_navigator();

    let mut draft = use_signal(Draft::default);
    let owner_search = use_signal(|| PlantSearch::new(state.settings.read().search_debounce()));
    let mut suggestions = use_signal(Vec::<UserSuggestion>::new);
    let mut submitting = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let on_owner_input = move |value: String| {
        let search = owner_search.read().clone();
        let client = state.client();
        spawn(async move {
            let outcome = search
                .lookup(&value, |q| async move { client.search_users(&q).await })
                .await;
            match outcome {
                SearchOutcome::Applied(users) => suggestions.set(users),
                SearchOutcome::Superseded => {}
                SearchOutcome::Cleared | SearchOutcome::Failed(_) => suggestions.set(Vec::new()),
            }
        });
    };

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if *submitting.read() {
            return;
        }

        let req = match draft.read().to_request() {
            Ok(req) => req,
            Err(msg) => {
                error_msg.set(Some(msg));
                return;
            }
        };

        let client = state.client();
        submitting.set(true);
        error_msg.set(None);

        spawn(async move {
            match client.register_plant(&req).await {
                Ok(message) => {
                    tracing::info!(plant_name = %req.plant_name, %message, "Plant registered");
                    navigator.push(Route::Home {});
                }
                Err(e) => {
                    error_msg.set(Some(e.user_message()));
                    submitting.set(false);
                }
            }
        });
    };

    let current = draft.read().clone();

    rsx! {
        div {
            class: "plant-registration-view",

            Link {
                to: Route::Home {},
                class: "back-link",
                "← Back to plants"
            }

            h2 { class: "mb-lg", "Register Plant" }

            form {
                class: "glass-panel-static",
                onsubmit: on_submit,

                div {
                    class: "details-grid mb-md",

                    for (key, label, needed) in TEXT_FIELDS {
                        div { key: "{key}", class: "form-field",
                            label { r#for: "register-{key}", if needed { "{label}*" } else { "{label}" } }
                            input {
                                id: "register-{key}",
                                value: "{current.field(key)}",
                                autocomplete: "off",
                                oninput: move |evt| {
                                    let value = evt.value();
                                    if let Some(slot) = draft.write().field_mut(key) {
                                        *slot = value.clone();
                                    }
                                    if key == "plantOwner" {
                                        on_owner_input(value);
                                    }
                                },
                            }
                            if key == "plantOwner" && !suggestions.read().is_empty() {
                                ul {
                                    class: "plant-dropdown glass-panel",
                                    for user in suggestions.read().iter().cloned() {
                                        li {
                                            key: "{user.id}",
                                            onclick: move |_| {
                                                owner_search.read().invalidate();
                                                draft.write().plant_owner = user.name.clone();
                                                suggestions.set(Vec::new());
                                            },
                                            "{user.name}"
                                        }
                                    }
                                }
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
                                placeholder: "Logger ID",
                                oninput: move |evt| {
                                    if let Some(slot) = draft.write().loggers.get_mut(index) {
                                        *slot = evt.value();
                                    }
                                },
                            }
                            button {
                                class: "btn-sm btn-danger",
                                r#type: "button",
                                onclick: move |_| {
                                    draft.write().loggers.remove(index);
                                },
                                "Remove"
                            }
                        }
                    }
                    button {
                        class: "btn-sm btn-glass",
                        r#type: "button",
                        onclick: move |_| draft.write().loggers.push(String::new()),
                        "+ Add Logger"
                    }
                }

                div { class: "btn-group mb-md",
                    label { class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: current.is_active,
                            onchange: move |evt: Event<FormData>| draft.write().is_active = evt.checked(),
                        }
                        span { "Active" }
                    }
                    label { class: "checkbox",
                        input {
                            r#type: "checkbox",
                            checked: current.is_schedule,
                            onchange: move |evt: Event<FormData>| draft.write().is_schedule = evt.checked(),
                        }
                        span { "Scheduled" }
                    }
                }

                if let Some(err) = error_msg.read().as_ref() {
                    div { class: "alert alert-error mb-md", "{err}" }
                }

                div { class: "btn-group",
                    button {
                        class: "btn-primary",
                        r#type: "submit",
                        disabled: *submitting.read(),
                        if *submitting.read() { "Registering..." } else { "Register Plant" }
                    }
                    Link {
                        to: Route::Home {},
                        class: "btn-glass",
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Draft {
        Draft {
            plant_name: "Rewa Ultra Mega".to_string(),
            plant_owner: "Asha".to_string(),
            dc_capacity: "750".to_string(),
            inverters: "12".to_string(),
            smbs: "40".to_string(),
            modules: "1800".to_string(),
            inverter_transformer: "2.5 MVA".to_string(),
            project_type: "Ground mount".to_string(),
            ..Draft::default()
        }
    }

    #[test]
    fn test_blank_optional_numbers() {
        let req = filled().to_request().unwrap();
        assert_eq!(req.ac_capacity, 0.0);
        assert_eq!(req.latitude, None);
        assert_eq!(req.modules, 1_800);
        assert_eq!(req.plant_start_time, "06:00:00");
    }

    #[test]
    fn test_bad_number_is_reported() {
        let mut draft = filled();
        draft.inverters = "twelve".to_string();
        assert_eq!(draft.to_request().unwrap_err(), "Inverters must be a number");

        draft.inverters = " ".to_string();
        assert_eq!(draft.to_request().unwrap_err(), "Inverters is required");
    }

    #[test]
    fn test_field_keys_cover_every_input() {
        let mut draft = Draft::default();
        for (key, _, _) in TEXT_FIELDS {
            *draft.field_mut(key).unwrap() = format!("{key}!");
            assert_eq!(draft.field(key), format!("{key}!"));
        }
    }
}
