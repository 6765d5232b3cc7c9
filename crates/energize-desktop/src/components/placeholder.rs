use dioxus::prelude::*;

/// Stand-in for a screen that is not built yet.
#[component]
pub fn Placeholder(title: String) -> Element {
    rsx! {
        div {
            class: "placeholder-view glass-panel-static",
            h2 { "{title}" }
            p { class: "text-secondary", "This section is not available yet." }
        }
    }
}
