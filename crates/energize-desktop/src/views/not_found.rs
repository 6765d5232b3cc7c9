use dioxus::prelude::*;

use crate::router::Route;

/// Shown for any route that matches nothing else.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::debug!(%path, "No route matched");

    rsx! {
        div {
            class: "not-found-view",
            h2 { "Page not found" }
            p { class: "text-secondary", "Nothing lives at {path}." }
            Link {
                to: Route::Home {},
                class: "btn-primary",
                "Go to Home"
            }
        }
    }
}
