//! # Shell Layout
//!
//! Persistent frame around the pages that operate on a selected plant.

use dioxus::prelude::*;
use energize_core::ContentPanel;

use super::{Placeholder, PlantScope, PrimaryRail, SecondaryRail, TopBar};
use crate::router::Route;
use crate::state::AppState;

/// Shell layout component.
///
/// Renders the menu state and plant selection held by the app-wide shell,
/// so both survive this layout being unmounted for a standalone page.
/// Routed pages are rendered inside the content area via `Outlet` and
/// read the plant through [`PlantScope`].
///
/// # Structure
///
/// ```text
/// +---------+-----------+-----------------------------+
/// | Primary | Secondary |          TopBar             |
/// |  rail   |   rail    |-----------------------------|
/// |         | (when the |                             |
/// |         |  active   |   Outlet or placeholder     |
/// |         |  menu has |                             |
/// |         |  leaves)  |                             |
/// +---------+-----------+-----------------------------+
/// ```
#[component]
pub fn ShellLayout() -> Element {
    let state = use_context::<AppState>();
    let mut revision = use_signal(|| state.plant().snapshot().revision());
    let scope = use_context_provider(|| PlantScope::new(state.plant(), revision));

    // Picks up changes made outside this layout, e.g. on logout.
    use_future(move || {
        let mut changes = scope.subscribe();
        async move {
            while changes.changed().await.is_ok() {
                let seen = changes.borrow_and_update().revision();
                if *revision.peek() != seen {
                    revision.set(seen);
                }
            }
        }
    });

    let navigation = state.navigation();
    let panel = navigation.active_panel();
    let rail_visible = navigation.secondary_rail_visible();
    let primary_collapsed = navigation.primary_collapsed();

    let layout_class = match (primary_collapsed, rail_visible) {
        (true, _) => "app-layout primary-collapsed",
        (false, true) => "app-layout with-secondary",
        (false, false) => "app-layout",
    };

    rsx! {
        div {
            class: "{layout_class}",

            PrimaryRail {}

            if rail_visible {
                SecondaryRail {}
            }

            div {
                class: "main-panel",

                TopBar {}

                main {
                    class: "content",

                    match panel {
                        ContentPanel::Placeholder(item) => rsx! {
                            Placeholder { title: item.title().to_string() }
                        },
                        ContentPanel::Outlet | ContentPanel::Page(_) => rsx! {
                            Outlet::<Route> {}
                        },
                    }
                }
            }
        }
    }
}
