//! # Secondary Rail
//!
//! Leaves of the expanded primary category.

use dioxus::prelude::*;
use energize_core::{ContentPanel, NavAction};

use crate::router::Route;
use crate::state::AppState;

/// Secondary navigation rail.
///
/// Only mounted while [`energize_core::NavigationState::secondary_rail_visible`]
/// holds. Labels show while the rail is expanded. Clicking a leaf toggles
/// it; a leaf backed by a page also navigates there.
#[component]
pub fn SecondaryRail() -> Element {
    let mut app = use_context::<AppState>();
    let nav = use_navigator();

    let state = app.navigation();
    let collapsed = !state.secondary_rail_expanded();
    let heading = state.active_menu().map(|m| m.title()).unwrap_or_default();

    rsx! {
        aside {
            class: if collapsed { "secondary-rail collapsed" } else { "secondary-rail" },

            div {
                class: "rail-header",
                if !collapsed {
                    h3 { "{heading}" }
                }
                button {
                    class: "btn-ghost btn-sm",
                    title: "Toggle submenu",
                    onclick: move |_| app.dispatch(NavAction::ToggleSecondaryCollapse),
                    if collapsed { "»" } else { "«" }
                }
            }

            if !collapsed {
                ul {
                    class: "submenu",

                    for item in state.secondary_items().iter().copied() {
                        li {
                            key: "{item.title()}",
                            class: if state.active_submenu() == Some(item) { "submenu-item active" } else { "submenu-item" },
                            onclick: move |_| {
                                app.dispatch(NavAction::SelectSecondary(item));
                                if let ContentPanel::Page(location) = app.navigation().active_panel() {
                                    nav.push(Route::from(location));
                                }
                            },
                            "{item.title()}"
                        }
                    }
                }
            }
        }
    }
}
