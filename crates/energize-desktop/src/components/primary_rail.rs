//! # Primary Rail
//!
//! Top-level category menu.

use dioxus::prelude::*;
use energize_core::{NavAction, PrimaryMenu};

use crate::router::Route;
use crate::state::AppState;

/// Primary navigation rail.
///
/// Entries with leaves expand the secondary rail; the rest navigate
/// directly to their category page.
#[component]
pub fn PrimaryRail() -> Element {
    let mut state = use_context::<AppState>();
    let nav = use_navigator();
    let navigation = state.navigation();
    let collapsed = navigation.primary_collapsed();
    let active = navigation.active_menu();

    rsx! {
        nav {
            class: if collapsed { "primary-rail collapsed" } else { "primary-rail" },

            div {
                class: "rail-brand",
                button {
                    class: "btn-ghost btn-sm",
                    title: "Toggle menu",
                    onclick: move |_| state.dispatch(NavAction::TogglePrimaryCollapse),
                    if collapsed { "»" } else { "«" }
                }
                if !collapsed {
                    span { "Energize" }
                }
            }

            div {
                class: "nav-links",

                for menu in PrimaryMenu::ALL {
                    button {
                        key: "{menu.path()}",
                        class: if active == Some(menu) { "nav-link active" } else { "nav-link" },
                        title: menu.title(),
                        onclick: move |_| {
                            state.dispatch(NavAction::SelectPrimary(menu));
                            if let Some(location) = menu.location() {
                                nav.push(Route::from(location));
                            }
                        },
                        span { class: "nav-initial", "{menu.title().chars().next().unwrap_or('?')}" }
                        if !collapsed {
                            span { class: "nav-title", "{menu.title()}" }
                            if menu.has_submenu() {
                                span { class: "nav-chevron", if active == Some(menu) { "▾" } else { "▸" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
