//! # Guard Component
//!
//! Session gate wrapped around every protected route.

use dioxus::prelude::*;
use energize_core::{Location, View};

use crate::router::Route;
use crate::state::AppState;
use crate::views::NotFound;

/// Renders the routed child only while a session token is stored.
///
/// The store is checked on every navigation. Without a token the user is
/// sent to sign-in with a history replace, so "back" does not return to
/// the protected page, and nothing protected renders in the meantime.
///
/// A one-segment path that names no category is not protected: it renders
/// the not-found page whether or not anyone is signed in.
#[component]
pub fn Guarded() -> Element {
    let state = use_context::<AppState>();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let location = route.location();

    match state.resolve(location) {
        View::Redirect { to, replace } => {
            tracing::debug!(from = ?location, "Guard redirect");
            let target = Route::from(to);
            if replace {
                nav.replace(target);
            } else {
                nav.push(target);
            }
            rsx! {}
        }
        View::Public(Location::NotFound) => rsx! {
            NotFound { segments: route.segments() }
        },
        View::Public(_) | View::Standalone(_) | View::Nested { .. } => rsx! { Outlet::<Route> {} },
    }
}
