//! # State
//!
//! Application-wide state shared through Dioxus context.

mod app_state;

pub use app_state::{AppServices, AppState};
