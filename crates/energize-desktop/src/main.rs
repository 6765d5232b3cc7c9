//! # Energize Desktop
//!
//! Native admin panel for solar plant operations.
//!
//! ## Architecture
//!
//! The application talks to the plant administration backend over HTTP.
//! Every page except sign-in sits behind a session guard; pages inside the
//! shell share one selected plant.
//!
//! ## Modules
//!
//! - [`components`] - Guard, shell layout, menu rails and top bar
//! - [`logging`] - Tracing subscriber setup
//! - [`router`] - Application routes
//! - [`state`] - Global application state
//! - [`views`] - Page-level view components

use std::sync::Arc;

use anyhow::Context;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;
use energize_client::AdminClient;
use energize_core::{FileSessionStore, SessionStore, Settings};

mod components;
mod logging;
mod router;
mod state;
mod views;

use router::Route;
use state::{AppServices, AppState};

fn main() -> anyhow::Result<()> {
    let settings = Settings::load().context("failed to load settings")?;
    logging::init(&settings);

    let store = match &settings.session_file {
        Some(path) => FileSessionStore::new(path),
        None => FileSessionStore::in_config_dir().context("failed to locate session file")?,
    };
    tracing::info!(path = ?store.path(), api = %settings.api_base(), "Starting Energize Desktop");

    let session: Arc<dyn SessionStore> = Arc::new(store);
    let client = AdminClient::from_settings(&settings, session.clone())
        .context("failed to create HTTP client")?;

    let services = AppServices {
        settings,
        session,
        client,
    };

    let cfg = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Energize")
            .with_inner_size(LogicalSize::new(1280.0, 820.0))
            .with_min_inner_size(LogicalSize::new(960.0, 600.0)),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(cfg)
        .with_context(services)
        .launch(App);
    Ok(())
}

/// Root application component.
///
/// Initializes global state, loads the stylesheet and renders the router.
#[component]
fn App() -> Element {
    let services = use_context::<AppServices>();
    use_context_provider(move || AppState::new(services));

    rsx! {
        document::Stylesheet { href: asset!("/assets/styles.css") }
        Router::<Route> {}
    }
}
