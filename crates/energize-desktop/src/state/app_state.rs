//! # Application State
//!
//! Global state management using Dioxus signals and context.

use std::sync::Arc;

use dioxus::prelude::*;
use energize_client::AdminClient;
use energize_core::{
    Location, NavAction, NavigationState, PlantContext, SessionStore, Settings, Shell, View,
};

/// Services built before launch and handed to the root component.
#[derive(Clone)]
pub struct AppServices {
    /// Loaded settings.
    pub settings: Settings,
    /// Persisted session token.
    pub session: Arc<dyn SessionStore>,
    /// API client authorized from `session`.
    pub client: AdminClient,
}

/// Global application state.
///
/// Shared across all components via Dioxus context.
/// Use `use_context::<AppState>()` to access in components.
///
/// The [`Shell`] lives here rather than in the shell layout, so the menu
/// state and the selected plant outlive the layout while the user visits
/// a standalone page. Only [`AppState::logout`] resets them.
///
/// # Examples
///
/// ```rust,ignore
/// #[component]
/// fn MyComponent() -> Element {
///     let state = use_context::<AppState>();
///     let client = state.client();
///
///     rsx! { p { "API: {client.base_url()}" } }
/// }
/// ```
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded settings.
    pub settings: Signal<Settings>,

    /// Session, menu state and plant selection.
    pub shell: Signal<Shell<dyn SessionStore>>,

    /// API client.
    pub client: Signal<AdminClient>,

    /// Mirrors the session store so guarded views re-render on sign-in and
    /// sign-out.
    pub is_authenticated: Signal<bool>,
}

impl AppState {
    /// Creates the state from pre-built services, restoring any persisted
    /// session.
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        let is_authenticated = services.session.is_authenticated();
        if is_authenticated {
            tracing::info!("Restored persisted session");
        }

        Self {
            settings: Signal::new(services.settings),
            shell: Signal::new(Shell::new(services.session)),
            client: Signal::new(services.client),
            is_authenticated: Signal::new(is_authenticated),
        }
    }

    /// Returns a handle to the API client.
    #[must_use]
    pub fn client(&self) -> AdminClient {
        self.client.read().clone()
    }

    /// Resolves `location` against the session store.
    ///
    /// The guard runs on every call. Also subscribes the caller to sign-in
    /// state changes.
    #[must_use]
    pub fn resolve(&self, location: Location) -> View {
        let _ = self.is_authenticated.read();
        self.shell.peek().resolve(location)
    }

    /// The shell's plant selection handle.
    #[must_use]
    pub fn plant(&self) -> PlantContext {
        self.shell.peek().plant().clone()
    }

    /// Current menu state. Subscribes the caller to menu changes.
    #[must_use]
    pub fn navigation(&self) -> NavigationState {
        self.shell.read().navigation().clone()
    }

    /// Applies a menu interaction.
    pub fn dispatch(&mut self, action: NavAction) {
        self.shell.write().navigation_mut().apply(action);
    }

    /// Check if user is logged in.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        *self.is_authenticated.read()
    }

    /// Records a successful sign-in. The client has already stored the
    /// token.
    pub fn signed_in(&mut self) {
        self.is_authenticated.set(true);
    }

    /// Clears the stored token, the plant selection and the menu state.
    pub fn logout(&mut self) {
        self.shell.write().logout();
        self.is_authenticated.set(false);
    }
}
