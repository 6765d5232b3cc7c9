//! Client-side state for the Energize solar plant admin panel.
//!
//! This crate provides:
//! - **Session**: persisted bearer-token storage ([`SessionStore`])
//! - **Guard**: the authenticated-area gate ([`RouteGuard`])
//! - **Navigation**: the two-rail menu state machine ([`NavigationState`])
//! - **Plant selection**: the globally selected plant ([`PlantContext`])
//! - **Search**: debounced, last-query-wins plant search ([`PlantSearch`])
//! - **Shell**: composition of the above behind routed locations ([`Shell`])
//!
//! None of these types depend on a rendering framework.
//!
//! # Example
//!
//! ```
//! use energize_core::{
//!     Location, MemorySessionStore, Plant, PrimaryMenu, SecondaryItem, SessionStore, Shell, View,
//! };
//! use std::sync::Arc;
//!
//! let session = Arc::new(MemorySessionStore::new());
//! session.set("tok".into());
//!
//! let mut shell = Shell::new(session);
//! shell.navigation_mut().select_primary(PrimaryMenu::Library);
//! shell.navigation_mut().select_secondary(SecondaryItem::Components);
//! assert!(shell.secondary_rail_visible());
//!
//! match shell.navigate(Location::UserManagement) {
//!     View::Nested { plant, .. } => {
//!         plant.set_selected(Some(Plant::new("p-2", "Pokhran Solar Park")));
//!     }
//!     other => panic!("unexpected view: {other:?}"),
//! }
//!
//! assert_eq!(shell.plant().selected().unwrap().plant_id, "p-2");
//! ```

mod config;
mod error;
mod guard;
mod navigation;
mod pagination;
mod plant;
mod search;
mod session;
mod shell;

pub use config::{LogFormat, Settings};
pub use error::{CoreError, Result};
pub use guard::{GuardDecision, RouteGuard};
pub use navigation::{ContentPanel, NavAction, NavigationState, PrimaryMenu, SecondaryItem};
pub use pagination::Paginator;
pub use plant::{Plant, PlantContext, PlantSelection};
pub use search::{PlantSearch, SearchOutcome, SearchSequencer, SearchTicket};
pub use session::{FileSessionStore, MemorySessionStore, SessionStore};
pub use shell::{Location, Shell, View};
