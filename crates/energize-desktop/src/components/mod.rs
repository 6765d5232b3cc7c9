//! # UI Components
//!
//! Reusable UI components for the Energize desktop application.
//!
//! - [`Guarded`] - Session gate around every protected route
//! - [`ShellLayout`] - Rails, top bar and plant scope around nested pages
//! - [`PrimaryRail`] / [`SecondaryRail`] - Two-level menu
//! - [`TopBar`] - Plant search and sign-out
//! - [`PlantScope`] - Selected plant shared with nested pages

mod guard;
mod layout;
mod pager;
mod placeholder;
mod plant_scope;
mod primary_rail;
mod secondary_rail;
mod top_bar;

pub use guard::Guarded;
pub use layout::ShellLayout;
pub use pager::Pager;
pub use placeholder::Placeholder;
pub use plant_scope::PlantScope;
pub use primary_rail::PrimaryRail;
pub use secondary_rail::SecondaryRail;
pub use top_bar::TopBar;
