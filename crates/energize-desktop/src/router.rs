//! # Routing
//!
//! Defines the application routes and navigation structure.

use dioxus::prelude::*;
use energize_core::{Location, PrimaryMenu};

use crate::components::{Guarded, ShellLayout};
use crate::views::{
    AddMember, AddRole, Category, ClientRegistration, EditRole, Home, Login, NotFound,
    PlantDetails, PlantRegistration, RoleManagement, UserManagement,
};

/// Application routes.
///
/// Everything but sign-in and the not-found page sits behind [`Guarded`].
/// Pages inside [`ShellLayout`] share the rails, the top bar and the
/// selected plant; client registration is guarded but renders on its own.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    /// Sign-in form.
    #[route("/")]
    Login {},

    #[layout(Guarded)]
        /// Client sign-up form, outside the shell.
        #[route("/client-registration")]
        ClientRegistration {},

        #[layout(ShellLayout)]
            /// Plant list dashboard.
            #[route("/home")]
            Home {},

            /// Members of the selected plant.
            #[route("/management/user-management")]
            UserManagement {},

            /// Add a member to the selected plant.
            #[route("/management/user-management/add")]
            AddMember {},

            /// Roles of the selected plant.
            #[route("/management/roles-management")]
            RoleManagement {},

            /// Create a role on the selected plant.
            #[route("/management/roles-management/add")]
            AddRole {},

            /// Edit one role of the selected plant.
            ///
            /// # Parameters
            ///
            /// * `id` - Role identifier
            #[route("/management/roles-management/edit/:id")]
            EditRole { id: String },

            /// Details of the selected plant.
            #[route("/library/plant-details")]
            PlantDetails {},

            /// Register a new plant.
            #[route("/plant-registration")]
            PlantRegistration {},

            /// Landing page of a primary category.
            ///
            /// # Parameters
            ///
            /// * `category` - Category path segment, e.g. `forecasting`
            #[route("/:category")]
            Category { category: String },
        #[end_layout]
    #[end_layout]

    /// Anything else.
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Routing-model location of this route.
    #[must_use]
    pub fn location(&self) -> Location {
        Location::parse(&self.to_string())
    }

    /// Non-empty path segments of this route.
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        self.to_string()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl From<Location> for Route {
    fn from(location: Location) -> Self {
        match location {
            Location::Login => Route::Login {},
            Location::Home => Route::Home {},
            Location::Category(menu) => Route::Category {
                category: menu.path().trim_start_matches('/').to_string(),
            },
            Location::UserManagement => Route::UserManagement {},
            Location::AddMember => Route::AddMember {},
            Location::RoleManagement => Route::RoleManagement {},
            Location::AddRole => Route::AddRole {},
            // No role id to carry; land on the list instead.
            Location::EditRole => Route::RoleManagement {},
            Location::PlantDetails => Route::PlantDetails {},
            Location::PlantRegistration => Route::PlantRegistration {},
            Location::ClientRegistration => Route::ClientRegistration {},
            Location::NotFound => Route::NotFound {
                segments: Vec::new(),
            },
        }
    }
}

/// Resolves a category path segment to its primary menu entry.
#[must_use]
pub fn category_menu(category: &str) -> Option<PrimaryMenu> {
    PrimaryMenu::from_path(&format!("/{category}"))
}
