//! # Shell
//!
//! The persistent frame around routed pages. The shell owns the menu state
//! and the plant selection, and hands the plant selection to pages rendered
//! inside it.
//!
//! ```text
//! Location::parse(path)
//!        |
//!        v
//!   requires_session? --no--> View::Public
//!        | yes
//!   RouteGuard::check --none--> View::Redirect(Login, replace)
//!        | token
//!     in_shell? --no--> View::Standalone
//!        | yes
//!   View::Nested { plant: PlantContext }
//! ```

use std::sync::Arc;

use crate::guard::{GuardDecision, RouteGuard};
use crate::navigation::{NavAction, NavigationState, PrimaryMenu};
use crate::plant::PlantContext;
use crate::session::SessionStore;

/// A routable destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// Sign-in page.
    Login,
    /// Plant list dashboard.
    Home,
    /// Landing page of a primary category without its own screen.
    Category(PrimaryMenu),
    /// Members of the selected plant.
    UserManagement,
    /// Form to add a member to the selected plant.
    AddMember,
    /// Roles of the selected plant.
    RoleManagement,
    /// Form to create a role for the selected plant.
    AddRole,
    /// Form to edit one role of the selected plant. The role id travels as
    /// the last path segment.
    EditRole,
    /// Details of the selected plant.
    PlantDetails,
    /// Form to register a new plant.
    PlantRegistration,
    /// Client sign-up form, rendered outside the shell.
    ClientRegistration,
    /// Anything else.
    NotFound,
}

impl Location {
    /// Resolves a route path. Unknown paths map to [`Location::NotFound`].
    #[must_use]
    pub fn parse(path: &str) -> Self {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        match path {
            "/" => Location::Login,
            "/management/user-management" => Location::UserManagement,
            "/management/user-management/add" => Location::AddMember,
            "/management/roles-management" => Location::RoleManagement,
            "/management/roles-management/add" => Location::AddRole,
            "/client-registration" => Location::ClientRegistration,
            "/plant-registration" => Location::PlantRegistration,
            "/library/plant-details" => Location::PlantDetails,
            other if is_edit_role(other) => Location::EditRole,
            other => match PrimaryMenu::from_path(other) {
                Some(PrimaryMenu::Home) => Location::Home,
                Some(menu) => Location::Category(menu),
                None => Location::NotFound,
            },
        }
    }

    /// Route path. For [`Location::EditRole`] this is the prefix the role
    /// id is appended to.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Location::Login => "/",
            Location::Home => PrimaryMenu::Home.path(),
            Location::Category(menu) => menu.path(),
            Location::UserManagement => "/management/user-management",
            Location::AddMember => "/management/user-management/add",
            Location::RoleManagement => "/management/roles-management",
            Location::AddRole => "/management/roles-management/add",
            Location::EditRole => EDIT_ROLE_PREFIX,
            Location::PlantDetails => "/library/plant-details",
            Location::PlantRegistration => "/plant-registration",
            Location::ClientRegistration => "/client-registration",
            Location::NotFound => "/404",
        }
    }

    /// Whether a session token is needed to view this location.
    #[must_use]
    pub fn requires_session(self) -> bool {
        !matches!(self, Location::Login | Location::NotFound)
    }

    /// Whether this location renders inside the shell and receives the
    /// plant selection.
    #[must_use]
    pub fn in_shell(self) -> bool {
        self.requires_session() && self != Location::ClientRegistration
    }
}

const EDIT_ROLE_PREFIX: &str = "/management/roles-management/edit";

fn is_edit_role(path: &str) -> bool {
    path.strip_prefix(EDIT_ROLE_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|id| !id.is_empty() && !id.contains('/'))
}

/// What to render for a navigation.
#[derive(Debug, Clone)]
pub enum View {
    /// Leave for `to`; nothing guarded renders.
    Redirect {
        /// Target location.
        to: Location,
        /// Replace the current history entry.
        replace: bool,
    },
    /// A location that needs no session.
    Public(Location),
    /// A guarded location rendered outside the shell, without plant scope.
    Standalone(Location),
    /// A location rendered inside the shell.
    Nested {
        /// The routed page.
        location: Location,
        /// Plant selection shared with every other nested page.
        plant: PlantContext,
    },
}

impl View {
    /// The location that ends up on screen.
    #[must_use]
    pub fn location(&self) -> Location {
        match self {
            View::Redirect { to, .. } => *to,
            View::Public(location) | View::Standalone(location) => *location,
            View::Nested { location, .. } => *location,
        }
    }
}

/// Shell state: menus, plant selection and the session they depend on.
///
/// Navigation between nested pages leaves the plant selection untouched,
/// and so does a detour through a standalone page; only [`Shell::logout`]
/// or an explicit clear resets it.
///
/// `S` may be unsized, so a `Shell<dyn SessionStore>` can share its store
/// with an HTTP client.
pub struct Shell<S: SessionStore + ?Sized> {
    session: Arc<S>,
    navigation: NavigationState,
    plant: PlantContext,
    current: Location,
}

impl<S: SessionStore + ?Sized> Shell<S> {
    /// Mounts a shell with nothing selected.
    pub fn new(session: Arc<S>) -> Self {
        Self {
            session,
            navigation: NavigationState::new(),
            plant: PlantContext::new(),
            current: Location::Login,
        }
    }

    /// Decides what `location` renders as, without recording it.
    ///
    /// The guard is evaluated on every call.
    #[must_use]
    pub fn resolve(&self, location: Location) -> View {
        if !location.requires_session() {
            return View::Public(location);
        }
        match RouteGuard::check(self.session.as_ref()) {
            GuardDecision::Redirect { to, replace } => View::Redirect { to, replace },
            GuardDecision::Allow { .. } if location.in_shell() => View::Nested {
                location,
                plant: self.plant.clone(),
            },
            GuardDecision::Allow { .. } => View::Standalone(location),
        }
    }

    /// Navigates to `location`, evaluating the guard when required.
    pub fn navigate(&mut self, location: Location) -> View {
        let view = self.resolve(location);
        tracing::debug!(from = ?self.current, to = ?view.location(), "Navigated");
        self.current = view.location();
        view
    }

    /// Navigates to a route path.
    pub fn navigate_path(&mut self, path: &str) -> View {
        self.navigate(Location::parse(path))
    }

    /// Stores `token` after a successful sign-in.
    pub fn login(&mut self, token: String) {
        self.session.set(token);
        tracing::info!("Signed in");
    }

    /// Clears the session, the plant selection and the menu state.
    pub fn logout(&mut self) {
        self.session.clear();
        self.plant.clear();
        self.navigation.apply(NavAction::Reset);
        self.current = Location::Login;
        tracing::info!("Signed out");
    }

    /// Location currently on screen.
    #[must_use]
    pub fn current(&self) -> Location {
        self.current
    }

    /// Menu state.
    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Mutable menu state, for menu interactions.
    pub fn navigation_mut(&mut self) -> &mut NavigationState {
        &mut self.navigation
    }

    /// The plant selection handle.
    #[must_use]
    pub fn plant(&self) -> &PlantContext {
        &self.plant
    }

    /// Session store handle.
    #[must_use]
    pub fn session(&self) -> &Arc<S> {
        &self.session
    }

    /// Whether the secondary rail takes any width.
    #[must_use]
    pub fn secondary_rail_visible(&self) -> bool {
        self.navigation.secondary_rail_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::SecondaryItem;
    use crate::plant::Plant;
    use crate::session::MemorySessionStore;

    fn signed_in() -> Shell<MemorySessionStore> {
        Shell::new(Arc::new(MemorySessionStore::with_token("tok")))
    }

    fn nested_plant(view: View) -> PlantContext {
        match view {
            View::Nested { plant, .. } => plant,
            other => panic!("expected nested view, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_round_trip() {
        let locations = [
            Location::Login,
            Location::Home,
            Location::Category(PrimaryMenu::Forecasting),
            Location::Category(PrimaryMenu::Library),
            Location::UserManagement,
            Location::AddMember,
            Location::RoleManagement,
            Location::AddRole,
            Location::PlantDetails,
            Location::PlantRegistration,
            Location::ClientRegistration,
        ];
        for location in locations {
            assert_eq!(Location::parse(location.path()), location);
        }
        assert_eq!(Location::parse("/management/user-management/"), Location::UserManagement);
        assert_eq!(Location::parse("/does-not-exist"), Location::NotFound);
    }

    #[test]
    fn test_edit_role_carries_an_id() {
        assert_eq!(Location::parse("/management/roles-management/edit/r-1"), Location::EditRole);
        assert_eq!(Location::parse("/management/roles-management/edit/"), Location::NotFound);
        assert_eq!(Location::parse("/management/roles-management/edit/r-1/x"), Location::NotFound);
        assert!(Location::EditRole.in_shell());
        assert!(Location::PlantRegistration.in_shell());
    }

    #[test]
    fn test_unknown_category_is_public() {
        let shell = Shell::new(Arc::new(MemorySessionStore::new()));
        assert!(matches!(shell.resolve(Location::parse("/foo")), View::Public(Location::NotFound)));
    }

    #[test]
    fn test_plant_survives_standalone_detour() {
        let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::with_token("tok"));
        let mut shell: Shell<dyn SessionStore> = Shell::new(session);

        let plant = nested_plant(shell.navigate(Location::Home));
        plant.set_selected(Some(Plant::new("p-2", "Pokhran Solar Park")));

        assert!(matches!(
            shell.navigate(Location::ClientRegistration),
            View::Standalone(Location::ClientRegistration)
        ));

        let back = nested_plant(shell.navigate(Location::Home));
        assert_eq!(back.selected().unwrap().plant_id, "p-2");
        assert_eq!(back.snapshot().revision(), 1);
    }

    #[test]
    fn test_resolve_does_not_move_current() {
        let mut shell = signed_in();
        shell.navigate(Location::Home);
        assert!(matches!(shell.resolve(Location::AddRole), View::Nested { .. }));
        assert_eq!(shell.current(), Location::Home);
    }

    #[test]
    fn test_plant_survives_navigation() {
        let mut shell = signed_in();

        let plant = nested_plant(shell.navigate(Location::Home));
        plant.set_selected(Some(Plant::new("p-2", "Pokhran Solar Park")));

        let on_users = nested_plant(shell.navigate(Location::UserManagement));
        assert_eq!(on_users.selected().unwrap().plant_id, "p-2");

        let on_roles = nested_plant(shell.navigate(Location::RoleManagement));
        assert_eq!(on_roles.selected().unwrap().plant_id, "p-2");
        assert_eq!(shell.current(), Location::RoleManagement);
    }

    #[test]
    fn test_cleared_token_redirects_guarded_location() {
        let mut shell = signed_in();
        assert!(matches!(shell.navigate(Location::UserManagement), View::Nested { .. }));

        shell.session().clear();
        match shell.navigate(Location::UserManagement) {
            View::Redirect { to, replace } => {
                assert_eq!(to, Location::Login);
                assert!(replace);
            }
            other => panic!("expected redirect, got {other:?}"),
        }
        assert_eq!(shell.current(), Location::Login);
    }

    #[test]
    fn test_standalone_page_has_no_plant_scope() {
        let mut shell = signed_in();
        assert!(matches!(
            shell.navigate_path("/client-registration"),
            View::Standalone(Location::ClientRegistration)
        ));
    }

    #[test]
    fn test_public_locations_skip_guard() {
        let mut shell = Shell::new(Arc::new(MemorySessionStore::new()));
        assert!(matches!(shell.navigate(Location::Login), View::Public(Location::Login)));
        assert!(matches!(shell.navigate_path("/nope"), View::Public(Location::NotFound)));
    }

    #[test]
    fn test_logout_resets_plant_and_menus() {
        let mut shell = signed_in();
        shell.plant().set_selected(Some(Plant::new("p-1", "Technocraft_Shivale")));
        shell.navigation_mut().select_primary(PrimaryMenu::Library);
        shell.navigation_mut().select_secondary(SecondaryItem::Meter);

        shell.logout();

        assert_eq!(shell.plant().selected(), None);
        assert_eq!(shell.navigation(), &NavigationState::new());
        assert!(matches!(shell.navigate(Location::Home), View::Redirect { .. }));
    }

    #[test]
    fn test_secondary_rail_visibility_through_shell() {
        let mut shell = signed_in();
        assert!(!shell.secondary_rail_visible());

        shell.navigation_mut().select_primary(PrimaryMenu::Management);
        assert!(shell.secondary_rail_visible());

        shell.navigation_mut().toggle_primary_collapse();
        assert!(!shell.secondary_rail_visible());
    }
}
