//! # Navigation State
//!
//! Two-level menu state: the primary rail lists top-level categories, the
//! secondary rail lists the leaves of the expanded category.
//!
//! Menu titles and their leaves are closed enums, so the mapping from a
//! primary item to its secondary items is an exhaustive `match` rather than
//! a string-keyed table.

use crate::shell::Location;

/// Top-level entries of the primary rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryMenu {
    /// Plant list dashboard.
    Home,
    /// Geo layouts and plant digitization.
    Digitization,
    /// Plant, component and equipment library.
    Library,
    /// SCADA configuration.
    ScadaSettings,
    /// Generation forecasting.
    Forecasting,
    /// Device models.
    Models,
    /// Performance monitoring dashboards.
    PerformanceMonitoring,
    /// Maintenance planning.
    Maintenance,
    /// Users and roles per plant.
    Management,
    /// Warranty tracking.
    WarrantyManagement,
    /// Platform options.
    PlatformOptions,
    /// Data point configuration.
    DataPoints,
    /// Equipment audit.
    EquipmentAudit,
}

impl PrimaryMenu {
    /// All primary entries in rail order.
    pub const ALL: [PrimaryMenu; 13] = [
        PrimaryMenu::Home,
        PrimaryMenu::Digitization,
        PrimaryMenu::Library,
        PrimaryMenu::ScadaSettings,
        PrimaryMenu::Forecasting,
        PrimaryMenu::Models,
        PrimaryMenu::PerformanceMonitoring,
        PrimaryMenu::Maintenance,
        PrimaryMenu::Management,
        PrimaryMenu::WarrantyManagement,
        PrimaryMenu::PlatformOptions,
        PrimaryMenu::DataPoints,
        PrimaryMenu::EquipmentAudit,
    ];

    /// Display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            PrimaryMenu::Home => "Home",
            PrimaryMenu::Digitization => "Digitization",
            PrimaryMenu::Library => "Library",
            PrimaryMenu::ScadaSettings => "Scada Settings",
            PrimaryMenu::Forecasting => "Forecasting",
            PrimaryMenu::Models => "Models",
            PrimaryMenu::PerformanceMonitoring => "Performance Monitoring",
            PrimaryMenu::Maintenance => "Maintenance",
            PrimaryMenu::Management => "Management",
            PrimaryMenu::WarrantyManagement => "Warranty Management",
            PrimaryMenu::PlatformOptions => "Platform Options",
            PrimaryMenu::DataPoints => "Data Points",
            PrimaryMenu::EquipmentAudit => "Equipment Audit",
        }
    }

    /// Route path of the category page.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            PrimaryMenu::Home => "/home",
            PrimaryMenu::Digitization => "/digitization",
            PrimaryMenu::Library => "/library",
            PrimaryMenu::ScadaSettings => "/scada-settings",
            PrimaryMenu::Forecasting => "/forecasting",
            PrimaryMenu::Models => "/models",
            PrimaryMenu::PerformanceMonitoring => "/performance",
            PrimaryMenu::Maintenance => "/maintenance",
            PrimaryMenu::Management => "/management",
            PrimaryMenu::WarrantyManagement => "/warranty",
            PrimaryMenu::PlatformOptions => "/platform",
            PrimaryMenu::DataPoints => "/data-points",
            PrimaryMenu::EquipmentAudit => "/audit",
        }
    }

    /// Whether selecting this entry expands a secondary rail instead of
    /// navigating.
    #[must_use]
    pub fn has_submenu(self) -> bool {
        !self.items().is_empty()
    }

    /// Secondary items listed under this entry.
    #[must_use]
    pub fn items(self) -> &'static [SecondaryItem] {
        use SecondaryItem::*;
        match self {
            PrimaryMenu::Digitization => &[
                GeoLayouts,
                MergedGeoLayouts,
                PlantDigitization,
                LayoutDigitize,
                InverterDcCapacity,
            ],
            PrimaryMenu::Library => &[
                PlantDetails,
                ComponentCategories,
                Components,
                ImportComponents,
                EquipmentTypes,
                EquipmentWarranty,
                EquipmentInsurance,
                UpdateDcLoad,
                PlantDesignTree,
                Inverter,
                Meter,
                WorkOrderTemplateBulkUpdate,
            ],
            PrimaryMenu::Management => &[RolesManagement, UserManagement],
            PrimaryMenu::Home
            | PrimaryMenu::ScadaSettings
            | PrimaryMenu::Forecasting
            | PrimaryMenu::Models
            | PrimaryMenu::PerformanceMonitoring
            | PrimaryMenu::Maintenance
            | PrimaryMenu::WarrantyManagement
            | PrimaryMenu::PlatformOptions
            | PrimaryMenu::DataPoints
            | PrimaryMenu::EquipmentAudit => &[],
        }
    }

    /// Location a non-submenu entry links to. Submenu entries do not
    /// navigate.
    #[must_use]
    pub fn location(self) -> Option<Location> {
        match self {
            _ if self.has_submenu() => None,
            PrimaryMenu::Home => Some(Location::Home),
            other => Some(Location::Category(other)),
        }
    }

    /// Looks up an entry by its route path.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.path() == path)
    }
}

/// Leaves of the secondary rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecondaryItem {
    // Digitization
    GeoLayouts,
    MergedGeoLayouts,
    PlantDigitization,
    LayoutDigitize,
    InverterDcCapacity,
    // Library
    PlantDetails,
    ComponentCategories,
    Components,
    ImportComponents,
    EquipmentTypes,
    EquipmentWarranty,
    EquipmentInsurance,
    UpdateDcLoad,
    PlantDesignTree,
    Inverter,
    Meter,
    WorkOrderTemplateBulkUpdate,
    // Management
    RolesManagement,
    UserManagement,
}

impl SecondaryItem {
    /// Display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            SecondaryItem::GeoLayouts => "Geo Layouts",
            SecondaryItem::MergedGeoLayouts => "Merged Geo Layouts",
            SecondaryItem::PlantDigitization => "Plant Digitization",
            SecondaryItem::LayoutDigitize => "Layout Digitize",
            SecondaryItem::InverterDcCapacity => "Inverter DC Capacity",
            SecondaryItem::PlantDetails => "Plant Details",
            SecondaryItem::ComponentCategories => "Component Categories",
            SecondaryItem::Components => "Components",
            SecondaryItem::ImportComponents => "Import Components",
            SecondaryItem::EquipmentTypes => "Equipment Types",
            SecondaryItem::EquipmentWarranty => "Equipment Warranty",
            SecondaryItem::EquipmentInsurance => "Equipment Insurance",
            SecondaryItem::UpdateDcLoad => "Update DC Load",
            SecondaryItem::PlantDesignTree => "Plant Design Tree",
            SecondaryItem::Inverter => "Inverter",
            SecondaryItem::Meter => "Meter",
            SecondaryItem::WorkOrderTemplateBulkUpdate => "Work Order Template Bulk Update",
            SecondaryItem::RolesManagement => "Roles Management",
            SecondaryItem::UserManagement => "User Management",
        }
    }

    /// The primary entry this leaf belongs to.
    #[must_use]
    pub fn menu(self) -> PrimaryMenu {
        use SecondaryItem::*;
        match self {
            GeoLayouts | MergedGeoLayouts | PlantDigitization | LayoutDigitize
            | InverterDcCapacity => PrimaryMenu::Digitization,
            PlantDetails | ComponentCategories | Components | ImportComponents
            | EquipmentTypes | EquipmentWarranty | EquipmentInsurance | UpdateDcLoad
            | PlantDesignTree | Inverter | Meter | WorkOrderTemplateBulkUpdate => {
                PrimaryMenu::Library
            }
            RolesManagement | UserManagement => PrimaryMenu::Management,
        }
    }

    /// Routed page backing this leaf, if it has one.
    #[must_use]
    pub fn location(self) -> Option<Location> {
        match self {
            SecondaryItem::PlantDetails => Some(Location::PlantDetails),
            SecondaryItem::RolesManagement => Some(Location::RoleManagement),
            SecondaryItem::UserManagement => Some(Location::UserManagement),
            _ => None,
        }
    }
}

/// What the shell's content area shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentPanel {
    /// No leaf is active; the routed page renders.
    Outlet,
    /// The active leaf has a routed page.
    Page(Location),
    /// The active leaf has no screen yet.
    Placeholder(SecondaryItem),
}

/// A menu interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// A primary rail entry was clicked.
    SelectPrimary(PrimaryMenu),
    /// A secondary rail entry was clicked.
    SelectSecondary(SecondaryItem),
    /// The primary rail collapse button was clicked.
    TogglePrimaryCollapse,
    /// The secondary rail collapse button was clicked.
    ToggleSecondaryCollapse,
    /// Return to the initial state.
    Reset,
}

/// Menu state owned by the shell.
///
/// Every action has a defined resulting state; nothing here can fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    active_menu: Option<PrimaryMenu>,
    // Kept while the parent is collapsed so re-expanding restores it.
    active_submenu: Option<SecondaryItem>,
    primary_collapsed: bool,
    secondary_collapsed: bool,
}

impl NavigationState {
    /// Creates the initial state: nothing expanded, nothing collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies `action` in place.
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::SelectPrimary(menu) => self.select_primary(menu),
            NavAction::SelectSecondary(item) => self.select_secondary(item),
            NavAction::TogglePrimaryCollapse => self.toggle_primary_collapse(),
            NavAction::ToggleSecondaryCollapse => self.toggle_secondary_collapse(),
            NavAction::Reset => *self = Self::default(),
        }
        tracing::debug!(?action, menu = ?self.active_menu, submenu = ?self.active_submenu(), "Navigation updated");
    }

    /// Returns the state after applying `action`.
    #[must_use]
    pub fn reduce(mut self, action: NavAction) -> Self {
        self.apply(action);
        self
    }

    /// Handles a click on a primary rail entry.
    ///
    /// Entries without a submenu clear the expanded menu and the active
    /// leaf. Clicking the expanded menu collapses it. Clicking another
    /// submenu entry expands it and drops a leaf that belongs elsewhere.
    pub fn select_primary(&mut self, menu: PrimaryMenu) {
        if !menu.has_submenu() {
            self.active_menu = None;
            self.active_submenu = None;
        } else if self.active_menu == Some(menu) {
            self.active_menu = None;
        } else {
            self.active_menu = Some(menu);
            if self.active_submenu.is_some_and(|item| item.menu() != menu) {
                self.active_submenu = None;
            }
        }
    }

    /// Handles a click on a secondary rail entry.
    ///
    /// Clicking the active leaf clears it; the parent stays expanded.
    pub fn select_secondary(&mut self, item: SecondaryItem) {
        if self.active_menu != Some(item.menu()) {
            self.active_menu = Some(item.menu());
            self.active_submenu = None;
        }
        self.active_submenu = if self.active_submenu == Some(item) {
            None
        } else {
            Some(item)
        };
    }

    /// Flips the primary rail between full and icon-only width.
    pub fn toggle_primary_collapse(&mut self) {
        self.primary_collapsed = !self.primary_collapsed;
    }

    /// Flips the secondary rail's own collapsed flag.
    pub fn toggle_secondary_collapse(&mut self) {
        self.secondary_collapsed = !self.secondary_collapsed;
    }

    /// The expanded primary entry.
    #[must_use]
    pub fn active_menu(&self) -> Option<PrimaryMenu> {
        self.active_menu
    }

    /// The active leaf. Only reported while its parent is expanded.
    #[must_use]
    pub fn active_submenu(&self) -> Option<SecondaryItem> {
        self.active_menu.and(self.active_submenu)
    }

    /// Whether the primary rail is collapsed.
    #[must_use]
    pub fn primary_collapsed(&self) -> bool {
        self.primary_collapsed
    }

    /// Whether the secondary rail's own collapsed flag is set.
    #[must_use]
    pub fn secondary_collapsed(&self) -> bool {
        self.secondary_collapsed
    }

    /// Items for the secondary rail of the expanded menu.
    #[must_use]
    pub fn secondary_items(&self) -> &'static [SecondaryItem] {
        match self.active_menu {
            Some(menu) => menu.items(),
            None => &[],
        }
    }

    /// Whether the secondary rail takes any width.
    #[must_use]
    pub fn secondary_rail_visible(&self) -> bool {
        self.active_menu.is_some() && !self.primary_collapsed && !self.secondary_items().is_empty()
    }

    /// Whether the secondary rail shows labels as well as icons.
    #[must_use]
    pub fn secondary_rail_expanded(&self) -> bool {
        self.secondary_rail_visible() && !self.secondary_collapsed
    }

    /// What the content area should render.
    #[must_use]
    pub fn active_panel(&self) -> ContentPanel {
        match self.active_submenu() {
            None => ContentPanel::Outlet,
            Some(item) => match item.location() {
                Some(location) => ContentPanel::Page(location),
                None => ContentPanel::Placeholder(item),
            },
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const ALL_ITEMS: [SecondaryItem; 19] = [
        SecondaryItem::GeoLayouts,
        SecondaryItem::MergedGeoLayouts,
        SecondaryItem::PlantDigitization,
        SecondaryItem::LayoutDigitize,
        SecondaryItem::InverterDcCapacity,
        SecondaryItem::PlantDetails,
        SecondaryItem::ComponentCategories,
        SecondaryItem::Components,
        SecondaryItem::ImportComponents,
        SecondaryItem::EquipmentTypes,
        SecondaryItem::EquipmentWarranty,
        SecondaryItem::EquipmentInsurance,
        SecondaryItem::UpdateDcLoad,
        SecondaryItem::PlantDesignTree,
        SecondaryItem::Inverter,
        SecondaryItem::Meter,
        SecondaryItem::WorkOrderTemplateBulkUpdate,
        SecondaryItem::RolesManagement,
        SecondaryItem::UserManagement,
    ];

    fn any_menu() -> impl Strategy<Value = PrimaryMenu> {
        prop::sample::select(PrimaryMenu::ALL.to_vec())
    }

    fn any_item() -> impl Strategy<Value = SecondaryItem> {
        prop::sample::select(ALL_ITEMS.to_vec())
    }

    fn action() -> impl Strategy<Value = NavAction> {
        prop_oneof![
            any_menu().prop_map(NavAction::SelectPrimary),
            any_item().prop_map(NavAction::SelectSecondary),
            Just(NavAction::TogglePrimaryCollapse),
            Just(NavAction::ToggleSecondaryCollapse),
        ]
    }

    fn state() -> impl Strategy<Value = NavigationState> {
        prop::collection::vec(action(), 0..24)
            .prop_map(|actions| actions.into_iter().fold(NavigationState::new(), NavigationState::reduce))
    }

    proptest! {
        /// Property: clicking an unexpanded submenu entry twice leaves nothing expanded
        #[test]
        fn prop_primary_toggle_returns_to_none(
            start in state(),
            menu in any_menu().prop_filter("submenu entries only", |m| m.has_submenu())
        ) {
            prop_assume!(start.active_menu() != Some(menu));
            let end = start
                .reduce(NavAction::SelectPrimary(menu))
                .reduce(NavAction::SelectPrimary(menu));
            prop_assert_eq!(end.active_menu(), None);
        }

        /// Property: non-submenu entries always clear menu and leaf
        #[test]
        fn prop_non_submenu_clears(
            start in state(),
            menu in any_menu().prop_filter("plain entries only", |m| !m.has_submenu())
        ) {
            let end = start.reduce(NavAction::SelectPrimary(menu));
            prop_assert_eq!(end.active_menu(), None);
            prop_assert_eq!(end.active_submenu(), None);
        }

        /// Property: clicking an inactive leaf twice leaves no leaf active
        #[test]
        fn prop_secondary_toggle_returns_to_none(start in state(), item in any_item()) {
            prop_assume!(start.active_submenu() != Some(item));
            let end = start
                .reduce(NavAction::SelectSecondary(item))
                .reduce(NavAction::SelectSecondary(item));
            prop_assert_eq!(end.active_submenu(), None);
            prop_assert_eq!(end.active_menu(), Some(item.menu()));
        }

        /// Property: rail visibility follows menu, collapse flag and item count
        #[test]
        fn prop_secondary_visibility(state in state()) {
            let expected = state.active_menu().is_some()
                && !state.primary_collapsed()
                && !state.active_menu().map_or(&[][..], PrimaryMenu::items).is_empty();
            prop_assert_eq!(state.secondary_rail_visible(), expected);
        }

        /// Property: a reported leaf always belongs to the expanded menu
        #[test]
        fn prop_leaf_belongs_to_active_menu(state in state()) {
            if let Some(item) = state.active_submenu() {
                prop_assert_eq!(Some(item.menu()), state.active_menu());
            }
        }
    }
}
