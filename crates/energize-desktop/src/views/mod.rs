//! # Views
//!
//! Page-level view components for the Energize desktop application.
//!
//! - [`Login`] - Sign-in
//! - [`Home`] - Plant list
//! - [`PlantDetails`] - Attributes of the selected plant
//! - [`PlantRegistration`] - New plant sign-up
//! - [`UserManagement`] / [`AddMember`] - Members of the selected plant
//! - [`RoleManagement`] / [`AddRole`] / [`EditRole`] - Roles of the selected plant
//! - [`Category`] - Landing page of a primary category
//! - [`ClientRegistration`] - Client sign-up, outside the shell
//! - [`NotFound`] - Unknown routes

mod add_member;
mod add_role;
mod category;
mod client_registration;
mod edit_role;
mod home;
mod login;
mod not_found;
mod plant_details;
mod plant_registration;
mod role_management;
mod user_management;

pub use add_member::AddMember;
pub use add_role::AddRole;
pub use category::Category;
pub use client_registration::ClientRegistration;
pub use edit_role::EditRole;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use plant_details::PlantDetails;
pub use plant_registration::PlantRegistration;
pub use role_management::RoleManagement;
pub use user_management::UserManagement;
