//! # API Types
//!
//! Request and response bodies of the admin REST API. Field names follow
//! the backend's camelCase JSON.

use energize_core::Plant;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError};

// ==================== Authentication ====================

/// Sign-in request. `identifier` is an email address or username.
#[derive(Debug, Clone, Serialize, Validate)]
pub struct LoginRequest {
    /// Email or username.
    #[validate(length(min = 1, message = "Email or username is required"))]
    pub identifier: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Sign-in response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Whether the credentials were accepted.
    #[serde(default)]
    pub success: bool,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: String,
    /// Bearer token, present on success.
    #[serde(default)]
    pub token: Option<String>,
    /// Signed-in user profile, passed through untouched.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

/// Client (customer account) sign-up.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Contact name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Contact email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Contact phone number.
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile: String,
    /// Initial password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Account role, `user` by default.
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    /// Whether the account starts active.
    pub is_active: bool,
}

impl Default for SignupRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            mobile: String::new(),
            password: String::new(),
            role: "user".to_string(),
            is_active: true,
        }
    }
}

/// Generic `{ success, message }` acknowledgement.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    /// Outcome flag; absent on some endpoints.
    #[serde(default)]
    pub success: Option<bool>,
    /// Human-readable outcome.
    #[serde(default)]
    pub message: Option<String>,
}

// ==================== Plants ====================

/// Plant search response.
#[derive(Debug, Clone, Deserialize)]
pub struct PlantSearchResponse {
    /// Matching plants.
    pub results: Vec<Plant>,
}

/// Paged plant list response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantListResponse {
    /// Whether the query succeeded.
    #[serde(default)]
    pub success: bool,
    /// Error text when `success` is false.
    #[serde(default)]
    pub message: Option<String>,
    /// Plants on the requested page.
    #[serde(default)]
    pub data: Vec<Plant>,
    /// Matches across all pages.
    #[serde(default)]
    pub total_count: u64,
}

/// One page of plants.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantPage {
    /// Plants on this page.
    pub plants: Vec<Plant>,
    /// Matches across all pages.
    pub total_count: u64,
    /// Number of pages at the requested page size.
    pub total_pages: u64,
}

/// Single-plant response. Some deployments wrap the plant in a list.
#[derive(Debug, Clone, Deserialize)]
pub struct PlantDetailsResponse {
    /// Whether the query succeeded.
    #[serde(default)]
    pub success: Option<bool>,
    /// Error text when `success` is false.
    #[serde(default)]
    pub message: Option<String>,
    /// The plant, bare or wrapped in a list.
    #[serde(default)]
    pub data: Option<PlantData>,
}

/// Payload of [`PlantDetailsResponse`].
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PlantData {
    /// A single plant object.
    One(Plant),
    /// A list that should contain the requested plant.
    Many(Vec<Plant>),
}

impl PlantData {
    /// The plant with id `plant_id`, if present.
    #[must_use]
    pub fn find(self, plant_id: &str) -> Option<Plant> {
        match self {
            PlantData::One(plant) => Some(plant).filter(|p| p.plant_id == plant_id),
            PlantData::Many(plants) => plants.into_iter().find(|p| p.plant_id == plant_id),
        }
    }
}

/// Editable fields of the plant details form.
///
/// Numeric fields are kept as entered; the backend accepts either form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlantRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Plant name is required"))]
    pub plant_name: String,
    /// Project type, e.g. ground mount.
    pub project_type: String,
    /// DC capacity in kWp.
    pub dc_capacity: String,
    /// AC capacity in kW.
    pub ac_capacity: String,
    /// Module count.
    pub modules: String,
    /// Inverter count.
    pub inverters: String,
    /// Data logger ids.
    pub loggers: Vec<String>,
    /// Daily generation window start, `HH:MM:SS`.
    pub plant_start_time: String,
    /// Daily generation window end, `HH:MM:SS`.
    pub plant_end_time: String,
}

impl UpdatePlantRequest {
    /// Pre-fills the form from a plant's server attributes.
    #[must_use]
    pub fn from_plant(plant: &Plant) -> Self {
        let text = |key: &str| match plant.details.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };
        let loggers = match plant.details.get("loggers") {
            Some(Value::Array(items)) => items
                .iter()
                .map(|v| v.as_str().map_or_else(|| v.to_string(), str::to_string))
                .collect(),
            _ => Vec::new(),
        };

        Self {
            plant_name: plant.plant_name.clone(),
            project_type: text("projectType"),
            dc_capacity: text("dcCapacity"),
            ac_capacity: text("acCapacity"),
            modules: text("modules"),
            inverters: text("inverters"),
            loggers,
            plant_start_time: text("plantStartTime"),
            plant_end_time: text("plantEndTime"),
        }
    }
}

/// New plant registration.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PlantRegistrationRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Plant name is required"))]
    pub plant_name: String,
    /// Owning user's name.
    #[validate(length(min = 1, message = "Plant owner is required"))]
    pub plant_owner: String,
    /// DC capacity in kWp.
    #[validate(range(exclusive_min = 0.0, message = "DC capacity must be positive"))]
    pub dc_capacity: f64,
    /// AC capacity in kW, zero when unknown.
    #[validate(range(min = 0.0, message = "AC capacity cannot be negative"))]
    pub ac_capacity: f64,
    /// Inverter count.
    pub inverters: u32,
    /// String monitoring box count.
    pub smbs: u32,
    /// Module count.
    pub modules: u32,
    /// Inverter transformer rating.
    #[validate(length(min = 1, message = "Inverter transformer is required"))]
    pub inverter_transformer: String,
    /// Project type.
    #[validate(length(min = 1, message = "Project type is required"))]
    pub project_type: String,
    /// Daily generation window start, `HH:MM:SS`.
    pub plant_start_time: String,
    /// Daily generation window end, `HH:MM:SS`.
    pub plant_end_time: String,
    /// Whether the plant starts active.
    pub is_active: bool,
    /// Whether the plant follows a schedule.
    pub is_schedule: bool,
    /// Site latitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Site longitude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Data logger ids.
    #[validate(custom(function = "loggers_present"))]
    pub loggers: Vec<String>,
}

impl Default for PlantRegistrationRequest {
    fn default() -> Self {
        Self {
            plant_name: String::new(),
            plant_owner: String::new(),
            dc_capacity: 0.0,
            ac_capacity: 0.0,
            inverters: 0,
            smbs: 0,
            modules: 0,
            inverter_transformer: String::new(),
            project_type: String::new(),
            plant_start_time: "06:00:00".to_string(),
            plant_end_time: "18:00:00".to_string(),
            is_active: true,
            is_schedule: false,
            latitude: None,
            longitude: None,
            loggers: Vec::new(),
        }
    }
}

/// An empty logger list is fine; a list of blanks is not.
fn loggers_present(loggers: &[String]) -> Result<(), ValidationError> {
    if !loggers.is_empty() && loggers.iter().all(|l| l.trim().is_empty()) {
        let mut err = ValidationError::new("loggers");
        err.message = Some("At least one logger is required if added".into());
        return Err(err);
    }
    Ok(())
}

/// A user offered as plant owner.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserSuggestion {
    /// User identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// User search response.
#[derive(Debug, Clone, Deserialize)]
pub struct UserSearchResponse {
    /// Matching users.
    #[serde(default)]
    pub results: Vec<UserSuggestion>,
}

// ==================== Members ====================

/// A user with access to a plant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// User identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Role name on this plant.
    #[serde(default)]
    pub role: String,
    /// Permission names granted through the role.
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Members-of-plant response.
#[derive(Debug, Clone, Deserialize)]
pub struct MembersResponse {
    /// Whether the query succeeded.
    #[serde(default)]
    pub success: bool,
    /// Error text when `success` is false.
    #[serde(default)]
    pub message: Option<String>,
    /// Members of the plant.
    #[serde(default)]
    pub data: Vec<Member>,
}

/// Adds a new member to a plant.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
    /// Role to grant.
    #[validate(length(min = 1, message = "Select a role"))]
    pub role_id: String,
    /// Plant the member is added to.
    #[validate(length(min = 1, message = "No plant selected"))]
    pub plant_id: String,
}

/// Updates a member's profile and role on a plant.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    /// Member to update.
    pub user_id: String,
    /// New display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// New email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// New role; empty keeps the current one.
    pub role_id: String,
    /// Plant the change applies to.
    pub plant_id: String,
}

/// Removes a member from a plant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteMemberRequest {
    /// Member to remove.
    pub user_id: String,
    /// Plant to remove them from.
    pub plant_id: String,
}

// ==================== Roles ====================

/// A grantable permission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Permission {
    /// Permission identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Short name.
    pub name: String,
    /// What it allows.
    #[serde(default)]
    pub description: String,
}

/// A role defined on a plant.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Role {
    /// Role identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Role name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Permissions granted by the role.
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

/// Roles response. Older endpoints use `data` instead of `roles`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RolesResponse {
    /// Roles, current key.
    #[serde(default)]
    pub roles: Option<Vec<Role>>,
    /// Roles, legacy key.
    #[serde(default)]
    pub data: Option<Vec<Role>>,
}

impl RolesResponse {
    /// The roles under whichever key the server used.
    #[must_use]
    pub fn into_roles(self) -> Vec<Role> {
        self.roles.or(self.data).unwrap_or_default()
    }
}

/// A permission on a role, either expanded or as a bare id.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum PermissionRef {
    /// Permission id only.
    Id(String),
    /// Expanded permission.
    Full(Permission),
}

impl PermissionRef {
    /// The permission id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            PermissionRef::Id(id) => id,
            PermissionRef::Full(p) => &p.id,
        }
    }
}

/// A single role as returned for editing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoleDetail {
    /// Role identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Role name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Granted permissions.
    #[serde(default)]
    pub permissions: Vec<PermissionRef>,
}

impl RoleDetail {
    /// Ids of the granted permissions.
    #[must_use]
    pub fn permission_ids(&self) -> Vec<String> {
        self.permissions.iter().map(|p| p.id().to_string()).collect()
    }
}

/// Single-role response: `{ role }`, `{ data }` or the bare role.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RoleDetailResponse {
    /// Current shape.
    Wrapped {
        /// The role.
        role: RoleDetail,
    },
    /// Legacy shape.
    Legacy {
        /// The role.
        data: RoleDetail,
    },
    /// Unwrapped role.
    Bare(RoleDetail),
}

impl RoleDetailResponse {
    /// The role under whichever shape the server used.
    #[must_use]
    pub fn into_role(self) -> RoleDetail {
        match self {
            RoleDetailResponse::Wrapped { role }
            | RoleDetailResponse::Legacy { data: role }
            | RoleDetailResponse::Bare(role) => role,
        }
    }
}

/// All-permissions response.
#[derive(Debug, Clone, Deserialize)]
pub struct PermissionsResponse {
    /// Every permission the backend knows.
    #[serde(default)]
    pub data: Vec<Permission>,
}

/// Creates a role on a plant.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleRequest {
    /// Role name.
    #[validate(length(min = 1, message = "Role name is required"))]
    pub name: String,
    /// Description.
    pub description: String,
    /// Permissions to grant.
    #[validate(length(min = 1, message = "Select at least one permission"))]
    pub permission_ids: Vec<String>,
    /// Plant the role belongs to.
    #[validate(length(min = 1, message = "No plant selected"))]
    pub plant_id: String,
}

/// Updates an existing role.
#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleRequest {
    /// Role to update.
    #[validate(length(min = 1, message = "No role selected"))]
    pub role_id: String,
    /// New name.
    #[validate(length(min = 1, message = "Role name is required"))]
    pub name: String,
    /// New description.
    pub description: String,
    /// Full set of permissions the role should grant.
    #[validate(length(min = 1, message = "Select at least one permission"))]
    pub permission_ids: Vec<String>,
}
