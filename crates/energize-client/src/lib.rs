//! HTTP client for the Energize plant administration API.
//!
//! [`AdminClient`] authorizes every protected call from an
//! [`energize_core::SessionStore`]; plant-scoped calls take the plant id
//! read from the shell's [`energize_core::PlantContext`].

mod client;
mod error;
mod types;

pub use client::AdminClient;
pub use error::{ApiError, ApiResult};
pub use types::{
    AddMemberRequest, CreateRoleRequest, DeleteMemberRequest, LoginRequest, LoginResponse,
    Member, MembersResponse, MessageResponse, Permission, PermissionRef, PermissionsResponse,
    PlantData, PlantDetailsResponse, PlantListResponse, PlantPage, PlantRegistrationRequest,
    PlantSearchResponse, Role, RoleDetail, RoleDetailResponse, RolesResponse, SignupRequest,
    UpdateMemberRequest, UpdatePlantRequest, UpdateRoleRequest, UserSearchResponse,
    UserSuggestion,
};
