//! # API Client
//!
//! HTTP client for the plant administration backend.
//!
//! Every request except sign-in and sign-up carries the stored session
//! token as a bearer credential. A protected request made without a token
//! fails locally and never reaches the network.

use std::sync::Arc;
use std::time::Duration;

use energize_core::{Plant, SessionStore, Settings};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::types::{
    AddMemberRequest, CreateRoleRequest, DeleteMemberRequest, LoginRequest, LoginResponse,
    Member, MembersResponse, MessageResponse, Permission, PermissionsResponse, PlantDetailsResponse,
    PlantListResponse, PlantPage, PlantRegistrationRequest, PlantSearchResponse, Role,
    RoleDetail, RoleDetailResponse, RolesResponse, SignupRequest, UpdateMemberRequest,
    UpdatePlantRequest, UpdateRoleRequest, UserSearchResponse, UserSuggestion,
};

/// Endpoints that are called without a bearer token.
const PUBLIC_PATHS: &[&str] = &["/users/login", "/users/signup"];

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the admin API.
///
/// The client is cheaply cloneable; clones share the connection pool and
/// the session store.
///
/// # Examples
///
/// ```rust,ignore
/// use energize_client::AdminClient;
/// use energize_core::MemorySessionStore;
/// use std::sync::Arc;
///
/// let client = AdminClient::new("http://localhost:3000/api", Arc::new(MemorySessionStore::new()))?;
/// client.login("admin@example.com", "secret").await?;
/// let members = client.list_members("p-2").await?;
/// ```
#[derive(Clone)]
pub struct AdminClient {
    base_url: String,
    http: Client,
    session: Arc<dyn SessionStore>,
}

impl AdminClient {
    /// Creates a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> ApiResult<Self> {
        Self::with_timeout(base_url, session, DEFAULT_TIMEOUT)
    }

    /// Creates a client with a custom per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn with_timeout(
        base_url: impl Into<String>,
        session: Arc<dyn SessionStore>,
        timeout: Duration,
    ) -> ApiResult<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url,
            http,
            session,
        })
    }

    /// Creates a client from application settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be built.
    pub fn from_settings(settings: &Settings, session: Arc<dyn SessionStore>) -> ApiResult<Self> {
        Self::with_timeout(settings.api_base(), session, settings.request_timeout())
    }

    /// Returns the API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the session store requests are authorized from.
    #[must_use]
    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    /// Builds a request, attaching the bearer token for protected paths.
    fn request(&self, method: Method, path: &str) -> ApiResult<RequestBuilder> {
        let builder = self.http.request(method, format!("{}{}", self.base_url, path));
        if PUBLIC_PATHS.contains(&path) {
            return Ok(builder);
        }
        match self.session.get() {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => {
                tracing::warn!(path, "Refusing protected request without a session token");
                Err(ApiError::Unauthenticated)
            }
        }
    }

    // ==================== Authentication ====================

    /// Signs in and stores the returned token in the session store.
    ///
    /// # Returns
    ///
    /// The full sign-in response, including the user profile.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Validation`] - Identifier or password is empty
    /// * [`ApiError::Server`] - Credentials rejected with a non-2xx status
    /// * [`ApiError::Rejected`] - Credentials rejected with `success: false`
    /// * [`ApiError::InvalidResponse`] - Success without a token
    pub async fn login(&self, identifier: &str, password: &str) -> ApiResult<LoginResponse> {
        let req = LoginRequest {
            identifier: identifier.trim().to_string(),
            password: password.to_string(),
        };
        req.validate()?;

        let res = self
            .request(Method::POST, "/users/login")?
            .json(&req)
            .send()
            .await?;
        let body: LoginResponse = read_json(res).await?;

        if !body.success {
            return Err(ApiError::Rejected(or_default(
                Some(body.message),
                "Login failed",
            )));
        }
        let Some(token) = body.token.clone().filter(|t| !t.is_empty()) else {
            return Err(ApiError::InvalidResponse(
                "login succeeded without a token".to_string(),
            ));
        };

        self.session.set(token);
        tracing::info!(identifier = %req.identifier, "Signed in");
        Ok(body)
    }

    /// Registers a client account. Does not touch the session.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Validation`] - A required field is missing
    /// * [`ApiError::Server`] / [`ApiError::Rejected`] - Registration refused
    pub async fn signup(&self, req: &SignupRequest) -> ApiResult<String> {
        req.validate()?;
        let res = self
            .request(Method::POST, "/users/signup")?
            .json(req)
            .send()
            .await?;
        acknowledge(res, "Client registered successfully").await
    }

    // ==================== Plants ====================

    /// Searches plants by name.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Unauthenticated`] - No session token
    /// * [`ApiError::InvalidResponse`] - `results` is missing or not a list
    pub async fn search_plants(&self, query: &str) -> ApiResult<Vec<Plant>> {
        let res = self
            .request(Method::GET, "/search/plantSearch")?
            .query(&[("q", query)])
            .send()
            .await?;
        let body: PlantSearchResponse = read_json(res).await?;
        Ok(body.results)
    }

    /// Lists plants a page at a time. `page` is 1-based.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Unauthenticated`] - No session token
    /// * [`ApiError::Rejected`] - The server reported `success: false`
    pub async fn list_plants(&self, search: &str, page: u64, limit: u64) -> ApiResult<PlantPage> {
        let limit = limit.max(1);
        let res = self
            .request(Method::GET, "/plants")?
            .query(&[
                ("search", search.to_string()),
                ("page", page.max(1).to_string()),
                ("limit", limit.to_string()),
            ])
            .send()
            .await?;
        let body: PlantListResponse = read_json(res).await?;

        if !body.success {
            return Err(ApiError::Rejected(or_default(
                body.message,
                "Failed to fetch plants",
            )));
        }
        Ok(PlantPage {
            plants: body.data,
            total_count: body.total_count,
            total_pages: body.total_count.div_ceil(limit).max(1),
        })
    }

    /// Fetches one plant with all its server attributes.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Unauthenticated`] - No session token
    /// * [`ApiError::Rejected`] - The server reported `success: false`
    /// * [`ApiError::InvalidResponse`] - The plant is not in the response
    pub async fn get_plant(&self, plant_id: &str) -> ApiResult<Plant> {
        let res = self
            .request(Method::GET, "/plants")?
            .query(&[("plantId", plant_id)])
            .send()
            .await?;
        let body: PlantDetailsResponse = read_json(res).await?;

        if body.success == Some(false) {
            return Err(ApiError::Rejected(or_default(
                body.message,
                "Failed to fetch plant",
            )));
        }
        body.data
            .and_then(|data| data.find(plant_id))
            .ok_or_else(|| ApiError::InvalidResponse(format!("plant {plant_id} missing from response")))
    }

    /// Saves edits to a plant's details.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Validation`] - The plant name is empty
    /// * [`ApiError::Server`] / [`ApiError::Rejected`] - The server refused
    pub async fn update_plant(&self, plant_id: &str, req: &UpdatePlantRequest) -> ApiResult<String> {
        req.validate()?;
        let res = self
            .request(Method::PUT, "/plants")?
            .query(&[("plantId", plant_id)])
            .json(req)
            .send()
            .await?;
        acknowledge(res, "Plant updated successfully").await
    }

    /// Registers a new plant.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Validation`] - A required field is missing
    /// * [`ApiError::Server`] / [`ApiError::Rejected`] - Registration refused
    pub async fn register_plant(&self, req: &PlantRegistrationRequest) -> ApiResult<String> {
        req.validate()?;
        let res = self
            .request(Method::POST, "/plants/plantRegistration")?
            .json(req)
            .send()
            .await?;
        acknowledge(res, "Plant registered successfully").await
    }

    /// Searches users by name, for picking a plant owner.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Unauthenticated`] - No session token
    pub async fn search_users(&self, query: &str) -> ApiResult<Vec<UserSuggestion>> {
        let res = self
            .request(Method::GET, "/search/userSearch")?
            .query(&[("q", query)])
            .send()
            .await?;
        let body: UserSearchResponse = read_json(res).await?;
        Ok(body.results)
    }

    // ==================== Members ====================

    /// Lists the members of a plant.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Unauthenticated`] - No session token
    /// * [`ApiError::Rejected`] - The server reported `success: false`
    pub async fn list_members(&self, plant_id: &str) -> ApiResult<Vec<Member>> {
        let res = self
            .request(Method::GET, "/detaileRole")?
            .query(&[("plantId", plant_id)])
            .send()
            .await?;
        let body: MembersResponse = read_json(res).await?;

        if !body.success {
            return Err(ApiError::Rejected(or_default(
                body.message,
                "Failed to fetch users",
            )));
        }
        Ok(body.data)
    }

    /// Adds a member to a plant.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Validation`] - The form is incomplete
    /// * [`ApiError::Server`] / [`ApiError::Rejected`] - The server refused
    pub async fn add_member(&self, req: &AddMemberRequest) -> ApiResult<String> {
        req.validate()?;
        let res = self
            .request(Method::POST, "/addMember")?
            .json(req)
            .send()
            .await?;
        acknowledge(res, "Member added successfully").await
    }

    /// Updates a member's profile and role.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Validation`] - Name or email is invalid
    /// * [`ApiError::Server`] / [`ApiError::Rejected`] - The server refused
    pub async fn update_member(&self, req: &UpdateMemberRequest) -> ApiResult<String> {
        req.validate()?;
        let res = self
            .request(Method::PATCH, "/detaileRole/updateRole")?
            .json(req)
            .send()
            .await?;
        acknowledge(res, "User updated successfully").await
    }

    /// Removes a member from a plant.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Server`] / [`ApiError::Rejected`] - The server refused
    pub async fn delete_member(&self, user_id: &str, plant_id: &str) -> ApiResult<String> {
        let req = DeleteMemberRequest {
            user_id: user_id.to_string(),
            plant_id: plant_id.to_string(),
        };
        let res = self
            .request(Method::DELETE, "/detaileRole/deleteRole")?
            .json(&req)
            .send()
            .await?;
        acknowledge(res, "User deleted successfully").await
    }

    // ==================== Roles ====================

    /// Lists the roles defined on a plant.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Unauthenticated`] - No session token
    /// * [`ApiError::InvalidResponse`] - The body is not a roles list
    pub async fn list_roles(&self, plant_id: &str) -> ApiResult<Vec<Role>> {
        let res = self
            .request(Method::GET, "/users/roles/getRolePlId")?
            .query(&[("plantId", plant_id)])
            .send()
            .await?;
        let body: RolesResponse = read_json(res).await?;
        Ok(body.into_roles())
    }

    /// Fetches one role of a plant for editing.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Unauthenticated`] - No session token
    /// * [`ApiError::InvalidResponse`] - The body is not a role
    pub async fn get_role(&self, role_id: &str, plant_id: &str) -> ApiResult<RoleDetail> {
        let res = self
            .request(Method::GET, "/users/createRole")?
            .query(&[("roleId", role_id), ("plantId", plant_id)])
            .send()
            .await?;
        let body: RoleDetailResponse = read_json(res).await?;
        Ok(body.into_role())
    }

    /// Lists every permission that can be granted.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Unauthenticated`] - No session token
    pub async fn list_permissions(&self) -> ApiResult<Vec<Permission>> {
        let res = self
            .request(Method::GET, "/users/roles/getAllpermission")?
            .send()
            .await?;
        let body: PermissionsResponse = read_json(res).await?;
        Ok(body.data)
    }

    /// Creates a role on a plant.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Validation`] - Name or permissions missing
    /// * [`ApiError::Server`] / [`ApiError::Rejected`] - The server refused
    pub async fn create_role(&self, req: &CreateRoleRequest) -> ApiResult<String> {
        req.validate()?;
        let res = self
            .request(Method::POST, "/users/createRole")?
            .json(req)
            .send()
            .await?;
        acknowledge(res, "Role created successfully").await
    }

    /// Replaces a role's name, description and permissions.
    ///
    /// # Errors
    ///
    /// * [`ApiError::Validation`] - Name or permissions missing
    /// * [`ApiError::Server`] / [`ApiError::Rejected`] - The server refused
    pub async fn update_role(&self, req: &UpdateRoleRequest) -> ApiResult<String> {
        req.validate()?;
        let res = self
            .request(Method::PUT, "/users/createRole")?
            .json(req)
            .send()
            .await?;
        acknowledge(res, "Role updated successfully").await
    }
}

/// Decodes a 2xx body, or turns the response into [`ApiError::Server`].
async fn read_json<T: DeserializeOwned>(res: Response) -> ApiResult<T> {
    let status = res.status();
    if !status.is_success() {
        let body = res.text().await.unwrap_or_default();
        return Err(ApiError::Server {
            status: status.as_u16(),
            message: server_message(&body),
        });
    }

    res.json()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Reads a `{ success, message }` acknowledgement and returns its message.
async fn acknowledge(res: Response, fallback: &str) -> ApiResult<String> {
    let body: MessageResponse = read_json(res).await?;
    if body.success == Some(false) {
        return Err(ApiError::Rejected(or_default(body.message, "Request failed")));
    }
    Ok(or_default(body.message, fallback))
}

/// Extracts the `message` field of a JSON error body, or the raw text.
fn server_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}

fn or_default(message: Option<String>, fallback: &str) -> String {
    message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use energize_core::MemorySessionStore;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, session: Arc<MemorySessionStore>) -> AdminClient {
        AdminClient::new(format!("{}/api", server.uri()), session).unwrap()
    }

    #[tokio::test]
    async fn test_login_stores_token_without_sending_one() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/login"))
            .and(body_json(json!({"identifier": "admin", "password": "secret"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Login successful",
                "token": "tok-1",
                "data": {"name": "Admin"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let session = Arc::new(MemorySessionStore::with_token("stale"));
        let client = client(&mock_server, session.clone());
        let body = client.login(" admin ", "secret").await.unwrap();

        assert_eq!(body.token.as_deref(), Some("tok-1"));
        assert_eq!(session.get().as_deref(), Some("tok-1"));

        let requests = mock_server.received_requests().await.unwrap();
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_server_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/login"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Invalid credentials"
            })))
            .mount(&mock_server)
            .await;

        let session = Arc::new(MemorySessionStore::new());
        let err = client(&mock_server, session.clone())
            .login("admin", "wrong")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Server { status: 401, .. }));
        assert_eq!(err.user_message(), "Invalid credentials");
        assert!(!session.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_rejected_with_success_false() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "Account disabled"
            })))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server, Arc::new(MemorySessionStore::new()))
            .login("admin", "secret")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Rejected(ref m) if m == "Account disabled"));
    }

    #[tokio::test]
    async fn test_protected_request_without_token_never_sent() {
        let mock_server = MockServer::start().await;

        let err = client(&mock_server, Arc::new(MemorySessionStore::new()))
            .list_members("p-1")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Unauthenticated));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_plants_sends_bearer_and_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/search/plantSearch"))
            .and(query_param("q", "pokh"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"plantId": "p-2", "plantName": "Pokhran Solar Park", "capacity": 40}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let plants = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .search_plants("pokh")
            .await
            .unwrap();

        assert_eq!(plants.len(), 1);
        assert_eq!(plants[0].plant_name, "Pokhran Solar Park");
        assert_eq!(plants[0].details["capacity"], 40);
    }

    #[tokio::test]
    async fn test_search_plants_rejects_malformed_results() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/search/plantSearch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"results": "none"})))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .search_plants("x")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_list_plants_pages() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/plants"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"plantId": "p-6", "plantName": "Rewa Ultra Mega"}],
                "totalCount": 11
            })))
            .mount(&mock_server)
            .await;

        let page = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .list_plants("", 2, 5)
            .await
            .unwrap();

        assert_eq!(page.total_count, 11);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.plants[0].plant_id, "p-6");
    }

    #[tokio::test]
    async fn test_list_roles_accepts_legacy_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/roles/getRolePlId"))
            .and(query_param("plantId", "p-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "_id": "r-1",
                    "name": "Operator",
                    "permissions": [{"_id": "perm-1", "name": "view_dashboard"}]
                }]
            })))
            .mount(&mock_server)
            .await;

        let roles = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .list_roles("p-1")
            .await
            .unwrap();

        assert_eq!(roles[0].id, "r-1");
        assert_eq!(roles[0].permissions[0].name, "view_dashboard");
    }

    #[tokio::test]
    async fn test_list_roles_failure_is_not_an_empty_list() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/roles/getRolePlId"))
            .respond_with(
                ResponseTemplate::new(500).set_body_json(json!({"message": "Roles unavailable"})),
            )
            .mount(&mock_server)
            .await;

        let err = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .list_roles("p-1")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Server { status: 500, .. }));
        assert_eq!(err.user_message(), "Roles unavailable");
    }

    #[tokio::test]
    async fn test_delete_member_sends_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/detaileRole/deleteRole"))
            .and(body_json(json!({"userId": "u-7", "plantId": "p-1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let message = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .delete_member("u-7", "p-1")
            .await
            .unwrap();

        assert_eq!(message, "User deleted successfully");
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let mock_server = MockServer::start().await;

        let req = CreateRoleRequest {
            name: String::new(),
            description: String::new(),
            permission_ids: Vec::new(),
            plant_id: "p-1".to_string(),
        };
        let err = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .create_role(&req)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_signup_is_public() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/users/signup"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "success": true,
                "message": "User registered"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let req = SignupRequest {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9999999999".to_string(),
            password: "secret1".to_string(),
            ..SignupRequest::default()
        };
        let message = client(&mock_server, Arc::new(MemorySessionStore::new()))
            .signup(&req)
            .await
            .unwrap();

        assert_eq!(message, "User registered");
    }

    #[tokio::test]
    async fn test_get_plant_picks_requested_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/plants"))
            .and(query_param("plantId", "p-2"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "data": [{"plantId": "p-2", "plantName": "Pokhran Solar Park", "dcCapacity": 456}]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let plant = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .get_plant("p-2")
            .await
            .unwrap();

        assert_eq!(plant.plant_name, "Pokhran Solar Park");
        assert_eq!(plant.details["dcCapacity"], 456);
    }

    #[tokio::test]
    async fn test_get_plant_missing_is_invalid_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/plants"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true, "data": []})))
            .mount(&mock_server)
            .await;

        let err = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .get_plant("p-9")
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_update_plant_puts_form_to_plant() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/plants"))
            .and(query_param("plantId", "p-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let req = UpdatePlantRequest {
            plant_name: "Pokhran Solar Park".to_string(),
            loggers: vec!["LG-1".to_string()],
            ..UpdatePlantRequest::default()
        };
        let message = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .update_plant("p-2", &req)
            .await
            .unwrap();

        assert_eq!(message, "Plant updated successfully");
        let requests = mock_server.received_requests().await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["plantName"], "Pokhran Solar Park");
        assert_eq!(body["loggers"][0], "LG-1");
    }

    #[tokio::test]
    async fn test_register_plant_surfaces_server_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/plants/plantRegistration"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(409).set_body_json(json!({
                "message": "Plant name already exists"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let req = PlantRegistrationRequest {
            plant_name: "Rewa Ultra Mega".to_string(),
            plant_owner: "Asha".to_string(),
            dc_capacity: 750.0,
            inverters: 12,
            smbs: 40,
            modules: 1_800,
            inverter_transformer: "2.5 MVA".to_string(),
            project_type: "Ground mount".to_string(),
            ..PlantRegistrationRequest::default()
        };
        let err = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .register_plant(&req)
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "Plant name already exists");
    }

    #[tokio::test]
    async fn test_search_users() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/search/userSearch"))
            .and(query_param("q", "as"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{"_id": "u-1", "name": "Asha"}]
            })))
            .mount(&mock_server)
            .await;

        let users = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")))
            .search_users("as")
            .await
            .unwrap();

        assert_eq!(users[0].name, "Asha");
        assert_eq!(users[0].email, None);
    }

    #[tokio::test]
    async fn test_get_and_update_role() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/createRole"))
            .and(query_param("roleId", "r-1"))
            .and(query_param("plantId", "p-2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"_id": "r-1", "name": "Operator", "permissions": ["perm-1"]}
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/api/users/createRole"))
            .and(body_json(json!({
                "roleId": "r-1",
                "name": "Senior Operator",
                "description": "",
                "permissionIds": ["perm-1", "perm-2"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Role updated"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client(&mock_server, Arc::new(MemorySessionStore::with_token("tok-1")));
        let role = client.get_role("r-1", "p-2").await.unwrap();
        assert_eq!(role.permission_ids(), vec!["perm-1"]);

        let mut permission_ids = role.permission_ids();
        permission_ids.push("perm-2".to_string());
        let req = UpdateRoleRequest {
            role_id: role.id,
            name: "Senior Operator".to_string(),
            description: role.description,
            permission_ids,
        };
        assert_eq!(client.update_role(&req).await.unwrap(), "Role updated");
    }

    #[test]
    fn test_server_message_falls_back_to_text() {
        assert_eq!(server_message(r#"{"message":"Plant not found"}"#), "Plant not found");
        assert_eq!(server_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(server_message(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
    }
}
