//! Plant-scoped pages read the plant chosen in the shell, across navigation.

use std::sync::Arc;

use energize_client::AdminClient;
use energize_core::{
    Location, MemorySessionStore, Plant, PlantContext, SessionStore, Shell, View,
};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn nested_plant(view: View) -> PlantContext {
    match view {
        View::Nested { plant, .. } => plant,
        other => panic!("expected nested view, got {other:?}"),
    }
}

#[tokio::test]
async fn test_selected_plant_scopes_member_and_role_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Login successful",
            "token": "tok-42"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/detaileRole"))
        .and(query_param("plantId", "p-2"))
        .and(header("Authorization", "Bearer tok-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "userId": "u-1",
                "name": "Asha",
                "email": "asha@example.com",
                "role": "Operator",
                "permissions": ["view_dashboard"]
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/users/roles/getRolePlId"))
        .and(query_param("plantId", "p-2"))
        .and(header("Authorization", "Bearer tok-42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "roles": [{"_id": "r-1", "name": "Operator", "description": "Runs the plant"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session: Arc<dyn SessionStore> = Arc::new(MemorySessionStore::new());
    let client = AdminClient::new(format!("{}/api", mock_server.uri()), session.clone()).unwrap();
    let mut shell: Shell<dyn SessionStore> = Shell::new(session);

    assert!(matches!(shell.navigate(Location::Home), View::Redirect { .. }));
    client.login("admin", "secret").await.unwrap();

    let on_home = nested_plant(shell.navigate(Location::Home));
    on_home.set_selected(Some(Plant::new("p-2", "Pokhran Solar Park")));

    assert!(matches!(
        shell.navigate_path("/client-registration"),
        View::Standalone(Location::ClientRegistration)
    ));

    let on_users = nested_plant(shell.navigate(Location::UserManagement));
    let plant_id = on_users.selected().unwrap().plant_id;
    let members = client.list_members(&plant_id).await.unwrap();
    assert_eq!(members[0].name, "Asha");

    let on_roles = nested_plant(shell.navigate(Location::RoleManagement));
    let plant_id = on_roles.selected().unwrap().plant_id;
    let roles = client.list_roles(&plant_id).await.unwrap();
    assert_eq!(roles[0].name, "Operator");
}

#[tokio::test]
async fn test_logout_stops_protected_requests() {
    let mock_server = MockServer::start().await;

    let session = Arc::new(MemorySessionStore::with_token("tok-42"));
    let client = AdminClient::new(format!("{}/api", mock_server.uri()), session.clone()).unwrap();
    let mut shell = Shell::new(session);

    shell.plant().set_selected(Some(Plant::new("p-1", "Technocraft_Shivale")));
    shell.logout();

    assert!(client.list_roles("p-1").await.is_err());
    assert!(mock_server.received_requests().await.unwrap().is_empty());
    assert!(matches!(shell.navigate(Location::RoleManagement), View::Redirect { .. }));
}
