use assert_matches::assert_matches;
use axum::extract::{Json, State};

use auth_cell::handlers::admin_login;
use shared_models::auth::AdminLoginRequest;
use shared_models::error::AppError;
use shared_utils::test_utils::TestConfig;

fn credentials(username: &str, password: &str) -> Json<AdminLoginRequest> {
    Json(AdminLoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[tokio::test]
async fn test_admin_login_with_default_credentials() {
    let state = TestConfig::default().to_state();

    let Json(response) = admin_login(State(state), credentials("admin", "admin123"))
        .await
        .unwrap();

    assert!(response.authenticated);
    assert_eq!(response.name, "admin");
}

#[tokio::test]
async fn test_admin_login_wrong_password() {
    let state = TestConfig::default().to_state();

    let result = admin_login(State(state), credentials("admin", "letmein")).await;

    match result.unwrap_err() {
        AppError::Auth(msg) => assert_eq!(msg, "Invalid admin credentials"),
        other => panic!("Expected Auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_admin_login_unknown_user() {
    let state = TestConfig::default().to_state();

    let result = admin_login(State(state), credentials("root", "admin123")).await;

    assert_matches!(result, Err(AppError::Auth(_)));
}

#[tokio::test]
async fn test_admin_login_blank_fields() {
    let state = TestConfig::default().to_state();

    let result = admin_login(State(state), credentials(" ", "admin123")).await;

    assert_matches!(result, Err(AppError::ValidationError(msg)) if msg == "username is required");
}
