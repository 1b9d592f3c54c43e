use std::sync::Arc;

use axum::extract::{Json, State};
use tracing::{debug, info, warn};

use shared_database::AppState;
use shared_models::auth::{AdminLoginRequest, AdminLoginResponse};
use shared_models::error::AppError;
use shared_utils::validation::require_non_blank;

/// Demo-grade administrator login: a plain comparison against the
/// configured credentials. No session or token is issued.
#[axum::debug_handler]
pub async fn admin_login(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<AdminLoginRequest>,
) -> Result<Json<AdminLoginResponse>, AppError> {
    debug!("Admin login attempt for {}", credentials.username);

    require_non_blank(&credentials.username, "username").map_err(AppError::ValidationError)?;
    require_non_blank(&credentials.password, "password").map_err(AppError::ValidationError)?;

    let config = &state.config;
    if credentials.username != config.admin_username
        || credentials.password != config.admin_password
    {
        warn!("Rejected admin login for {}", credentials.username);
        return Err(AppError::Auth("Invalid admin credentials".to_string()));
    }

    info!("Admin {} logged in", credentials.username);

    Ok(Json(AdminLoginResponse {
        authenticated: true,
        name: config.admin_username.clone(),
    }))
}
