use std::sync::Arc;

use axum::{routing::{get, post}, Router};

use shared_database::AppState;

use crate::handlers::*;

pub fn patient_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(list_patients))
        .route("/register", post(register_patient))
        .route("/login", get(login_patient))
        .route("/{patient_id}", get(get_patient))
        .with_state(state)
}
