use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};

use shared_database::AppState;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::list_doctors).post(handlers::create_doctor))
        .route("/specialization/{specialization}", get(handlers::list_doctors_by_specialization))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}/availability", patch(handlers::update_availability))
        .with_state(state)
}
