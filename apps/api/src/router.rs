use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};

use appointment_cell::{appointment_request_routes, appointment_routes};
use auth_cell::auth_routes;
use doctor_cell::router::doctor_routes;
use patient_cell::patient_routes;
use shared_database::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .nest("/patients", patient_routes(state.clone()))
        .nest("/doctors", doctor_routes(state.clone()))
        .nest("/appointments", appointment_routes(state.clone()))
        .nest("/appointment-requests", appointment_request_routes(state.clone()))
        .nest("/admin", auth_routes(state));

    Router::new()
        .route("/", get(|| async { "Clinic scheduling API is running!" }))
        .nest("/api", api)
}
