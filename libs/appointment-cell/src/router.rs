// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};

use shared_database::AppState;

use crate::handlers;
use crate::services::strategy_for;

pub fn appointment_routes(state: Arc<AppState>) -> Router {
    // One strategy per router so stateful policies keep their position
    // across requests.
    let strategy = strategy_for(state.config.doctor_selection_policy);

    Router::new()
        .route("/", get(handlers::list_appointments))
        .route("/request", post(handlers::submit_request))
        .route("/fix", post(handlers::fix_appointment))
        .route("/patient/{patient_id}", get(handlers::get_patient_appointments))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .layer(Extension(strategy))
        .with_state(state)
}

pub fn appointment_request_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/pending", get(handlers::list_pending_requests))
        .route("/patient/{patient_id}", get(handlers::list_patient_requests))
        .route("/{request_id}", get(handlers::get_request))
        .route("/{request_id}/suitable-doctors", get(handlers::get_suitable_doctors))
        .with_state(state)
}
