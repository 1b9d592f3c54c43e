use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;
use shared_models::NewDoctor;

use crate::models::{DoctorListQuery, UpdateAvailabilityRequest};
use crate::services::DoctorService;

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewDoctor>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let doctor_service = DoctorService::from_state(&state);

    let doctor = doctor_service.add_doctor(request).await?;

    Ok((StatusCode::CREATED, Json(json!(doctor))))
}

/// `?specialization=` narrows the listing to available doctors of that
/// specialization; `?available_only=true` drops unavailable doctors.
#[axum::debug_handler]
pub async fn list_doctors(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DoctorListQuery>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::from_state(&state);

    let doctors = match (query.specialization, query.available_only) {
        (Some(specialization), _) => doctor_service.list_by_specialization(&specialization).await,
        (None, Some(true)) => doctor_service.list_available().await,
        (None, _) => doctor_service.list_all().await,
    };

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn list_doctors_by_specialization(
    State(state): State<Arc<AppState>>,
    Path(specialization): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::from_state(&state);

    let doctors = doctor_service.list_by_specialization(&specialization).await;

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::from_state(&state);

    let doctor = doctor_service.get_doctor(doctor_id).await?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn update_availability(
    State(state): State<Arc<AppState>>,
    Path(doctor_id): Path<u64>,
    Json(request): Json<UpdateAvailabilityRequest>,
) -> Result<Json<Value>, AppError> {
    let doctor_service = DoctorService::from_state(&state);

    let doctor = doctor_service
        .set_availability(doctor_id, request.available)
        .await?;

    Ok(Json(json!(doctor)))
}
