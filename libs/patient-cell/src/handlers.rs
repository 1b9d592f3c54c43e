use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;
use shared_models::NewPatient;

use crate::models::LoginQuery;
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn register_patient(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewPatient>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = PatientService::from_state(&state);

    let patient = service.register(request).await?;

    Ok((StatusCode::CREATED, Json(json!(patient))))
}

#[axum::debug_handler]
pub async fn login_patient(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LoginQuery>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::from_state(&state);

    let patient = service.login(&query.email).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::from_state(&state);

    let patient = service.get_patient(patient_id).await?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::from_state(&state);

    let patients = service.list_patients().await;

    Ok(Json(json!({
        "patients": patients,
        "total": patients.len()
    })))
}
