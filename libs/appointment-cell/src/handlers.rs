use std::sync::Arc;

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;
use shared_models::{NewAppointmentRequest, RequestStatus};

use crate::models::FixAppointmentRequest;
use crate::services::{
    AppointmentRequestService, AppointmentService, DoctorSelectionStrategy, MatchingService,
};

// ==============================================================================
// APPOINTMENT REQUESTS
// ==============================================================================

#[axum::debug_handler]
pub async fn submit_request(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let request_service = AppointmentRequestService::from_state(&state);

    let created = request_service.submit(request).await?;

    Ok((StatusCode::CREATED, Json(json!(created))))
}

#[axum::debug_handler]
pub async fn list_pending_requests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let request_service = AppointmentRequestService::from_state(&state);

    let requests = request_service.list_pending().await;

    Ok(Json(json!({
        "requests": requests,
        "total": requests.len()
    })))
}

#[axum::debug_handler]
pub async fn list_patient_requests(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let request_service = AppointmentRequestService::from_state(&state);

    let requests = request_service.list_for_patient(patient_id).await;

    Ok(Json(json!({
        "requests": requests,
        "total": requests.len()
    })))
}

#[axum::debug_handler]
pub async fn get_request(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let request_service = AppointmentRequestService::from_state(&state);

    let request = request_service.get_request(request_id).await?;

    Ok(Json(json!(request)))
}

#[axum::debug_handler]
pub async fn get_suitable_doctors(
    State(state): State<Arc<AppState>>,
    Path(request_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let matching_service = MatchingService::from_state(&state);

    let doctors = matching_service.suitable_doctors(request_id).await?;

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

// ==============================================================================
// APPOINTMENTS
// ==============================================================================

/// Confirm a pending request. With `doctor_id` the administrator's pick is
/// validated and used; without it the shared selection strategy decides.
#[axum::debug_handler]
pub async fn fix_appointment(
    State(state): State<Arc<AppState>>,
    Extension(strategy): Extension<Arc<dyn DoctorSelectionStrategy>>,
    Json(request): Json<FixAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let matching_service = MatchingService::new(state.db.clone(), strategy);

    let appointment = match request.doctor_id {
        Some(doctor_id) => matching_service.assign_doctor(request.request_id, doctor_id).await?,
        None => matching_service.confirm_match(request.request_id).await?,
    };

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "appointment": appointment,
            "request_status": RequestStatus::Approved,
            "message": "Appointment confirmed successfully"
        })),
    ))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::from_state(&state);

    let appointments = appointment_service.list_appointments().await;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn get_patient_appointments(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::from_state(&state);

    let appointments = appointment_service.list_for_patient(patient_id).await;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let appointment_service = AppointmentService::from_state(&state);

    let appointment = appointment_service.get_appointment(appointment_id).await?;

    Ok(Json(json!(appointment)))
}
