// libs/appointment-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;
use shared_models::RequestStatus;

/// Body of `POST /appointments/fix`. Without a `doctor_id` the configured
/// selection strategy picks the doctor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixAppointmentRequest {
    pub request_id: u64,
    #[serde(default)]
    pub doctor_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment request {0} not found")]
    RequestNotFound(u64),

    #[error("Appointment {0} not found")]
    AppointmentNotFound(u64),

    #[error("Patient {0} not found")]
    PatientNotFound(u64),

    #[error("Doctor {0} not found")]
    DoctorNotFound(u64),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No {specialization} doctors available at this time")]
    NoAvailableDoctor { specialization: String },

    #[error("Appointment request {0} has already been approved")]
    AlreadyApproved(u64),

    #[error("Appointment request cannot move from {from} to {to}")]
    InvalidStatusTransition { from: RequestStatus, to: RequestStatus },

    #[error("Doctor {doctor_id} practices {actual}, request needs {expected}")]
    SpecializationMismatch {
        doctor_id: u64,
        expected: String,
        actual: String,
    },

    #[error("Doctor {doctor_id} is not available on {date}")]
    DoctorUnavailable { doctor_id: u64, date: NaiveDate },
}

impl From<AppointmentError> for AppError {
    fn from(err: AppointmentError) -> Self {
        match err {
            AppointmentError::RequestNotFound(_)
            | AppointmentError::AppointmentNotFound(_)
            | AppointmentError::PatientNotFound(_)
            | AppointmentError::DoctorNotFound(_) => AppError::NotFound(err.to_string()),
            AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
            AppointmentError::SpecializationMismatch { .. } => {
                AppError::ValidationError(err.to_string())
            }
            AppointmentError::NoAvailableDoctor { .. }
            | AppointmentError::AlreadyApproved(_)
            | AppointmentError::InvalidStatusTransition { .. }
            | AppointmentError::DoctorUnavailable { .. } => AppError::Conflict(err.to_string()),
        }
    }
}
