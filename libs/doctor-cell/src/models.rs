use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorListQuery {
    pub specialization: Option<String>,
    pub available_only: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAvailabilityRequest {
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor {0} not found")]
    NotFound(u64),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<DoctorError> for AppError {
    fn from(err: DoctorError) -> Self {
        match err {
            DoctorError::NotFound(_) => AppError::NotFound(err.to_string()),
            DoctorError::ValidationError(msg) => AppError::ValidationError(msg),
        }
    }
}
