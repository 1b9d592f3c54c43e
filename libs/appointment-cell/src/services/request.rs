// libs/appointment-cell/src/services/request.rs
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use shared_database::{AppState, ClinicDatabase};
use shared_models::{AppointmentRequest, NewAppointmentRequest};
use shared_utils::validation::require_non_blank;

use crate::models::AppointmentError;

/// Records patients' appointment requests in the pending state.
pub struct AppointmentRequestService {
    db: Arc<ClinicDatabase>,
}

impl AppointmentRequestService {
    pub fn new(db: Arc<ClinicDatabase>) -> Self {
        Self { db }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.db.clone())
    }

    /// Submit a new request. The patient must exist and the requested date
    /// may not lie before today's date (UTC).
    pub async fn submit(
        &self,
        new_request: NewAppointmentRequest,
    ) -> Result<AppointmentRequest, AppointmentError> {
        debug!(
            "Submitting {} request for patient {}",
            new_request.specialization, new_request.patient_id
        );

        require_non_blank(&new_request.specialization, "specialization")
            .map_err(AppointmentError::ValidationError)?;

        let today = Utc::now().date_naive();
        if new_request.requested_date < today {
            warn!(
                "Rejected request for past date {} (today is {})",
                new_request.requested_date, today
            );
            return Err(AppointmentError::ValidationError(
                "Cannot request appointment for a past date".to_string(),
            ));
        }

        let patient_exists = self
            .db
            .patients
            .read()
            .await
            .find(new_request.patient_id)
            .is_some();
        if !patient_exists {
            return Err(AppointmentError::PatientNotFound(new_request.patient_id));
        }

        let request = self
            .db
            .requests
            .write()
            .await
            .insert_with(|id| AppointmentRequest::pending(id, new_request));

        info!("Appointment request {} created as {}", request.id, request.status);
        Ok(request)
    }

    pub async fn get_request(&self, request_id: u64) -> Result<AppointmentRequest, AppointmentError> {
        self.db
            .requests
            .read()
            .await
            .find(request_id)
            .cloned()
            .ok_or(AppointmentError::RequestNotFound(request_id))
    }

    /// Pending requests in creation order.
    pub async fn list_pending(&self) -> Vec<AppointmentRequest> {
        self.db.requests.read().await.filter(|r| r.is_pending())
    }

    pub async fn list_for_patient(&self, patient_id: u64) -> Vec<AppointmentRequest> {
        self.db
            .requests
            .read()
            .await
            .filter(|r| r.patient_id == patient_id)
    }
}
