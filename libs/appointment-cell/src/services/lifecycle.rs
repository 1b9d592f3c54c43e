// libs/appointment-cell/src/services/lifecycle.rs
use tracing::{debug, warn};

use shared_models::{AppointmentRequest, RequestStatus};

use crate::models::AppointmentError;

/// Status machine for appointment requests: `PENDING -> APPROVED`, one way.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestLifecycleService;

impl RequestLifecycleService {
    pub fn new() -> Self {
        Self
    }

    /// All valid next statuses for a given current status
    pub fn get_valid_transitions(&self, current_status: RequestStatus) -> &'static [RequestStatus] {
        match current_status {
            RequestStatus::Pending => &[RequestStatus::Approved],
            // Terminal
            RequestStatus::Approved => &[],
        }
    }

    /// Validate that `request` may move to `new_status`.
    pub fn validate_transition(
        &self,
        request: &AppointmentRequest,
        new_status: RequestStatus,
    ) -> Result<(), AppointmentError> {
        debug!(
            "Validating request {} transition from {} to {}",
            request.id, request.status, new_status
        );

        if self.get_valid_transitions(request.status).contains(&new_status) {
            return Ok(());
        }

        warn!(
            "Invalid status transition attempted on request {}: {} -> {}",
            request.id, request.status, new_status
        );

        match request.status {
            RequestStatus::Approved => Err(AppointmentError::AlreadyApproved(request.id)),
            from => Err(AppointmentError::InvalidStatusTransition {
                from,
                to: new_status,
            }),
        }
    }

    /// Validate and apply `PENDING -> APPROVED` in place.
    pub fn approve(&self, request: &mut AppointmentRequest) -> Result<(), AppointmentError> {
        self.validate_transition(request, RequestStatus::Approved)?;
        request.status = RequestStatus::Approved;
        Ok(())
    }
}
