// libs/appointment-cell/src/services/matching.rs
use std::sync::Arc;

use tracing::{debug, info, warn};

use doctor_cell::{DoctorError, DoctorService};
use shared_database::{AppState, ClinicDatabase, Table};
use shared_models::{Appointment, AppointmentRequest, Doctor, RequestStatus};

use crate::models::AppointmentError;
use crate::services::lifecycle::RequestLifecycleService;
use crate::services::selection::{strategy_for, DoctorSelectionStrategy};

/// Turns pending requests into confirmed appointments.
///
/// Every matching operation holds the `requests` write guard from the first
/// read of the request until its status is written back, so the PENDING
/// check behaves as a compare-and-swap: of two racing calls on one request,
/// exactly one creates an appointment and the other sees `AlreadyApproved`.
pub struct MatchingService {
    db: Arc<ClinicDatabase>,
    directory: DoctorService,
    lifecycle: RequestLifecycleService,
    strategy: Arc<dyn DoctorSelectionStrategy>,
}

impl MatchingService {
    pub fn new(db: Arc<ClinicDatabase>, strategy: Arc<dyn DoctorSelectionStrategy>) -> Self {
        Self {
            directory: DoctorService::new(db.clone()),
            db,
            lifecycle: RequestLifecycleService::new(),
            strategy,
        }
    }

    /// Builds a service with a fresh strategy for the configured policy.
    /// Stateful strategies (round robin) should instead be shared through
    /// [`MatchingService::new`].
    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.db.clone(), strategy_for(state.config.doctor_selection_policy))
    }

    /// Pick a doctor for `request_id` with the selection strategy and confirm it.
    ///
    /// Doctors already holding a confirmed appointment on the requested date
    /// are not offered to the strategy. With no eligible doctor the request
    /// stays PENDING and nothing is written.
    pub async fn confirm_match(&self, request_id: u64) -> Result<Appointment, AppointmentError> {
        debug!("Matching request {} with strategy {}", request_id, self.strategy.name());

        let mut requests = self.db.requests.write().await;
        let request = self.pending_request(&requests, request_id)?;

        let mut candidates = self.directory.list_by_specialization(&request.specialization).await;

        let mut appointments = self.db.appointments.write().await;
        candidates.retain(|d| !appointments.any(|a| a.books(d.id, request.requested_date)));

        let doctor = self
            .strategy
            .select(&request, &candidates)
            .cloned()
            .ok_or_else(|| {
                warn!(
                    "No available {} doctor for request {}",
                    request.specialization, request_id
                );
                AppointmentError::NoAvailableDoctor {
                    specialization: request.specialization.clone(),
                }
            })?;

        self.settle(&mut requests, &mut appointments, &request, &doctor)
    }

    /// Confirm `request_id` with a doctor chosen by an administrator.
    ///
    /// The doctor must be available, practise the requested specialization
    /// and not already hold a confirmed appointment on the requested date.
    pub async fn assign_doctor(
        &self,
        request_id: u64,
        doctor_id: u64,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Assigning doctor {} to request {}", doctor_id, request_id);

        let mut requests = self.db.requests.write().await;
        let request = self.pending_request(&requests, request_id)?;

        let doctor = self
            .directory
            .get_doctor(doctor_id)
            .await
            .map_err(|e| match e {
                DoctorError::NotFound(id) => AppointmentError::DoctorNotFound(id),
                DoctorError::ValidationError(msg) => AppointmentError::ValidationError(msg),
            })?;

        if doctor.specialization != request.specialization {
            return Err(AppointmentError::SpecializationMismatch {
                doctor_id,
                expected: request.specialization,
                actual: doctor.specialization,
            });
        }

        if !doctor.available {
            return Err(AppointmentError::DoctorUnavailable {
                doctor_id,
                date: request.requested_date,
            });
        }

        let mut appointments = self.db.appointments.write().await;
        if appointments.any(|a| a.books(doctor_id, request.requested_date)) {
            warn!(
                "Doctor {} already booked on {}",
                doctor_id, request.requested_date
            );
            return Err(AppointmentError::DoctorUnavailable {
                doctor_id,
                date: request.requested_date,
            });
        }

        self.settle(&mut requests, &mut appointments, &request, &doctor)
    }

    /// Doctors an administrator may pick for `request_id`: available, of the
    /// requested specialization and free on the requested date.
    pub async fn suitable_doctors(&self, request_id: u64) -> Result<Vec<Doctor>, AppointmentError> {
        let (specialization, date) = self
            .db
            .requests
            .read()
            .await
            .find(request_id)
            .map(|r| (r.specialization.clone(), r.requested_date))
            .ok_or(AppointmentError::RequestNotFound(request_id))?;

        let mut doctors = self.directory.list_by_specialization(&specialization).await;
        let appointments = self.db.appointments.read().await;
        doctors.retain(|d| !appointments.any(|a| a.books(d.id, date)));

        Ok(doctors)
    }

    fn pending_request(
        &self,
        requests: &Table<AppointmentRequest>,
        request_id: u64,
    ) -> Result<AppointmentRequest, AppointmentError> {
        let request = requests
            .find(request_id)
            .cloned()
            .ok_or(AppointmentError::RequestNotFound(request_id))?;

        self.lifecycle.validate_transition(&request, RequestStatus::Approved)?;
        Ok(request)
    }

    /// Approve the stored request and insert its appointment. Callers hold
    /// both write guards; the approval is validated before anything is
    /// inserted, so either both writes land or neither does.
    fn settle(
        &self,
        requests: &mut Table<AppointmentRequest>,
        appointments: &mut Table<Appointment>,
        request: &AppointmentRequest,
        doctor: &Doctor,
    ) -> Result<Appointment, AppointmentError> {
        let stored = requests
            .find_mut(request.id)
            .ok_or(AppointmentError::RequestNotFound(request.id))?;
        self.lifecycle.approve(stored)?;

        let appointment =
            appointments.insert_with(|id| Appointment::confirmed_for(id, request, doctor.id));

        info!(
            "Appointment {} confirmed: request {} -> doctor {} ({}) on {}",
            appointment.id, request.id, doctor.id, doctor.name, appointment.appointment_date
        );

        Ok(appointment)
    }
}
