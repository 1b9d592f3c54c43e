// libs/appointment-cell/src/services/appointment.rs
use std::sync::Arc;

use tracing::debug;

use shared_database::{AppState, ClinicDatabase};
use shared_models::Appointment;

use crate::models::AppointmentError;

/// Read side of confirmed appointments.
pub struct AppointmentService {
    db: Arc<ClinicDatabase>,
}

impl AppointmentService {
    pub fn new(db: Arc<ClinicDatabase>) -> Self {
        Self { db }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.db.clone())
    }

    pub async fn get_appointment(&self, appointment_id: u64) -> Result<Appointment, AppointmentError> {
        debug!("Fetching appointment: {}", appointment_id);

        self.db
            .appointments
            .read()
            .await
            .find(appointment_id)
            .cloned()
            .ok_or(AppointmentError::AppointmentNotFound(appointment_id))
    }

    pub async fn list_appointments(&self) -> Vec<Appointment> {
        self.db.appointments.read().await.all()
    }

    pub async fn list_for_patient(&self, patient_id: u64) -> Vec<Appointment> {
        self.db
            .appointments
            .read()
            .await
            .filter(|a| a.patient_id == patient_id)
    }
}
