use std::sync::Arc;

use tracing::{debug, info};

use shared_database::{AppState, ClinicDatabase};
use shared_models::{Doctor, NewDoctor};
use shared_utils::validation::{require_non_blank, validate_optional_email};

use crate::models::DoctorError;

/// The doctor directory: profiles, availability flags and
/// specialization lookups.
pub struct DoctorService {
    db: Arc<ClinicDatabase>,
}

impl DoctorService {
    pub fn new(db: Arc<ClinicDatabase>) -> Self {
        Self { db }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.db.clone())
    }

    /// Create a new doctor profile. Doctors join as available.
    pub async fn add_doctor(&self, profile: NewDoctor) -> Result<Doctor, DoctorError> {
        debug!("Adding doctor {} ({})", profile.name, profile.specialization);

        require_non_blank(&profile.name, "name")
            .and_then(|_| require_non_blank(&profile.specialization, "specialization"))
            .and_then(|_| validate_optional_email(profile.email.as_deref()))
            .map_err(DoctorError::ValidationError)?;

        let doctor = self
            .db
            .doctors
            .write()
            .await
            .insert_with(|id| Doctor::from_new(id, profile));

        info!("Doctor profile created with ID: {}", doctor.id);
        Ok(doctor)
    }

    pub async fn get_doctor(&self, doctor_id: u64) -> Result<Doctor, DoctorError> {
        debug!("Fetching doctor profile: {}", doctor_id);

        self.db
            .doctors
            .read()
            .await
            .find(doctor_id)
            .cloned()
            .ok_or(DoctorError::NotFound(doctor_id))
    }

    /// Every doctor, available or not, in insertion order.
    pub async fn list_all(&self) -> Vec<Doctor> {
        self.db.doctors.read().await.all()
    }

    pub async fn list_available(&self) -> Vec<Doctor> {
        self.db.doctors.read().await.filter(|d| d.available)
    }

    /// Available doctors whose specialization equals `specialization` exactly.
    pub async fn list_by_specialization(&self, specialization: &str) -> Vec<Doctor> {
        let doctors = self
            .db
            .doctors
            .read()
            .await
            .filter(|d| d.can_take(specialization));

        debug!("Found {} available {} doctors", doctors.len(), specialization);
        doctors
    }

    pub async fn set_availability(
        &self,
        doctor_id: u64,
        available: bool,
    ) -> Result<Doctor, DoctorError> {
        let mut doctors = self.db.doctors.write().await;
        let doctor = doctors
            .find_mut(doctor_id)
            .ok_or(DoctorError::NotFound(doctor_id))?;

        doctor.available = available;
        info!("Doctor {} availability set to {}", doctor_id, available);

        Ok(doctor.clone())
    }
}
