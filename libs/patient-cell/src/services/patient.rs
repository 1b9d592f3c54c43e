use std::sync::Arc;

use tracing::{debug, info, warn};

use shared_database::{AppState, ClinicDatabase};
use shared_models::{NewPatient, Patient};
use shared_utils::validation::{require_non_blank, validate_email};

use crate::models::PatientError;

pub struct PatientService {
    db: Arc<ClinicDatabase>,
    enforce_unique_email: bool,
}

impl PatientService {
    pub fn new(db: Arc<ClinicDatabase>, enforce_unique_email: bool) -> Self {
        Self {
            db,
            enforce_unique_email,
        }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(state.db.clone(), state.config.enforce_unique_patient_email)
    }

    /// Register a new patient and assign the next patient id.
    ///
    /// The duplicate-email check and the insert happen under one write guard,
    /// so two concurrent registrations with the same email cannot both pass.
    pub async fn register(&self, profile: NewPatient) -> Result<Patient, PatientError> {
        debug!("Registering patient: {}", profile.email);

        Self::validate_profile(&profile)?;

        let mut patients = self.db.patients.write().await;

        if self.enforce_unique_email && patients.any(|p| p.email == profile.email) {
            warn!("Registration rejected, email already in use: {}", profile.email);
            return Err(PatientError::EmailAlreadyExists {
                email: profile.email,
            });
        }

        let patient = patients.insert_with(|id| Patient::from_new(id, profile));
        info!("Patient registered with ID: {}", patient.id);

        Ok(patient)
    }

    /// Resolve a patient by email. Exact, case-sensitive match; with duplicate
    /// emails allowed, the earliest registration wins.
    pub async fn login(&self, email: &str) -> Result<Patient, PatientError> {
        debug!("Patient login attempt: {}", email);

        let patients = self.db.patients.read().await;
        patients
            .find_first(|p| p.email == email)
            .cloned()
            .ok_or_else(|| PatientError::UnknownEmail {
                email: email.to_string(),
            })
    }

    pub async fn get_patient(&self, patient_id: u64) -> Result<Patient, PatientError> {
        debug!("Fetching patient: {}", patient_id);

        self.db
            .patients
            .read()
            .await
            .find(patient_id)
            .cloned()
            .ok_or(PatientError::NotFound(patient_id))
    }

    pub async fn list_patients(&self) -> Vec<Patient> {
        self.db.patients.read().await.all()
    }

    fn validate_profile(profile: &NewPatient) -> Result<(), PatientError> {
        require_non_blank(&profile.name, "name")
            .and_then(|_| validate_email(&profile.email))
            .and_then(|_| require_non_blank(&profile.phone, "phone"))
            .and_then(|_| require_non_blank(&profile.address, "address"))
            .map_err(PatientError::ValidationError)?;

        if profile.age == 0 {
            return Err(PatientError::ValidationError(
                "age must be a positive integer".to_string(),
            ));
        }

        Ok(())
    }
}
