use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use serde_json::{json, Value};

use shared_config::{AppConfig, DoctorSelectionPolicy};
use shared_database::{AppState, ClinicDatabase};
use shared_models::{Gender, NewAppointmentRequest, NewDoctor, NewPatient};

pub struct TestConfig {
    pub doctor_selection_policy: DoctorSelectionPolicy,
    pub enforce_unique_patient_email: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            doctor_selection_policy: DoctorSelectionPolicy::FirstAvailable,
            enforce_unique_patient_email: true,
        }
    }
}

impl TestConfig {
    pub fn with_policy(policy: DoctorSelectionPolicy) -> Self {
        Self {
            doctor_selection_policy: policy,
            ..Self::default()
        }
    }

    pub fn allowing_duplicate_emails() -> Self {
        Self {
            enforce_unique_patient_email: false,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            doctor_selection_policy: self.doctor_selection_policy,
            enforce_unique_patient_email: self.enforce_unique_patient_email,
            ..AppConfig::default()
        }
    }

    pub fn to_state(&self) -> Arc<AppState> {
        Arc::new(AppState::new(self.to_app_config()))
    }
}

pub fn empty_database() -> Arc<ClinicDatabase> {
    Arc::new(ClinicDatabase::new())
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn tomorrow() -> NaiveDate {
    today() + Duration::days(1)
}

pub fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

pub fn yesterday() -> NaiveDate {
    today() - Duration::days(1)
}

pub struct TestPatient;

impl TestPatient {
    pub fn with_email(name: &str, email: &str) -> NewPatient {
        NewPatient {
            name: name.to_string(),
            email: email.to_string(),
            phone: "1".to_string(),
            age: 30,
            gender: Gender::Male,
            address: "x".to_string(),
        }
    }

    pub fn default_profile() -> NewPatient {
        Self::with_email("A", "a@x.com")
    }

    pub fn json_profile(name: &str, email: &str) -> Value {
        json!({
            "name": name,
            "email": email,
            "phone": "1",
            "age": 30,
            "gender": "M",
            "address": "x"
        })
    }
}

pub struct TestDoctor;

impl TestDoctor {
    pub fn new(name: &str, specialization: &str) -> NewDoctor {
        NewDoctor::new(name, specialization)
    }

    pub fn full_profile(name: &str, specialization: &str, experience: u32) -> NewDoctor {
        NewDoctor {
            name: name.to_string(),
            specialization: specialization.to_string(),
            email: Some(format!("{}@hospital.com", name.to_lowercase().replace([' ', '.'], ""))),
            phone: Some("1111111111".to_string()),
            qualification: Some("MD".to_string()),
            experience,
        }
    }
}

pub fn request_for(patient_id: u64, specialization: &str, requested_date: NaiveDate) -> NewAppointmentRequest {
    NewAppointmentRequest {
        patient_id,
        specialization: specialization.to_string(),
        requested_date,
        description: "routine check".to_string(),
    }
}
