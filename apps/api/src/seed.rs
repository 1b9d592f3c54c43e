use tracing::info;

use doctor_cell::DoctorService;
use patient_cell::PatientService;
use shared_database::AppState;
use shared_models::{Gender, NewDoctor, NewPatient};

/// Populate an empty store with a small demo directory and two patients.
/// Goes through the services so the usual validation applies.
pub async fn seed_demo_data(state: &AppState) -> anyhow::Result<()> {
    let doctors = DoctorService::from_state(state);
    for doctor in [
        NewDoctor::new("Dr. Sarah Williams", "Cardiology").with_experience(15),
        NewDoctor::new("Dr. Michael Brown", "Neurology").with_experience(10),
        NewDoctor::new("Dr. Emily Davis", "General").with_experience(8),
    ] {
        doctors.add_doctor(doctor).await?;
    }

    let patients = PatientService::from_state(state);
    for patient in [
        NewPatient {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "555-0101".to_string(),
            age: 30,
            gender: Gender::Male,
            address: "123 Main St".to_string(),
        },
        NewPatient {
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0102".to_string(),
            age: 25,
            gender: Gender::Female,
            address: "456 Oak Ave".to_string(),
        },
    ] {
        patients.register(patient).await?;
    }

    let counts = state.db.counts().await;
    info!(
        "Seeded demo data: {} doctors, {} patients",
        counts.doctors, counts.patients
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_config::AppConfig;

    #[tokio::test]
    async fn test_seed_populates_directory_and_patients() {
        let state = AppState::new(AppConfig::default());

        seed_demo_data(&state).await.unwrap();

        let counts = state.db.counts().await;
        assert_eq!(counts.doctors, 3);
        assert_eq!(counts.patients, 2);
        assert_eq!(counts.requests, 0);

        let cardiology = DoctorService::from_state(&state)
            .list_by_specialization("Cardiology")
            .await;
        assert_eq!(cardiology[0].name, "Dr. Sarah Williams");
    }
}
