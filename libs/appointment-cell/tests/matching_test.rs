// libs/appointment-cell/tests/matching_test.rs

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use futures::future::join_all;

use appointment_cell::{
    AppointmentError, AppointmentRequestService, AppointmentService, DoctorSelectionStrategy,
    FirstAvailable, MatchingService, MostExperienced, RoundRobin,
};
use doctor_cell::DoctorService;
use patient_cell::PatientService;
use shared_database::ClinicDatabase;
use shared_models::{AppointmentStatus, Doctor, RequestStatus};
use shared_utils::test_utils::{
    days_from_today, empty_database, request_for, tomorrow, TestDoctor, TestPatient,
};

// ==============================================================================
// TEST FIXTURES
// ==============================================================================

struct TestSetup {
    db: Arc<ClinicDatabase>,
    patients: PatientService,
    doctors: DoctorService,
    requests: AppointmentRequestService,
    appointments: AppointmentService,
}

impl TestSetup {
    fn new() -> Self {
        let db = empty_database();
        Self {
            patients: PatientService::new(db.clone(), true),
            doctors: DoctorService::new(db.clone()),
            requests: AppointmentRequestService::new(db.clone()),
            appointments: AppointmentService::new(db.clone()),
            db,
        }
    }

    fn matcher(&self, strategy: Arc<dyn DoctorSelectionStrategy>) -> MatchingService {
        MatchingService::new(self.db.clone(), strategy)
    }

    async fn patient(&self, email: &str) -> u64 {
        self.patients
            .register(TestPatient::with_email("A", email))
            .await
            .unwrap()
            .id
    }

    async fn doctor(&self, name: &str, specialization: &str) -> Doctor {
        self.doctors
            .add_doctor(TestDoctor::new(name, specialization))
            .await
            .unwrap()
    }

    async fn request(&self, patient_id: u64, specialization: &str) -> u64 {
        self.request_on(patient_id, specialization, tomorrow()).await
    }

    async fn request_on(&self, patient_id: u64, specialization: &str, date: NaiveDate) -> u64 {
        self.requests
            .submit(request_for(patient_id, specialization, date))
            .await
            .unwrap()
            .id
    }
}

// ==============================================================================
// confirm_match
// ==============================================================================

#[tokio::test]
async fn test_round_trip_scenario() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let request_id = setup.request(patient_id, "Cardiology").await;
    let dr_b = setup.doctor("Dr. B", "Cardiology").await;

    let appointment = setup
        .matcher(Arc::new(FirstAvailable))
        .confirm_match(request_id)
        .await
        .unwrap();

    assert_eq!(appointment.doctor_id, dr_b.id);
    assert_eq!(appointment.patient_id, patient_id);
    assert_eq!(appointment.request_id, Some(request_id));
    assert_eq!(appointment.appointment_date, tomorrow());
    assert_eq!(appointment.status, AppointmentStatus::Confirmed);

    let request = setup.requests.get_request(request_id).await.unwrap();
    assert_eq!(request.status, RequestStatus::Approved);
}

#[tokio::test]
async fn test_no_available_doctor_leaves_store_unchanged() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let request_id = setup.request(patient_id, "Cardiology").await;
    setup.doctor("Dr. N", "Neurology").await;
    let off_duty = setup.doctor("Dr. Off", "Cardiology").await;
    setup.doctors.set_availability(off_duty.id, false).await.unwrap();
    let before = setup.db.counts().await;

    let result = setup
        .matcher(Arc::new(FirstAvailable))
        .confirm_match(request_id)
        .await;

    assert_matches!(
        result,
        Err(AppointmentError::NoAvailableDoctor { specialization }) if specialization == "Cardiology"
    );
    assert_eq!(setup.db.counts().await, before);
    assert_eq!(
        setup.requests.get_request(request_id).await.unwrap().status,
        RequestStatus::Pending
    );
}

#[tokio::test]
async fn test_specialization_is_case_sensitive_for_matching() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let request_id = setup.request(patient_id, "cardiology").await;
    setup.doctor("Dr. B", "Cardiology").await;

    let result = setup
        .matcher(Arc::new(FirstAvailable))
        .confirm_match(request_id)
        .await;

    assert_matches!(result, Err(AppointmentError::NoAvailableDoctor { .. }));
}

#[tokio::test]
async fn test_second_confirm_is_already_approved() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let request_id = setup.request(patient_id, "Cardiology").await;
    setup.doctor("Dr. B", "Cardiology").await;
    let matcher = setup.matcher(Arc::new(FirstAvailable));

    matcher.confirm_match(request_id).await.unwrap();
    let second = matcher.confirm_match(request_id).await;

    assert_matches!(second, Err(AppointmentError::AlreadyApproved(id)) if id == request_id);
    assert_eq!(setup.appointments.list_appointments().await.len(), 1);
}

#[tokio::test]
async fn test_unknown_request_is_not_found() {
    let setup = TestSetup::new();
    setup.doctor("Dr. B", "Cardiology").await;

    let result = setup.matcher(Arc::new(FirstAvailable)).confirm_match(12).await;

    assert_matches!(result, Err(AppointmentError::RequestNotFound(12)));
    assert_eq!(setup.db.counts().await.appointments, 0);
}

#[tokio::test]
async fn test_first_available_follows_directory_order() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    setup.doctor("Dr. N", "Neurology").await;
    let first_cardio = setup.doctor("Dr. C1", "Cardiology").await;
    setup.doctor("Dr. C2", "Cardiology").await;
    let matcher = setup.matcher(Arc::new(FirstAvailable));

    for days in 1..=2 {
        let request_id = setup
            .request_on(patient_id, "Cardiology", days_from_today(days))
            .await;
        let appointment = matcher.confirm_match(request_id).await.unwrap();
        assert_eq!(appointment.doctor_id, first_cardio.id);
    }
}

#[tokio::test]
async fn test_confirm_skips_doctor_booked_on_same_date() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let first_cardio = setup.doctor("Dr. C1", "Cardiology").await;
    let second_cardio = setup.doctor("Dr. C2", "Cardiology").await;
    let matcher = setup.matcher(Arc::new(FirstAvailable));

    let first = setup.request(patient_id, "Cardiology").await;
    let second = setup.request(patient_id, "Cardiology").await;

    assert_eq!(matcher.confirm_match(first).await.unwrap().doctor_id, first_cardio.id);
    assert_eq!(matcher.confirm_match(second).await.unwrap().doctor_id, second_cardio.id);
}

#[tokio::test]
async fn test_confirm_refuses_double_booking_on_same_date() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let doctor = setup.doctor("Dr. B", "Cardiology").await;
    let matcher = setup.matcher(Arc::new(FirstAvailable));
    let first = setup.request(patient_id, "Cardiology").await;
    let second = setup.request(patient_id, "Cardiology").await;

    matcher.confirm_match(first).await.unwrap();
    let before = setup.db.counts().await;
    let result = matcher.confirm_match(second).await;

    assert_matches!(result, Err(AppointmentError::NoAvailableDoctor { .. }));
    assert_eq!(setup.db.counts().await, before);
    assert_eq!(
        setup.requests.get_request(second).await.unwrap().status,
        RequestStatus::Pending
    );

    // Explicit assignment applies the same rule.
    assert_matches!(
        matcher.assign_doctor(second, doctor.id).await,
        Err(AppointmentError::DoctorUnavailable { .. })
    );
    assert!(matcher.suitable_doctors(second).await.unwrap().is_empty());

    // A different date is still open.
    let later = setup
        .request_on(patient_id, "Cardiology", days_from_today(2))
        .await;
    assert_eq!(matcher.confirm_match(later).await.unwrap().doctor_id, doctor.id);
}

#[tokio::test]
async fn test_confirmed_doctor_always_matches_specialization() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    for (name, specialization) in [("Dr. N", "Neurology"), ("Dr. G", "General"), ("Dr. C", "Cardiology")] {
        setup.doctor(name, specialization).await;
    }
    let matcher = setup.matcher(Arc::new(FirstAvailable));

    for specialization in ["Cardiology", "General", "Neurology"] {
        let request_id = setup.request(patient_id, specialization).await;
        let appointment = matcher.confirm_match(request_id).await.unwrap();
        let doctor = setup.doctors.get_doctor(appointment.doctor_id).await.unwrap();
        assert_eq!(doctor.specialization, specialization);
    }
}

#[tokio::test]
async fn test_most_experienced_strategy() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    setup
        .doctors
        .add_doctor(TestDoctor::full_profile("Dr. Junior", "Cardiology", 2))
        .await
        .unwrap();
    let senior = setup
        .doctors
        .add_doctor(TestDoctor::full_profile("Dr. Senior", "Cardiology", 20))
        .await
        .unwrap();
    let request_id = setup.request(patient_id, "Cardiology").await;

    let appointment = setup
        .matcher(Arc::new(MostExperienced))
        .confirm_match(request_id)
        .await
        .unwrap();

    assert_eq!(appointment.doctor_id, senior.id);
}

#[tokio::test]
async fn test_round_robin_strategy_spreads_requests() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let first = setup.doctor("Dr. C1", "Cardiology").await;
    let second = setup.doctor("Dr. C2", "Cardiology").await;
    let matcher = setup.matcher(Arc::new(RoundRobin::default()));

    let mut picked = Vec::new();
    for days in 1..=3 {
        let request_id = setup
            .request_on(patient_id, "Cardiology", days_from_today(days))
            .await;
        picked.push(matcher.confirm_match(request_id).await.unwrap().doctor_id);
    }

    assert_eq!(picked, vec![first.id, second.id, first.id]);
}

#[tokio::test]
async fn test_concurrent_confirms_create_one_appointment() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let request_id = setup.request(patient_id, "Cardiology").await;
    setup.doctor("Dr. B", "Cardiology").await;
    let matcher = Arc::new(setup.matcher(Arc::new(FirstAvailable)));

    let attempts = (0..8).map(|_| {
        let matcher = matcher.clone();
        tokio::spawn(async move { matcher.confirm_match(request_id).await })
    });
    let results: Vec<_> = join_all(attempts)
        .await
        .into_iter()
        .map(|joined| joined.unwrap())
        .collect();

    let successes = results.iter().filter(|r| r.is_ok()).count();
    let already_approved = results
        .iter()
        .filter(|r| matches!(r, Err(AppointmentError::AlreadyApproved(_))))
        .count();

    assert_eq!(successes, 1);
    assert_eq!(already_approved, 7);
    assert_eq!(setup.appointments.list_appointments().await.len(), 1);
}

// ==============================================================================
// assign_doctor / suitable_doctors
// ==============================================================================

#[tokio::test]
async fn test_assign_specific_doctor() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    setup.doctor("Dr. C1", "Cardiology").await;
    let chosen = setup.doctor("Dr. C2", "Cardiology").await;
    let request_id = setup.request(patient_id, "Cardiology").await;

    let appointment = setup
        .matcher(Arc::new(FirstAvailable))
        .assign_doctor(request_id, chosen.id)
        .await
        .unwrap();

    assert_eq!(appointment.doctor_id, chosen.id);
    assert_eq!(
        setup.requests.get_request(request_id).await.unwrap().status,
        RequestStatus::Approved
    );
}

#[tokio::test]
async fn test_assign_rejections_leave_request_pending() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let neuro = setup.doctor("Dr. N", "Neurology").await;
    let off_duty = setup.doctor("Dr. Off", "Cardiology").await;
    setup.doctors.set_availability(off_duty.id, false).await.unwrap();
    let request_id = setup.request(patient_id, "Cardiology").await;
    let matcher = setup.matcher(Arc::new(FirstAvailable));

    assert_matches!(
        matcher.assign_doctor(request_id, 99).await,
        Err(AppointmentError::DoctorNotFound(99))
    );
    assert_matches!(
        matcher.assign_doctor(request_id, neuro.id).await,
        Err(AppointmentError::SpecializationMismatch { .. })
    );
    assert_matches!(
        matcher.assign_doctor(request_id, off_duty.id).await,
        Err(AppointmentError::DoctorUnavailable { .. })
    );
    assert_matches!(
        matcher.assign_doctor(404, neuro.id).await,
        Err(AppointmentError::RequestNotFound(404))
    );

    assert_eq!(setup.db.counts().await.appointments, 0);
    assert_eq!(setup.requests.list_pending().await.len(), 1);
}

#[tokio::test]
async fn test_assign_refuses_double_booking_on_same_date() {
    let setup = TestSetup::new();
    let first_patient = setup.patient("a@x.com").await;
    let second_patient = setup.patient("b@x.com").await;
    let doctor = setup.doctor("Dr. B", "Cardiology").await;
    let first_request = setup.request(first_patient, "Cardiology").await;
    let second_request = setup.request(second_patient, "Cardiology").await;
    let matcher = setup.matcher(Arc::new(FirstAvailable));

    matcher.assign_doctor(first_request, doctor.id).await.unwrap();
    let result = matcher.assign_doctor(second_request, doctor.id).await;

    assert_matches!(
        result,
        Err(AppointmentError::DoctorUnavailable { doctor_id, date }) if doctor_id == doctor.id && date == tomorrow()
    );
    assert_eq!(setup.requests.list_pending().await.len(), 1);
}

#[tokio::test]
async fn test_assign_on_approved_request() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let doctor = setup.doctor("Dr. B", "Cardiology").await;
    let request_id = setup.request(patient_id, "Cardiology").await;
    let matcher = setup.matcher(Arc::new(FirstAvailable));

    matcher.confirm_match(request_id).await.unwrap();

    assert_matches!(
        matcher.assign_doctor(request_id, doctor.id).await,
        Err(AppointmentError::AlreadyApproved(_))
    );
    assert_eq!(setup.appointments.list_appointments().await.len(), 1);
}

#[tokio::test]
async fn test_suitable_doctors_for_request() {
    let setup = TestSetup::new();
    let patient_id = setup.patient("a@x.com").await;
    let cardio = setup.doctor("Dr. C", "Cardiology").await;
    setup.doctor("Dr. N", "Neurology").await;
    let request_id = setup.request(patient_id, "Cardiology").await;
    let matcher = setup.matcher(Arc::new(FirstAvailable));

    let doctors = matcher.suitable_doctors(request_id).await.unwrap();

    assert_eq!(doctors, vec![cardio]);
    assert_matches!(
        matcher.suitable_doctors(77).await,
        Err(AppointmentError::RequestNotFound(77))
    );
}

// ==============================================================================
// appointment queries
// ==============================================================================

#[tokio::test]
async fn test_appointment_queries() {
    let setup = TestSetup::new();
    let first_patient = setup.patient("a@x.com").await;
    let second_patient = setup.patient("b@x.com").await;
    setup.doctor("Dr. B", "Cardiology").await;
    let matcher = setup.matcher(Arc::new(FirstAvailable));

    let first = setup
        .request_on(first_patient, "Cardiology", days_from_today(1))
        .await;
    let second = setup
        .request_on(second_patient, "Cardiology", days_from_today(2))
        .await;
    let third = setup
        .request_on(first_patient, "Cardiology", days_from_today(3))
        .await;
    for request_id in [first, second, third] {
        matcher.confirm_match(request_id).await.unwrap();
    }

    let all: Vec<Option<u64>> = setup
        .appointments
        .list_appointments()
        .await
        .iter()
        .map(|a| a.request_id)
        .collect();
    assert_eq!(all, vec![Some(first), Some(second), Some(third)]);

    let mine: Vec<Option<u64>> = setup
        .appointments
        .list_for_patient(first_patient)
        .await
        .iter()
        .map(|a| a.request_id)
        .collect();
    assert_eq!(mine, vec![Some(first), Some(third)]);

    assert_eq!(setup.appointments.get_appointment(2).await.unwrap().patient_id, second_patient);
    assert_matches!(
        setup.appointments.get_appointment(10).await,
        Err(AppointmentError::AppointmentNotFound(10))
    );
}
