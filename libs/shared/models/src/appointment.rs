use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==============================================================================
// APPOINTMENT REQUESTS
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "PENDING"),
            RequestStatus::Approved => write!(f, "APPROVED"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppointmentRequest {
    pub id: u64,
    pub patient_id: u64,
    pub specialization: String,
    pub requested_date: NaiveDate,
    pub description: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl AppointmentRequest {
    pub fn pending(id: u64, new: NewAppointmentRequest) -> Self {
        Self {
            id,
            patient_id: new.patient_id,
            specialization: new.specialization,
            requested_date: new.requested_date,
            description: new.description,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAppointmentRequest {
    pub patient_id: u64,
    pub specialization: String,
    pub requested_date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

// ==============================================================================
// CONFIRMED APPOINTMENTS
// ==============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
    Completed,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Confirmed => write!(f, "CONFIRMED"),
            AppointmentStatus::Cancelled => write!(f, "CANCELLED"),
            AppointmentStatus::Completed => write!(f, "COMPLETED"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Appointment {
    pub id: u64,
    pub request_id: Option<u64>,
    pub patient_id: u64,
    pub doctor_id: u64,
    pub appointment_date: NaiveDate,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Builds the confirmed appointment that settles `request` with `doctor_id`.
    pub fn confirmed_for(id: u64, request: &AppointmentRequest, doctor_id: u64) -> Self {
        Self {
            id,
            request_id: Some(request.id),
            patient_id: request.patient_id,
            doctor_id,
            appointment_date: request.requested_date,
            status: AppointmentStatus::Confirmed,
            created_at: Utc::now(),
        }
    }

    pub fn books(&self, doctor_id: u64, date: NaiveDate) -> bool {
        self.doctor_id == doctor_id
            && self.appointment_date == date
            && self.status == AppointmentStatus::Confirmed
    }
}
