pub mod appointment;
pub mod auth;
pub mod doctor;
pub mod error;
pub mod patient;

pub use appointment::{
    Appointment, AppointmentRequest, AppointmentStatus, NewAppointmentRequest, RequestStatus,
};
pub use doctor::{Doctor, NewDoctor};
pub use error::AppError;
pub use patient::{Gender, NewPatient, Patient};
