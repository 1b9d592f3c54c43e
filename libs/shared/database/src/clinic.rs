use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use shared_config::AppConfig;
use shared_models::{Appointment, AppointmentRequest, Doctor, Patient};

use crate::table::Table;

/// In-process clinic store. Each collection sits behind its own lock.
///
/// Guards must be taken in this order when more than one is held:
/// `patients`, `requests`, `doctors`, `appointments`.
#[derive(Debug, Default)]
pub struct ClinicDatabase {
    pub patients: RwLock<Table<Patient>>,
    pub requests: RwLock<Table<AppointmentRequest>>,
    pub doctors: RwLock<Table<Doctor>>,
    pub appointments: RwLock<Table<Appointment>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreCounts {
    pub patients: usize,
    pub requests: usize,
    pub doctors: usize,
    pub appointments: usize,
}

impl ClinicDatabase {
    pub fn new() -> Self {
        debug!("Creating empty clinic database");
        Self::default()
    }

    /// Row counts per collection, read in lock order.
    pub async fn counts(&self) -> StoreCounts {
        StoreCounts {
            patients: self.patients.read().await.len(),
            requests: self.requests.read().await.len(),
            doctors: self.doctors.read().await.len(),
            appointments: self.appointments.read().await.len(),
        }
    }
}

/// Shared state handed to every router.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: Arc<ClinicDatabase>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            db: Arc::new(ClinicDatabase::new()),
        }
    }
}
