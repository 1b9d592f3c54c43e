use std::env;
use std::fmt;
use std::str::FromStr;

use tracing::warn;

/// How the matching service picks a doctor out of the eligible candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DoctorSelectionPolicy {
    #[default]
    FirstAvailable,
    MostExperienced,
    RoundRobin,
}

impl FromStr for DoctorSelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first_available" | "first-available" => Ok(Self::FirstAvailable),
            "most_experienced" | "most-experienced" => Ok(Self::MostExperienced),
            "round_robin" | "round-robin" => Ok(Self::RoundRobin),
            other => Err(format!("unknown doctor selection policy: {}", other)),
        }
    }
}

impl fmt::Display for DoctorSelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DoctorSelectionPolicy::FirstAvailable => write!(f, "first_available"),
            DoctorSelectionPolicy::MostExperienced => write!(f, "most_experienced"),
            DoctorSelectionPolicy::RoundRobin => write!(f, "round_robin"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_host: String,
    pub server_port: u16,
    pub doctor_selection_policy: DoctorSelectionPolicy,
    pub enforce_unique_patient_email: bool,
    pub admin_username: String,
    pub admin_password: String,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            doctor_selection_policy: DoctorSelectionPolicy::default(),
            enforce_unique_patient_email: true,
            admin_username: "admin".to_string(),
            admin_password: "admin123".to_string(),
            seed_demo_data: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| {
                    warn!("SERVER_HOST not set, using {}", defaults.server_host);
                    defaults.server_host.clone()
                }),
            server_port: parse_var("SERVER_PORT", defaults.server_port),
            doctor_selection_policy: parse_var(
                "DOCTOR_SELECTION_POLICY",
                defaults.doctor_selection_policy,
            ),
            enforce_unique_patient_email: parse_var(
                "ENFORCE_UNIQUE_PATIENT_EMAIL",
                defaults.enforce_unique_patient_email,
            ),
            admin_username: env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_USERNAME not set, using demo credentials");
                    defaults.admin_username.clone()
                }),
            admin_password: env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| {
                    warn!("ADMIN_PASSWORD not set, using demo credentials");
                    defaults.admin_password.clone()
                }),
            seed_demo_data: parse_var("SEED_DEMO_DATA", defaults.seed_demo_data),
        };

        if config.uses_demo_admin_credentials() {
            warn!("Administrator login is using the built-in demo credentials");
        }

        config
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    pub fn uses_demo_admin_credentials(&self) -> bool {
        let defaults = Self::default();
        self.admin_username == defaults.admin_username
            && self.admin_password == defaults.admin_password
    }
}

fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using {}", key, raw, default);
            default
        }),
        Err(_) => {
            warn!("{} not set, using {}", key, default);
            default
        }
    }
}
