use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    pub specialization: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub qualification: Option<String>,
    pub experience: u32,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl Doctor {
    /// New doctors always join the directory as available.
    pub fn from_new(id: u64, new: NewDoctor) -> Self {
        Self {
            id,
            name: new.name,
            specialization: new.specialization,
            email: new.email,
            phone: new.phone,
            qualification: new.qualification,
            experience: new.experience,
            available: true,
            created_at: Utc::now(),
        }
    }

    pub fn can_take(&self, specialization: &str) -> bool {
        self.available && self.specialization == specialization
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDoctor {
    pub name: String,
    pub specialization: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default)]
    pub experience: u32,
}

impl NewDoctor {
    pub fn new(name: impl Into<String>, specialization: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specialization: specialization.into(),
            email: None,
            phone: None,
            qualification: None,
            experience: 0,
        }
    }

    pub fn with_experience(mut self, years: u32) -> Self {
        self.experience = years;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specialization_match_is_case_sensitive() {
        let doctor = Doctor::from_new(1, NewDoctor::new("Dr. B", "Cardiology"));
        assert!(doctor.can_take("Cardiology"));
        assert!(!doctor.can_take("cardiology"));
    }

    #[test]
    fn test_unavailable_doctor_takes_nothing() {
        let mut doctor = Doctor::from_new(1, NewDoctor::new("Dr. B", "Cardiology"));
        doctor.available = false;
        assert!(!doctor.can_take("Cardiology"));
    }

    #[test]
    fn test_minimal_payload_defaults() {
        let new: NewDoctor = serde_json::from_str(r#"{"name":"Dr. B","specialization":"Cardiology"}"#).unwrap();
        assert_eq!(new.experience, 0);
        assert!(new.email.is_none());
    }
}
