use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub gender: Gender,
    pub address: String,
    pub created_at: DateTime<Utc>,
}

impl Patient {
    pub fn from_new(id: u64, new: NewPatient) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            age: new.age,
            gender: new.gender,
            address: new.address,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "Other")]
    Other,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "M"),
            Gender::Female => write!(f, "F"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

/// Registration payload. All six profile fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub gender: Gender,
    pub address: String,
}
