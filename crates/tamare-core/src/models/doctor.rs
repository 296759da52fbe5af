use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Doctor {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub specialty: Specialty,
    #[serde(default)]
    pub license_number: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    /// Free text, e.g. "Lunes a Viernes 8:00 - 16:00".
    #[serde(default)]
    pub schedule: String,
    #[serde(default)]
    pub notes: String,
}

/// Medical specialties offered by the doctor form. `Other` is the catch-all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Specialty {
    #[default]
    #[serde(rename = "Medicina General")]
    GeneralMedicine,
    #[serde(rename = "Pediatría")]
    Pediatrics,
    #[serde(rename = "Cardiología")]
    Cardiology,
    #[serde(rename = "Dermatología")]
    Dermatology,
    #[serde(rename = "Ginecología")]
    Gynecology,
    #[serde(rename = "Neurología")]
    Neurology,
    #[serde(rename = "Oftalmología")]
    Ophthalmology,
    #[serde(rename = "Ortopedia")]
    Orthopedics,
    #[serde(rename = "Psiquiatría")]
    Psychiatry,
    #[serde(rename = "Urología")]
    Urology,
    #[serde(rename = "Otra")]
    Other,
}

impl Specialty {
    /// All specialties in dropdown order.
    pub const ALL: [Specialty; 11] = [
        Specialty::GeneralMedicine,
        Specialty::Pediatrics,
        Specialty::Cardiology,
        Specialty::Dermatology,
        Specialty::Gynecology,
        Specialty::Neurology,
        Specialty::Ophthalmology,
        Specialty::Orthopedics,
        Specialty::Psychiatry,
        Specialty::Urology,
        Specialty::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Specialty::GeneralMedicine => "Medicina General",
            Specialty::Pediatrics => "Pediatría",
            Specialty::Cardiology => "Cardiología",
            Specialty::Dermatology => "Dermatología",
            Specialty::Gynecology => "Ginecología",
            Specialty::Neurology => "Neurología",
            Specialty::Ophthalmology => "Oftalmología",
            Specialty::Orthopedics => "Ortopedia",
            Specialty::Psychiatry => "Psiquiatría",
            Specialty::Urology => "Urología",
            Specialty::Other => "Otra",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Specialty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialty::ALL
            .into_iter()
            .find(|sp| sp.label() == s)
            .ok_or_else(|| CoreError::UnknownSpecialty(s.to_string()))
    }
}
