use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::UNKNOWN_STATUS_LABEL;
use crate::error::CoreError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Appointment {
    #[serde(default)]
    pub id: String,
    /// As entered; the form seeds ISO `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// `HH:MM`, as entered.
    pub time: String,
    pub patient_name: String,
    #[serde(default)]
    pub patient_id: String,
    #[serde(default)]
    pub doctor_id: String,
    pub doctor_name: String,
    #[serde(default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: String,
}

/// Appointment status. Any status may be replaced by any other; there is
/// no transition graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AppointmentStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 3] = [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
    ];

    /// Wire spelling, as stored in records.
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pendiente",
            AppointmentStatus::Confirmed => "Confirmada",
            AppointmentStatus::Cancelled => "Cancelada",
        }
    }

    /// Display label for a raw status string. Unrecognised input maps to
    /// [`UNKNOWN_STATUS_LABEL`].
    pub fn label_for(raw: &str) -> &'static str {
        raw.parse::<AppointmentStatus>()
            .map(AppointmentStatus::label)
            .unwrap_or(UNKNOWN_STATUS_LABEL)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::UnknownStatus(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AppointmentType {
    #[default]
    #[serde(rename = "Consulta General")]
    GeneralConsultation,
    #[serde(rename = "Control Mensual")]
    MonthlyCheckup,
    #[serde(rename = "Primera Consulta")]
    FirstConsultation,
    #[serde(rename = "Seguimiento")]
    FollowUp,
    #[serde(rename = "Emergencia")]
    Emergency,
}

impl AppointmentType {
    /// All types in dropdown order.
    pub const ALL: [AppointmentType; 5] = [
        AppointmentType::GeneralConsultation,
        AppointmentType::MonthlyCheckup,
        AppointmentType::FirstConsultation,
        AppointmentType::FollowUp,
        AppointmentType::Emergency,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AppointmentType::GeneralConsultation => "Consulta General",
            AppointmentType::MonthlyCheckup => "Control Mensual",
            AppointmentType::FirstConsultation => "Primera Consulta",
            AppointmentType::FollowUp => "Seguimiento",
            AppointmentType::Emergency => "Emergencia",
        }
    }
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AppointmentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AppointmentType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| CoreError::UnknownAppointmentType(s.to_string()))
    }
}
