use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Tabs of the reports screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportCategory {
    #[default]
    Patients,
    Appointments,
    Medications,
}

impl ReportCategory {
    pub const ALL: [ReportCategory; 3] = [
        ReportCategory::Patients,
        ReportCategory::Appointments,
        ReportCategory::Medications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportCategory::Patients => "Pacientes",
            ReportCategory::Appointments => "Citas",
            ReportCategory::Medications => "Medicamentos",
        }
    }

    /// Report kinds listed under this tab, in display order.
    pub fn reports(self) -> [ReportKind; 3] {
        match self {
            ReportCategory::Patients => [
                ReportKind::PatientRegistry,
                ReportKind::PatientsByCondition,
                ReportKind::NewPatients,
            ],
            ReportCategory::Appointments => [
                ReportKind::AppointmentsByDoctor,
                ReportKind::MonthlyAppointments,
                ReportKind::CancelledAppointments,
            ],
            ReportCategory::Medications => [
                ReportKind::CurrentInventory,
                ReportKind::ExpiringMedications,
                ReportKind::MonthlyConsumption,
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportKind {
    PatientRegistry,
    PatientsByCondition,
    NewPatients,
    AppointmentsByDoctor,
    MonthlyAppointments,
    CancelledAppointments,
    CurrentInventory,
    ExpiringMedications,
    MonthlyConsumption,
}

impl ReportKind {
    pub fn category(self) -> ReportCategory {
        match self {
            ReportKind::PatientRegistry
            | ReportKind::PatientsByCondition
            | ReportKind::NewPatients => ReportCategory::Patients,
            ReportKind::AppointmentsByDoctor
            | ReportKind::MonthlyAppointments
            | ReportKind::CancelledAppointments => ReportCategory::Appointments,
            ReportKind::CurrentInventory
            | ReportKind::ExpiringMedications
            | ReportKind::MonthlyConsumption => ReportCategory::Medications,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::PatientRegistry => "Registro de Pacientes",
            ReportKind::PatientsByCondition => "Pacientes por Condición",
            ReportKind::NewPatients => "Nuevos Pacientes",
            ReportKind::AppointmentsByDoctor => "Citas por Médico",
            ReportKind::MonthlyAppointments => "Citas Mensuales",
            ReportKind::CancelledAppointments => "Citas Canceladas",
            ReportKind::CurrentInventory => "Inventario Actual",
            ReportKind::ExpiringMedications => "Medicamentos por Vencer",
            ReportKind::MonthlyConsumption => "Consumo Mensual",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ReportKind::PatientRegistry => "Lista completa de pacientes registrados en el sistema",
            ReportKind::PatientsByCondition => "Distribución de pacientes según condición médica",
            ReportKind::NewPatients => "Pacientes registrados en el último mes",
            ReportKind::AppointmentsByDoctor => "Distribución de citas por médico y especialidad",
            ReportKind::MonthlyAppointments => "Estadísticas de citas del mes actual",
            ReportKind::CancelledAppointments => "Análisis de citas canceladas y motivos",
            ReportKind::CurrentInventory => "Estado actual del inventario de medicamentos",
            ReportKind::ExpiringMedications => "Lista de medicamentos próximos a vencer",
            ReportKind::MonthlyConsumption => "Estadísticas de consumo de medicamentos",
        }
    }

    /// "Last updated" caption shown on the report card.
    pub fn updated(self) -> &'static str {
        match self {
            ReportKind::PatientRegistry
            | ReportKind::AppointmentsByDoctor
            | ReportKind::CurrentInventory => "Actualizado: Hoy",
            ReportKind::PatientsByCondition
            | ReportKind::MonthlyAppointments
            | ReportKind::ExpiringMedications => "Actualizado: Ayer",
            ReportKind::NewPatients => "Actualizado: 15/10/2023",
            ReportKind::CancelledAppointments => "Actualizado: 18/10/2023",
            ReportKind::MonthlyConsumption => "Actualizado: 16/10/2023",
        }
    }

    pub fn card(self) -> ReportCard {
        ReportCard {
            kind: self,
            title: self.title().to_string(),
            description: self.description().to_string(),
            updated: self.updated().to_string(),
        }
    }
}

/// A catalog entry on the reports screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportCard {
    pub kind: ReportKind,
    pub title: String,
    pub description: String,
    pub updated: String,
}
