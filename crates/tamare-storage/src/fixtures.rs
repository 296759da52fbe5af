use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use tamare_core::models::appointment::{Appointment, AppointmentStatus, AppointmentType};
use tamare_core::models::doctor::{Doctor, Specialty};
use tamare_core::models::medication::Medication;
use tamare_core::models::patient::{Gender, Patient};

use crate::error::StoreError;

/// The four entity collections, as stored in a records file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixtures {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub medications: Vec<Medication>,
}

impl Fixtures {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let fixtures: Fixtures = serde_json::from_str(&contents)?;
        info!(path = %path.display(), "records loaded");
        Ok(fixtures)
    }

    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "records saved");
        Ok(())
    }

    /// The clinic's demonstration records.
    pub fn sample() -> Self {
        Self {
            patients: sample_patients(),
            doctors: sample_doctors(),
            appointments: sample_appointments(),
            medications: sample_medications(),
        }
    }
}

fn patient(
    id: &str,
    name: &str,
    age: i64,
    gender: Gender,
    last_visit: &str,
    condition: &str,
) -> Patient {
    Patient {
        id: id.to_string(),
        name: name.to_string(),
        age: Some(age),
        gender,
        national_id: String::new(),
        phone: String::new(),
        email: String::new(),
        address: String::new(),
        condition: condition.to_string(),
        allergies: String::new(),
        blood_type: String::new(),
        last_visit: last_visit.to_string(),
    }
}

fn sample_patients() -> Vec<Patient> {
    use Gender::{F, M};
    vec![
        patient("1", "María González", 45, F, "15/05/2023", "Hipertensión"),
        patient("2", "Carlos Rodríguez", 32, M, "22/06/2023", "Diabetes Tipo 2"),
        patient("3", "Ana Martínez", 28, F, "10/07/2023", "Asma"),
        patient("4", "Luis Hernández", 56, M, "05/08/2023", "Artritis"),
        patient("5", "Elena Díaz", 39, F, "18/08/2023", "Migraña"),
        patient("6", "Roberto Sánchez", 42, M, "01/09/2023", "Colesterol Alto"),
        patient("7", "Carmen López", 51, F, "12/09/2023", "Hipotiroidismo"),
        patient("8", "Javier Torres", 35, M, "25/09/2023", "Gastritis"),
    ]
}

fn doctor(id: &str, name: &str, specialty: Specialty) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty,
        license_number: String::new(),
        phone: String::new(),
        email: String::new(),
        address: String::new(),
        schedule: String::new(),
        notes: String::new(),
    }
}

fn sample_doctors() -> Vec<Doctor> {
    vec![
        doctor("1", "Dr. Juan Pérez", Specialty::GeneralMedicine),
        doctor("2", "Dra. Ana Martínez", Specialty::Pediatrics),
        doctor("3", "Dr. Roberto Díaz", Specialty::Cardiology),
    ]
}

const SAMPLE_APPOINTMENT_DATE: &str = "2023-10-20";

fn appointment(
    id: &str,
    time: &str,
    patient: (&str, &str),
    doctor: (&str, &str),
    appointment_type: AppointmentType,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id: id.to_string(),
        date: SAMPLE_APPOINTMENT_DATE.to_string(),
        time: time.to_string(),
        patient_id: patient.0.to_string(),
        patient_name: patient.1.to_string(),
        doctor_id: doctor.0.to_string(),
        doctor_name: doctor.1.to_string(),
        appointment_type,
        status,
        notes: String::new(),
    }
}

fn sample_appointments() -> Vec<Appointment> {
    use AppointmentStatus::{Cancelled, Confirmed, Pending};
    use AppointmentType::{FirstConsultation, FollowUp, GeneralConsultation, MonthlyCheckup};

    let perez = ("1", "Dr. Juan Pérez");
    let martinez = ("2", "Dra. Ana Martínez");
    let diaz = ("3", "Dr. Roberto Díaz");
    vec![
        appointment("1", "09:00", ("1", "María González"), perez, GeneralConsultation, Confirmed),
        appointment("2", "10:30", ("2", "Carlos Rodríguez"), martinez, MonthlyCheckup, Confirmed),
        appointment("3", "11:45", ("5", "Elena Díaz"), diaz, FirstConsultation, Pending),
        appointment("4", "14:15", ("4", "Luis Hernández"), diaz, FollowUp, Confirmed),
        appointment("5", "15:30", ("7", "Carmen López"), martinez, GeneralConsultation, Confirmed),
        appointment("6", "16:45", ("8", "Javier Torres"), perez, MonthlyCheckup, Cancelled),
    ]
}

fn medication(
    id: &str,
    name: &str,
    category: &str,
    stock: u32,
    unit: &str,
    expiry: &str,
    critical: bool,
) -> Medication {
    Medication {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        stock,
        unit: unit.to_string(),
        expiry: expiry.to_string(),
        critical,
    }
}

fn sample_medications() -> Vec<Medication> {
    vec![
        medication("1", "Paracetamol", "Analgésico", 120, "tabletas", "12/2024", false),
        medication("2", "Amoxicilina", "Antibiótico", 45, "cápsulas", "06/2024", false),
        medication("3", "Ibuprofeno", "Antiinflamatorio", 80, "tabletas", "09/2024", false),
        medication("4", "Loratadina", "Antihistamínico", 30, "tabletas", "11/2023", false),
        medication("5", "Omeprazol", "Antiácido", 15, "cápsulas", "08/2024", true),
        medication("6", "Metformina", "Antidiabético", 60, "tabletas", "10/2024", false),
        medication("7", "Enalapril", "Antihipertensivo", 10, "tabletas", "07/2024", true),
        medication("8", "Salbutamol", "Broncodilatador", 5, "inhaladores", "05/2024", true),
    ]
}
