use tracing::info;
use uuid::Uuid;

use tamare_core::Record;
use tamare_core::models::appointment::Appointment;
use tamare_core::models::doctor::Doctor;
use tamare_core::models::medication::Medication;
use tamare_core::models::patient::Patient;
use tamare_core::models::transaction::MedicationTransaction;

use crate::audit::AuditEvent;
use crate::error::StoreError;
use crate::fixtures::Fixtures;
use crate::store::{RecordSink, RecordStore};

/// Record store held entirely in memory.
///
/// Medication transactions are logged but never applied to stock levels.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    appointments: Vec<Appointment>,
    medications: Vec<Medication>,
    transactions: Vec<MedicationTransaction>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        info!(
            patients = fixtures.patients.len(),
            doctors = fixtures.doctors.len(),
            appointments = fixtures.appointments.len(),
            medications = fixtures.medications.len(),
            "record store seeded"
        );
        Self {
            patients: fixtures.patients,
            doctors: fixtures.doctors,
            appointments: fixtures.appointments,
            medications: fixtures.medications,
            transactions: Vec::new(),
        }
    }

    /// Snapshot of the four entity collections.
    pub fn to_fixtures(&self) -> Fixtures {
        Fixtures {
            patients: self.patients.clone(),
            doctors: self.doctors.clone(),
            appointments: self.appointments.clone(),
            medications: self.medications.clone(),
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn transactions(&self) -> &[MedicationTransaction] {
        &self.transactions
    }

    /// Append a committed transaction to the log. Stock is left untouched.
    pub fn record_transaction(&mut self, transaction: MedicationTransaction) {
        AuditEvent::new("record", "medication_transaction", &transaction.date)
            .with_details(serde_json::json!({
                "type": transaction.direction,
                "items": transaction.items.len(),
            }))
            .emit();
        self.transactions.push(transaction);
    }
}

fn upsert<T: Record>(records: &mut Vec<T>, mut record: T) -> T {
    if record.id().is_empty() {
        record.set_id(Uuid::new_v4().to_string());
    }

    let action = match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(slot) => {
            *slot = record.clone();
            "update"
        }
        None => {
            records.push(record.clone());
            "create"
        }
    };

    AuditEvent::new(action, T::KIND, record.id()).emit();
    record
}

macro_rules! impl_collection {
    ($ty:ty, $field:ident) => {
        impl RecordStore<$ty> for InMemoryStore {
            fn list(&self) -> &[$ty] {
                &self.$field
            }
        }

        impl RecordSink<$ty> for InMemoryStore {
            fn save(&mut self, record: $ty) -> Result<$ty, StoreError> {
                Ok(upsert(&mut self.$field, record))
            }
        }
    };
}

impl_collection!(Patient, patients);
impl_collection!(Doctor, doctors);
impl_collection!(Appointment, appointments);
impl_collection!(Medication, medications);
