pub mod appointment;
pub mod doctor;
pub mod medication;
pub mod patient;
pub mod report;
pub mod transaction;

/// A stored entity with a string identifier.
///
/// Identifiers are opaque and copied between records; nothing enforces
/// uniqueness or referential integrity.
pub trait Record: Clone {
    /// Lowercase entity name used in logs and audit events.
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

macro_rules! impl_record {
    ($ty:ty, $kind:literal) => {
        impl Record for $ty {
            const KIND: &'static str = $kind;

            fn id(&self) -> &str {
                &self.id
            }

            fn set_id(&mut self, id: String) {
                self.id = id;
            }
        }
    };
}

impl_record!(patient::Patient, "patient");
impl_record!(doctor::Doctor, "doctor");
impl_record!(appointment::Appointment, "appointment");
impl_record!(medication::Medication, "medication");
