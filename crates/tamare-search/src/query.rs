use tracing::trace;

use tamare_core::models::appointment::Appointment;
use tamare_core::models::doctor::Doctor;
use tamare_core::models::medication::Medication;
use tamare_core::models::patient::Patient;

/// A record whose textual fields can be matched by a free-text query.
pub trait Searchable {
    /// Names the textual fields a query may target.
    type Field: Copy + 'static;

    /// Fields searched by the record's list screen.
    const DEFAULT_FIELDS: &'static [Self::Field];

    fn field_text(&self, field: Self::Field) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientField {
    Name,
    Condition,
    NationalId,
    Phone,
    Email,
}

impl Searchable for Patient {
    type Field = PatientField;

    const DEFAULT_FIELDS: &'static [PatientField] = &[PatientField::Name];

    fn field_text(&self, field: PatientField) -> &str {
        match field {
            PatientField::Name => &self.name,
            PatientField::Condition => &self.condition,
            PatientField::NationalId => &self.national_id,
            PatientField::Phone => &self.phone,
            PatientField::Email => &self.email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorField {
    Name,
    Specialty,
    LicenseNumber,
}

impl Searchable for Doctor {
    type Field = DoctorField;

    const DEFAULT_FIELDS: &'static [DoctorField] = &[DoctorField::Name, DoctorField::Specialty];

    fn field_text(&self, field: DoctorField) -> &str {
        match field {
            DoctorField::Name => &self.name,
            DoctorField::Specialty => self.specialty.label(),
            DoctorField::LicenseNumber => &self.license_number,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentField {
    PatientName,
    DoctorName,
    Type,
    Notes,
}

impl Searchable for Appointment {
    type Field = AppointmentField;

    const DEFAULT_FIELDS: &'static [AppointmentField] =
        &[AppointmentField::PatientName, AppointmentField::DoctorName];

    fn field_text(&self, field: AppointmentField) -> &str {
        match field {
            AppointmentField::PatientName => &self.patient_name,
            AppointmentField::DoctorName => &self.doctor_name,
            AppointmentField::Type => self.appointment_type.label(),
            AppointmentField::Notes => &self.notes,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicationField {
    Name,
    Category,
    Unit,
}

impl Searchable for Medication {
    type Field = MedicationField;

    const DEFAULT_FIELDS: &'static [MedicationField] =
        &[MedicationField::Name, MedicationField::Category];

    fn field_text(&self, field: MedicationField) -> &str {
        match field {
            MedicationField::Name => &self.name,
            MedicationField::Category => &self.category,
            MedicationField::Unit => &self.unit,
        }
    }
}

/// Whether `query` is blank, i.e. selects every record.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive substring match of `query` against any of `fields`.
///
/// Only case is folded: "maria" does not match "María".
pub fn matches_query<T: Searchable>(record: &T, query: &str, fields: &[T::Field]) -> bool {
    if is_blank(query) {
        return true;
    }
    let needle = query.to_lowercase();
    fields
        .iter()
        .any(|field| record.field_text(*field).to_lowercase().contains(&needle))
}

/// Keep the records matching `query` on at least one of `fields`.
///
/// A blank query keeps everything. Input order is preserved and no record
/// is ever produced that was not in the input.
pub fn filter_by_query<'a, T, I>(records: I, query: &str, fields: &[T::Field]) -> Vec<&'a T>
where
    T: Searchable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let matched: Vec<&T> = records
        .into_iter()
        .filter(|record| matches_query(*record, query, fields))
        .collect();
    trace!(query, matched = matched.len(), "query filter applied");
    matched
}
