use tamare_core::models::doctor::{Doctor, Specialty};

use crate::{Dropdown, Form, FormHandlers, FormMode, seed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorInput {
    Name,
    LicenseNumber,
    Phone,
    Email,
    Address,
    Schedule,
    Notes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoctorDraft {
    pub id: String,
    pub name: String,
    pub specialty: Specialty,
    pub license_number: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub schedule: String,
    pub notes: String,
}

#[derive(Debug)]
pub struct DoctorForm {
    mode: FormMode,
    draft: DoctorDraft,
    specialty_dropdown: Dropdown,
    handlers: FormHandlers<Doctor>,
}

impl DoctorForm {
    pub fn new(existing: Option<&Doctor>, handlers: FormHandlers<Doctor>) -> Self {
        let draft = DoctorDraft {
            id: seed(existing.map(|d| d.id.as_str()), ""),
            name: seed(existing.map(|d| d.name.as_str()), ""),
            specialty: existing.map(|d| d.specialty).unwrap_or_default(),
            license_number: seed(existing.map(|d| d.license_number.as_str()), ""),
            phone: seed(existing.map(|d| d.phone.as_str()), ""),
            email: seed(existing.map(|d| d.email.as_str()), ""),
            address: seed(existing.map(|d| d.address.as_str()), ""),
            schedule: seed(existing.map(|d| d.schedule.as_str()), ""),
            notes: seed(existing.map(|d| d.notes.as_str()), ""),
        };

        Self {
            mode: if existing.is_some() {
                FormMode::Edit
            } else {
                FormMode::Create
            },
            draft,
            specialty_dropdown: Dropdown::Closed,
            handlers,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &DoctorDraft {
        &self.draft
    }

    pub fn set(&mut self, input: DoctorInput, value: impl Into<String>) {
        let value = value.into();
        let slot = match input {
            DoctorInput::Name => &mut self.draft.name,
            DoctorInput::LicenseNumber => &mut self.draft.license_number,
            DoctorInput::Phone => &mut self.draft.phone,
            DoctorInput::Email => &mut self.draft.email,
            DoctorInput::Address => &mut self.draft.address,
            DoctorInput::Schedule => &mut self.draft.schedule,
            DoctorInput::Notes => &mut self.draft.notes,
        };
        *slot = value;
    }

    pub fn specialty_dropdown(&self) -> Dropdown {
        self.specialty_dropdown
    }

    pub fn toggle_specialty_dropdown(&mut self) {
        self.specialty_dropdown.toggle();
    }

    /// Set the specialty and close the dropdown.
    pub fn select_specialty(&mut self, specialty: Specialty) {
        self.draft.specialty = specialty;
        self.specialty_dropdown.close();
    }
}

impl Form for DoctorForm {
    type Record = Doctor;

    const NAME: &'static str = "doctor";

    fn commit(&self) -> Doctor {
        let d = self.draft.clone();
        Doctor {
            id: d.id,
            name: d.name,
            specialty: d.specialty,
            license_number: d.license_number,
            phone: d.phone,
            email: d.email,
            address: d.address,
            schedule: d.schedule,
            notes: d.notes,
        }
    }

    fn handlers_mut(&mut self) -> &mut FormHandlers<Doctor> {
        &mut self.handlers
    }
}
