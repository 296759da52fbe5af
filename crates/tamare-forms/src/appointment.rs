use jiff::civil::Date;

use tamare_core::catalog::DEFAULT_APPOINTMENT_TIME;
use tamare_core::models::appointment::{Appointment, AppointmentStatus, AppointmentType};
use tamare_core::models::doctor::Doctor;

use crate::{Dropdown, Form, FormHandlers, FormMode, seed};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentInput {
    PatientName,
    PatientId,
    Date,
    Time,
    Notes,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentDraft {
    pub id: String,
    pub patient_name: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: String,
    pub time: String,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub notes: String,
}

#[derive(Debug)]
pub struct AppointmentForm {
    mode: FormMode,
    draft: AppointmentDraft,
    doctor_dropdown: Dropdown,
    type_dropdown: Dropdown,
    handlers: FormHandlers<Appointment>,
}

impl AppointmentForm {
    /// Open the form. In create mode the doctor defaults to the first entry
    /// of `doctors` and the date to `today`.
    pub fn new(
        existing: Option<&Appointment>,
        doctors: &[Doctor],
        today: Date,
        handlers: FormHandlers<Appointment>,
    ) -> Self {
        let default_doctor = doctors.first();
        let default_doctor_id = default_doctor.map(|d| d.id.as_str()).unwrap_or_default();
        let default_doctor_name = default_doctor.map(|d| d.name.as_str()).unwrap_or_default();

        let draft = AppointmentDraft {
            id: seed(existing.map(|a| a.id.as_str()), ""),
            patient_name: seed(existing.map(|a| a.patient_name.as_str()), ""),
            patient_id: seed(existing.map(|a| a.patient_id.as_str()), ""),
            doctor_id: seed(existing.map(|a| a.doctor_id.as_str()), default_doctor_id),
            doctor_name: seed(existing.map(|a| a.doctor_name.as_str()), default_doctor_name),
            date: seed(existing.map(|a| a.date.as_str()), &today.to_string()),
            time: seed(existing.map(|a| a.time.as_str()), DEFAULT_APPOINTMENT_TIME),
            appointment_type: existing.map(|a| a.appointment_type).unwrap_or_default(),
            status: existing.map(|a| a.status).unwrap_or_default(),
            notes: seed(existing.map(|a| a.notes.as_str()), ""),
        };

        Self {
            mode: if existing.is_some() {
                FormMode::Edit
            } else {
                FormMode::Create
            },
            draft,
            doctor_dropdown: Dropdown::Closed,
            type_dropdown: Dropdown::Closed,
            handlers,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &AppointmentDraft {
        &self.draft
    }

    pub fn set(&mut self, input: AppointmentInput, value: impl Into<String>) {
        let value = value.into();
        let slot = match input {
            AppointmentInput::PatientName => &mut self.draft.patient_name,
            AppointmentInput::PatientId => &mut self.draft.patient_id,
            AppointmentInput::Date => &mut self.draft.date,
            AppointmentInput::Time => &mut self.draft.time,
            AppointmentInput::Notes => &mut self.draft.notes,
        };
        *slot = value;
    }

    /// Any status may replace any other.
    pub fn set_status(&mut self, status: AppointmentStatus) {
        self.draft.status = status;
    }

    pub fn doctor_dropdown(&self) -> Dropdown {
        self.doctor_dropdown
    }

    pub fn toggle_doctor_dropdown(&mut self) {
        self.doctor_dropdown.toggle();
    }

    /// Copy the doctor's id and name into the draft and close the dropdown.
    pub fn select_doctor(&mut self, doctor: &Doctor) {
        self.draft.doctor_id = doctor.id.clone();
        self.draft.doctor_name = doctor.name.clone();
        self.doctor_dropdown.close();
    }

    pub fn type_dropdown(&self) -> Dropdown {
        self.type_dropdown
    }

    pub fn toggle_type_dropdown(&mut self) {
        self.type_dropdown.toggle();
    }

    pub fn select_type(&mut self, appointment_type: AppointmentType) {
        self.draft.appointment_type = appointment_type;
        self.type_dropdown.close();
    }
}

impl Form for AppointmentForm {
    type Record = Appointment;

    const NAME: &'static str = "appointment";

    fn commit(&self) -> Appointment {
        let d = self.draft.clone();
        Appointment {
            id: d.id,
            date: d.date,
            time: d.time,
            patient_name: d.patient_name,
            patient_id: d.patient_id,
            doctor_id: d.doctor_id,
            doctor_name: d.doctor_name,
            appointment_type: d.appointment_type,
            status: d.status,
            notes: d.notes,
        }
    }

    fn handlers_mut(&mut self) -> &mut FormHandlers<Appointment> {
        &mut self.handlers
    }
}
