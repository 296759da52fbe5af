use tamare_core::coerce::parse_int;
use tamare_core::models::patient::{Gender, Patient};

use crate::{Form, FormHandlers, FormMode, seed};

/// Text inputs of the patient form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientInput {
    Name,
    Age,
    NationalId,
    Phone,
    Email,
    Address,
    Condition,
    Allergies,
    BloodType,
}

/// Field values as typed; `age` is coerced only on commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientDraft {
    pub id: String,
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub condition: String,
    pub allergies: String,
    pub blood_type: String,
    pub last_visit: String,
}

#[derive(Debug)]
pub struct PatientForm {
    mode: FormMode,
    draft: PatientDraft,
    handlers: FormHandlers<Patient>,
}

impl PatientForm {
    pub fn new(existing: Option<&Patient>, handlers: FormHandlers<Patient>) -> Self {
        // An age of zero seeds an empty input, like a missing one.
        let age = existing
            .and_then(|p| p.age)
            .filter(|age| *age != 0)
            .map(|age| age.to_string())
            .unwrap_or_default();

        let draft = PatientDraft {
            id: seed(existing.map(|p| p.id.as_str()), ""),
            name: seed(existing.map(|p| p.name.as_str()), ""),
            age,
            gender: existing.map(|p| p.gender).unwrap_or_default(),
            national_id: seed(existing.map(|p| p.national_id.as_str()), ""),
            phone: seed(existing.map(|p| p.phone.as_str()), ""),
            email: seed(existing.map(|p| p.email.as_str()), ""),
            address: seed(existing.map(|p| p.address.as_str()), ""),
            condition: seed(existing.map(|p| p.condition.as_str()), ""),
            allergies: seed(existing.map(|p| p.allergies.as_str()), ""),
            blood_type: seed(existing.map(|p| p.blood_type.as_str()), ""),
            last_visit: seed(existing.map(|p| p.last_visit.as_str()), ""),
        };

        Self {
            mode: if existing.is_some() {
                FormMode::Edit
            } else {
                FormMode::Create
            },
            draft,
            handlers,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn draft(&self) -> &PatientDraft {
        &self.draft
    }

    pub fn set(&mut self, input: PatientInput, value: impl Into<String>) {
        let value = value.into();
        let slot = match input {
            PatientInput::Name => &mut self.draft.name,
            PatientInput::Age => &mut self.draft.age,
            PatientInput::NationalId => &mut self.draft.national_id,
            PatientInput::Phone => &mut self.draft.phone,
            PatientInput::Email => &mut self.draft.email,
            PatientInput::Address => &mut self.draft.address,
            PatientInput::Condition => &mut self.draft.condition,
            PatientInput::Allergies => &mut self.draft.allergies,
            PatientInput::BloodType => &mut self.draft.blood_type,
        };
        *slot = value;
    }

    pub fn set_gender(&mut self, gender: Gender) {
        self.draft.gender = gender;
    }
}

impl Form for PatientForm {
    type Record = Patient;

    const NAME: &'static str = "patient";

    fn commit(&self) -> Patient {
        let d = &self.draft;
        Patient {
            id: d.id.clone(),
            name: d.name.clone(),
            age: parse_int(&d.age),
            gender: d.gender,
            national_id: d.national_id.clone(),
            phone: d.phone.clone(),
            email: d.email.clone(),
            address: d.address.clone(),
            condition: d.condition.clone(),
            allergies: d.allergies.clone(),
            blood_type: d.blood_type.clone(),
            last_visit: d.last_visit.clone(),
        }
    }

    fn handlers_mut(&mut self) -> &mut FormHandlers<Patient> {
        &mut self.handlers
    }
}
