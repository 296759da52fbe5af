use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Patient {
    #[serde(default)]
    pub id: String,
    pub name: String,
    /// Whole years. `None` when the value entered in the form was not a number.
    pub age: Option<i64>,
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub national_id: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    /// Main condition or diagnosis, free text.
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub blood_type: String,
    /// As entered (`DD/MM/YYYY` in the sample data); never parsed.
    #[serde(default)]
    pub last_visit: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Gender {
    #[default]
    M,
    F,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::M => "Masculino",
            Gender::F => "Femenino",
        }
    }
}
