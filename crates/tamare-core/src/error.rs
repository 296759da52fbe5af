use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid expiry '{0}': expected MM/YYYY")]
    InvalidExpiry(String),

    #[error("unknown appointment status: {0}")]
    UnknownStatus(String),

    #[error("unknown appointment type: {0}")]
    UnknownAppointmentType(String),

    #[error("unknown specialty: {0}")]
    UnknownSpecialty(String),

    #[error("date error: {0}")]
    Date(#[from] jiff::Error),
}
