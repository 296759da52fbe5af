//! tamare-forms
//!
//! Draft state for the patient, doctor, appointment, and medication
//! transaction forms. A form never validates: it coerces the numeric
//! inputs, hands the record to its save callback, and leaves persistence
//! to whoever registered that callback.

pub mod appointment;
pub mod doctor;
pub mod dropdown;
pub mod handlers;
pub mod patient;
pub mod transaction;

use tracing::{debug, warn};

pub use dropdown::Dropdown;
pub use handlers::FormHandlers;

/// Whether a form was opened on an existing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Common submit/cancel behaviour of every form.
pub trait Form {
    type Record;

    /// Form name used in logs.
    const NAME: &'static str;

    /// Build the record the draft currently describes.
    fn commit(&self) -> Self::Record;

    fn handlers_mut(&mut self) -> &mut FormHandlers<Self::Record>;

    /// Commit the draft and pass it to the save callback.
    ///
    /// The callback fires at most once per form. Returns `false` when it
    /// has already fired.
    fn submit(&mut self) -> bool {
        let record = self.commit();
        let fired = self.handlers_mut().save(record);
        if fired {
            debug!(form = Self::NAME, "form submitted");
        } else {
            warn!(form = Self::NAME, "form already submitted, ignoring");
        }
        fired
    }

    /// Fire the close callback without saving. Returns `false` when it has
    /// already fired.
    fn cancel(&mut self) -> bool {
        let fired = self.handlers_mut().close();
        debug!(form = Self::NAME, fired, "form cancelled");
        fired
    }
}

/// Seed a draft field: the existing value, unless absent or empty.
pub(crate) fn seed(existing: Option<&str>, default: &str) -> String {
    match existing {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => default.to_string(),
    }
}
