//! Display classification of appointments and inventory items.

use jiff::Span;
use jiff::civil::Date;
use serde::Serialize;
use ts_rs::TS;

use tamare_core::catalog::{EXPIRY_WINDOW_MONTHS, LOW_STOCK_THRESHOLD};
use tamare_core::models::appointment::AppointmentStatus;
use tamare_core::models::medication::Medication;

/// Spanish label for a raw appointment status. Never fails: anything
/// outside the known set is "Desconocido".
pub fn appointment_status_label(status: &str) -> &'static str {
    AppointmentStatus::label_for(status)
}

/// Stock at or below [`LOW_STOCK_THRESHOLD`].
pub fn medication_is_low_stock(medication: &Medication) -> bool {
    medication.stock <= LOW_STOCK_THRESHOLD
}

/// Last day (inclusive) of the expiring-soon window starting at `today`.
///
/// The month number moves forward without clamping: days past the end of
/// a shorter target month spill into the next one (Nov 30 -> Mar 1).
pub fn expiry_window_end(today: Date) -> Date {
    let spill_days = i64::from(today.day()) - 1;
    Span::new()
        .try_months(EXPIRY_WINDOW_MONTHS)
        .and_then(|window| today.first_of_month().checked_add(window))
        .and_then(|month_start| month_start.checked_add(Span::new().try_days(spill_days)?))
        .unwrap_or(Date::MAX)
}

/// The first day of the expiry month falls on or before the window end.
///
/// Already expired stock counts as expiring. An expiry that cannot be
/// parsed is never expiring.
pub fn medication_is_expiring(medication: &Medication, today: Date) -> bool {
    match medication.expiry_month().and_then(|expiry| expiry.first_day()) {
        Ok(first_day) => first_day <= expiry_window_end(today),
        Err(_) => false,
    }
}

/// Derived inventory flags for one medication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct MedicationFlags {
    pub critical_stock: bool,
    pub expiring_soon: bool,
}

pub fn classify_medication(medication: &Medication, today: Date) -> MedicationFlags {
    MedicationFlags {
        critical_stock: medication_is_low_stock(medication),
        expiring_soon: medication_is_expiring(medication, today),
    }
}
