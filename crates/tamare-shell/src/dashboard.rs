use jiff::civil::Date;
use serde::Serialize;

use tamare_core::models::appointment::{Appointment, AppointmentStatus};
use tamare_core::models::doctor::Doctor;
use tamare_core::models::patient::Patient;
use tamare_storage::RecordStore;

const UPCOMING_LIMIT: usize = 3;

/// Figures for the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub clinic_name: String,
    pub appointments_today: usize,
    pub doctors: usize,
    pub patients: usize,
    /// Next non-cancelled appointments from `today` on, by date then time.
    pub upcoming: Vec<Appointment>,
}

pub fn summarize<S>(store: &S, clinic_name: &str, today: Date) -> DashboardSummary
where
    S: RecordStore<Patient> + RecordStore<Doctor> + RecordStore<Appointment>,
{
    let appointments = RecordStore::<Appointment>::list(store);
    let today_iso = today.to_string();

    let mut upcoming: Vec<(Date, &Appointment)> = appointments
        .iter()
        .filter(|a| a.status != AppointmentStatus::Cancelled)
        .filter_map(|a| a.date.parse::<Date>().ok().map(|d| (d, a)))
        .filter(|(d, _)| *d >= today)
        .collect();
    upcoming.sort_by(|(da, a), (db, b)| da.cmp(db).then_with(|| a.time.cmp(&b.time)));

    DashboardSummary {
        clinic_name: clinic_name.to_string(),
        appointments_today: appointments.iter().filter(|a| a.date == today_iso).count(),
        doctors: RecordStore::<Doctor>::list(store).len(),
        patients: RecordStore::<Patient>::list(store).len(),
        upcoming: upcoming
            .into_iter()
            .take(UPCOMING_LIMIT)
            .map(|(_, a)| a.clone())
            .collect(),
    }
}
