//! Tabular summaries behind the report catalog.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::Serialize;
use ts_rs::TS;

use tamare_core::models::appointment::{Appointment, AppointmentStatus};
use tamare_core::models::medication::Medication;
use tamare_core::models::patient::Patient;
use tamare_core::models::report::ReportKind;

use crate::status::{medication_is_expiring, medication_is_low_stock};

/// Borrowed record collections a report is computed from.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub patients: &'a [Patient],
    pub appointments: &'a [Appointment],
    pub medications: &'a [Medication],
    pub today: Date,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ReportRow {
    pub label: String,
    pub value: String,
    /// Highlighted row, e.g. low stock.
    pub flagged: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ReportTable {
    pub kind: ReportKind,
    pub title: String,
    pub rows: Vec<ReportRow>,
}

fn row(label: impl Into<String>, value: impl Into<String>) -> ReportRow {
    ReportRow {
        label: label.into(),
        value: value.into(),
        flagged: false,
    }
}

fn counted<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<ReportRow> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(label, count)| row(label, count.to_string()))
        .collect()
}

fn in_month(raw_date: &str, today: Date) -> bool {
    raw_date
        .parse::<Date>()
        .is_ok_and(|d| d.year() == today.year() && d.month() == today.month())
}

/// Build the table for `kind`.
///
/// Returns `None` for reports the records cannot support: registration
/// dates and consumption history are not tracked.
pub fn build_report(kind: ReportKind, inputs: &ReportInputs<'_>) -> Option<ReportTable> {
    let rows = match kind {
        ReportKind::PatientRegistry => inputs
            .patients
            .iter()
            .map(|p| row(&p.name, &p.condition))
            .collect(),
        ReportKind::PatientsByCondition => {
            counted(inputs.patients.iter().map(|p| p.condition.as_str()))
        }
        ReportKind::AppointmentsByDoctor => {
            counted(inputs.appointments.iter().map(|a| a.doctor_name.as_str()))
        }
        ReportKind::MonthlyAppointments => counted(
            inputs
                .appointments
                .iter()
                .filter(|a| in_month(&a.date, inputs.today))
                .map(|a| a.status.label()),
        ),
        ReportKind::CancelledAppointments => inputs
            .appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Cancelled)
            .map(|a| row(&a.patient_name, format!("{} {}", a.time, a.doctor_name)))
            .collect(),
        ReportKind::CurrentInventory => inputs
            .medications
            .iter()
            .map(|m| ReportRow {
                label: m.name.clone(),
                value: format!("{} {}", m.stock, m.unit),
                flagged: medication_is_low_stock(m),
            })
            .collect(),
        ReportKind::ExpiringMedications => inputs
            .medications
            .iter()
            .filter(|m| medication_is_expiring(m, inputs.today))
            .map(|m| row(&m.name, &m.expiry))
            .collect(),
        ReportKind::NewPatients | ReportKind::MonthlyConsumption => return None,
    };

    Some(ReportTable {
        kind,
        title: kind.title().to_string(),
        rows,
    })
}
