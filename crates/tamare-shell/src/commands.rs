//! Shell commands. Each returns the lines to print so the output can be
//! checked without a terminal.

use std::cell::RefCell;
use std::rc::Rc;

use jiff::civil::Date;

use tamare_core::models::doctor::Doctor;
use tamare_core::models::patient::{Gender, Patient};
use tamare_core::models::report::ReportCategory;
use tamare_forms::patient::{PatientForm, PatientInput};
use tamare_forms::{Form, FormHandlers};
use tamare_search::MedicationTab;
use tamare_search::report::ReportInputs;
use tamare_search::status::{appointment_status_label, classify_medication};
use tamare_storage::RecordSink;

use crate::dashboard::summarize;
use crate::screens::{AppointmentsScreen, MedicationsScreen, ReportsScreen, SearchScreen};
use crate::state::ShellState;

fn age_text(age: Option<i64>) -> String {
    match age {
        Some(age) => format!("{age} años"),
        None => "edad desconocida".to_string(),
    }
}

pub fn summary(state: &ShellState) -> Vec<String> {
    let summary = summarize(&state.store, &state.config.clinic_name, state.today);
    let mut lines = vec![
        summary.clinic_name.clone(),
        format!("Citas Hoy: {}", summary.appointments_today),
        format!("Médicos: {}", summary.doctors),
        format!("Pacientes: {}", summary.patients),
        "Próximas Citas:".to_string(),
    ];
    if summary.upcoming.is_empty() {
        lines.push("  (ninguna)".to_string());
    }
    for a in &summary.upcoming {
        lines.push(format!(
            "  {} {}  {}  {}  {}",
            a.date, a.time, a.patient_name, a.appointment_type, a.doctor_name
        ));
    }
    lines
}

pub fn patients(state: &ShellState, query: &str) -> Vec<String> {
    let mut screen = SearchScreen::<Patient>::new();
    screen.handle_search(query);
    screen
        .visible(&state.store)
        .into_iter()
        .map(|p| {
            format!(
                "{}  {}  {}  {}  {}  Última visita: {}",
                p.id,
                p.name,
                age_text(p.age),
                p.gender.label(),
                p.condition,
                p.last_visit
            )
        })
        .collect()
}

pub fn doctors(state: &ShellState, query: &str) -> Vec<String> {
    let mut screen = SearchScreen::<Doctor>::new();
    screen.handle_search(query);
    screen
        .visible(&state.store)
        .into_iter()
        .map(|d| format!("{}  {}  {}", d.id, d.name, d.specialty))
        .collect()
}

pub fn appointments(state: &ShellState, query: &str, date: Option<Date>) -> Vec<String> {
    let mut screen = AppointmentsScreen::new(date.unwrap_or(state.today));
    screen.search.handle_search(query);

    let mut lines = vec![screen.date_label()];
    lines.extend(screen.search.visible(&state.store).into_iter().map(|a| {
        format!(
            "{}  {}  {}  {}  [{}]",
            a.time,
            a.patient_name,
            a.doctor_name,
            a.appointment_type,
            appointment_status_label(a.status.as_str())
        )
    }));
    lines
}

pub fn medications(state: &ShellState, query: &str, tab: MedicationTab) -> Vec<String> {
    let mut screen = MedicationsScreen::new();
    screen.handle_search(query);
    screen.handle_tab_change(tab);

    screen
        .visible(&state.store, state.today)
        .into_iter()
        .map(|m| {
            let flags = classify_medication(m, state.today);
            let mut line = format!(
                "{}  {}  {}  {} {}  vence {}",
                m.id, m.name, m.category, m.stock, m.unit, m.expiry
            );
            if m.critical {
                line.push_str("  [crítico]");
            }
            if flags.critical_stock {
                line.push_str("  [stock bajo]");
            }
            if flags.expiring_soon {
                line.push_str("  [por vencer]");
            }
            line
        })
        .collect()
}

pub fn reports(state: &ShellState, category: ReportCategory) -> Vec<String> {
    let mut screen = ReportsScreen::new();
    screen.set_active(category);

    let mut lines = vec![format!("Reportes: {}", category.label())];
    for card in screen.cards() {
        lines.push(format!("- {}: {} ({})", card.title, card.description, card.updated));
    }

    let inputs = ReportInputs {
        patients: state.store.patients(),
        appointments: state.store.appointments(),
        medications: state.store.medications(),
        today: state.today,
    };
    for table in screen.tables(&inputs) {
        lines.push(String::new());
        lines.push(table.title);
        for row in table.rows {
            let marker = if row.flagged { "  !" } else { "" };
            lines.push(format!("  {}: {}{marker}", row.label, row.value));
        }
    }
    lines
}

/// Inputs of the `add-patient` command, as typed.
#[derive(Debug, Clone, Default)]
pub struct NewPatient {
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub condition: String,
}

/// Fill a patient form, submit it, and save the committed record.
pub fn add_patient(state: &mut ShellState, input: NewPatient) -> eyre::Result<Patient> {
    let submitted: Rc<RefCell<Option<Patient>>> = Rc::default();
    let handlers = {
        let submitted = Rc::clone(&submitted);
        FormHandlers::new(move |patient: Patient| *submitted.borrow_mut() = Some(patient), || {})
    };

    let mut form = PatientForm::new(None, handlers);
    form.set(PatientInput::Name, input.name);
    form.set(PatientInput::Age, input.age);
    form.set(PatientInput::Condition, input.condition);
    form.set_gender(input.gender);
    form.submit();

    let patient = submitted
        .borrow_mut()
        .take()
        .ok_or_else(|| eyre::eyre!("patient form did not submit"))?;
    let saved = state.store.save(patient)?;
    if state.persist()? {
        tracing::info!(id = %saved.id, "records file updated");
    }
    Ok(saved)
}
