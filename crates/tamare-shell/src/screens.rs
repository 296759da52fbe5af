//! Headless state of the list screens.
//!
//! Each screen owns only its query and tab selection. Records are passed in
//! on every call, so screens never hold or share the store.

use std::marker::PhantomData;

use jiff::ToSpan;
use jiff::civil::Date;

use tamare_core::Record;
use tamare_core::models::appointment::Appointment;
use tamare_core::models::medication::Medication;
use tamare_core::models::report::{ReportCard, ReportCategory, ReportKind};
use tamare_search::category::filter;
use tamare_search::report::{ReportInputs, ReportTable, build_report};
use tamare_search::{MedicationTab, Searchable, filter_by_query};
use tamare_storage::RecordStore;

/// A list narrowed by a free-text query over the record's default fields.
#[derive(Debug, Clone)]
pub struct SearchScreen<T> {
    query: String,
    _records: PhantomData<fn() -> T>,
}

impl<T> Default for SearchScreen<T> {
    fn default() -> Self {
        Self {
            query: String::new(),
            _records: PhantomData,
        }
    }
}

impl<T: Record + Searchable> SearchScreen<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn handle_search(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn visible<'a, S: RecordStore<T>>(&self, store: &'a S) -> Vec<&'a T> {
        filter_by_query(store.list(), &self.query, T::DEFAULT_FIELDS)
    }
}

const WEEKDAYS: [&str; 7] = [
    "lunes",
    "martes",
    "miércoles",
    "jueves",
    "viernes",
    "sábado",
    "domingo",
];

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Long Spanish date, e.g. "lunes, 15 de enero de 2024".
pub fn format_long_date(date: Date) -> String {
    let weekday = WEEKDAYS[date.weekday().to_monday_zero_offset().unsigned_abs() as usize];
    let month = MONTHS[date.month().unsigned_abs() as usize - 1];
    format!("{weekday}, {} de {month} de {}", date.day(), date.year())
}

/// Appointments list with a day selector. The selected day is shown in
/// the header only; it does not narrow the list.
#[derive(Debug, Clone)]
pub struct AppointmentsScreen {
    pub search: SearchScreen<Appointment>,
    selected_date: Date,
}

impl AppointmentsScreen {
    pub fn new(today: Date) -> Self {
        Self {
            search: SearchScreen::new(),
            selected_date: today,
        }
    }

    pub fn selected_date(&self) -> Date {
        self.selected_date
    }

    pub fn prev_day(&mut self) {
        self.selected_date = self.selected_date.saturating_sub(1.day());
    }

    pub fn next_day(&mut self) {
        self.selected_date = self.selected_date.saturating_add(1.day());
    }

    pub fn date_label(&self) -> String {
        format_long_date(self.selected_date)
    }
}

/// Medications list: text query and tab, both re-applied on any change.
#[derive(Debug, Clone, Default)]
pub struct MedicationsScreen {
    query: String,
    tab: MedicationTab,
}

impl MedicationsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tab(&self) -> MedicationTab {
        self.tab
    }

    pub fn handle_search(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn handle_tab_change(&mut self, tab: MedicationTab) {
        self.tab = tab;
    }

    pub fn visible<'a, S: RecordStore<Medication>>(
        &self,
        store: &'a S,
        today: Date,
    ) -> Vec<&'a Medication> {
        filter(store.list(), &self.query, Medication::DEFAULT_FIELDS, &self.tab, today)
    }
}

/// Reports catalog, one tab per record kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportsScreen {
    active: ReportCategory,
}

impl ReportsScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> ReportCategory {
        self.active
    }

    pub fn set_active(&mut self, category: ReportCategory) {
        self.active = category;
    }

    pub fn cards(&self) -> Vec<ReportCard> {
        self.active.reports().into_iter().map(ReportKind::card).collect()
    }

    /// Tables for every report of the active tab that the records support.
    pub fn tables(&self, inputs: &ReportInputs<'_>) -> Vec<ReportTable> {
        self.active
            .reports()
            .into_iter()
            .filter_map(|kind| build_report(kind, inputs))
            .collect()
    }
}
