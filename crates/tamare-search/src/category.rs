use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use tracing::trace;
use ts_rs::TS;

use tamare_core::models::medication::Medication;

use crate::query::{Searchable, matches_query};
use crate::status::{medication_is_expiring, medication_is_low_stock};

/// A tab selector narrowing a list by a derived predicate.
pub trait Category<T> {
    fn admits(&self, record: &T, today: Date) -> bool;
}

/// Tabs of the medications screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MedicationTab {
    #[default]
    All,
    /// Stock at or below the low-stock threshold. Ignores the
    /// data-supplied `critical` flag.
    Critical,
    /// Expiry within the look-ahead window, including already expired.
    Expiring,
}

impl MedicationTab {
    pub fn label(self) -> &'static str {
        match self {
            MedicationTab::All => "Todos",
            MedicationTab::Critical => "Stock Crítico",
            MedicationTab::Expiring => "Por Vencer",
        }
    }
}

impl Category<Medication> for MedicationTab {
    fn admits(&self, medication: &Medication, today: Date) -> bool {
        match self {
            MedicationTab::All => true,
            MedicationTab::Critical => medication_is_low_stock(medication),
            MedicationTab::Expiring => medication_is_expiring(medication, today),
        }
    }
}

/// Keep the records the category admits, in input order.
pub fn filter_by_category<'a, T, C, I>(records: I, category: &C, today: Date) -> Vec<&'a T>
where
    T: 'a,
    C: Category<T>,
    I: IntoIterator<Item = &'a T>,
{
    records
        .into_iter()
        .filter(|record| category.admits(record, today))
        .collect()
}

/// Text query and category applied together (logical AND).
pub fn filter<'a, T, C, I>(
    records: I,
    query: &str,
    fields: &[T::Field],
    category: &C,
    today: Date,
) -> Vec<&'a T>
where
    T: Searchable + 'a,
    C: Category<T>,
    I: IntoIterator<Item = &'a T>,
{
    let matched: Vec<&T> = records
        .into_iter()
        .filter(|record| matches_query(*record, query, fields) && category.admits(record, today))
        .collect();
    trace!(query, matched = matched.len(), "query and category filter applied");
    matched
}
