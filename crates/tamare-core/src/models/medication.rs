use serde::{Deserialize, Serialize};
use ts_rs::TS;

use jiff::Span;
use jiff::civil::Date;

use crate::catalog::MEDICATION_PLACEHOLDER;
use crate::coerce::parse_int;
use crate::error::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medication {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: String,
    pub stock: u32,
    /// Unit of measure, e.g. "tabletas".
    #[serde(default)]
    pub unit: String,
    /// `MM/YYYY`, as supplied by the record source.
    pub expiry: String,
    /// Supplied by the record source. Not derived from `stock`.
    #[serde(default)]
    pub critical: bool,
}

impl Medication {
    pub fn expiry_month(&self) -> Result<ExpiryMonth, CoreError> {
        self.expiry.parse()
    }
}

/// A month/year expiry, as printed on medication packaging.
///
/// The month is kept unnormalised: month 13 of 2024 is January 2025 and
/// month 0 is December of the previous year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryMonth {
    pub month: i64,
    pub year: i64,
}

impl ExpiryMonth {
    /// The first calendar day of the expiry month.
    pub fn first_day(self) -> Result<Date, CoreError> {
        let year = i16::try_from(self.year)
            .map_err(|_| CoreError::InvalidExpiry(format!("{}/{}", self.month, self.year)))?;
        let start = Date::new(year, 1, 1)?;
        let offset = Span::new().try_months(self.month - 1)?;
        Ok(start.checked_add(offset)?)
    }
}

impl std::str::FromStr for ExpiryMonth {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidExpiry(s.to_string());
        let (month, year) = s.split_once('/').ok_or_else(invalid)?;
        Ok(ExpiryMonth {
            month: parse_int(month).ok_or_else(invalid)?,
            year: parse_int(year).ok_or_else(invalid)?,
        })
    }
}

/// Name of the medication with `id`, or the selection placeholder.
pub fn name_by_id<'a>(medications: &'a [Medication], id: &str) -> &'a str {
    if id.is_empty() {
        return MEDICATION_PLACEHOLDER;
    }
    medications
        .iter()
        .find(|m| m.id == id)
        .map(|m| m.name.as_str())
        .unwrap_or(MEDICATION_PLACEHOLDER)
}
