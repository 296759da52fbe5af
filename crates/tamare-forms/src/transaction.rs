use jiff::civil::Date;
use tracing::trace;

use tamare_core::catalog::DEFAULT_LINE_ITEM_QUANTITY;
use tamare_core::coerce::parse_int;
use tamare_core::models::medication::{Medication, name_by_id};
use tamare_core::models::transaction::{
    MedicationTransaction, TransactionDirection, TransactionItem,
};

use crate::{Dropdown, Form, FormHandlers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionInput {
    Date,
    Notes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemInput {
    Quantity,
    Reason,
}

/// One line of the transaction, with its own medication dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemDraft {
    pub medication_id: String,
    pub quantity: String,
    pub reason: String,
    pub dropdown: Dropdown,
}

impl Default for LineItemDraft {
    fn default() -> Self {
        Self {
            medication_id: String::new(),
            quantity: DEFAULT_LINE_ITEM_QUANTITY.to_string(),
            reason: String::new(),
            dropdown: Dropdown::Closed,
        }
    }
}

/// Entry or exit of several medications at once.
///
/// Always holds at least one line item.
#[derive(Debug)]
pub struct TransactionForm {
    direction: TransactionDirection,
    date: String,
    notes: String,
    items: Vec<LineItemDraft>,
    handlers: FormHandlers<MedicationTransaction>,
}

impl TransactionForm {
    pub fn new(
        direction: TransactionDirection,
        today: Date,
        handlers: FormHandlers<MedicationTransaction>,
    ) -> Self {
        Self {
            direction,
            date: today.to_string(),
            notes: String::new(),
            items: vec![LineItemDraft::default()],
            handlers,
        }
    }

    pub fn direction(&self) -> TransactionDirection {
        self.direction
    }

    pub fn title(&self) -> &'static str {
        self.direction.title()
    }

    pub fn reason_placeholder(&self) -> &'static str {
        self.direction.reason_placeholder()
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn items(&self) -> &[LineItemDraft] {
        &self.items
    }

    pub fn set(&mut self, input: TransactionInput, value: impl Into<String>) {
        let value = value.into();
        match input {
            TransactionInput::Date => self.date = value,
            TransactionInput::Notes => self.notes = value,
        }
    }

    /// Returns `false` when `index` is out of range.
    pub fn set_item(
        &mut self,
        index: usize,
        input: LineItemInput,
        value: impl Into<String>,
    ) -> bool {
        let Some(item) = self.items.get_mut(index) else {
            return false;
        };
        let value = value.into();
        match input {
            LineItemInput::Quantity => item.quantity = value,
            LineItemInput::Reason => item.reason = value,
        }
        true
    }

    /// Append a blank line item with its dropdown closed.
    pub fn add_item(&mut self) {
        self.items.push(LineItemDraft::default());
        trace!(items = self.items.len(), "line item added");
    }

    /// Remove the line item at `index`.
    ///
    /// No-op when only one item remains or `index` is out of range.
    pub fn remove_item(&mut self, index: usize) -> bool {
        if self.items.len() <= 1 || index >= self.items.len() {
            return false;
        }
        self.items.remove(index);
        trace!(index, items = self.items.len(), "line item removed");
        true
    }

    pub fn toggle_medication_dropdown(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.dropdown.toggle();
                true
            }
            None => false,
        }
    }

    /// Point the line item at a medication and close its dropdown.
    pub fn select_medication(&mut self, index: usize, medication_id: impl Into<String>) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.medication_id = medication_id.into();
                item.dropdown.close();
                true
            }
            None => false,
        }
    }

    /// Display name of the medication selected on a line, or the
    /// selection placeholder.
    pub fn item_label<'a>(&self, index: usize, medications: &'a [Medication]) -> &'a str {
        let id = self
            .items
            .get(index)
            .map(|item| item.medication_id.as_str())
            .unwrap_or_default();
        name_by_id(medications, id)
    }
}

impl Form for TransactionForm {
    type Record = MedicationTransaction;

    const NAME: &'static str = "medication_transaction";

    fn commit(&self) -> MedicationTransaction {
        MedicationTransaction {
            date: self.date.clone(),
            notes: self.notes.clone(),
            direction: self.direction,
            items: self
                .items
                .iter()
                .map(|item| TransactionItem {
                    medication_id: item.medication_id.clone(),
                    quantity: parse_int(&item.quantity),
                    reason: item.reason.clone(),
                })
                .collect(),
        }
    }

    fn handlers_mut(&mut self) -> &mut FormHandlers<MedicationTransaction> {
        &mut self.handlers
    }
}
