use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A batch of medication movements in one direction.
///
/// Committing a transaction records it; it never adjusts
/// [`Medication::stock`](super::medication::Medication::stock).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationTransaction {
    pub date: String,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "type")]
    pub direction: TransactionDirection,
    pub items: Vec<TransactionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TransactionItem {
    pub medication_id: String,
    /// `None` when the quantity entered was not a number.
    pub quantity: Option<i64>,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TransactionDirection {
    #[default]
    Entry,
    Exit,
}

impl TransactionDirection {
    pub fn title(self) -> &'static str {
        match self {
            TransactionDirection::Entry => "Entrada de Medicamentos",
            TransactionDirection::Exit => "Salida de Medicamentos",
        }
    }

    pub fn reason_placeholder(self) -> &'static str {
        match self {
            TransactionDirection::Entry => "Compra, donación, etc.",
            TransactionDirection::Exit => "Prescripción, vencimiento, etc.",
        }
    }

    fn sign(self) -> i64 {
        match self {
            TransactionDirection::Entry => 1,
            TransactionDirection::Exit => -1,
        }
    }
}

impl MedicationTransaction {
    /// Net signed change this transaction describes for one medication.
    ///
    /// Entries count up, exits count down. Items whose quantity is not a
    /// number are skipped. The result is informational only.
    pub fn stock_delta(&self, medication_id: &str) -> i64 {
        let total = self
            .items
            .iter()
            .filter(|item| item.medication_id == medication_id)
            .filter_map(|item| item.quantity)
            .fold(0i64, i64::saturating_add);
        total.saturating_mul(self.direction.sign())
    }
}
