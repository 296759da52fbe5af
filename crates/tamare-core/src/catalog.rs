//! Fixed constants shared by the filter, classifier, and form layers.
//!
//! Every threshold lives here exactly once so the list filters and the
//! per-item highlighting can never drift apart.

/// Display name of the clinic system.
pub const CLINIC_NAME: &str = "Gestor de Salud Comunal TAMARE";

/// A medication at or below this many units is low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 15;

/// Look-ahead window, in calendar months, for the "expiring" classification.
pub const EXPIRY_WINDOW_MONTHS: i64 = 3;

/// Label for an appointment status outside the known set.
pub const UNKNOWN_STATUS_LABEL: &str = "Desconocido";

pub const DEFAULT_APPOINTMENT_TIME: &str = "09:00";

/// Quantity text of a freshly appended transaction line item.
pub const DEFAULT_LINE_ITEM_QUANTITY: &str = "1";

/// Shown in place of a medication name when no medication is selected
/// or the selected id is not in the inventory.
pub const MEDICATION_PLACEHOLDER: &str = "Seleccionar medicamento";
