//! tamare-core
//!
//! Pure domain types, fixed catalogs, and inventory constants.
//! No I/O here: this is the shared vocabulary of the TAMARE clinic system.

pub mod catalog;
pub mod coerce;
pub mod error;
pub mod models;

pub use models::Record;
