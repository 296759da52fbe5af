//! tamare-search
//!
//! Synchronous list filtering and status classification over record
//! collections. Everything here is pure: callers pass the records in and
//! get borrowed subsets back, in input order.

pub mod category;
pub mod query;
pub mod report;
pub mod status;

pub use category::{MedicationTab, filter_by_category};
pub use query::{Searchable, filter_by_query};
