//! tamare-storage
//!
//! The record store the screens and forms are wired to. Collections are
//! injected through the [`RecordStore`] and [`RecordSink`] traits; the
//! in-memory implementation is seeded from fixtures.

pub mod audit;
pub mod error;
pub mod fixtures;
pub mod memory;
pub mod store;

pub use memory::InMemoryStore;
pub use store::{RecordSink, RecordStore};
