use tamare_core::Record;
use tamare_search::{Searchable, filter_by_query};

use crate::error::StoreError;

/// Read access to one collection of records, in store order.
pub trait RecordStore<T: Record> {
    fn list(&self) -> &[T];

    fn get(&self, id: &str) -> Option<&T> {
        self.list().iter().find(|record| record.id() == id)
    }

    /// Records whose `fields` contain `query`, case-insensitively.
    fn query(&self, query: &str, fields: &[T::Field]) -> Vec<&T>
    where
        T: Searchable,
    {
        filter_by_query(self.list(), query, fields)
    }
}

/// Write access to one collection of records.
pub trait RecordSink<T: Record> {
    /// Insert or replace a whole record and return it as stored.
    ///
    /// An empty id is replaced with a fresh one. A known id replaces the
    /// existing record in place; an unknown id is appended.
    fn save(&mut self, record: T) -> Result<T, StoreError>;
}
