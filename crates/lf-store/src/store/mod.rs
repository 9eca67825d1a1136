//! Record stores.
//!
//! The table is append-only: rows are never reordered, rewritten, or
//! deleted through this interface. `scan` re-reads from the beginning on
//! every call and yields rows lazily in insertion order.

mod csv_table;
mod memory;

pub use csv_table::CsvRecordStore;
pub use memory::MemoryRecordStore;

use lf_core::Record;

use crate::error::StoreError;

/// A lazy, in-order pass over every stored record.
pub type Scan<'a> = Box<dyn Iterator<Item = Result<Record, StoreError>> + 'a>;

/// Durable table of item records.
pub trait RecordStore {
    /// Ensure the table exists with its header row. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the table cannot be created.
    fn initialize(&self) -> Result<(), StoreError>;

    /// Add `record` as the last row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the medium is missing or unwritable.
    fn append(&self, record: &Record) -> Result<(), StoreError>;

    /// Start a fresh pass over all records.
    ///
    /// An uninitialized or empty store yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the medium exists but cannot be
    /// read. Rows that fail to decode surface as `Err` items.
    fn scan(&self) -> Result<Scan<'_>, StoreError>;

    /// Materialize a full snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first error raised while scanning.
    fn snapshot(&self) -> Result<Vec<Record>, StoreError> {
        self.scan()?.collect()
    }
}

impl<S: RecordStore + ?Sized> RecordStore for &S {
    fn initialize(&self) -> Result<(), StoreError> {
        (**self).initialize()
    }

    fn append(&self, record: &Record) -> Result<(), StoreError> {
        (**self).append(record)
    }

    fn scan(&self) -> Result<Scan<'_>, StoreError> {
        (**self).scan()
    }
}
