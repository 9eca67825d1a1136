//! In-memory record store for tests and embedding.

use std::sync::RwLock;

use lf_core::Record;

use super::{RecordStore, Scan};
use crate::error::StoreError;

/// Record store held entirely in memory.
///
/// `scan` iterates over a copy taken when the pass starts, so appends made
/// during a pass are not observed by it.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: RwLock<Vec<Record>>,
}

impl MemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `records`, in order.
    #[must_use]
    pub const fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of stored records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` if the lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        self.records
            .read()
            .map(|records| records.len())
            .map_err(|_| poisoned())
    }

    /// Whether the store holds no records.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidState` if the lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        self.len().map(|len| len == 0)
    }
}

impl RecordStore for MemoryRecordStore {
    fn initialize(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn append(&self, record: &Record) -> Result<(), StoreError> {
        self.records
            .write()
            .map_err(|_| poisoned())?
            .push(record.clone());
        Ok(())
    }

    fn scan(&self) -> Result<Scan<'_>, StoreError> {
        let snapshot = self.records.read().map_err(|_| poisoned())?.clone();
        Ok(Box::new(snapshot.into_iter().map(Ok)))
    }
}

fn poisoned() -> StoreError {
    StoreError::InvalidState("memory store lock poisoned".into())
}
