//! Store error types for lf-store.

use std::path::PathBuf;

use lf_core::ValidationError;
use thiserror::Error;

/// Errors from ingestion, the record table, and image storage.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The submission failed required-field validation. Nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record table could not be opened, read, or written.
    #[error("Storage error at {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A table row could not be encoded or decoded.
    #[error("Malformed table at {}: {source}", path.display())]
    Table {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// An uploaded image could not be persisted. No record was written.
    #[error("Image write failed at {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid state encountered (e.g., a poisoned in-memory store).
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl StoreError {
    pub(crate) fn storage(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Classify a csv error: I/O failures are storage errors, the rest are
    /// malformed rows.
    pub(crate) fn table(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let path = path.into();
        if source.is_io_error() {
            if let csv::ErrorKind::Io(io) = source.into_kind() {
                return Self::Storage { path, source: io };
            }
            return Self::InvalidState("csv I/O error without an I/O cause".into());
        }
        Self::Table { path, source }
    }

    /// Whether this error came from required-field validation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
