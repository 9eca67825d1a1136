//! Validated ingestion of new reports.
//!
//! `Registry` pairs a `RecordStore` with an `ImageStore`. Every submission
//! follows this protocol:
//! 1. Validate and normalize the fields (nothing is written on failure)
//! 2. Persist the image, if one was uploaded
//! 3. Append the record
//! 4. If the append fails, remove the image written in step 2

use chrono::{Local, NaiveDateTime};
use lf_core::validation::validate_report;
use lf_core::{Kind, Record, ReportFields};

use crate::error::StoreError;
use crate::images::ImageStore;
use crate::store::RecordStore;

/// Ingestion entry point over a record store and an image directory.
pub struct Registry<S> {
    store: S,
    images: ImageStore,
}

impl<S: RecordStore> Registry<S> {
    #[must_use]
    pub const fn new(store: S, images: ImageStore) -> Self {
        Self { store, images }
    }

    /// Access the underlying record store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Access the image store.
    #[must_use]
    pub const fn images(&self) -> &ImageStore {
        &self.images
    }

    /// Ensure the record table exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Storage` if the table cannot be created.
    pub fn initialize(&self) -> Result<(), StoreError> {
        self.store.initialize()
    }

    /// Validate and store a new report, stamped with the local clock.
    ///
    /// # Errors
    ///
    /// See [`Self::submit_at`].
    pub fn submit(&self, kind: Kind, fields: &ReportFields) -> Result<Record, StoreError> {
        self.submit_at(kind, fields, Local::now().naive_local())
    }

    /// Validate and store a new report as of `now`.
    ///
    /// `now` supplies the default date and the image timestamp.
    ///
    /// # Errors
    ///
    /// - `StoreError::Validation` naming every missing or invalid field
    /// - `StoreError::Image` if the uploaded image cannot be written
    /// - `StoreError::Storage`/`Table` if the record cannot be appended
    ///
    /// In every error case neither a record nor an image is left behind.
    pub fn submit_at(
        &self,
        kind: Kind,
        fields: &ReportFields,
        now: NaiveDateTime,
    ) -> Result<Record, StoreError> {
        let mut record = validate_report(&kind, fields, now.date())?;

        let image_path = match &fields.image {
            Some(payload) => Some(self.images.save(&record.item_name, payload, now)?),
            None => None,
        };
        record.image_ref = image_path
            .as_ref()
            .map(|path| path.to_string_lossy().into_owned());

        if let Err(error) = self.store.append(&record) {
            if let Some(path) = &image_path {
                match self.images.remove(path) {
                    Ok(()) => tracing::debug!(path = %path.display(), "removed orphan image"),
                    Err(cleanup) => tracing::warn!(
                        path = %path.display(),
                        %cleanup,
                        "failed to remove image after append failure"
                    ),
                }
            }
            return Err(error);
        }

        Ok(record)
    }
}
