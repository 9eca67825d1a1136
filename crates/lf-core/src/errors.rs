//! Validation error type for new reports.
//!
//! Storage and image errors are defined in `lf-store`, where the medium they
//! describe lives. A unified error is deferred to `lf-cli` where all crate
//! errors converge.

use thiserror::Error;

use crate::enums::Field;

/// One or more required fields were missing, empty, or unparseable.
///
/// Fields are reported in table column order, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed for fields: {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<Field>,
}

impl ValidationError {
    #[must_use]
    pub fn new(mut fields: Vec<Field>) -> Self {
        fields.sort_unstable();
        fields.dedup();
        Self { fields }
    }

    /// Whether `field` is among the offending fields.
    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
