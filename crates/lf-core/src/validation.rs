//! Required-field rules for new reports.
//!
//! Every stored record created through ingestion has a recognized kind and
//! non-empty `item_name`, `category`, `location`, `description`, and
//! `contact_info` (after trimming). A missing date defaults to `today`; a
//! supplied date must parse.

use chrono::NaiveDate;

use crate::date::{ReportedDate, parse_calendar_date};
use crate::entities::{Record, ReportFields};
use crate::enums::{Field, Kind};
use crate::errors::ValidationError;

/// Validate a submission and normalize it into a `Record`.
///
/// Text fields are trimmed. The returned record has no `image_ref`; the
/// caller sets it once the image (if any) has been persisted.
///
/// # Errors
///
/// Returns `ValidationError` naming every offending field.
pub fn validate_report(
    kind: &Kind,
    fields: &ReportFields,
    today: NaiveDate,
) -> Result<Record, ValidationError> {
    let mut invalid = Vec::new();

    if !kind.is_recognized() {
        invalid.push(Field::Kind);
    }

    let item_name = required(&fields.item_name, Field::ItemName, &mut invalid);
    let category = required(&fields.category, Field::Category, &mut invalid);
    let location = required(&fields.location, Field::Location, &mut invalid);
    let description = required(&fields.description, Field::Description, &mut invalid);
    let contact_info = required(&fields.contact_info, Field::ContactInfo, &mut invalid);

    let reported_date = match fields.reported_date.as_deref().map(str::trim) {
        None | Some("") => Some(today),
        Some(raw) => parse_calendar_date(raw),
    };
    if reported_date.is_none() {
        invalid.push(Field::ReportedDate);
    }

    match reported_date {
        Some(date) if invalid.is_empty() => Ok(Record {
            kind: kind.clone(),
            item_name,
            category,
            location,
            description,
            reported_date: ReportedDate::Date(date),
            contact_info,
            image_ref: None,
        }),
        _ => Err(ValidationError::new(invalid)),
    }
}

fn required(value: &str, field: Field, invalid: &mut Vec<Field>) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        invalid.push(field);
    }
    trimmed.to_string()
}
