//! Reported dates.
//!
//! The stored table keeps dates as text. Ingestion always writes `%Y-%m-%d`,
//! but rows edited by hand may hold anything, so reading never fails on a
//! date: unparseable text is kept verbatim in `ReportedDate::Unparsed` and
//! excluded from date aggregations.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical serialization format for parsed dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const DATE_FORMATS: [&str; 4] = [DATE_FORMAT, "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// The date an item was reported lost or found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportedDate {
    Date(NaiveDate),
    Unparsed(String),
}

impl ReportedDate {
    /// Interpret free text as a calendar date.
    ///
    /// Accepts ISO dates, a few common day/month layouts, and timestamps
    /// (the time part is dropped). Anything else becomes `Unparsed`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        parse_calendar_date(raw).map_or_else(|| Self::Unparsed(raw.to_string()), Self::Date)
    }

    /// The calendar date, if the stored text parsed.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Unparsed(_) => None,
        }
    }
}

impl From<NaiveDate> for ReportedDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<String> for ReportedDate {
    fn from(raw: String) -> Self {
        match parse_calendar_date(&raw) {
            Some(date) => Self::Date(date),
            None => Self::Unparsed(raw),
        }
    }
}

impl From<ReportedDate> for String {
    fn from(date: ReportedDate) -> Self {
        match date {
            ReportedDate::Date(date) => date.format(DATE_FORMAT).to_string(),
            ReportedDate::Unparsed(raw) => raw,
        }
    }
}

impl fmt::Display for ReportedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::Unparsed(raw) => f.write_str(raw),
        }
    }
}

/// Parse a calendar date from user or table text.
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(datetime.date());
        }
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|datetime| datetime.date_naive())
}
