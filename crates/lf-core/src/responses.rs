//! Aggregate result types returned by the query engine.
//!
//! These structs define the shape of the JSON the presentation layer renders
//! for the overview metrics and the charts.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Overview metrics.
///
/// `lost_count + found_count` may be less than `total`: rows whose kind is
/// neither `Lost` nor `Found` count toward `total` only.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub lost_count: usize,
    pub found_count: usize,
}

/// Occurrence count of one value (a location, category, or kind label).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Frequency {
    pub value: String,
    pub count: usize,
}

/// Number of records reported on one calendar date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DateCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// One record projected for a date/category scatter plot.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TimelinePoint {
    pub date: NaiveDate,
    pub category: String,
    pub kind: String,
}
