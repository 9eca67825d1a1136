use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::date::ReportedDate;
use crate::enums::Kind;

/// One reported item: a row of the stored table.
///
/// Field order matches the table's column order. Records have no identity
/// beyond their position in the store; duplicates are allowed.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Record {
    #[schemars(with = "String")]
    pub kind: Kind,
    pub item_name: String,
    pub category: String,
    pub location: String,
    pub description: String,
    #[schemars(with = "String")]
    pub reported_date: ReportedDate,
    pub contact_info: String,
    #[serde(default)]
    pub image_ref: Option<String>,
}
