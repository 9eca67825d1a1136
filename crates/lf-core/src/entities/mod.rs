//! Entity structs for the registry.
//!
//! `Record` maps to one row of the stored table. `ReportFields` is the
//! submission bundle a presentation layer hands to ingestion.

mod record;
mod report;

pub use record::Record;
pub use report::{ImagePayload, ReportFields};
