//! # lf-core
//!
//! Core types and validation rules for the campus lost-and-found registry.
//!
//! This crate provides the foundational types shared across all registry crates:
//! - The `Record` entity and the `ReportFields` submission bundle
//! - `Kind`, `Category`, and `Field` enums
//! - `ReportedDate`, a calendar date that tolerates free-text values on read
//! - Required-field validation for new reports
//! - Aggregate response types returned by the query engine

pub mod date;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod validation;

pub use date::ReportedDate;
pub use entities::{ImagePayload, Record, ReportFields};
pub use enums::{Category, Field, Kind};
pub use errors::ValidationError;
