//! # lf-store
//!
//! Durable state for the lost-and-found registry.
//!
//! - `store`: the append-only `RecordStore` interface, with a CSV file
//!   implementation and an in-memory one for tests
//! - `images`: uploaded image persistence
//! - `registry`: validated ingestion that keeps records and images in step
//!
//! The store is designed for a single writer at a time. Concurrent scans
//! are safe; concurrent appends to the CSV table are not coordinated here.

pub mod error;
pub mod images;
pub mod registry;
pub mod store;

pub use error::StoreError;
pub use images::ImageStore;
pub use registry::Registry;
pub use store::{CsvRecordStore, MemoryRecordStore, RecordStore, Scan};
