//! # lf-query
//!
//! Read-side queries for the lost-and-found registry.
//!
//! Every operation starts a fresh `scan()` of the store and folds over it
//! in one pass. Nothing here mutates the store, and an empty or
//! uninitialized store produces empty results rather than errors.
//!
//! - `aggregate`: pure folds over record sequences (counts, frequencies)
//! - `engine`: `QueryEngine`, the store-backed entry point used by the
//!   presentation layer

pub mod aggregate;
pub mod engine;

pub use engine::QueryEngine;
pub use lf_store::StoreError;
