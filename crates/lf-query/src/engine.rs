//! Store-backed query engine.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use lf_core::responses::{Counts, DateCount, Frequency, TimelinePoint};
use lf_core::{Kind, Record};
use lf_store::{RecordStore, StoreError};

use crate::aggregate::{CategoryNeedle, FrequencyTable, tally};

/// Filters and aggregates the current snapshot of a record store.
///
/// Pass `&store` to query a store you keep using elsewhere.
pub struct QueryEngine<S> {
    store: S,
}

impl<S: RecordStore> QueryEngine<S> {
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying record store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Every record, in store order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be scanned.
    pub fn all(&self) -> Result<Vec<Record>, StoreError> {
        self.store.snapshot()
    }

    /// Records whose kind equals `kind`, in store order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be scanned.
    pub fn by_type(&self, kind: &Kind) -> Result<Vec<Record>, StoreError> {
        self.filter(|record| record.kind == *kind)
    }

    /// Records whose category contains `substring`, ignoring case.
    ///
    /// An empty `substring` returns every record with a non-empty category.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be scanned.
    pub fn search_by_category(&self, substring: &str) -> Result<Vec<Record>, StoreError> {
        let needle = CategoryNeedle::new(substring);
        self.filter(|record| needle.matches(&record.category))
    }

    /// Overview metrics: total, lost, and found.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be scanned.
    pub fn counts(&self) -> Result<Counts, StoreError> {
        self.fold(Counts::default(), |counts, record| tally(counts, &record))
    }

    /// Number of records per reported date, ascending by date.
    ///
    /// Records whose date did not parse are left out.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be scanned.
    pub fn group_by_date(&self) -> Result<BTreeMap<NaiveDate, usize>, StoreError> {
        self.fold(BTreeMap::new(), |mut by_date, record| {
            if let Some(date) = record.reported_date.as_date() {
                *by_date.entry(date).or_insert(0) += 1;
            }
            by_date
        })
    }

    /// [`Self::group_by_date`] as an ordered series.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be scanned.
    pub fn date_series(&self) -> Result<Vec<DateCount>, StoreError> {
        Ok(self
            .group_by_date()?
            .into_iter()
            .map(|(date, count)| DateCount { date, count })
            .collect())
    }

    /// Location counts among records of `kind`, most frequent first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be scanned.
    pub fn location_frequency(&self, kind: &Kind) -> Result<Vec<Frequency>, StoreError> {
        self.rank(|record| (record.kind == *kind).then_some(record.location.as_str()))
    }

    /// Category counts across all records, most frequent first.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be scanned.
    pub fn category_frequency(&self) -> Result<Vec<Frequency>, StoreError> {
        self.rank(|record| Some(record.category.as_str()))
    }

    /// Counts per raw kind label, unrecognized labels included.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be scanned.
    pub fn kind_breakdown(&self) -> Result<Vec<Frequency>, StoreError> {
        self.rank(|record| Some(record.kind.as_str()))
    }

    /// One point per record with a parseable date, in store order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be scanned.
    pub fn timeline(&self) -> Result<Vec<TimelinePoint>, StoreError> {
        self.fold(Vec::new(), |mut points, record| {
            if let Some(date) = record.reported_date.as_date() {
                points.push(TimelinePoint {
                    date,
                    category: record.category,
                    kind: String::from(record.kind),
                });
            }
            points
        })
    }

    fn fold<B>(&self, init: B, mut step: impl FnMut(B, Record) -> B) -> Result<B, StoreError> {
        self.store
            .scan()?
            .try_fold(init, |acc, record| record.map(|record| step(acc, record)))
    }

    fn filter(&self, keep: impl Fn(&Record) -> bool) -> Result<Vec<Record>, StoreError> {
        self.fold(Vec::new(), |mut kept, record| {
            if keep(&record) {
                kept.push(record);
            }
            kept
        })
    }

    fn rank(&self, key: impl Fn(&Record) -> Option<&str>) -> Result<Vec<Frequency>, StoreError> {
        let table = self.fold(FrequencyTable::new(), |mut table, record| {
            if let Some(value) = key(&record) {
                table.add(value);
            }
            table
        })?;
        Ok(table.into_ranked())
    }
}
