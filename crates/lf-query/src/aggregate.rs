//! Single-pass folds over record sequences.

use std::collections::HashMap;

use lf_core::responses::{Counts, Frequency};
use lf_core::{Kind, Record};

/// Fold step for the overview metrics.
///
/// Every record counts toward `total`; only `Lost` and `Found` records count
/// toward their buckets.
#[must_use]
pub fn tally(mut counts: Counts, record: &Record) -> Counts {
    counts.total += 1;
    match record.kind {
        Kind::Lost => counts.lost_count += 1,
        Kind::Found => counts.found_count += 1,
        Kind::Other(_) => {}
    }
    counts
}

/// Case-insensitive category needle.
///
/// An empty needle matches every record whose category is non-empty; a
/// record with an empty category never matches.
#[derive(Debug, Clone)]
pub struct CategoryNeedle {
    lowered: String,
}

impl CategoryNeedle {
    #[must_use]
    pub fn new(substring: &str) -> Self {
        Self {
            lowered: substring.to_lowercase(),
        }
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        !category.is_empty() && category.to_lowercase().contains(&self.lowered)
    }
}

/// Occurrence counts ranked by descending count, ties in first-seen order.
///
/// Empty values are ignored.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<Frequency>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }
        if let Some(&slot) = self.index.get(value) {
            self.entries[slot].count += 1;
        } else {
            self.index.insert(value.to_string(), self.entries.len());
            self.entries.push(Frequency {
                value: value.to_string(),
                count: 1,
            });
        }
    }

    /// Consume the table into its ranked entries.
    #[must_use]
    pub fn into_ranked(self) -> Vec<Frequency> {
        let mut entries = self.entries;
        // Stable: equal counts keep first-seen order.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lf_core::ReportedDate;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn with_kind(kind: Kind) -> Record {
        Record {
            kind,
            item_name: "Keys".into(),
            category: "Accessories".into(),
            location: "Gate".into(),
            description: "ring of three".into(),
            reported_date: ReportedDate::Date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            contact_info: "desk".into(),
            image_ref: None,
        }
    }

    #[test]
    fn tally_counts_unrecognized_kinds_in_total_only() {
        let counts = [
            with_kind(Kind::Lost),
            with_kind(Kind::Found),
            with_kind(Kind::Other("Claimed".into())),
        ]
        .iter()
        .fold(Counts::default(), tally);

        assert_eq!(
            counts,
            Counts {
                total: 3,
                lost_count: 1,
                found_count: 1,
            }
        );
    }

    #[rstest]
    #[case("elect", "Electronics", true)]
    #[case("ELECTR", "Electronics", true)]
    #[case("Ronic", "electronics", true)]
    #[case("phone-case", "Electronics", false)]
    #[case("", "Books", true)]
    #[case("", "", false)]
    #[case("book", "", false)]
    fn category_needle(#[case] needle: &str, #[case] category: &str, #[case] expected: bool) {
        assert_eq!(CategoryNeedle::new(needle).matches(category), expected);
    }

    #[test]
    fn frequency_ranks_by_count_then_first_seen() {
        let mut table = FrequencyTable::new();
        for value in ["Gym", "Library", "Cafeteria", "Library", "Gym", "Hall B", "", "Library"] {
            table.add(value);
        }

        let ranked: Vec<(String, usize)> = table
            .into_ranked()
            .into_iter()
            .map(|f| (f.value, f.count))
            .collect();
        assert_eq!(
            ranked,
            vec![
                ("Library".to_string(), 3),
                ("Gym".to_string(), 2),
                ("Cafeteria".to_string(), 1),
                ("Hall B".to_string(), 1),
            ]
        );
    }
}
