//! Kinds, categories, and field names for lost-and-found records.
//!
//! `Kind` and `Category` serialize to the capitalized labels used in the
//! stored table (`Lost`, `Electronics`, ...). `Field` names use `snake_case`
//! and match the table's column headers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// Lost/Found classification of a record.
///
/// Ingestion only produces `Lost` or `Found`. Rows edited outside the
/// registry may carry any other text, which is kept verbatim in `Other` so a
/// scan never rejects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    Lost,
    Found,
    Other(String),
}

impl Kind {
    /// Return the label written to the stored table.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Lost => "Lost",
            Self::Found => "Found",
            Self::Other(raw) => raw,
        }
    }

    /// Whether this kind is one of the two the registry recognizes.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        matches!(self, Self::Lost | Self::Found)
    }
}

impl From<String> for Kind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Lost" => Self::Lost,
            "Found" => Self::Found,
            _ => Self::Other(raw),
        }
    }
}

impl From<&str> for Kind {
    fn from(raw: &str) -> Self {
        Self::from(raw.to_string())
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The recognized item categories offered to reporters.
///
/// The store itself accepts any non-empty category text; this enum only
/// restricts what the presentation layer offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Electronics,
    Clothing,
    Books,
    Accessories,
    Others,
}

impl Category {
    pub const ALL: [Self; 5] = [
        Self::Electronics,
        Self::Clothing,
        Self::Books,
        Self::Accessories,
        Self::Others,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Electronics => "Electronics",
            Self::Clothing => "Clothing",
            Self::Books => "Books",
            Self::Accessories => "Accessories",
            Self::Others => "Others",
        }
    }

    /// Parse a category label, ignoring ASCII case and surrounding whitespace.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A named attribute of a record, in table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Kind,
    ItemName,
    Category,
    Location,
    Description,
    ReportedDate,
    ContactInfo,
    ImageRef,
}

impl Field {
    /// Column order of the stored table.
    pub const COLUMNS: [Self; 8] = [
        Self::Kind,
        Self::ItemName,
        Self::Category,
        Self::Location,
        Self::Description,
        Self::ReportedDate,
        Self::ContactInfo,
        Self::ImageRef,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kind => "kind",
            Self::ItemName => "item_name",
            Self::Category => "category",
            Self::Location => "location",
            Self::Description => "description",
            Self::ReportedDate => "reported_date",
            Self::ContactInfo => "contact_info",
            Self::ImageRef => "image_ref",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn kind_labels_roundtrip_through_strings() {
        assert_eq!(Kind::from("Lost"), Kind::Lost);
        assert_eq!(Kind::from("Found"), Kind::Found);
        assert_eq!(String::from(Kind::Lost), "Lost");
        assert_eq!(String::from(Kind::Other("Stolen".into())), "Stolen");
    }

    #[test]
    fn kind_match_is_case_sensitive() {
        // Externally edited rows with other casing are not silently reclassified.
        assert_eq!(Kind::from("lost"), Kind::Other("lost".into()));
        assert!(!Kind::from("lost").is_recognized());
    }

    #[test]
    fn kind_serializes_as_plain_label() {
        let json = serde_json::to_string(&Kind::Found).unwrap();
        assert_eq!(json, "\"Found\"");
        let other: Kind = serde_json::from_str("\"Misplaced\"").unwrap();
        assert_eq!(other, Kind::Other("Misplaced".into()));
    }

    #[rstest]
    #[case("electronics", Some(Category::Electronics))]
    #[case("  BOOKS ", Some(Category::Books))]
    #[case("Others", Some(Category::Others))]
    #[case("Furniture", None)]
    #[case("", None)]
    fn category_parse(#[case] input: &str, #[case] expected: Option<Category>) {
        assert_eq!(Category::parse(input), expected);
    }

    #[test]
    fn field_columns_match_table_header() {
        let header: Vec<&str> = Field::COLUMNS.iter().map(|f| f.as_str()).collect();
        assert_eq!(
            header,
            vec![
                "kind",
                "item_name",
                "category",
                "location",
                "description",
                "reported_date",
                "contact_info",
                "image_ref",
            ]
        );
    }
}
