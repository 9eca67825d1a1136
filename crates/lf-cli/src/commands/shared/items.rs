use lf_core::{Field, Record};
use lf_store::ImageStore;
use serde::Serialize;

/// A record as shown to the user, with whether its photo can be displayed.
#[derive(Debug, Serialize)]
pub struct ItemRow {
    #[serde(flatten)]
    pub record: Record,
    pub image_available: bool,
}

impl From<Record> for ItemRow {
    fn from(record: Record) -> Self {
        let image_available = record.image_ref.as_deref().is_some_and(ImageStore::exists);
        Self {
            record,
            image_available,
        }
    }
}

/// Table column order for item listings.
pub const ITEM_COLUMNS: [&str; 9] = [
    Field::Kind.as_str(),
    Field::ItemName.as_str(),
    Field::Category.as_str(),
    Field::Location.as_str(),
    Field::Description.as_str(),
    Field::ReportedDate.as_str(),
    Field::ContactInfo.as_str(),
    Field::ImageRef.as_str(),
    "image_available",
];

/// Keep the first `limit` records, as display rows.
pub fn rows(records: Vec<Record>, limit: usize) -> Vec<ItemRow> {
    records.into_iter().take(limit).map(ItemRow::from).collect()
}
