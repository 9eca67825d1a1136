//! End-to-end ingestion tests against a real CSV table on disk.
//!
//! - Scenario: a lost wallet reported without an image
//! - Append-then-scan growth and ordering
//! - Validation completeness: each missing required field leaves the table unchanged
//! - Re-opening a table written by an earlier process

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::{assert_eq, assert_ne};
use rstest::rstest;
use tempfile::TempDir;

use lf_core::{Field, ImagePayload, Kind, ReportFields, ReportedDate};
use lf_store::{CsvRecordStore, ImageStore, RecordStore, Registry, StoreError};

fn registry_in(dir: &TempDir) -> Registry<CsvRecordStore> {
    let registry = Registry::new(
        CsvRecordStore::new(dir.path().join("lost_and_found.csv")),
        ImageStore::new(dir.path().join("images")),
    );
    registry.initialize().unwrap();
    registry
}

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 12)
        .unwrap()
        .and_hms_opt(17, 45, 0)
        .unwrap()
}

fn wallet() -> ReportFields {
    ReportFields {
        item_name: "Wallet".into(),
        category: "Accessories".into(),
        location: "Library".into(),
        description: "black leather".into(),
        reported_date: Some("2024-01-10".into()),
        contact_info: "555-1234".into(),
        image: None,
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn lost_wallet_without_image() {
    let dir = TempDir::new().unwrap();
    let registry = registry_in(&dir);

    registry.submit_at(Kind::Lost, &wallet(), now()).unwrap();

    let records = registry.store().snapshot().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, Kind::Lost);
    assert_eq!(records[0].item_name, "Wallet");
    assert_eq!(
        records[0].reported_date,
        ReportedDate::Date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap())
    );
    assert_eq!(records[0].image_ref, None);

    let contents = std::fs::read_to_string(registry.store().path()).unwrap();
    assert_eq!(
        contents,
        "kind,item_name,category,location,description,reported_date,contact_info,image_ref\n\
         Lost,Wallet,Accessories,Library,black leather,2024-01-10,555-1234,\n"
    );
}

#[test]
fn found_phone_with_image_is_readable_after_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let registry = registry_in(&dir);
        let fields = ReportFields {
            item_name: "Phone".into(),
            category: "Electronics".into(),
            location: "Cafeteria".into(),
            description: "blue case".into(),
            reported_date: None,
            contact_info: "guard desk".into(),
            image: Some(ImagePayload::new(vec![0xFF, 0xD8, 0xFF]).with_extension("jpg")),
        };
        registry.submit_at(Kind::Found, &fields, now()).unwrap();
    }

    let reopened = CsvRecordStore::new(dir.path().join("lost_and_found.csv"));
    let records = reopened.snapshot().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].reported_date.as_date(), Some(now().date()));
    let image_ref = records[0].image_ref.as_deref().expect("image_ref should be set");
    assert!(ImageStore::exists(image_ref));
}

#[test]
fn same_item_reported_twice_in_one_second_keeps_both_images() {
    let dir = TempDir::new().unwrap();
    let registry = registry_in(&dir);
    let mut fields = wallet();

    fields.image = Some(ImagePayload::new(vec![1]));
    let first = registry.submit_at(Kind::Lost, &fields, now()).unwrap();
    fields.image = Some(ImagePayload::new(vec![2]));
    let second = registry.submit_at(Kind::Lost, &fields, now()).unwrap();

    let first_ref = first.image_ref.expect("first image_ref");
    let second_ref = second.image_ref.expect("second image_ref");
    assert_ne!(first_ref, second_ref);
    assert_eq!(std::fs::read(&first_ref).unwrap(), vec![1]);
    assert_eq!(std::fs::read(&second_ref).unwrap(), vec![2]);
    assert_eq!(registry.store().snapshot().unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn append_then_scan_grows_by_one_with_record_last() {
    let dir = TempDir::new().unwrap();
    let registry = registry_in(&dir);

    for i in 0..4 {
        let before = registry.store().scan().unwrap().count();
        let mut fields = wallet();
        fields.item_name = format!("Wallet {i}");
        let record = registry.submit_at(Kind::Lost, &fields, now()).unwrap();

        let after = registry.store().snapshot().unwrap();
        assert_eq!(after.len(), before + 1);
        assert_eq!(after.last(), Some(&record));
    }
}

#[test]
fn duplicates_are_kept() {
    let dir = TempDir::new().unwrap();
    let registry = registry_in(&dir);

    let first = registry.submit_at(Kind::Lost, &wallet(), now()).unwrap();
    let second = registry.submit_at(Kind::Lost, &wallet(), now()).unwrap();

    assert_eq!(first, second);
    assert_eq!(registry.store().snapshot().unwrap().len(), 2);
}

#[rstest]
#[case::item_name(Field::ItemName)]
#[case::location(Field::Location)]
#[case::description(Field::Description)]
#[case::contact_info(Field::ContactInfo)]
fn missing_required_field_leaves_table_unchanged(#[case] missing: Field) {
    let dir = TempDir::new().unwrap();
    let registry = registry_in(&dir);
    registry.submit_at(Kind::Found, &wallet(), now()).unwrap();

    let mut fields = wallet();
    match missing {
        Field::ItemName => fields.item_name.clear(),
        Field::Location => fields.location.clear(),
        Field::Description => fields.description.clear(),
        Field::ContactInfo => fields.contact_info.clear(),
        other => panic!("unexpected field {other}"),
    }

    let err = registry.submit_at(Kind::Lost, &fields, now()).unwrap_err();
    match err {
        StoreError::Validation(err) => assert!(err.contains(missing)),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(registry.store().snapshot().unwrap().len(), 1);
}

#[test]
fn unrecognized_kind_is_rejected_at_ingestion() {
    let dir = TempDir::new().unwrap();
    let registry = registry_in(&dir);

    let err = registry
        .submit_at(Kind::Other("Stolen".into()), &wallet(), now())
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(registry.store().snapshot().unwrap().len(), 0);
}
