//! File-backed record table.
//!
//! One header row followed by one comma-delimited row per record, fields in
//! `Field::COLUMNS` order with standard quoting. Rows are decoded by
//! position, so tables written with the legacy header labels
//! (`Type,Item Name,...`) load unchanged. Short rows are padded with empty
//! fields, so a missing trailing `image_ref` column reads as "no image" and a
//! truncated hand-edited row still loads. Extra columns are dropped.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use lf_core::{Field, Record};

use super::{RecordStore, Scan};
use crate::error::StoreError;

/// Record table stored as a CSV file.
#[derive(Debug, Clone)]
pub struct CsvRecordStore {
    path: PathBuf,
}

impl CsvRecordStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the table file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the table file exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn write_header(&self, file: File) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_writer(file);
        writer
            .write_record(Field::COLUMNS.map(Field::as_str))
            .map_err(|e| StoreError::table(&self.path, e))?;
        writer
            .flush()
            .map_err(|e| StoreError::storage(&self.path, e))?;
        Ok(())
    }
}

impl RecordStore for CsvRecordStore {
    fn initialize(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::storage(parent, e))?;
        }

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => {
                self.write_header(file)?;
                tracing::debug!(path = %self.path.display(), "created record table");
                Ok(())
            }
            // Another process created it between the check and the open.
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(StoreError::storage(&self.path, e)),
        }
    }

    fn append(&self, record: &Record) -> Result<(), StoreError> {
        // No `create`: a table deleted mid-run is a storage error, not a
        // silent headerless restart.
        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::storage(&self.path, e))?;

        if !ends_with_newline(&mut file).map_err(|e| StoreError::storage(&self.path, e))? {
            file.write_all(b"\n")
                .map_err(|e| StoreError::storage(&self.path, e))?;
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .serialize(record)
            .map_err(|e| StoreError::table(&self.path, e))?;
        writer
            .flush()
            .map_err(|e| StoreError::storage(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            kind = %record.kind,
            item = %record.item_name,
            "appended record"
        );
        Ok(())
    }

    fn scan(&self) -> Result<Scan<'_>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Box::new(std::iter::empty())),
            Err(e) => return Err(StoreError::storage(&self.path, e)),
        };

        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let path = self.path.as_path();
        Ok(Box::new(reader.into_records().map(move |row| {
            row.and_then(|row| fit_to_columns(row).deserialize::<Record>(None))
                .map_err(|e| StoreError::table(path, e))
        })))
    }
}

/// Pad or cut a row to exactly one field per column.
fn fit_to_columns(mut row: csv::StringRecord) -> csv::StringRecord {
    let width = Field::COLUMNS.len();
    row.truncate(width);
    while row.len() < width {
        row.push_field("");
    }
    row
}

/// Whether the file is empty or its last byte is a newline.
fn ends_with_newline(file: &mut File) -> std::io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lf_core::{Kind, ReportedDate};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn record(kind: Kind, item: &str) -> Record {
        Record {
            kind,
            item_name: item.into(),
            category: "Accessories".into(),
            location: "Library".into(),
            description: "black leather".into(),
            reported_date: ReportedDate::Date(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()),
            contact_info: "555-1234".into(),
            image_ref: None,
        }
    }

    fn store_in(dir: &TempDir) -> CsvRecordStore {
        CsvRecordStore::new(dir.path().join("lost_and_found.csv"))
    }

    #[test]
    fn initialize_writes_header_once() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.initialize().unwrap();
        store.initialize().unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "kind,item_name,category,location,description,reported_date,contact_info,image_ref\n"
        );
    }

    #[test]
    fn initialize_keeps_existing_rows() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        store.append(&record(Kind::Lost, "Wallet")).unwrap();

        store.initialize().unwrap();
        assert_eq!(store.snapshot().unwrap().len(), 1);
    }

    #[test]
    fn initialize_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = CsvRecordStore::new(dir.path().join("data/nested/items.csv"));
        store.initialize().unwrap();
        assert!(store.exists());
    }

    #[test]
    fn scan_of_missing_table_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.scan().unwrap().count(), 0);
    }

    #[test]
    fn append_then_scan_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        let first = record(Kind::Lost, "Wallet");
        let second = record(Kind::Found, "Phone");
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        assert_eq!(store.snapshot().unwrap(), vec![first, second]);
    }

    #[test]
    fn embedded_commas_and_quotes_survive() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();

        let mut tricky = record(Kind::Found, "Scarf, \"wool\"");
        tricky.description = "red,\nknitted".into();
        tricky.image_ref = Some("images/Scarf_20240110120000.jpg".into());
        store.append(&tricky).unwrap();

        assert_eq!(store.snapshot().unwrap(), vec![tricky]);
    }

    #[test]
    fn append_to_deleted_table_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.initialize().unwrap();
        std::fs::remove_file(store.path()).unwrap();

        let err = store.append(&record(Kind::Lost, "Wallet")).unwrap_err();
        assert!(matches!(err, StoreError::Storage { .. }));
    }

    #[test]
    fn reads_legacy_header_and_hand_edited_rows() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            "Type,Item Name,Category,Location,Description,Date,Finder Contact,Image\n\
             Lost,Wallet,Accessories,Library,black leather,2024-01-10,555-1234,\n\
             Claimed,Umbrella,Others,Gym,green,someday,front desk\n",
        )
        .unwrap();

        let records = store.snapshot().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].kind, Kind::Lost);
        assert_eq!(records[0].image_ref, None);
        assert_eq!(records[1].kind, Kind::Other("Claimed".into()));
        assert_eq!(
            records[1].reported_date,
            ReportedDate::Unparsed("someday".into())
        );
        assert_eq!(records[1].image_ref, None);
    }

    #[test]
    fn append_repairs_missing_trailing_newline() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            "kind,item_name,category,location,description,reported_date,contact_info,image_ref\n\
             Lost,Wallet,Accessories,Library,black leather,2024-01-10,555-1234,",
        )
        .unwrap();

        store.append(&record(Kind::Found, "Phone")).unwrap();

        let records = store.snapshot().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].item_name, "Phone");
    }

    #[test]
    fn truncated_row_loads_with_empty_fields() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            "kind,item_name,category,location,description,reported_date,contact_info,image_ref\n\
             Lost,Wallet,Accessories,Library,black leather,2024-01-10,555-1234,\n\
             Found,Umbrella,Others,Gym\n\
             Found\n",
        )
        .unwrap();

        let records = store.snapshot().unwrap();
        assert_eq!(records.len(), 3);

        let umbrella = &records[1];
        assert_eq!(umbrella.kind, Kind::Found);
        assert_eq!(umbrella.item_name, "Umbrella");
        assert_eq!(umbrella.category, "Others");
        assert_eq!(umbrella.location, "Gym");
        assert_eq!(umbrella.description, "");
        assert_eq!(umbrella.reported_date, ReportedDate::Unparsed(String::new()));
        assert_eq!(umbrella.contact_info, "");
        assert_eq!(umbrella.image_ref, None);

        assert_eq!(records[2].kind, Kind::Found);
        assert_eq!(records[2].item_name, "");
        assert_eq!(records[2].category, "");
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(
            store.path(),
            "kind,item_name,category,location,description,reported_date,contact_info,image_ref\n\
             Lost,Wallet,Accessories,Library,black leather,2024-01-10,555-1234,,reviewed,yes\n",
        )
        .unwrap();

        let records = store.snapshot().unwrap();
        assert_eq!(records, vec![record(Kind::Lost, "Wallet")]);
    }

    #[test]
    fn undecodable_row_surfaces_as_table_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let mut contents =
            b"kind,item_name,category,location,description,reported_date,contact_info,image_ref\n"
                .to_vec();
        contents.extend_from_slice(b"Lost,Wal\xFFlet,Accessories,Library,x,2024-01-10,y,\n");
        std::fs::write(store.path(), contents).unwrap();

        let err = store.snapshot().unwrap_err();
        assert!(matches!(err, StoreError::Table { .. }));
    }
}
