//! Uploaded image storage.
//!
//! Images are written as `{dir}/{item_name}_{YYYYmmddHHMMSS}.{ext}`. A file
//! is never overwritten: when that name is taken, `_1`, `_2`, ... is appended
//! to the stem until a free name is found.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use lf_core::ImagePayload;

use crate::error::StoreError;

const DEFAULT_EXTENSION: &str = "jpg";
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
/// Names tried per save before a collision is reported.
const MAX_NAME_ATTEMPTS: u32 = 100;

/// Writes and checks uploaded images in one directory.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path an image for `item_name` uploaded at `at` would be written to,
    /// absent a name collision.
    #[must_use]
    pub fn path_for(&self, item_name: &str, payload: &ImagePayload, at: NaiveDateTime) -> PathBuf {
        self.candidate(item_name, payload, at, 0)
    }

    fn candidate(
        &self,
        item_name: &str,
        payload: &ImagePayload,
        at: NaiveDateTime,
        attempt: u32,
    ) -> PathBuf {
        let extension = payload
            .extension
            .as_deref()
            .map(|ext| ext.trim().trim_start_matches('.').to_ascii_lowercase())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

        let stem = format!("{}_{}", file_stem(item_name), at.format(TIMESTAMP_FORMAT));
        let name = if attempt == 0 {
            format!("{stem}.{extension}")
        } else {
            format!("{stem}_{attempt}.{extension}")
        };
        self.dir.join(name)
    }

    /// Persist `payload` and return the path it was written to.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Image` if the directory or file cannot be
    /// created or written, or every candidate name is taken. A partially
    /// written file is removed.
    pub fn save(
        &self,
        item_name: &str,
        payload: &ImagePayload,
        at: NaiveDateTime,
    ) -> Result<PathBuf, StoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StoreError::Image {
            path: self.dir.clone(),
            source,
        })?;

        let (path, mut file) = self.create_unique(item_name, payload, at)?;

        if let Err(source) = file.write_all(&payload.bytes).and_then(|()| file.sync_all()) {
            drop(file);
            self.discard(&path);
            return Err(StoreError::Image { path, source });
        }

        tracing::debug!(path = %path.display(), bytes = payload.bytes.len(), "saved image");
        Ok(path)
    }

    /// Open the first free candidate name with `create_new`.
    fn create_unique(
        &self,
        item_name: &str,
        payload: &ImagePayload,
        at: NaiveDateTime,
    ) -> Result<(PathBuf, File), StoreError> {
        let mut attempt = 0;
        loop {
            let path = self.candidate(item_name, payload, at, attempt);
            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists && attempt + 1 < MAX_NAME_ATTEMPTS => {
                    tracing::debug!(path = %path.display(), "image name taken");
                    attempt += 1;
                }
                Err(source) => return Err(StoreError::Image { path, source }),
            }
        }
    }

    /// Best-effort removal of a file that must not be left behind.
    fn discard(&self, path: &Path) {
        if let Err(cleanup) = self.remove(path) {
            tracing::warn!(
                path = %path.display(),
                %cleanup,
                "failed to remove partially written image"
            );
        }
    }

    /// Delete an image written by [`Self::save`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Image` if the file exists but cannot be removed.
    pub fn remove(&self, path: &Path) -> Result<(), StoreError> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Image {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Whether a stored image reference points at an existing file.
    #[must_use]
    pub fn exists(image_ref: &str) -> bool {
        !image_ref.trim().is_empty() && Path::new(image_ref).is_file()
    }
}

/// Make an item name safe to use as a file name stem.
fn file_stem(item_name: &str) -> String {
    let stem: String = item_name
        .trim()
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '_'
            } else {
                c
            }
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        "item".to_string()
    } else {
        stem
    }
}
