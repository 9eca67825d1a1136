//! Storage locations for the record table and uploaded images.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

fn default_table_path() -> String {
    "lost_and_found.csv".to_string()
}

fn default_images_dir() -> String {
    "images".to_string()
}

/// How long a writer waits for another writer's lock before giving up.
const fn default_lock_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Record table file. Relative paths resolve against the project root.
    #[serde(default = "default_table_path")]
    pub table_path: String,

    /// Directory uploaded images are written to. Relative paths resolve
    /// against the project root.
    #[serde(default = "default_images_dir")]
    pub images_dir: String,

    #[serde(default = "default_lock_timeout_secs")]
    pub lock_timeout_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            table_path: default_table_path(),
            images_dir: default_images_dir(),
            lock_timeout_secs: default_lock_timeout_secs(),
        }
    }
}

impl StorageConfig {
    /// Absolute location of the record table for a project rooted at `root`.
    #[must_use]
    pub fn table_path_in(&self, root: &Path) -> PathBuf {
        resolve(root, &self.table_path)
    }

    /// Absolute location of the image directory for a project rooted at `root`.
    #[must_use]
    pub fn images_dir_in(&self, root: &Path) -> PathBuf {
        resolve(root, &self.images_dir)
    }

    /// Reject values no store could be opened with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a blank path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.table_path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.images_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.images_dir".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

fn resolve(root: &Path, configured: &str) -> PathBuf {
    let path = PathBuf::from(configured);
    if path.is_absolute() {
        path
    } else {
        root.join(path)
    }
}
