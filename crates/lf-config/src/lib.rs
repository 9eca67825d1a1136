//! # lf-config
//!
//! Layered configuration loading for the lost-and-found registry using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LOSTFOUND_*` prefix, `__` as separator)
//! 2. Project-level `.lostfound/config.toml`
//! 3. User-level `~/.config/lostfound/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LOSTFOUND_STORAGE__TABLE_PATH` -> `storage.table_path`,
//! `LOSTFOUND_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! use lf_config::LfConfig;
//!
//! let config = LfConfig::load_with_dotenv(Path::new(".")).expect("config");
//! println!("table: {}", config.storage.table_path);
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project directory holding local config and lock files.
pub const PROJECT_DIR: &str = ".lostfound";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LfConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl LfConfig {
    /// Load configuration from all sources, using the current directory as
    /// the project root.
    ///
    /// Does NOT call `dotenvy`. Use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_for_project(Path::new("."))
    }

    /// Load configuration for the project rooted at `project_root`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_for_project(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_for_project(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `project_root/.env` (when present), then the layered
    /// configuration for that project.
    ///
    /// Variables already set in the process environment win over `.env`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Dotenv` if the `.env` file cannot be parsed, or
    /// any error from [`Self::load_for_project`].
    pub fn load_with_dotenv(project_root: &Path) -> Result<Self, ConfigError> {
        Self::load_project_dotenv(project_root)?;
        Self::load_for_project(project_root)
    }

    /// Build the figment provider chain relative to the current directory.
    pub fn figment() -> Figment {
        Self::figment_for_project(Path::new("."))
    }

    /// Build the figment provider chain for a project root.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment_for_project(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LOSTFOUND_").split("__"))
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.storage.validate()?;
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the project-local config file.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lostfound").join("config.toml"))
    }

    fn load_project_dotenv(project_root: &Path) -> Result<(), ConfigError> {
        let path = project_root.join(".env");
        if !path.exists() {
            return Ok(());
        }
        dotenvy::from_path(&path).map_err(|source| ConfigError::Dotenv { path, source })
    }
}
