use std::path::{Path, PathBuf};

use anyhow::Context;
use lf_config::LfConfig;

use crate::context;

/// Load `.env` and the layered configuration for `project_root`.
pub fn load_config(project_root: &Path) -> anyhow::Result<LfConfig> {
    LfConfig::load_with_dotenv(project_root).with_context(|| {
        format!(
            "failed to load configuration for {}",
            project_root.display()
        )
    })
}

/// Project root for commands that operate on an existing registry.
///
/// Falls back to the current directory when no `.lostfound` directory is
/// found, so a bare table next to the caller still works.
pub fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        return context::resolve_explicit(Path::new(path));
    }

    let cwd = std::env::current_dir().context("failed to read current directory")?;
    Ok(context::find_project_root(&cwd).unwrap_or(cwd))
}
