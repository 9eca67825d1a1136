use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use lf_config::PROJECT_DIR;
use lf_store::{CsvRecordStore, RecordStore};
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;
use crate::write_lock;

#[derive(Debug, Serialize)]
struct InitResponse {
    project_root: String,
    table_path: String,
    images_dir: String,
    created_table: bool,
}

/// Handle `lostfound init`.
pub fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let requested = PathBuf::from(flags.project.as_deref().unwrap_or(&args.path));
    let response = initialize(&requested)?;
    output(
        &response,
        flags.format,
        &["project_root", "table_path", "images_dir", "created_table"],
    )
}

fn initialize(requested: &Path) -> anyhow::Result<InitResponse> {
    let project_dir = requested.join(PROJECT_DIR);
    std::fs::create_dir_all(&project_dir)
        .with_context(|| format!("failed to create {}", project_dir.display()))?;
    let root = requested
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", requested.display()))?;

    let config = bootstrap::load_config(&root)?;
    let _lock = write_lock::acquire_for_project(
        &root,
        Duration::from_secs(config.storage.lock_timeout_secs),
    )?;

    let store = CsvRecordStore::new(config.storage.table_path_in(&root));
    let created_table = !store.exists();
    store.initialize()?;

    let images_dir = config.storage.images_dir_in(&root);
    std::fs::create_dir_all(&images_dir)
        .with_context(|| format!("failed to create {}", images_dir.display()))?;

    tracing::info!(root = %root.display(), created_table, "initialized registry");
    Ok(InitResponse {
        project_root: root.display().to_string(),
        table_path: store.path().display().to_string(),
        images_dir: images_dir.display().to_string(),
        created_table,
    })
}
