use serde_json::json;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lostfound config`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &json!({
            "project_root": ctx.project_root.display().to_string(),
            "storage": ctx.config.storage,
            "general": ctx.config.general,
        }),
        flags.format,
        &["project_root", "storage", "general"],
    )
}
