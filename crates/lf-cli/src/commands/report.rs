use std::path::Path;

use anyhow::Context;
use lf_core::{ImagePayload, Kind, ReportFields};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::commands::shared::items::{ITEM_COLUMNS, ItemRow};
use crate::commands::shared::parse::parse_category;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ReportResponse {
    #[serde(flatten)]
    item: ItemRow,
    message: String,
}

/// Handle `lostfound report`.
pub fn handle(args: &ReportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = ctx.registry()?;
    let kind = Kind::from(args.kind);
    let fields = ReportFields {
        item_name: args.name.clone(),
        category: parse_category(&args.category)?,
        location: args.location.clone(),
        description: args.description.clone(),
        reported_date: args.date.clone(),
        contact_info: args.contact.clone(),
        image: args.image.as_deref().map(read_image).transpose()?,
    };

    registry.initialize()?;
    let record = registry.submit(kind, &fields)?;
    tracing::info!(
        kind = %record.kind,
        item = %record.item_name,
        user = ctx.session.user.as_deref().unwrap_or("-"),
        "report stored"
    );

    let message = format!("{} item reported successfully!", record.kind);
    output(
        &ReportResponse {
            item: ItemRow::from(record),
            message,
        },
        flags.format,
        &ITEM_COLUMNS,
    )
}

fn read_image(path: &str) -> anyhow::Result<ImagePayload> {
    let path = Path::new(path);
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read image {}", path.display()))?;
    let payload = ImagePayload::new(bytes);
    Ok(match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => payload.with_extension(ext),
        None => payload,
    })
}
