use lf_core::Kind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ListArgs;
use crate::commands::shared::items::{ITEM_COLUMNS, rows};
use crate::context::{Action, AppContext};
use crate::output::output;

/// Handle `lostfound list`.
pub fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kind = Kind::from(args.kind);
    let records = ctx.engine(Action::List)?.by_type(&kind)?;
    tracing::debug!(%kind, matched = records.len(), "listed items");

    output(&rows(records, ctx.limit(flags.limit)), flags.format, &ITEM_COLUMNS)
}
