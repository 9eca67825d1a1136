use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::commands::shared::items::{ITEM_COLUMNS, rows};
use crate::context::{Action, AppContext};
use crate::output::output;

/// Handle `lostfound search`.
pub fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = args.query.as_deref().unwrap_or_default();
    let records = ctx.engine(Action::Search)?.search_by_category(query)?;
    tracing::debug!(query, matched = records.len(), "searched categories");

    output(&rows(records, ctx.limit(flags.limit)), flags.format, &ITEM_COLUMNS)
}
