use crate::cli::GlobalFlags;
use crate::context::{Action, AppContext};
use crate::output::output;

/// Handle `lostfound stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let counts = ctx.engine(Action::Stats)?.counts()?;
    output(&counts, flags.format, &["total", "lost_count", "found_count"])
}
