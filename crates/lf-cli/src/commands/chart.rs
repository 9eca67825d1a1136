use lf_core::Kind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ChartArgs, ChartKind};
use crate::context::{Action, AppContext};
use crate::output::output;

const FREQUENCY_COLUMNS: [&str; 2] = ["value", "count"];

/// Handle `lostfound chart`.
pub fn handle(args: &ChartArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let engine = ctx.engine(Action::Chart)?;
    match args.chart {
        ChartKind::Categories => output(
            &engine.category_frequency()?,
            flags.format,
            &FREQUENCY_COLUMNS,
        ),
        ChartKind::Kinds => output(&engine.kind_breakdown()?, flags.format, &FREQUENCY_COLUMNS),
        ChartKind::Locations => output(
            &engine.location_frequency(&Kind::from(args.kind))?,
            flags.format,
            &FREQUENCY_COLUMNS,
        ),
        ChartKind::Dates => output(&engine.date_series()?, flags.format, &["date", "count"]),
        ChartKind::Timeline => output(
            &engine.timeline()?,
            flags.format,
            &["date", "category", "kind"],
        ),
    }
}
