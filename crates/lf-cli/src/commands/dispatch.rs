use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Report(args) => commands::report::handle(&args, ctx, flags),
        Commands::List(args) => commands::list::handle(&args, ctx, flags),
        Commands::Search(args) => commands::search::handle(&args, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Chart(args) => commands::chart::handle(&args, ctx, flags),
        Commands::Config => commands::config::handle(ctx, flags),
        Commands::Init(_) => anyhow::bail!("init runs before a registry is opened"),
    }
}
