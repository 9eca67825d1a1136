use std::time::Duration;

use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod ui;
mod write_lock;

fn main() {
    if let Err(error) = run() {
        eprintln!("lostfound error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Init(args) = &cli.command {
        return commands::init::handle(args, &flags);
    }

    let project_root = bootstrap::resolve_project_root(flags.project.as_deref())?;
    let config = bootstrap::load_config(&project_root)?;
    let session = context::Session::new(context::Role::from(flags.role), flags.user.clone());

    let command = cli.command;
    let write_lock = if command_requires_write_lock(&command) {
        Some(write_lock::acquire_for_project(
            &project_root,
            Duration::from_secs(config.storage.lock_timeout_secs),
        )?)
    } else {
        None
    };

    let ctx = context::AppContext::init(project_root, config, session);
    let result = commands::dispatch::dispatch(command, &ctx, &flags);
    drop(write_lock);
    result
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("LOSTFOUND_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    // Diagnostics go to stderr so json output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

const fn command_requires_write_lock(command: &cli::Commands) -> bool {
    match command {
        cli::Commands::Report(_) => true,
        cli::Commands::Init(_)
        | cli::Commands::List(_)
        | cli::Commands::Search(_)
        | cli::Commands::Stats
        | cli::Commands::Chart(_)
        | cli::Commands::Config => false,
    }
}
