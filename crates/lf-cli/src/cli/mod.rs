use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, RoleArg};
pub use root_commands::Commands;

/// Top-level CLI parser for the `lostfound` binary.
#[derive(Debug, Parser)]
#[command(
    name = "lostfound",
    version,
    about = "Campus lost-and-found registry"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root path (defaults to auto-detect via .lostfound)
    #[arg(short, long, global = true)]
    pub project: Option<String>,

    /// Dashboard to act through: student or admin
    #[arg(short, long, global = true, default_value = "student")]
    pub role: RoleArg,

    /// Name to record in logs for this session
    #[arg(short, long, global = true)]
    pub user: Option<String>,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
            role: self.role,
            user: self.user.clone(),
            color: self.color,
        }
    }
}
