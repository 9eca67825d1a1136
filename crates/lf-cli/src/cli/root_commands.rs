use clap::{Args, Subcommand, ValueEnum};
use lf_core::Kind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the record table and project directory.
    Init(InitArgs),
    /// Report a lost or found item.
    Report(ReportArgs),
    /// List reported items of one kind.
    List(ListArgs),
    /// Search items by category.
    Search(SearchArgs),
    /// Overview metrics: total, lost, and found counts.
    Stats,
    /// Chart data for the admin dashboard.
    Chart(ChartArgs),
    /// Print the effective configuration.
    Config,
}

/// Item kind accepted on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum KindArg {
    Lost,
    Found,
}

impl From<KindArg> for Kind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Lost => Self::Lost,
            KindArg::Found => Self::Found,
        }
    }
}

/// Arguments for `lostfound init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory).
    #[arg(default_value = ".")]
    pub path: String,
}

/// Arguments for `lostfound report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    pub kind: KindArg,
    #[arg(long)]
    pub name: String,
    /// One of Electronics, Clothing, Books, Accessories, Others.
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub description: String,
    /// Date lost or found (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub contact: String,
    /// Photo of the item.
    #[arg(long)]
    pub image: Option<String>,
}

/// Arguments for `lostfound list`.
#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    pub kind: KindArg,
}

/// Arguments for `lostfound search`.
#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Category substring, case-insensitive. Omit to match every categorized item.
    pub query: Option<String>,
}

/// Which aggregation to chart.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ChartKind {
    /// Items per category.
    Categories,
    /// Items per kind label.
    Kinds,
    /// Date, category, and kind of every dated item.
    Timeline,
    /// Items per reported date.
    Dates,
    /// Most common locations for one kind.
    Locations,
}

/// Arguments for `lostfound chart`.
#[derive(Clone, Debug, Args)]
pub struct ChartArgs {
    pub chart: ChartKind,
    /// Kind to restrict `locations` to.
    #[arg(long, default_value = "lost")]
    pub kind: KindArg,
}
