use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pkd-calc",
    version,
    about = "Boost route calculator for Parkour Duels seeds"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank every 2- and 3-boost route for a seed
    Calc(CalcCommand),
    /// Compare the reference best route against personal splits
    Compare(CompareCommand),
    /// List the rooms a seed can contain
    Rooms,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Boosts {
    Any,
    Two,
    Three,
}

#[derive(Args)]
pub struct CalcCommand {
    /// The 8 rooms of the seed in order; the finish room is appended
    #[arg(required = true, num_args = 1..)]
    pub rooms: Vec<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long, value_enum)]
    pub boosts: Option<Boosts>,
    /// Number of routes to show
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,
    /// Show the room-by-room breakdown for each route
    #[arg(long)]
    pub detail: bool,
    /// Personal splits JSON to use instead of the built-in table
    #[arg(long)]
    pub splits: Option<PathBuf>,
    /// Directory holding pkd.toml
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}

#[derive(Args)]
pub struct CompareCommand {
    #[arg(required = true, num_args = 1..)]
    pub rooms: Vec<String>,
    /// Personal splits JSON
    #[arg(long)]
    pub splits: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    #[arg(long, default_value = ".")]
    pub config_dir: PathBuf,
}
