//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kumo")]
#[command(author, version, about = "Ichimoku cloud trading console for the E*TRADE sandbox")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level
    #[arg(short, long, default_value = "info")]
    pub log_level: LogLevel,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a live sandbox quote, evaluate the strategy and open the dashboard
    Live(LiveArgs),
    /// Chart the Ichimoku cloud over a CSV price history
    Chart(ChartArgs),
    /// Print recent trade journal entries
    Journal(JournalArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(clap::Args)]
pub struct LiveArgs {
    /// Symbol to quote (prompted for when omitted)
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Target price recorded with the decision (prompted for when omitted)
    #[arg(short, long)]
    pub target_price: Option<f64>,
}

#[derive(clap::Args)]
pub struct ChartArgs {
    /// Price history file (CSV)
    #[arg(long)]
    pub data: PathBuf,

    /// Symbol stamped on rows without a symbol column
    #[arg(short, long)]
    pub symbol: Option<String>,

    /// Target price recorded with the decision (defaults to the last close)
    #[arg(short, long)]
    pub target_price: Option<f64>,
}

#[derive(clap::Args)]
pub struct JournalArgs {
    /// Number of most recent entries to show
    #[arg(short = 'n', long, default_value = "10")]
    pub limit: usize,
}
