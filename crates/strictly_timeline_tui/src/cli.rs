//! Command-line interface for strictly_timeline.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Timeline - tic-tac-toe with time travel
#[derive(Parser, Debug, Default)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with a navigable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List history newest first
    #[arg(long)]
    pub reversed: bool,

    /// Log file (the terminal is owned by the UI)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
