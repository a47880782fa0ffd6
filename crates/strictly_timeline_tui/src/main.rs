//! Strictly Timeline - tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use strictly_timeline_tui::{Cli, TuiConfig, init_logging, run_tui};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = TuiConfig::resolve(&cli)?;
    init_logging(&config)?;
    run_tui(&config)
}
