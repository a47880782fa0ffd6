//! Terminal front end for strictly_timeline.
//!
//! Reads [`Projection`](strictly_timeline::Projection)s from a
//! [`GameController`](strictly_timeline::GameController) and turns key
//! presses back into game events.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod ui;

pub use app::{App, Focus};
pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Routes tracing output to the configured log file.
///
/// The terminal belongs to the UI, so nothing is written to stdout/stderr.
pub fn init_logging(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Restores the terminal when dropped, on clean exit and on every error path.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        Self::armed(restore_terminal).then_setup(|| execute!(io::stdout(), EnterAlternateScreen))
    }

    fn armed(restore: fn() -> io::Result<()>) -> Self {
        Self { restore }
    }

    /// Runs the remaining setup; on failure the guard drops and restores.
    fn then_setup(self, setup: impl FnOnce() -> io::Result<()>) -> Result<Self> {
        setup().context("Failed to enter alternate screen")?;
        Ok(self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = (self.restore)() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

/// Runs the terminal UI until the user quits.
#[instrument(skip_all, fields(reversed = *config.reversed()))]
pub fn run_tui(config: &TuiConfig) -> Result<()> {
    info!("Starting Strictly Timeline TUI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = event_loop(&mut terminal, App::new(*config.reversed()));

    info!("TUI exited");
    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")?
            && key.kind == KeyEventKind::Press
            && let Err(e) = app.handle_key(key.code)
        {
            warn!(error = %e, "Event rejected");
        }
    }
    Ok(())
}
