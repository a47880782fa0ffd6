//! Event-driven front door to a game.
//!
//! The presentation layer sends [`Event`]s and gets back a fresh
//! [`Projection`] after each one. All calls are synchronous and run to
//! completion before the next event is accepted.

use super::error::GameError;
use super::projection::{HistoryEntry, Projection};
use super::state::GameState;
use super::{MoveOutcome, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// User gestures forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A board cell (0-8) was clicked.
    CellClicked(usize),
    /// A history entry was clicked.
    HistoryEntryClicked(usize),
    /// The reverse-order toggle was clicked.
    ToggleOrderClicked,
}

/// Owns the game state and the history display order.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
    reversed: bool,
}

impl GameController {
    /// Creates a controller for a new game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller whose history list starts newest first.
    #[instrument]
    pub fn with_reversed(reversed: bool) -> Self {
        Self {
            state: GameState::new(),
            reversed,
        }
    }

    /// Underlying game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Whether the history list is shown newest first.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Builds the view of the current state.
    pub fn projection(&self) -> Projection {
        let cursor = self.state.cursor();
        let mut history: Vec<HistoryEntry> = (0..self.state.history().len())
            .map(|step| HistoryEntry {
                step,
                label: self.label(step),
                is_current: step == cursor,
            })
            .collect();
        if self.reversed {
            history.reverse();
        }

        Projection {
            board: *self.state.current(),
            winner: self.state.current_winner(),
            next_player: self.state.to_move(),
            history,
            reversed: self.reversed,
        }
    }

    /// Dispatches one event and returns the resulting projection.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCell`] or [`GameError::InvalidStep`] when
    /// the event names a cell or step that does not exist. State is left
    /// unchanged in that case.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: Event) -> Result<Projection, GameError> {
        match event {
            Event::CellClicked(index) => self.on_cell_click(index),
            Event::HistoryEntryClicked(step) => self.on_history_click(step),
            Event::ToggleOrderClicked => Ok(self.on_toggle_order()),
        }
    }

    /// Plays the current player's mark at cell `index`.
    ///
    /// Clicks on occupied cells or on a won board change nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidCell`] if `index` is not 0-8.
    pub fn on_cell_click(&mut self, index: usize) -> Result<Projection, GameError> {
        let pos = Position::from_index(index).ok_or(GameError::InvalidCell(index))?;
        if let MoveOutcome::Ignored(reason) = self.state.apply_move(pos) {
            debug!(index, %reason, "Cell click ignored");
        }
        Ok(self.projection())
    }

    /// Moves the cursor to a recorded step.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStep`] if `step` was never recorded.
    pub fn on_history_click(&mut self, step: usize) -> Result<Projection, GameError> {
        self.state.jump_to(step)?;
        Ok(self.projection())
    }

    /// Flips the history display order.
    #[instrument(skip(self), fields(reversed = self.reversed))]
    pub fn on_toggle_order(&mut self) -> Projection {
        self.reversed = !self.reversed;
        self.projection()
    }

    fn label(&self, step: usize) -> String {
        match self.state.last_move_at(step) {
            Ok(Some(mv)) => format!("Go to move #{}: {}", step, mv),
            _ => "Go to game start".to_string(),
        }
    }
}
