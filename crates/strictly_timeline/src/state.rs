//! Snapshot history and cursor for a single game.
//!
//! The history is an append-and-truncate list of immutable boards that
//! always starts with the empty board. The cursor selects the snapshot that
//! is displayed and that the next move builds on. Whose turn it is follows
//! from the cursor's parity and is never stored.

use super::action::{IgnoredReason, Move, MoveOutcome};
use super::error::GameError;
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::{Win, check_winner};
use super::types::{Board, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Authoritative game state: every recorded snapshot plus the cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) cursor: usize,
}

impl GameState {
    /// Creates a new game with a single empty snapshot.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            cursor: 0,
        }
    }

    /// All recorded snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the current snapshot.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The snapshot at the cursor.
    pub fn current(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Player to move from the current snapshot.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.cursor)
    }

    /// Winner of the current snapshot, if any.
    pub fn current_winner(&self) -> Option<Win> {
        check_winner(self.current())
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Moves onto an occupied square, or from a snapshot that already has a
    /// winner, are ignored and leave the state untouched. Otherwise every
    /// snapshot after the cursor is discarded, the new snapshot is appended,
    /// and the cursor advances to it.
    #[instrument(skip(self), fields(position = ?pos, cursor = self.cursor))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        let base = *self.current();

        if let Some(win) = check_winner(&base) {
            debug!(winner = %win.player, "Ignoring move after win");
            return MoveOutcome::Ignored(IgnoredReason::GameOver);
        }

        if !base.is_empty(pos) {
            debug!("Ignoring move onto occupied square");
            return MoveOutcome::Ignored(IgnoredReason::SquareOccupied(pos));
        }

        let player = self.to_move();
        let discarded = self.history.len() - (self.cursor + 1);
        self.history.truncate(self.cursor + 1);
        self.history.push(base.with_mark(pos, player));
        self.cursor += 1;

        info!(
            step = self.cursor,
            player = %player,
            position = %pos,
            discarded,
            "Move applied"
        );
        if let Some(win) = self.current_winner() {
            info!(winner = %win.player, line = ?win.line.indices(), "Game won");
        }

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "history invariants violated after move"
        );

        MoveOutcome::Applied(Move::new(player, pos))
    }

    /// Moves the cursor to a recorded step without touching the history.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStep`] if `step` is past the last
    /// recorded snapshot.
    #[instrument(skip(self), fields(from = self.cursor))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), GameError> {
        self.check_step(step)?;
        debug!(to = step, "Jumping through history");
        self.cursor = step;
        Ok(())
    }

    /// The move that produced snapshot `step`.
    ///
    /// Compares `history[step]` with the snapshot before it. Step 0 has no
    /// move and yields `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidStep`] if `step` is past the last
    /// recorded snapshot.
    pub fn last_move_at(&self, step: usize) -> Result<Option<Move>, GameError> {
        self.check_step(step)?;
        let previous = &self.history[step.saturating_sub(1)];
        Ok(self.history[step]
            .diff(previous)
            .last()
            .map(|pos| Move::new(Player::moved_at(step), *pos)))
    }

    fn check_step(&self, step: usize) -> Result<(), GameError> {
        if step < self.history.len() {
            Ok(())
        } else {
            Err(GameError::InvalidStep {
                step,
                len: self.history.len(),
            })
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
