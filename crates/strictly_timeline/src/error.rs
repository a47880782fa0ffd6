//! Error types for the game state machine.

use derive_more::{Display, Error};

/// Contract violations reported by the game.
///
/// Illegal moves (occupied square, game already won) are not errors; they
/// are ignored and reported as [`MoveOutcome::Ignored`](crate::MoveOutcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Requested step is not in the recorded history.
    #[display("Step {} is out of range (history has {} steps)", step, len)]
    InvalidStep {
        /// Requested step.
        step: usize,
        /// Current history length.
        len: usize,
    },

    /// Cell index outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    InvalidCell(#[error(not(source))] usize),
}
