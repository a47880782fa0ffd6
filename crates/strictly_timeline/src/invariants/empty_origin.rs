//! Empty origin invariant: history starts with the empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: `history[0]` exists and is the all-empty board.
pub struct EmptyOriginInvariant;

impl Invariant<GameState> for EmptyOriginInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
