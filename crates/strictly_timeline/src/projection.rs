//! Read-only view of a game handed to the presentation layer.

use super::rules::Win;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// One entry of the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Human-readable label, e.g. `Go to move #3: X on (0, 1)`.
    pub label: String,
    /// Whether this step is the one under the cursor.
    pub is_current: bool,
}

/// Everything the presentation layer needs to draw one frame.
///
/// A projection is a pure function of the game state and the display
/// order flag; two projections of the same state compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projection {
    /// Board at the cursor.
    pub board: Board,
    /// Winner of that board, if any.
    pub winner: Option<Win>,
    /// Player to move from the cursor. Meaningless once `winner` is set.
    pub next_player: Player,
    /// History entries in display order.
    pub history: Vec<HistoryEntry>,
    /// Whether `history` is listed newest first.
    pub reversed: bool,
}

impl Projection {
    /// Status line shown above the history list.
    pub fn status_line(&self) -> String {
        match &self.winner {
            Some(win) => format!("Winner: {}", win.player),
            None => format!("Next player: {}", self.next_player),
        }
    }

    /// The entry for the current step.
    pub fn current_entry(&self) -> Option<&HistoryEntry> {
        self.history.iter().find(|entry| entry.is_current)
    }
}
