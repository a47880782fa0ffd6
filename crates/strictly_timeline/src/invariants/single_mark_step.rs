//! Single mark invariant: each step adds exactly one mark.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: consecutive snapshots differ in exactly one square, which
/// went from empty to occupied.
///
/// Marks are never removed or overwritten, so a snapshot never loses
/// information relative to its predecessor.
pub struct SingleMarkStepInvariant;

impl Invariant<GameState> for SingleMarkStepInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().windows(2).all(|pair| {
            let changed = pair[1].diff(&pair[0]);
            match changed.as_slice() {
                [pos] => {
                    pair[0].get(*pos) == Square::Empty && pair[1].get(*pos) != Square::Empty
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history step places exactly one mark on an empty square"
    }
}
