//! Cursor bounds invariant.

use super::super::GameState;
use super::Invariant;

/// Invariant: the cursor indexes a recorded snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.cursor() < state.history().len()
    }

    fn description() -> &'static str {
        "Cursor points at a recorded snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_through_moves_and_jumps() {
        let mut state = GameState::new();
        assert!(CursorInBoundsInvariant::holds(&state));

        state.apply_move(Position::Center);
        state.apply_move(Position::TopLeft);
        assert!(CursorInBoundsInvariant::holds(&state));

        state.jump_to(0).unwrap();
        assert!(CursorInBoundsInvariant::holds(&state));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut state = GameState::new();
        state.cursor = 1;
        assert!(!CursorInBoundsInvariant::holds(&state));
    }
}
