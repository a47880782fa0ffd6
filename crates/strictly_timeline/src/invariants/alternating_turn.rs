//! Alternating turn invariant: players take turns starting with X.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: the mark added at step `n` belongs to X when `n` is odd and
/// to O when `n` is even.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        (1..history.len()).all(|step| {
            history[step]
                .diff(&history[step - 1])
                .iter()
                .all(|pos| history[step].get(*pos) == Square::Occupied(Player::moved_at(step)))
        })
    }

    fn description() -> &'static str {
        "Players alternate turns, X first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_played_game_holds() {
        let mut state = GameState::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
        ] {
            state.apply_move(pos);
        }
        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_o_moving_first_violates() {
        let mut state = GameState::new();
        let first = state.history[0].with_mark(Position::Center, Player::O);
        state.history.push(first);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::new();
        state.apply_move(Position::Center);
        let second = state.history[1].with_mark(Position::TopLeft, Player::X);
        state.history.push(second);
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
