//! Property-based tests for history invariants under arbitrary event streams.

use proptest::prelude::*;
use strictly_timeline::invariants::{HistoryInvariants, InvariantSet};
use strictly_timeline::{Event, GameController, Player, Square, check_winner};

/// A user gesture that always maps to an in-range event.
///
/// History clicks are generated as a fraction and scaled to the current
/// history length when applied, so every jump targets a recorded step.
#[derive(Debug, Clone)]
enum Gesture {
    Cell(usize),
    History(f64),
    Toggle,
}

fn arb_gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        6 => (0usize..9).prop_map(Gesture::Cell),
        2 => (0.0f64..1.0).prop_map(Gesture::History),
        1 => Just(Gesture::Toggle),
    ]
}

fn to_event(controller: &GameController, gesture: &Gesture) -> Event {
    match gesture {
        Gesture::Cell(index) => Event::CellClicked(*index),
        Gesture::History(fraction) => {
            let len = controller.state().history().len();
            let step = ((len as f64) * fraction) as usize;
            Event::HistoryEntryClicked(step.min(len - 1))
        }
        Gesture::Toggle => Event::ToggleOrderClicked,
    }
}

proptest! {
    #[test]
    fn invariants_hold_for_any_event_stream(
        gestures in prop::collection::vec(arb_gesture(), 0..40)
    ) {
        let mut controller = GameController::new();
        for gesture in &gestures {
            let event = to_event(&controller, gesture);
            controller.handle(event).expect("events stay in range");
            prop_assert!(HistoryInvariants::check_all(controller.state()).is_ok());
        }
    }

    #[test]
    fn mark_at_step_n_alternates(
        cells in prop::collection::vec(0usize..9, 0..20)
    ) {
        let mut controller = GameController::new();
        for cell in cells {
            controller.handle(Event::CellClicked(cell)).expect("cell in range");
        }

        let history = controller.state().history();
        for step in 1..history.len() {
            let expected = if step % 2 == 1 { Player::X } else { Player::O };
            for pos in history[step].diff(&history[step - 1]) {
                prop_assert_eq!(history[step].get(pos), Square::Occupied(expected));
            }
        }
    }

    #[test]
    fn only_the_last_step_can_be_won(
        cells in prop::collection::vec(0usize..9, 0..20)
    ) {
        let mut controller = GameController::new();
        for cell in cells {
            controller.handle(Event::CellClicked(cell)).expect("cell in range");
        }

        let history = controller.state().history();
        let (_, earlier) = history.split_last().expect("history is never empty");
        prop_assert!(earlier.iter().all(|board| check_winner(board).is_none()));
    }

    #[test]
    fn toggle_never_moves_cursor(
        cells in prop::collection::vec(0usize..9, 0..12),
        toggles in 1usize..5
    ) {
        let mut controller = GameController::new();
        for cell in cells {
            controller.handle(Event::CellClicked(cell)).expect("cell in range");
        }
        let cursor = controller.state().cursor();
        let history = controller.state().history().to_vec();

        for _ in 0..toggles {
            controller.handle(Event::ToggleOrderClicked).expect("toggle cannot fail");
        }

        prop_assert_eq!(controller.state().cursor(), cursor);
        prop_assert_eq!(controller.state().history(), history.as_slice());
        prop_assert_eq!(controller.is_reversed(), toggles % 2 == 1);
    }
}
