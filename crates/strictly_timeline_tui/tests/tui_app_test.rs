//! Drives the terminal front end through key presses.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use strictly_timeline::Player;
use strictly_timeline_tui::{App, Focus, draw};

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(90, 20)).unwrap();
    terminal.draw(|frame| draw(frame, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn press(app: &mut App, keys: &[KeyCode]) {
    for key in keys {
        app.handle_key(*key).unwrap();
    }
}

#[test]
fn test_time_travel_session() {
    let mut app = App::new(false);
    press(
        &mut app,
        &[
            KeyCode::Char('1'),
            KeyCode::Char('5'),
            KeyCode::Char('2'),
            KeyCode::Char('6'),
            KeyCode::Char('3'),
        ],
    );
    assert!(screen(&app).contains("Winner: X"));

    // Clicks after the win change nothing.
    let before = app.projection().clone();
    press(&mut app, &[KeyCode::Char('9')]);
    assert_eq!(app.projection(), &before);

    // Jump back two steps through the history pane.
    press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
    assert_eq!(app.focus(), Focus::History);
    assert_eq!(app.projection().winner, None);
    assert_eq!(app.projection().next_player, Player::O);
    assert!(screen(&app).contains("Next player: O"));

    // Playing from the past discards the old future.
    press(&mut app, &[KeyCode::Char('9')]);
    let history = &app.projection().history;
    assert_eq!(history.len(), 5);
    assert_eq!(history[4].label, "Go to move #4: O on (2, 2)");
    assert!(!screen(&app).contains("Go to move #5"));
}

#[test]
fn test_reverse_order_toggle() {
    let mut app = App::new(false);
    press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);

    press(&mut app, &[KeyCode::Char('r')]);
    let steps: Vec<_> = app.projection().history.iter().map(|e| e.step).collect();
    assert_eq!(steps, [2, 1, 0]);
    assert!(screen(&app).contains("History (newest first)"));

    press(&mut app, &[KeyCode::Char('r')]);
    let steps: Vec<_> = app.projection().history.iter().map(|e| e.step).collect();
    assert_eq!(steps, [0, 1, 2]);
}

#[test]
fn test_quit_keys() {
    for key in [KeyCode::Char('q'), KeyCode::Esc] {
        let mut app = App::new(false);
        press(&mut app, &[key]);
        assert!(app.should_quit());
    }
}
