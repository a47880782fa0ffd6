//! Application state and key handling.

use crate::input::{digit_cell, move_cursor};
use crossterm::event::KeyCode;
use strictly_timeline::{Event, GameController, GameError, Position, Projection};
use tracing::debug;

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move over the board.
    Board,
    /// Arrow keys move over the history list.
    History,
}

/// Main application state.
///
/// Holds the controller plus purely local UI state (focus, board cursor,
/// history selection). Everything game-related is read from the latest
/// projection.
pub struct App {
    controller: GameController,
    projection: Projection,
    focus: Focus,
    board_cursor: Position,
    history_selected: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(reversed: bool) -> Self {
        let controller = GameController::with_reversed(reversed);
        let projection = controller.projection();
        let mut app = Self {
            controller,
            projection,
            focus: Focus::Board,
            board_cursor: Position::Center,
            history_selected: 0,
            should_quit: false,
        };
        app.select_current();
        app
    }

    /// Latest projection.
    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Board square under the keyboard cursor.
    pub fn board_cursor(&self) -> Position {
        self.board_cursor
    }

    /// Selected row of the displayed history list.
    pub fn history_selected(&self) -> usize {
        self.history_selected
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError`] if a key maps to an event the game rejects.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<(), GameError> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                Ok(())
            }
            KeyCode::Char('r') => self.dispatch(Event::ToggleOrderClicked),
            key => {
                if let Some(cell) = digit_cell(key) {
                    self.board_cursor = Position::from_index(cell).unwrap_or(self.board_cursor);
                    return self.dispatch(Event::CellClicked(cell));
                }
                match self.focus {
                    Focus::Board => self.handle_board_key(key),
                    Focus::History => self.handle_history_key(key),
                }
            }
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) -> Result<(), GameError> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Event::CellClicked(self.board_cursor.to_index()))
            }
            key => {
                self.board_cursor = move_cursor(self.board_cursor, key);
                Ok(())
            }
        }
    }

    fn handle_history_key(&mut self, key: KeyCode) -> Result<(), GameError> {
        let last = self.projection.history.len().saturating_sub(1);
        match key {
            KeyCode::Up => {
                self.history_selected = self.history_selected.saturating_sub(1);
                Ok(())
            }
            KeyCode::Down => {
                self.history_selected = (self.history_selected + 1).min(last);
                Ok(())
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                match self.projection.history.get(self.history_selected) {
                    Some(entry) => self.dispatch(Event::HistoryEntryClicked(entry.step)),
                    None => Ok(()),
                }
            }
            _ => Ok(()),
        }
    }

    fn dispatch(&mut self, event: Event) -> Result<(), GameError> {
        debug!(?event, "Dispatching event");
        self.projection = self.controller.handle(event)?;
        self.select_current();
        Ok(())
    }

    fn select_current(&mut self) {
        if let Some(row) = self.projection.history.iter().position(|e| e.is_current) {
            self.history_selected = row;
        }
    }
}
