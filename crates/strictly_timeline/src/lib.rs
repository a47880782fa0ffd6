//! Tic-tac-toe game state machine with time-travel history.
//!
//! # Architecture
//!
//! - **Board**: immutable 3x3 snapshot; every move produces a new one
//! - **Rules**: pure win detection over a single snapshot
//! - **GameState**: append-and-truncate history of snapshots plus a cursor
//! - **GameController**: event in, [`Projection`] out, for a presentation layer
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{Event, GameController, Player};
//!
//! let mut game = GameController::new();
//! for cell in [0, 4, 1, 5, 2] {
//!     game.handle(Event::CellClicked(cell))?;
//! }
//! let projection = game.handle(Event::HistoryEntryClicked(4))?;
//! assert_eq!(projection.winner, None);
//! assert_eq!(projection.next_player, Player::X);
//! # Ok::<(), strictly_timeline::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod controller;
mod error;
mod position;
mod projection;
mod state;
mod types;

pub mod invariants;
pub mod rules;

// Crate-level exports - Domain types
pub use action::{IgnoredReason, Move, MoveOutcome};
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Rules
pub use rules::{Line, Win, check_winner};

// Crate-level exports - State machine
pub use controller::{Event, GameController};
pub use error::GameError;
pub use projection::{HistoryEntry, Projection};
pub use state::GameState;
