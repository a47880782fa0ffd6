//! Game rules for tic-tac-toe.
//!
//! Pure functions over a single board snapshot. Rules are kept apart from
//! history storage so any snapshot can be evaluated on its own.

pub mod win;

pub use win::{LINES, Line, Win, check_winner};
