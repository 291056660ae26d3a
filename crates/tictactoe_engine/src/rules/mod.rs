//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a [`Board`](crate::Board). Rules are kept
//! apart from board storage so the engine and any UI can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};
