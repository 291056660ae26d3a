//! Tic-tac-toe rule engine.
//!
//! A small finite-state core with no I/O:
//!
//! - **Position**: validated `(row, column)` coordinate on the 3x3 grid
//! - **Board**: nine cells, each empty or holding a [`Player`] mark
//! - **Engine**: turn order, move application and win/draw evaluation
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, GameState, Player, Position};
//!
//! # fn main() -> Result<(), tictactoe_engine::PositionError> {
//! let mut engine = Engine::new();
//! assert!(engine.make_move(Position::new(1, 1)?));
//! assert_eq!(engine.current_player(), Player::O);
//! assert_eq!(engine.game_state(), GameState::Playing);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod engine;
mod error;
mod position;
pub mod rules;
mod types;

pub use board::{Board, Cell};
pub use engine::{Engine, GameSnapshot};
pub use error::{Axis, PositionError, PositionErrorKind};
pub use position::Position;
pub use types::{GameState, Player};

/// Alias used where the glossary speaks of marks rather than players.
pub type Mark = Player;
