//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Player in the game, identified by the mark they place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Current state of the game.
///
/// `Playing` is the only non-terminal state. Once a game reaches one of the
/// other three it stays there until the engine is reset.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// Game is ongoing.
    #[display("PLAYING")]
    Playing,
    /// X completed a line.
    #[display("PLAYER_X_WON")]
    PlayerXWon,
    /// O completed a line.
    #[display("PLAYER_O_WON")]
    PlayerOWon,
    /// Board filled with no line completed.
    #[display("DRAW")]
    Draw,
}

impl GameState {
    /// Winning state for the given player.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameState::PlayerXWon,
            Player::O => GameState::PlayerOWon,
        }
    }

    /// Returns the winner, if the game ended in a win.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::PlayerXWon => Some(Player::X),
            GameState::PlayerOWon => Some(Player::O),
            GameState::Playing | GameState::Draw => None,
        }
    }

    /// True for every state that accepts no further moves.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Playing)
    }
}
