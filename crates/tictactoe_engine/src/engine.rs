//! Turn-taking game engine.

use crate::board::{Board, Cell};
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Serializable view of an engine, for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Current game state.
    pub state: GameState,
    /// Player to move (or the player who made the final move).
    pub current_player: Player,
    /// All 9 cells in row-major order.
    pub cells: Vec<Cell>,
    /// Completed line when the game was won.
    pub winning_line: Option<[Position; 3]>,
}

/// Tic-tac-toe game engine.
///
/// Owns one [`Board`] and tracks whose turn it is. `game_state` is
/// [`GameState::Playing`] exactly when no line is complete and the board
/// still has an empty cell. The current player only changes after a
/// successful move that leaves the game playing.
#[derive(Debug, Clone)]
pub struct Engine {
    board: Board,
    current_player: Player,
    game_state: GameState,
}

impl Engine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            game_state: GameState::Playing,
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// Returns `false` without side effects if the game is over or the cell
    /// is occupied.
    #[instrument(skip(self), fields(position = %position, player = %self.current_player))]
    pub fn make_move(&mut self, position: Position) -> bool {
        if self.game_state.is_terminal() {
            debug!(state = %self.game_state, "Move rejected: game is over");
            return false;
        }

        if !self.board.place_player(position, self.current_player) {
            debug!("Move rejected: cell occupied");
            return false;
        }

        self.update_state();

        if self.game_state.is_terminal() {
            info!(state = %self.game_state, "Game over");
        } else {
            self.current_player = self.current_player.opponent();
        }

        debug!(next = %self.current_player, board = %self.board, "Move accepted");
        true
    }

    /// Updates game state after a placement.
    fn update_state(&mut self) {
        if let Some(winner) = rules::check_winner(&self.board) {
            self.game_state = GameState::won_by(winner);
        } else if rules::is_full(&self.board) {
            self.game_state = GameState::Draw;
        }
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the current game state.
    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    /// Returns the mark at the given position.
    pub fn player_at(&self, position: Position) -> Option<Player> {
        self.board.get_player(position)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns to the initial state: empty board, X to move, playing.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.game_state = GameState::Playing;
        info!("Game reset");
    }

    /// Enumerates all 9 cells in row-major order.
    pub fn board_positions(&self) -> Vec<Cell> {
        self.board.all_positions()
    }

    /// Returns the completed line if the game was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self.game_state.winner() {
            Some(_) => rules::winning_line(&self.board).map(|(_, line)| line),
            None => None,
        }
    }

    /// Captures the engine's state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            state: self.game_state,
            current_player: self.current_player,
            cells: self.board_positions(),
            winning_line: self.winning_line(),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut Engine, moves: &[(usize, usize)]) {
        for &(row, column) in moves {
            assert!(engine.make_move(Position::new(row, column).unwrap()));
        }
    }

    #[test]
    fn test_starts_with_x_playing() {
        let engine = Engine::new();
        assert_eq!(engine.current_player(), Player::X);
        assert_eq!(engine.game_state(), GameState::Playing);
        assert!(engine.board_positions().iter().all(|c| c.player.is_none()));
    }

    #[test]
    fn test_win_keeps_winner_as_current_player() {
        let mut engine = Engine::new();
        play(&mut engine, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(engine.game_state(), GameState::PlayerXWon);
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_winning_line_reported() {
        let mut engine = Engine::new();
        assert_eq!(engine.winning_line(), None);
        play(&mut engine, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
        assert_eq!(engine.winning_line(), Some(rules::LINES[7]));
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut engine = Engine::new();
        play(&mut engine, &[(1, 1)]);
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.state, GameState::Playing);
        assert_eq!(snapshot.current_player, Player::O);
        assert_eq!(snapshot.cells[4].player, Some(Player::X));
        assert_eq!(snapshot.winning_line, None);
    }

    #[test]
    fn test_reset_clears_board() {
        let mut engine = Engine::new();
        play(&mut engine, &[(1, 1), (0, 0)]);
        engine.reset_game();
        assert_eq!(engine.player_at(Position::new(1, 1).unwrap()), None);
        assert_eq!(engine.board(), &Board::new());
    }
}
