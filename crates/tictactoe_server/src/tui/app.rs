//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_engine::{Engine, GameState, Position};
use tracing::{debug, instrument};

/// Status line text for the current game.
pub fn status_text(engine: &Engine) -> String {
    match engine.game_state() {
        GameState::Playing => format!("Player {}'s Turn", engine.current_player()),
        GameState::PlayerXWon => "Player X Wins! 🎉".to_string(),
        GameState::PlayerOWon => "Player O Wins! 🎉".to_string(),
        GameState::Draw => "It's a Draw! 🤝".to_string(),
    }
}

/// Title and message for the result popup, once the game is over.
pub fn result_text(state: GameState) -> Option<(&'static str, &'static str)> {
    match state {
        GameState::Playing => None,
        GameState::PlayerXWon => Some((
            "Player X Wins! 🎉",
            "Congratulations! Player X is the winner!",
        )),
        GameState::PlayerOWon => Some((
            "Player O Wins! 🎉",
            "Congratulations! Player O is the winner!",
        )),
        GameState::Draw => Some(("It's a Draw! 🤝", "Great game! Both players played well!")),
    }
}

/// Moves the cursor one cell in the arrow's direction, stopping at edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match key {
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => (row + 1, column),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, column + 1),
        _ => (row, column),
    };
    Position::new(row, column).unwrap_or(cursor)
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    cursor: Position,
    show_result: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with the cursor on the centre cell.
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            cursor: Position::ALL[4],
            show_result: false,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Cell the cursor is on.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the result popup is open.
    pub fn show_result(&self) -> bool {
        self.show_result
    }

    /// Whether the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc if self.show_result => self.show_result = false,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(position) = Position::from_index(c as usize - '1' as usize) {
                    self.play(position);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Makes a move at the given position.
    fn play(&mut self, position: Position) {
        debug!(%position, "Making move");
        if self.engine.make_move(position) {
            self.cursor = position;
            self.show_result = self.engine.game_state().is_terminal();
        }
    }

    /// Restarts the game.
    fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.reset_game();
        self.show_result = false;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
