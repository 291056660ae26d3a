//! 3x3 board storage.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// One entry of the row-major board enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Coordinate of the cell.
    pub position: Position,
    /// Mark in the cell, if any.
    pub player: Option<Player>,
}

/// 3x3 tic-tac-toe board.
///
/// A cell, once marked, keeps its mark until [`Board::clear`] wipes the
/// whole grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Option<Player>; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self { cells: [None; 9] }
    }

    /// Checks if a cell holds no mark.
    pub fn is_empty(&self, position: Position) -> bool {
        self.cells[position.index()].is_none()
    }

    /// Places a mark on an empty cell.
    ///
    /// Returns `false` and leaves the board untouched if the cell is
    /// already occupied.
    #[instrument(skip(self), fields(position = %position, player = %player))]
    pub fn place_player(&mut self, position: Position, player: Player) -> bool {
        let cell = &mut self.cells[position.index()];
        if cell.is_some() {
            trace!("Cell already occupied");
            return false;
        }
        *cell = Some(player);
        true
    }

    /// Returns the mark at the given position.
    pub fn get_player(&self, position: Position) -> Option<Player> {
        self.cells[position.index()]
    }

    /// Checks if all 9 cells are marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Resets every cell to empty.
    #[instrument(skip(self))]
    pub fn clear(&mut self) {
        self.cells = [None; 9];
    }

    /// Enumerates all 9 cells in row-major order.
    pub fn all_positions(&self) -> Vec<Cell> {
        Position::ALL
            .iter()
            .map(|&position| Cell {
                position,
                player: self.get_player(position),
            })
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based index.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.cells[pos] {
                    None => (pos + 1).to_string(),
                    Some(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display())
    }
}
