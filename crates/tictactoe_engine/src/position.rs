//! Validated board coordinates.

use crate::error::{Axis, PositionError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Largest valid row or column index.
const MAX_COORDINATE: usize = 2;

/// A `(row, column)` coordinate on the 3x3 grid.
///
/// Both indices are checked at construction, so every `Position` in
/// circulation addresses a real cell. There are no mutators: positions are
/// plain values and are copied wherever they go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    column: usize,
}

/// Unvalidated wire form of a position.
#[derive(Deserialize)]
struct RawPosition {
    row: i64,
    column: i64,
}

impl TryFrom<RawPosition> for Position {
    type Error = PositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::try_from((raw.row, raw.column))
    }
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    /// Creates a position, rejecting indices outside `[0, 2]`.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, PositionError> {
        if row > MAX_COORDINATE {
            return Err(PositionError::invalid_coordinate(Axis::Row, row));
        }
        if column > MAX_COORDINATE {
            return Err(PositionError::invalid_coordinate(Axis::Column, column));
        }
        Ok(Self::at(row, column))
    }

    /// Unchecked constructor for compile-time tables.
    pub(crate) const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row index (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 = left).
    pub fn column(self) -> usize {
        self.column
    }

    /// Row-major board index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.column
    }

    /// Creates position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl TryFrom<(i64, i64)> for Position {
    type Error = PositionError;

    fn try_from((row, column): (i64, i64)) -> Result<Self, Self::Error> {
        let row = usize::try_from(row)
            .map_err(|_| PositionError::invalid_coordinate(Axis::Row, row))?;
        let column = usize::try_from(column)
            .map_err(|_| PositionError::invalid_coordinate(Axis::Column, column))?;
        Position::new(row, column)
    }
}

impl FromStr for Position {
    type Err = PositionError;

    /// Parses the canonical `"{row},{column}"` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column) = s.split_once(',').unwrap_or((s, ""));
        let row = row
            .trim()
            .parse::<i64>()
            .map_err(|_| PositionError::invalid_coordinate(Axis::Row, row.trim()))?;
        let column = column
            .trim()
            .parse::<i64>()
            .map_err(|_| PositionError::invalid_coordinate(Axis::Column, column.trim()))?;
        Position::try_from((row, column))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}
