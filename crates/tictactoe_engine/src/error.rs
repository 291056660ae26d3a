//! Position validation errors.

use derive_more::{Display, Error};
use tracing::instrument;

/// Grid axis a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Axis {
    /// Horizontal line index.
    #[display("Row")]
    Row,
    /// Vertical line index.
    #[display("Column")]
    Column,
}

/// What went wrong while building a [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum PositionErrorKind {
    /// Coordinate is not an integer in `[0, 2]`.
    #[display("{axis} must be between 0 and 2 (got {value})")]
    InvalidCoordinate {
        /// Axis that failed validation.
        axis: Axis,
        /// Rejected input, as text.
        value: String,
    },
}

/// Position construction error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Position error: {} at {}:{}", kind, file, line)]
pub struct PositionError {
    /// Error kind.
    pub kind: PositionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PositionError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: PositionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Shorthand for a [`PositionErrorKind::InvalidCoordinate`] error.
    #[track_caller]
    pub fn invalid_coordinate(axis: Axis, value: impl ToString) -> Self {
        Self::new(PositionErrorKind::InvalidCoordinate {
            axis,
            value: value.to_string(),
        })
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &PositionErrorKind {
        &self.kind
    }
}
