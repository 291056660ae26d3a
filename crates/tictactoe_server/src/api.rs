//! JSON API over the single in-process game session.

use crate::app::AppState;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use tictactoe_engine::{Axis, GameSnapshot, Position, PositionError};
use tracing::{debug, info, instrument, warn};

/// Request for making a move.
///
/// Coordinates arrive as raw JSON numbers so that fractional or negative
/// values reach position validation instead of failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Row index (0-2).
    pub row: Number,
    /// Column index (0-2).
    pub column: Number,
}

impl MoveRequest {
    /// Validates the coordinates into a board position.
    pub fn position(&self) -> Result<Position, PositionError> {
        let row = integral(&self.row, Axis::Row)?;
        let column = integral(&self.column, Axis::Column)?;
        Position::try_from((row, column))
    }
}

/// Accepts integers, including integral floats such as `1.0`.
fn integral(value: &Number, axis: Axis) -> Result<i64, PositionError> {
    value
        .as_i64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() <= i32::MAX as f64)
                .map(|f| f as i64)
        })
        .ok_or_else(|| PositionError::invalid_coordinate(axis, value))
}

/// Outcome of a move request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Whether the engine accepted the move.
    pub accepted: bool,
    /// Game after the request.
    pub game: GameSnapshot,
}

/// Error body returned for rejected requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable description.
    pub message: String,
}

impl From<PositionError> for ApiError {
    fn from(err: PositionError) -> Self {
        Self {
            error: "invalid_coordinate".to_string(),
            message: err.kind().to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

/// `GET /api/game`
#[instrument(skip(state))]
pub async fn get_game(State(state): State<AppState>) -> Json<GameSnapshot> {
    Json(state.engine().lock().await.snapshot())
}

/// `POST /api/game/move`
#[instrument(skip(state))]
pub async fn make_move(
    State(state): State<AppState>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let position = req.position().map_err(|e| {
        warn!(error = %e.kind(), "Rejected move coordinates");
        ApiError::from(e)
    })?;

    let mut engine = state.engine().lock().await;
    let accepted = engine.make_move(position);
    let game = engine.snapshot();

    if accepted {
        info!(%position, state = %game.state, "Move accepted");
    } else {
        debug!(%position, "Move rejected by engine");
    }

    Ok(Json(MoveResponse { accepted, game }))
}

/// `POST /api/game/reset`
#[instrument(skip(state))]
pub async fn reset_game(State(state): State<AppState>) -> Json<GameSnapshot> {
    let mut engine = state.engine().lock().await;
    engine.reset_game();
    Json(engine.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> MoveRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_integer_coordinates() {
        let pos = request(r#"{"row": 2, "column": 1}"#).position().unwrap();
        assert_eq!((pos.row(), pos.column()), (2, 1));
    }

    #[test]
    fn test_integral_float_accepted() {
        let pos = request(r#"{"row": 1.0, "column": 0}"#).position().unwrap();
        assert_eq!((pos.row(), pos.column()), (1, 0));
    }

    #[test]
    fn test_fractional_rejected() {
        assert!(request(r#"{"row": 1.5, "column": 0}"#).position().is_err());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(request(r#"{"row": -1, "column": 0}"#).position().is_err());
        assert!(request(r#"{"row": 0, "column": 3}"#).position().is_err());
    }

    #[test]
    fn test_api_error_from_position_error() {
        let err = request(r#"{"row": 0, "column": 9}"#).position().unwrap_err();
        let api = ApiError::from(err);
        assert_eq!(api.error, "invalid_coordinate");
        assert_eq!(api.message, "Column must be between 0 and 2 (got 9)");
    }
}
