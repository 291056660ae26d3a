//! Tests for the JSON game API.

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tictactoe_engine::{GameSnapshot, GameState, Player};
use tictactoe_server::{AppState, MoveResponse, router};
use tower::ServiceExt;

fn state() -> AppState {
    AppState::new(std::env::temp_dir())
}

async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get_game(state: &AppState) -> GameSnapshot {
    let request = Request::get("/api/game").body(Body::empty()).unwrap();
    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

async fn post_move(state: &AppState, body: Value) -> (StatusCode, Vec<u8>) {
    let request = Request::post("/api/game/move")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(state, request).await
}

async fn play(state: &AppState, row: i64, column: i64) -> MoveResponse {
    let (status, body) = post_move(state, json!({ "row": row, "column": column })).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_initial_game() {
    let state = state();
    let game = get_game(&state).await;
    assert_eq!(game.state, GameState::Playing);
    assert_eq!(game.current_player, Player::X);
    assert_eq!(game.cells.len(), 9);
    assert!(game.cells.iter().all(|c| c.player.is_none()));
    assert_eq!(game.winning_line, None);
}

#[tokio::test]
async fn test_move_accepted_then_duplicate_rejected() {
    let state = state();

    let first = play(&state, 1, 1).await;
    assert!(first.accepted);
    assert_eq!(first.game.current_player, Player::O);
    assert_eq!(first.game.cells[4].player, Some(Player::X));

    let second = play(&state, 1, 1).await;
    assert!(!second.accepted);
    assert_eq!(second.game.current_player, Player::O);
}

#[tokio::test]
async fn test_win_reported_and_further_moves_rejected() {
    let state = state();
    for (row, column) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        assert!(play(&state, row, column).await.accepted);
    }

    let winning = play(&state, 0, 2).await;
    assert!(winning.accepted);
    assert_eq!(winning.game.state, GameState::PlayerXWon);
    let line = winning.game.winning_line.expect("winning line");
    assert_eq!(line.map(|p| (p.row(), p.column())), [(0, 0), (0, 1), (0, 2)]);

    let after = play(&state, 2, 2).await;
    assert!(!after.accepted);
    assert_eq!(after.game.state, GameState::PlayerXWon);
    assert_eq!(after.game.cells[8].player, None);
}

#[tokio::test]
async fn test_invalid_coordinates_rejected() {
    let state = state();
    for body in [
        json!({ "row": 3, "column": 0 }),
        json!({ "row": -1, "column": 0 }),
        json!({ "row": 0, "column": 1.5 }),
    ] {
        let (status, body) = post_move(&state, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(error["error"], "invalid_coordinate");
    }

    // Rejected requests leave the game untouched.
    let game = get_game(&state).await;
    assert!(game.cells.iter().all(|c| c.player.is_none()));
    assert_eq!(game.current_player, Player::X);
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let state = state();
    let request = Request::post("/api/game/move")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"row\": 1}"))
        .unwrap();
    let (status, _) = send(&state, request).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_reset_returns_fresh_game() {
    let state = state();
    play(&state, 1, 1).await;
    play(&state, 0, 0).await;

    let request = Request::post("/api/game/reset").body(Body::empty()).unwrap();
    let (status, body) = send(&state, request).await;
    assert_eq!(status, StatusCode::OK);

    let game: GameSnapshot = serde_json::from_slice(&body).unwrap();
    assert_eq!(game, get_game(&state).await);
    assert_eq!(game.state, GameState::Playing);
    assert_eq!(game.current_player, Player::X);
    assert!(game.cells.iter().all(|c| c.player.is_none()));
}

#[tokio::test]
async fn test_draw_over_http() {
    let state = state();
    let moves = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (2, 0), (1, 2), (2, 2), (2, 1)];
    let mut last = None;
    for (row, column) in moves {
        let response = play(&state, row, column).await;
        assert!(response.accepted);
        last = Some(response);
    }
    assert_eq!(last.unwrap().game.state, GameState::Draw);
}
