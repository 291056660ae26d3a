//! HTTP application: shared state, routing and the serve loop.

use crate::config::ServerConfig;
use crate::shutdown::shutdown_signal;
use crate::{api, static_files};
use anyhow::{Context, Result};
use axum::{
    Router,
    extract::Request,
    routing::{get, post},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tictactoe_engine::Engine;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tracing::{info, instrument};

/// State shared by every request handler.
///
/// Holds the one game session this server hosts. Requests lock the engine
/// for the duration of a single operation, so moves apply strictly one at
/// a time.
#[derive(Debug, Clone)]
pub struct AppState {
    engine: Arc<Mutex<Engine>>,
    static_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates state with a fresh game.
    #[instrument]
    pub fn new(static_dir: PathBuf) -> Self {
        Self {
            engine: Arc::new(Mutex::new(Engine::new())),
            static_dir: Arc::new(static_dir),
        }
    }

    /// The game session.
    pub fn engine(&self) -> &Mutex<Engine> {
        &self.engine
    }

    /// Root directory for static files.
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/game", get(api::get_game))
        .route("/game/move", post(api::make_move))
        .route("/game/reset", post(api::reset_game));

    Router::new()
        .nest("/api", api)
        .fallback(static_files::serve_static)
        .layer(ServiceBuilder::new().map_request(log_request))
        .with_state(state)
}

fn log_request(req: Request) -> Request {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

/// Binds the listener and serves until a shutdown signal arrives.
#[instrument(skip(config), fields(host = %config.host(), port = config.port()))]
pub async fn serve(config: ServerConfig) -> Result<()> {
    let state = AppState::new(config.static_dir().clone());

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port()))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host(), config.port()))?;
    let addr = listener
        .local_addr()
        .context("Failed to read bound address")?;

    info!("Tic Tac Toe game server");
    info!(%addr, "Server running at http://{}", addr);
    info!(static_dir = %config.static_dir().display(), "Serving browser UI");
    info!("Press Ctrl+C to stop the server");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped successfully");
    Ok(())
}
