//! Tic-tac-toe server library.
//!
//! Hosts one game session from [`tictactoe_engine`] and exposes it to
//! players in two ways.
//!
//! # Architecture
//!
//! - **HTTP**: static file server for the browser UI plus a small JSON API
//! - **TUI**: local two-player terminal game
//! - **Config**: defaults, TOML file, `PORT` environment variable, CLI flags
//!
//! # Example
//!
//! ```no_run
//! use tictactoe_server::{ConfigOverrides, ServerConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::load(None, ConfigOverrides::default())?;
//! tictactoe_server::serve(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod api;
mod app;
mod config;
mod shutdown;
mod static_files;
pub mod tui;

// Crate-level exports - HTTP application
pub use app::{AppState, router, serve};

// Crate-level exports - JSON API types
pub use api::{ApiError, MoveRequest, MoveResponse};

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigOverrides, PORT_ENV, ServerConfig};

// Crate-level exports - Static files
pub use static_files::{content_type, resolve};

// Crate-level exports - Signals
pub use shutdown::shutdown_signal;
