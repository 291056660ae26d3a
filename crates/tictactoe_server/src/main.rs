//! Tic Tac Toe - unified CLI
//!
//! Serves the browser game over HTTP or runs it in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_server::{ServerConfig, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,tictactoe_server=debug,tictactoe_engine=info";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let overrides = cli.command.overrides();

    match cli.command {
        Command::Serve { config, .. } => {
            initialize_tracing();
            let config = ServerConfig::load(config.as_deref(), overrides)?;
            tictactoe_server::serve(config).await
        }
        Command::Play => run_tui().await,
    }
}

/// Run the terminal game on a blocking thread.
async fn run_tui() -> Result<()> {
    // The TUI owns the terminal; only log when explicitly asked to.
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    info!("Starting terminal game");
    tokio::task::spawn_blocking(tui::run)
        .await
        .context("Terminal UI task panicked")?
}

fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        )
        .init();
}
