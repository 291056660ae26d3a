//! Command-line interface for the tic-tac-toe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_server::ConfigOverrides;

/// Tic Tac Toe - two-player game in the browser or the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the browser UI and game API over HTTP
    Serve {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory containing index.html and its assets
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Play in the terminal
    Play,
}

impl Command {
    /// Collects explicit `serve` flags.
    pub fn overrides(&self) -> ConfigOverrides {
        match self {
            Command::Serve {
                host,
                port,
                static_dir,
                ..
            } => ConfigOverrides {
                host: host.clone(),
                port: *port,
                static_dir: static_dir.clone(),
            },
            Command::Play => ConfigOverrides::default(),
        }
    }
}
