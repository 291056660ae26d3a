//! Terminal UI for local two-player games.

mod app;
mod ui;

pub use app::{App, move_cursor, result_text, status_text};
pub use ui::draw;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{info, instrument};

/// Runs the terminal game until the player quits.
///
/// Takes over the terminal and restores it before returning, including on
/// error.
#[instrument]
pub fn run() -> Result<()> {
    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, App::new());
    ratatui::restore();
    info!("Terminal restored");
    result
}

fn run_app(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, &app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
