//! Terminal UI for the game.

mod app;
mod input;
mod ui;

pub use app::{Action, App, Direction};
pub use input::{action_for_key, action_for_mouse};
pub use ui::{cell_at, draw};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{debug, error, info, instrument, warn};

/// Raw mode and alternate screen, undone on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Failed to disable raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
            warn!(error = %err, "Failed to leave alternate screen");
        }
    }
}

/// Runs the interactive game until the user quits.
#[instrument(skip(app))]
pub fn run(mut app: App) -> Result<()> {
    info!(mode = %app.engine().mode(), locale = %app.locale(), "Starting terminal UI");

    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = event_loop(&mut terminal, &mut app);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(scores = ?app.engine().scores(), "Terminal UI closed");
    res
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut board = Rect::default();

    while !app.should_quit() {
        terminal.draw(|frame| {
            board = ui::draw(frame, app);
        })?;

        let action = match event::read()? {
            Event::Key(key) => action_for_key(key),
            Event::Mouse(mouse) => {
                action_for_mouse(mouse, board, app.engine().board().size())
            }
            _ => None,
        };

        if let Some(action) = action {
            app.handle(action);
        } else {
            debug!("Ignoring unmapped event");
        }
    }

    Ok(())
}
