//! Strictly XO - Unified CLI
//!
//! Interactive terminal play and headless scripted games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_xo::script::{self, Snapshot};
use strictly_xo::tui::{self, App};
use strictly_xo::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command {
        Command::Play { mode, locale } => run_play(settings.with_overrides(mode, locale)),
        Command::Script {
            moves,
            mode,
            locale,
            json,
        } => run_script(settings.with_overrides(mode, locale), &moves, json),
    }
}

/// Run the interactive terminal UI
fn run_play(settings: Settings) -> Result<()> {
    init_file_logging(settings.log_file())?;
    info!(?settings, "Starting Strictly XO");

    tui::run(App::new(*settings.mode(), *settings.locale()))
}

/// Run a scripted game and print the result
fn run_script(settings: Settings, moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let moves = moves
        .iter()
        .map(|m| script::parse_move(m))
        .collect::<Result<Vec<_>, _>>()?;

    let (engine, outcomes) = script::play(*settings.mode(), &moves);

    if json {
        let snapshot = Snapshot::from(&engine);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        for (request, outcome) in moves.iter().zip(&outcomes) {
            if let Some(rejection) = outcome.rejection() {
                eprintln!("Skipped {:?}: {}", request, rejection);
            }
        }
        println!("{}", script::render_text(&engine, *settings.locale()));
    }

    Ok(())
}

/// Logs to a file so output does not interfere with the TUI
fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
