//! Command-line interface for strictly_xo.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_xo::{Locale, Mode};

/// Strictly XO - tic-tac-toe on 3x3, 4x4 and 5x5 boards
#[derive(Parser, Debug)]
#[command(name = "strictly_xo")]
#[command(about = "Bilingual tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (defaults to ./strictly_xo.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Board size: 3x3, 4x4 or 5x5
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Display language: en or th
        #[arg(short, long)]
        locale: Option<Locale>,
    },

    /// Apply a list of moves and print the resulting game
    Script {
        /// Moves as row,col (zero-based), X first
        #[arg(required = true, allow_hyphen_values = true)]
        moves: Vec<String>,

        /// Board size: 3x3, 4x4 or 5x5
        #[arg(short, long)]
        mode: Option<Mode>,

        /// Display language: en or th
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Print a JSON snapshot instead of text
        #[arg(long)]
        json: bool,
    },
}
