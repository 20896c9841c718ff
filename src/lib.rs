//! Strictly XO - bilingual tic-tac-toe on 3x3, 4x4 and 5x5 boards.
//!
//! # Architecture
//!
//! - **Engine** ([`xo_engine`]): board, turns, win/draw detection and score
//! - **i18n**: English and Thai message tables with `{param}` substitution
//! - **TUI**: ratatui front end forwarding keys and clicks to the engine
//! - **Script**: headless play for a list of moves, as text or JSON
//!
//! # Example
//!
//! ```
//! use strictly_xo::i18n::{Locale, status_message};
//! use xo_engine::{GameEngine, Mode};
//!
//! let mut engine = GameEngine::new(Mode::FourByFour);
//! engine.apply_move(0, 3);
//! assert_eq!(
//!     status_message(Locale::En, engine.result(), engine.to_move()),
//!     "Player O's Turn"
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod i18n;
pub mod script;
mod settings;
pub mod tui;

// Crate-level exports - Settings
pub use settings::{ConfigError, DEFAULT_SETTINGS_FILE, Settings};

// Crate-level exports - Localization
pub use i18n::{Locale, MessageKey, Translations};

// Crate-level exports - Game types
pub use xo_engine::{
    Board, Cell, GameEngine, GameResult, Mode, Move, MoveOutcome, Player, Rejection, ScoreBoard,
};
