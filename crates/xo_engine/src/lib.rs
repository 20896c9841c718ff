//! Pure tic-tac-toe rules for square boards.
//!
//! The engine tracks one game on a 3x3, 4x4 or 5x5 board together with a
//! running score across games. It never produces display strings; the
//! presentation layer reads structured state after every call.
//!
//! # Example
//!
//! ```
//! use xo_engine::{GameEngine, GameResult, Mode, MoveOutcome, Player};
//!
//! let mut engine = GameEngine::new(Mode::ThreeByThree);
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     engine.apply_move(row, col);
//! }
//! assert_eq!(engine.result(), GameResult::Won(Player::X));
//! assert_eq!(*engine.scores().wins_x(), 1);
//!
//! // Terminal games reject further moves without touching state.
//! assert!(matches!(engine.apply_move(2, 2), MoveOutcome::Rejected(_)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
pub mod invariants;
pub mod rules;
mod score;
mod types;

pub use action::{Move, MoveOutcome, Rejection};
pub use contracts::{CellIsEmpty, GameNotOver, InBounds, LegalMove};
pub use engine::GameEngine;
pub use rules::{Line, LineKind, Lines, evaluate};
pub use score::ScoreBoard;
pub use types::{Board, Cell, GameResult, Mode, Player};
