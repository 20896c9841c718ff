//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from board storage so that the
//! engine, the invariants and the tests all share one definition of a win.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_full;
pub use lines::{Line, LineKind, Lines};
pub use win::{check_winner, winning_line};

use crate::{Board, GameResult};
use tracing::instrument;

/// Derives the result of a game from its board.
///
/// A full line wins, checked in the fixed order of [`Lines`]. Otherwise the
/// game is drawn once no empty cell remains.
#[instrument(skip_all, fields(size = board.size()))]
pub fn evaluate(board: &Board, lines: &Lines) -> GameResult {
    if let Some(player) = check_winner(board, lines) {
        GameResult::Won(player)
    } else if is_full(board) {
        GameResult::Draw
    } else {
        GameResult::InProgress
    }
}
