//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. A move request is either
//! accepted, producing a [`Move`] in the game history, or rejected with a
//! [`Rejection`] describing why nothing changed.

use crate::{GameResult, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// An accepted move: a player's mark placed at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player who moved.
    pub player: Player,
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.row, self.col)
    }
}

/// Reason a move request left the game untouched.
///
/// Clicking a finished board or a taken cell produces one of these; callers
/// treat it as a normal outcome rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The coordinates fall outside the board.
    #[display("({}, {}) is off a {}x{} board", row, col, size, size)]
    OutOfBounds {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
        /// Side length of the board.
        size: usize,
    },

    /// The target cell already carries a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// What happened to a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed; carries the freshly evaluated result.
    Accepted(GameResult),
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveOutcome {
    /// True if the move changed the board.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }

    /// Result after an accepted move.
    pub fn result(&self) -> Option<GameResult> {
        match self {
            MoveOutcome::Accepted(result) => Some(*result),
            MoveOutcome::Rejected(_) => None,
        }
    }

    /// Reason for a rejected move.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(rejection) => Some(*rejection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Player::O, 1, 2).to_string(), "O -> (1, 2)");
    }

    #[test]
    fn test_rejection_messages() {
        let off = Rejection::OutOfBounds { row: -1, col: 0, size: 4 };
        assert_eq!(off.to_string(), "(-1, 0) is off a 4x4 board");
        assert_eq!(
            Rejection::CellOccupied { row: 0, col: 2 }.to_string(),
            "Cell (0, 2) is already occupied"
        );
    }

    #[test]
    fn test_outcome_accessors() {
        let accepted = MoveOutcome::Accepted(GameResult::Draw);
        assert!(accepted.is_accepted());
        assert_eq!(accepted.result(), Some(GameResult::Draw));
        assert_eq!(accepted.rejection(), None);

        let rejected = MoveOutcome::Rejected(Rejection::GameOver);
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.result(), None);
        assert_eq!(rejected.rejection(), Some(Rejection::GameOver));
    }
}
