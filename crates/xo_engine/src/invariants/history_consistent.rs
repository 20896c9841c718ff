//! History consistency invariant: recorded moves match the board.

use super::Invariant;
use crate::{Cell, GameEngine, Player};

/// Invariant: move history is consistent with the board state.
///
/// History holds one move per marked cell, starts with X, alternates, and
/// every recorded cell still carries the recorded player's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameEngine> for HistoryConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();
        let board = engine.board();

        if history.len() != board.filled() {
            return false;
        }

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == if i % 2 == 0 { Player::X } else { Player::O });

        alternates
            && history
                .iter()
                .all(|mv| board.cell(mv.row, mv.col) == Some(Cell::Marked(mv.player)))
    }

    fn description() -> &'static str {
        "Move history alternates from X and matches the marked cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mode, Move};

    #[test]
    fn test_history_matches_after_moves() {
        let mut engine = GameEngine::new(Mode::ThreeByThree);
        engine.apply_move(0, 0);
        engine.apply_move(2, 2);
        engine.apply_move(0, 0); // rejected, not recorded
        assert_eq!(engine.history().len(), 2);
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut engine = GameEngine::new(Mode::ThreeByThree);
        engine.apply_move(0, 0);
        engine.board.set(8, Cell::Marked(Player::O));
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_wrong_recorded_player_violates() {
        let mut engine = GameEngine::new(Mode::ThreeByThree);
        engine.apply_move(0, 0);
        engine.history[0] = Move::new(Player::O, 0, 0);
        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}
