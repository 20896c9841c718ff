//! Cached result invariant.

use super::Invariant;
use crate::GameEngine;
use crate::rules::evaluate;

/// Invariant: the stored result equals a fresh evaluation of the board.
pub struct ResultConsistentInvariant;

impl Invariant<GameEngine> for ResultConsistentInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.result() == evaluate(engine.board(), engine.lines())
    }

    fn description() -> &'static str {
        "Stored result matches the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameResult, Mode};

    #[test]
    fn test_fresh_engine_holds() {
        assert!(ResultConsistentInvariant::holds(&GameEngine::new(Mode::FourByFour)));
    }

    #[test]
    fn test_stale_result_violates() {
        let mut engine = GameEngine::new(Mode::ThreeByThree);
        engine.result = GameResult::Draw;
        assert!(!ResultConsistentInvariant::holds(&engine));
    }
}
