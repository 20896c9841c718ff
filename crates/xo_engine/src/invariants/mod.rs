//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold for every engine state
//! reachable through `new_game` and `apply_move`. The engine checks them in
//! debug builds after each accepted move; tests check them directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_marks;
pub mod history_consistent;
pub mod result_consistent;
pub mod single_winner;

pub use alternating_marks::AlternatingMarksInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use result_consistent::ResultConsistentInvariant;
pub use single_winner::SingleWinnerInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    AlternatingMarksInvariant,
    HistoryConsistentInvariant,
    SingleWinnerInvariant,
    ResultConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, GameEngine, Mode, Player};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        let engine = GameEngine::new(Mode::FiveByFive);
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new(Mode::FourByFour);
        for (row, col) in [(0, 0), (1, 1), (2, 2), (3, 3)] {
            engine.apply_move(row, col);
        }
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut engine = GameEngine::new(Mode::ThreeByThree);
        engine.apply_move(1, 1);

        // Corrupt the board behind the engine's back
        engine.board.set(0, Cell::Marked(Player::X));

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert!(violations.len() >= 2);
        assert!(
            violations
                .iter()
                .any(|v| v.description == AlternatingMarksInvariant::description())
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new(Mode::ThreeByThree);
        type TwoInvariants = (AlternatingMarksInvariant, SingleWinnerInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
