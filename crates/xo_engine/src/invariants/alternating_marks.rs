//! Alternating marks invariant: X never trails O and never leads by two.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: count(X) − count(O) is 0 or 1.
///
/// X moves first and players alternate, so any reachable board carries
/// either equal marks or one extra X.
pub struct AlternatingMarksInvariant;

impl Invariant<GameEngine> for AlternatingMarksInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let board = engine.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X marks equal O marks or exceed them by one"
    }
}
