//! Single winner invariant.

use super::Invariant;
use crate::rules::win::line_owner;
use crate::{GameEngine, Player};

/// Invariant: a full X line and a full O line never coexist.
///
/// Play stops at the first completed line, so move alternation alone keeps
/// a second winner unreachable.
pub struct SingleWinnerInvariant;

impl Invariant<GameEngine> for SingleWinnerInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let owners = engine
            .lines()
            .iter()
            .filter_map(|line| line_owner(engine.board(), line))
            .collect::<Vec<_>>();
        !(owners.contains(&Player::X) && owners.contains(&Player::O))
    }

    fn description() -> &'static str {
        "At most one player holds a full line"
    }
}
