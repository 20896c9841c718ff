//! Running score across games in one session.

use crate::{GameResult, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win and draw counters, cleared only by an explicit reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, Serialize, Deserialize)]
pub struct ScoreBoard {
    /// Games won by X.
    wins_x: u32,
    /// Games won by O.
    wins_o: u32,
    /// Drawn games.
    draws: u32,
}

impl ScoreBoard {
    /// Creates a zeroed score board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.wins_x,
            Player::O => self.wins_o,
        }
    }

    /// Total number of completed games.
    pub fn games(&self) -> u32 {
        self.wins_x + self.wins_o + self.draws
    }

    /// Counts a completed game. In-progress results are ignored.
    #[instrument(skip(self))]
    pub(crate) fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Won(Player::X) => self.wins_x += 1,
            GameResult::Won(Player::O) => self.wins_o += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::InProgress => return,
        }
        debug!(wins_x = self.wins_x, wins_o = self.wins_o, draws = self.draws, "Score recorded");
    }

    /// Sets every counter back to zero.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_result() {
        let mut scores = ScoreBoard::new();
        scores.record(GameResult::Won(Player::X));
        scores.record(GameResult::Won(Player::O));
        scores.record(GameResult::Won(Player::O));
        scores.record(GameResult::Draw);
        scores.record(GameResult::InProgress);

        assert_eq!(*scores.wins_x(), 1);
        assert_eq!(scores.wins(Player::O), 2);
        assert_eq!(*scores.draws(), 1);
        assert_eq!(scores.games(), 4);
    }

    #[test]
    fn test_reset_zeroes() {
        let mut scores = ScoreBoard::new();
        scores.record(GameResult::Draw);
        scores.reset();
        assert_eq!(scores, ScoreBoard::new());
    }
}
