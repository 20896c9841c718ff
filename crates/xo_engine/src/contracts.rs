//! Preconditions for move requests.
//!
//! Each precondition is a small checker returning the [`Rejection`] it
//! detects. [`LegalMove`] composes them in the order the engine enforces:
//! game over first, then bounds, then occupancy.

use crate::{GameEngine, Rejection};
use tracing::instrument;

/// Precondition: the game has not reached a terminal result.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects when the game is won or drawn.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine) -> Result<(), Rejection> {
        if engine.result().is_terminal() {
            Err(Rejection::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the coordinates fall on the board.
pub struct InBounds;

impl InBounds {
    /// Returns the flat index for `(row, col)` or rejects.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine, row: isize, col: isize) -> Result<usize, Rejection> {
        let out_of_bounds = Rejection::OutOfBounds {
            row,
            col,
            size: engine.board().size(),
        };
        let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
            return Err(out_of_bounds);
        };
        engine.board().index_of(r, c).ok_or(out_of_bounds)
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects when the cell at `index` carries a mark.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine, index: usize) -> Result<(), Rejection> {
        if engine.board().is_empty(index) {
            Ok(())
        } else {
            let (row, col) = engine.board().coords_of(index);
            Err(Rejection::CellOccupied { row, col })
        }
    }
}

/// Composite precondition for a move request.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions, returning the flat index to mark.
    #[instrument(skip(engine))]
    pub fn check(engine: &GameEngine, row: isize, col: isize) -> Result<usize, Rejection> {
        GameNotOver::check(engine)?;
        let index = InBounds::check(engine, row, col)?;
        CellIsEmpty::check(engine, index)?;
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    #[test]
    fn test_precondition_empty_cell() {
        let engine = GameEngine::new(Mode::ThreeByThree);
        assert_eq!(LegalMove::check(&engine, 1, 1), Ok(4));
    }

    #[test]
    fn test_precondition_negative_coordinates() {
        let engine = GameEngine::new(Mode::FourByFour);
        assert_eq!(
            InBounds::check(&engine, -1, 0),
            Err(Rejection::OutOfBounds { row: -1, col: 0, size: 4 })
        );
        assert!(InBounds::check(&engine, 0, 4).is_err());
        assert_eq!(InBounds::check(&engine, 3, 3), Ok(15));
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut engine = GameEngine::new(Mode::ThreeByThree);
        engine.apply_move(0, 2);
        assert_eq!(
            LegalMove::check(&engine, 0, 2),
            Err(Rejection::CellOccupied { row: 0, col: 2 })
        );
    }

    #[test]
    fn test_game_over_checked_before_bounds() {
        let mut engine = GameEngine::new(Mode::ThreeByThree);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.apply_move(row, col);
        }
        assert_eq!(LegalMove::check(&engine, 9, 9), Err(Rejection::GameOver));
    }
}
