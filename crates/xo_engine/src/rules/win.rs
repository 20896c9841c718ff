//! Win detection logic for tic-tac-toe.

use super::lines::{Line, Lines};
use crate::{Board, Cell, Player};
use tracing::instrument;

/// Returns the first line fully held by one player.
///
/// Lines are scanned in [`Lines`] order; a line wins when its first cell is
/// marked and every other cell matches it.
#[instrument(skip_all)]
pub fn winning_line<'a>(board: &Board, lines: &'a Lines) -> Option<&'a Line> {
    lines.iter().find(|line| line_owner(board, line).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player holds a full line, `None` otherwise.
#[instrument(skip_all)]
pub fn check_winner(board: &Board, lines: &Lines) -> Option<Player> {
    winning_line(board, lines).and_then(|line| line_owner(board, line))
}

/// Returns the player holding every cell of `line`.
pub fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    let (first, rest) = line.cells().split_first()?;
    let player = board.get(*first)?.mark()?;
    rest.iter()
        .all(|index| board.get(*index) == Some(Cell::Marked(player)))
        .then_some(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::LineKind;
    use crate::Mode;

    fn mark(board: &mut Board, player: Player, cells: &[usize]) {
        for index in cells {
            board.set(*index, Cell::Marked(player));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(Mode::ThreeByThree);
        assert_eq!(check_winner(&board, &Lines::for_size(3)), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new(Mode::ThreeByThree);
        mark(&mut board, Player::X, &[0, 1, 2]);
        assert_eq!(check_winner(&board, &Lines::for_size(3)), Some(Player::X));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new(Mode::ThreeByThree);
        mark(&mut board, Player::O, &[0, 4, 8]);
        assert_eq!(check_winner(&board, &Lines::for_size(3)), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new(Mode::FourByFour);
        mark(&mut board, Player::X, &[0, 1, 2]);
        assert_eq!(check_winner(&board, &Lines::for_size(4)), None);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let mut board = Board::new(Mode::FourByFour);
        mark(&mut board, Player::X, &[3, 6, 9]);
        mark(&mut board, Player::O, &[12]);
        assert_eq!(check_winner(&board, &Lines::for_size(4)), None);
    }

    #[test]
    fn test_winning_line_reports_anti_diagonal_on_5x5() {
        let mut board = Board::new(Mode::FiveByFive);
        mark(&mut board, Player::X, &[4, 8, 12, 16, 20]);
        let lines = Lines::for_size(5);
        let line = winning_line(&board, &lines).expect("anti-diagonal wins");
        assert_eq!(line.kind(), LineKind::AntiDiagonal);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        let mut board = Board::new(Mode::ThreeByThree);
        mark(&mut board, Player::X, &[0, 1, 2, 3, 6]);
        let lines = Lines::for_size(3);
        assert_eq!(
            winning_line(&board, &lines).map(Line::kind),
            Some(LineKind::Row(0))
        );
    }
}
