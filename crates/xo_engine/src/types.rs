//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell carrying a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the player whose mark is in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }
}

/// Board dimension selected by the player.
///
/// The textual form (`"3x3"`, `"4x4"`, `"5x5"`) is shared by parsing,
/// display and serde.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Mode {
    /// Classic 3x3 board.
    #[default]
    #[serde(rename = "3x3")]
    #[strum(serialize = "3x3")]
    ThreeByThree,
    /// 4x4 board.
    #[serde(rename = "4x4")]
    #[strum(serialize = "4x4")]
    FourByFour,
    /// 5x5 board.
    #[serde(rename = "5x5")]
    #[strum(serialize = "5x5")]
    FiveByFive,
}

impl Mode {
    /// Side length N of the board.
    pub fn size(self) -> usize {
        match self {
            Mode::ThreeByThree => 3,
            Mode::FourByFour => 4,
            Mode::FiveByFive => 5,
        }
    }

    /// Number of cells (N²).
    pub fn cell_count(self) -> usize {
        self.size() * self.size()
    }
}

/// Square board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Active board mode.
    mode: Mode,
    /// Cells in row-major order, always `mode.cell_count()` long.
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board for `mode`.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            cells: vec![Cell::Empty; mode.cell_count()],
        }
    }

    /// Builds a board from row-major cells.
    ///
    /// Returns `None` unless `cells` holds exactly N² entries for `mode`.
    pub fn from_cells(mode: Mode, cells: Vec<Cell>) -> Option<Self> {
        (cells.len() == mode.cell_count()).then_some(Self { mode, cells })
    }

    /// Returns the board mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.mode.size()
    }

    /// Gets the cell at a flat index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.index_of(row, col).and_then(|index| self.get(index))
    }

    /// Converts `(row, col)` to a flat index, or `None` when off the board.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.size();
        (row < n && col < n).then(|| row * n + col)
    }

    /// Converts a flat index back to `(row, col)`.
    ///
    /// The index is not range-checked; pair with [`Board::index_of`].
    pub fn coords_of(&self, index: usize) -> (usize, usize) {
        let n = self.size();
        (index / n, index % n)
    }

    /// Places a cell value at a flat index.
    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Checks if the cell at `index` is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells carrying `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Marked(player))
            .count()
    }

    /// Number of non-empty cells.
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|cell| **cell != Cell::Empty).count()
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let n = self.size();
        let separator = vec!["-"; n].join("+");
        let mut result = String::new();
        for row in 0..n {
            let symbols = self.cells[row * n..(row + 1) * n]
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => ".",
                    Cell::Marked(Player::X) => "X",
                    Cell::Marked(Player::O) => "O",
                })
                .collect::<Vec<_>>();
            result.push_str(&symbols.join("|"));
            if row + 1 < n {
                result.push('\n');
                result.push_str(&separator);
                result.push('\n');
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}

/// Result of a game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameResult {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with a full line of this player's marks.
    Won(Player),
    /// Board is full and no line is won.
    Draw,
}

impl GameResult {
    /// True once the game is won or drawn.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Won(player) => Some(player),
            _ => None,
        }
    }
}
