//! Candidate winning lines for an N×N board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which part of the board a line covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Row with the given index.
    Row(usize),
    /// Column with the given index.
    Column(usize),
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

/// A fixed-length sequence of flat board indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    cells: Vec<usize>,
}

impl Line {
    /// Returns which row, column or diagonal this line is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Flat indices covered by the line, in board order.
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    /// True if the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// The complete set of 2N+2 lines for one board size.
///
/// Order is fixed: rows, then columns, then the main diagonal, then the
/// anti-diagonal. Win detection scans them in this order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lines {
    size: usize,
    lines: Vec<Line>,
}

impl Lines {
    /// Builds every candidate line for a board of side `size`.
    #[instrument]
    pub fn for_size(size: usize) -> Self {
        let rows = (0..size).map(|r| Line {
            kind: LineKind::Row(r),
            cells: (0..size).map(|i| r * size + i).collect(),
        });
        let columns = (0..size).map(|c| Line {
            kind: LineKind::Column(c),
            cells: (0..size).map(|i| i * size + c).collect(),
        });
        let main = Line {
            kind: LineKind::MainDiagonal,
            cells: (0..size).map(|i| i * size + i).collect(),
        };
        let anti = Line {
            kind: LineKind::AntiDiagonal,
            cells: (0..size).map(|i| i * size + (size - 1 - i)).collect(),
        };

        let lines = rows
            .chain(columns)
            .chain([main, anti])
            .collect::<Vec<_>>();
        Self { size, lines }
    }

    /// Side length the lines were built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of lines (2N+2).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if there are no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterates lines in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }
}
