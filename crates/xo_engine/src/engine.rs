//! The game engine: one board, whose turn it is, and the session score.

use crate::contracts::LegalMove;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::rules::{self, Line, Lines};
use crate::{Board, Cell, GameResult, Mode, Move, MoveOutcome, Player, ScoreBoard};
use tracing::{debug, info, instrument};

/// Owns the current game and the running score.
///
/// Board state and score are separate fields so that starting a new game
/// never touches the score and resetting the score never touches the board.
/// A rejected move leaves the engine equal to its previous value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) result: GameResult,
    pub(crate) scores: ScoreBoard,
    pub(crate) history: Vec<Move>,
    lines: Lines,
}

impl GameEngine {
    /// Creates an engine with a fresh `mode` game and a zeroed score.
    #[instrument]
    pub fn new(mode: Mode) -> Self {
        Self {
            board: Board::new(mode),
            to_move: Player::X,
            result: GameResult::InProgress,
            scores: ScoreBoard::new(),
            history: Vec::new(),
            lines: Lines::for_size(mode.size()),
        }
    }

    /// Starts a new game of `mode`. X moves first; the score is kept.
    #[instrument(skip(self), fields(previous = %self.board.mode()))]
    pub fn new_game(&mut self, mode: Mode) {
        if self.lines.size() != mode.size() {
            self.lines = Lines::for_size(mode.size());
        }
        self.board = Board::new(mode);
        self.to_move = Player::X;
        self.result = GameResult::InProgress;
        self.history.clear();
        info!(%mode, "New game started");
    }

    /// Sets every score counter back to zero. The board is untouched.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores.reset();
        info!("Scores reset");
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// The request is rejected, leaving every field unchanged, when the game
    /// is over, the coordinates are off the board, or the cell is taken
    /// (checked in that order). An accepted move that ends the game bumps the
    /// matching score counter once; otherwise the turn passes.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, row: isize, col: isize) -> MoveOutcome {
        let index = match LegalMove::check(self, row, col) {
            Ok(index) => index,
            Err(rejection) => {
                debug!(%rejection, "Move rejected");
                return MoveOutcome::Rejected(rejection);
            }
        };

        let player = self.to_move;
        let (row, col) = self.board.coords_of(index);
        self.board.set(index, Cell::Marked(player));
        self.history.push(Move::new(player, row, col));

        self.result = rules::evaluate(&self.board, &self.lines);
        if self.result.is_terminal() {
            self.scores.record(self.result);
            info!(result = ?self.result, moves = self.history.len(), "Game finished");
        } else {
            self.to_move = player.opponent();
        }

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "Invariant violated after move"
        );

        MoveOutcome::Accepted(self.result)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the active mode.
    pub fn mode(&self) -> Mode {
        self.board.mode()
    }

    /// Returns the player to move. Frozen once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the current game result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns the session score.
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Accepted moves of the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Most recent accepted move of the current game.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Returns the cell at `(row, col)`.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.cell(row, col)
    }

    /// Candidate lines for the active board size.
    pub fn lines(&self) -> &Lines {
        &self.lines
    }

    /// The line that decided a won game.
    pub fn winning_line(&self) -> Option<&Line> {
        rules::winning_line(&self.board, &self.lines)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(Mode::default())
    }
}
