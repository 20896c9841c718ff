//! Headless play: apply a list of moves and report the outcome.

use crate::i18n::{self, Locale, MessageKey};
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, info, instrument};
use xo_engine::{Cell, GameEngine, GameResult, Mode, Move, MoveOutcome, Player, ScoreBoard};

/// A move argument that is not `row,col`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid move '{}': expected row,col", input)]
pub struct ScriptError {
    /// The offending argument.
    #[error(not(source))]
    pub input: String,
}

/// Parses `"row,col"` into signed coordinates.
///
/// Coordinates are not range-checked here; the engine rejects off-board
/// moves itself.
#[instrument]
pub fn parse_move(input: &str) -> Result<(isize, isize), ScriptError> {
    let error = || ScriptError {
        input: input.to_string(),
    };
    let (row, col) = input.split_once(',').ok_or_else(error)?;
    let row = row.trim().parse().map_err(|_| error())?;
    let col = col.trim().parse().map_err(|_| error())?;
    Ok((row, col))
}

/// Plays `moves` on a fresh `mode` game, returning each outcome.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn play(mode: Mode, moves: &[(isize, isize)]) -> (GameEngine, Vec<MoveOutcome>) {
    let mut engine = GameEngine::new(mode);
    let outcomes = moves
        .iter()
        .map(|(row, col)| {
            let outcome = engine.apply_move(*row, *col);
            debug!(row, col, ?outcome, "Scripted move");
            outcome
        })
        .collect::<Vec<_>>();
    info!(result = ?engine.result(), "Script finished");
    (engine, outcomes)
}

/// Serializable view of an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board mode.
    pub mode: Mode,
    /// Rows of cells, top to bottom.
    pub board: Vec<Vec<Cell>>,
    /// Player to move.
    pub to_move: Player,
    /// Current result.
    pub result: GameResult,
    /// Session score.
    pub scores: ScoreBoard,
    /// Accepted moves of this game.
    pub history: Vec<Move>,
}

impl From<&GameEngine> for Snapshot {
    fn from(engine: &GameEngine) -> Self {
        Self {
            mode: engine.mode(),
            board: engine
                .board()
                .cells()
                .chunks(engine.board().size())
                .map(<[Cell]>::to_vec)
                .collect(),
            to_move: engine.to_move(),
            result: engine.result(),
            scores: *engine.scores(),
            history: engine.history().to_vec(),
        }
    }
}

/// Renders the board, localized status and scoreboard as plain text.
#[instrument(skip(engine))]
pub fn render_text(engine: &GameEngine, locale: Locale) -> String {
    let scores = engine.scores();
    let text = |key: MessageKey| i18n::format(locale, key, &[]);
    [
        format!(
            "{} ({})",
            text(MessageKey::Title),
            text(MessageKey::for_mode(engine.mode()))
        ),
        engine.board().display(),
        i18n::status_message(locale, engine.result(), engine.to_move()),
        format!(
            "{}: {}  {}: {}  {}: {}",
            text(MessageKey::for_player(Player::X)),
            scores.wins(Player::X),
            text(MessageKey::ScoreboardDraws),
            scores.draws(),
            text(MessageKey::for_player(Player::O)),
            scores.wins(Player::O),
        ),
    ]
    .join("\n\n")
}
