//! Localized text for the game.
//!
//! Every display string comes from a fixed key set looked up in a per-locale
//! [`Translations`] table. Templates carry `{name}` placeholders that
//! [`format`] fills from caller-supplied parameters.

mod en;
mod th;

pub use en::EN;
pub use th::TH;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::{debug, instrument};
use xo_engine::{GameResult, Mode, Player};

/// Display language.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Thai.
    Th,
}

impl Locale {
    /// Returns the translation table for this locale.
    pub fn translations(self) -> &'static Translations {
        match self {
            Locale::En => &EN,
            Locale::Th => &TH,
        }
    }

    /// The language's name written in that language.
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => EN.language.english,
            Locale::Th => TH.language.thai,
        }
    }

    /// Switches between the two supported locales.
    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Th,
            Locale::Th => Locale::En,
        }
    }
}

/// Every message the game can display.
///
/// The textual form is the dotted lookup path, e.g. `gameStatus.playerTurn`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
pub enum MessageKey {
    /// Game title.
    #[strum(serialize = "title")]
    Title,
    /// Mode selector label for 3x3.
    #[strum(serialize = "navbar.3x3")]
    Navbar3x3,
    /// Mode selector label for 4x4.
    #[strum(serialize = "navbar.4x4")]
    Navbar4x4,
    /// Mode selector label for 5x5.
    #[strum(serialize = "navbar.5x5")]
    Navbar5x5,
    /// Scoreboard heading for X.
    #[strum(serialize = "scoreboard.playerX")]
    ScoreboardPlayerX,
    /// Scoreboard heading for O.
    #[strum(serialize = "scoreboard.playerO")]
    ScoreboardPlayerO,
    /// Scoreboard heading for draws.
    #[strum(serialize = "scoreboard.draws")]
    ScoreboardDraws,
    /// Whose turn it is; takes `{player}`.
    #[strum(serialize = "gameStatus.playerTurn")]
    StatusPlayerTurn,
    /// Who won; takes `{player}`.
    #[strum(serialize = "gameStatus.playerWins")]
    StatusPlayerWins,
    /// Draw announcement.
    #[strum(serialize = "gameStatus.draw")]
    StatusDraw,
    /// New game button.
    #[strum(serialize = "controls.newGame")]
    ControlsNewGame,
    /// Reset scores button.
    #[strum(serialize = "controls.resetScores")]
    ControlsResetScores,
    /// Name of English.
    #[strum(serialize = "language.english")]
    LanguageEnglish,
    /// Name of Thai.
    #[strum(serialize = "language.thai")]
    LanguageThai,
}

impl MessageKey {
    /// Selector label key for a board mode.
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::ThreeByThree => MessageKey::Navbar3x3,
            Mode::FourByFour => MessageKey::Navbar4x4,
            Mode::FiveByFive => MessageKey::Navbar5x5,
        }
    }

    /// Scoreboard heading key for a player.
    pub fn for_player(player: Player) -> Self {
        match player {
            Player::X => MessageKey::ScoreboardPlayerX,
            Player::O => MessageKey::ScoreboardPlayerO,
        }
    }
}

/// Mode selector labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navbar {
    /// 3x3 label.
    pub three: &'static str,
    /// 4x4 label.
    pub four: &'static str,
    /// 5x5 label.
    pub five: &'static str,
}

/// Scoreboard headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoreboard {
    /// X heading.
    pub player_x: &'static str,
    /// O heading.
    pub player_o: &'static str,
    /// Draws heading.
    pub draws: &'static str,
}

/// Status line templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameStatus {
    /// Turn template with `{player}`.
    pub player_turn: &'static str,
    /// Win template with `{player}`.
    pub player_wins: &'static str,
    /// Draw message.
    pub draw: &'static str,
}

/// Control labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// New game.
    pub new_game: &'static str,
    /// Reset scores.
    pub reset_scores: &'static str,
}

/// Language names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageNames {
    /// English.
    pub english: &'static str,
    /// Thai.
    pub thai: &'static str,
}

/// Complete message table for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translations {
    /// Game title.
    pub title: &'static str,
    /// Mode selector labels.
    pub navbar: Navbar,
    /// Scoreboard headings.
    pub scoreboard: Scoreboard,
    /// Status templates.
    pub game_status: GameStatus,
    /// Control labels.
    pub controls: Controls,
    /// Language names.
    pub language: LanguageNames,
}

impl Translations {
    /// Returns the raw template for `key`.
    pub fn get(&self, key: MessageKey) -> &'static str {
        match key {
            MessageKey::Title => self.title,
            MessageKey::Navbar3x3 => self.navbar.three,
            MessageKey::Navbar4x4 => self.navbar.four,
            MessageKey::Navbar5x5 => self.navbar.five,
            MessageKey::ScoreboardPlayerX => self.scoreboard.player_x,
            MessageKey::ScoreboardPlayerO => self.scoreboard.player_o,
            MessageKey::ScoreboardDraws => self.scoreboard.draws,
            MessageKey::StatusPlayerTurn => self.game_status.player_turn,
            MessageKey::StatusPlayerWins => self.game_status.player_wins,
            MessageKey::StatusDraw => self.game_status.draw,
            MessageKey::ControlsNewGame => self.controls.new_game,
            MessageKey::ControlsResetScores => self.controls.reset_scores,
            MessageKey::LanguageEnglish => self.language.english,
            MessageKey::LanguageThai => self.language.thai,
        }
    }
}

/// Looks up `key` for `locale` and fills `{name}` placeholders.
///
/// Each parameter replaces the first occurrence of its placeholder.
/// Placeholders without a matching parameter are left as written.
#[instrument(skip(params))]
pub fn format(locale: Locale, key: MessageKey, params: &[(&str, &str)]) -> String {
    substitute(locale.translations().get(key), params)
}

/// Looks up a dotted path such as `controls.newGame`.
///
/// Unknown paths come back unchanged.
#[instrument(skip(params))]
pub fn translate_path(locale: Locale, path: &str, params: &[(&str, &str)]) -> String {
    match MessageKey::from_str(path) {
        Ok(key) => format(locale, key, params),
        Err(_) => {
            debug!(path, "Unknown message path");
            path.to_string()
        }
    }
}

fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    params
        .iter()
        .fold(template.to_string(), |text, (name, value)| {
            text.replacen(&format!("{{{name}}}"), value, 1)
        })
}

/// Status line for the current game.
#[instrument]
pub fn status_message(locale: Locale, result: GameResult, to_move: Player) -> String {
    match result {
        GameResult::InProgress => format(
            locale,
            MessageKey::StatusPlayerTurn,
            &[("player", to_move.to_string().as_str())],
        ),
        GameResult::Won(winner) => format(
            locale,
            MessageKey::StatusPlayerWins,
            &[("player", winner.to_string().as_str())],
        ),
        GameResult::Draw => format(locale, MessageKey::StatusDraw, &[]),
    }
}
