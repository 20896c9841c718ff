//! Application state and logic.

use crate::i18n::{self, Locale};
use tracing::{debug, instrument};
use xo_engine::{GameEngine, Mode, MoveOutcome, Rejection};

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Up one row.
    Up,
    /// Down one row.
    Down,
    /// Left one column.
    Left,
    /// Right one column.
    Right,
}

/// A single user action. Each maps to at most one engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    MoveCursor(Direction),
    /// Place a mark under the cursor.
    Place,
    /// Place a mark at a clicked cell.
    PlaceAt {
        /// Clicked row.
        row: usize,
        /// Clicked column.
        col: usize,
    },
    /// Start a new game of the current mode.
    NewGame,
    /// Start a new game of another mode.
    SwitchMode(Mode),
    /// Clear the scoreboard.
    ResetScores,
    /// Switch display language.
    ToggleLocale,
    /// Leave the application.
    Quit,
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct App {
    engine: GameEngine,
    locale: Locale,
    cursor: (usize, usize),
    notice: Option<Rejection>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(mode: Mode, locale: Locale) -> Self {
        Self {
            engine: GameEngine::new(mode),
            locale,
            cursor: center(mode),
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the display language.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Gets the cursor as `(row, col)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Why the last move request was ignored, if it was.
    pub fn notice(&self) -> Option<Rejection> {
        self.notice
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Localized status line for the current game.
    pub fn status_message(&self) -> String {
        i18n::status_message(self.locale, self.engine.result(), self.engine.to_move())
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");
        match action {
            Action::MoveCursor(direction) => self.move_cursor(direction),
            Action::Place => {
                let (row, col) = self.cursor;
                self.place(row, col);
            }
            Action::PlaceAt { row, col } => {
                self.cursor = (row, col);
                self.place(row, col);
            }
            Action::NewGame => self.restart(self.engine.mode()),
            Action::SwitchMode(mode) => self.restart(mode),
            Action::ResetScores => self.engine.reset_scores(),
            Action::ToggleLocale => self.locale = self.locale.toggle(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn place(&mut self, row: usize, col: usize) {
        let (Ok(row), Ok(col)) = (isize::try_from(row), isize::try_from(col)) else {
            return;
        };
        self.notice = match self.engine.apply_move(row, col) {
            MoveOutcome::Accepted(_) => None,
            MoveOutcome::Rejected(rejection) => Some(rejection),
        };
    }

    fn restart(&mut self, mode: Mode) {
        self.engine.new_game(mode);
        self.cursor = center(mode);
        self.notice = None;
    }

    fn move_cursor(&mut self, direction: Direction) {
        let last = self.engine.board().size() - 1;
        let (row, col) = self.cursor;
        self.cursor = match direction {
            Direction::Up => (row.saturating_sub(1), col),
            Direction::Down => ((row + 1).min(last), col),
            Direction::Left => (row, col.saturating_sub(1)),
            Direction::Right => (row, (col + 1).min(last)),
        };
    }
}

fn center(mode: Mode) -> (usize, usize) {
    let mid = mode.size() / 2;
    (mid, mid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xo_engine::{Cell, GameResult, Player};

    #[test]
    fn test_cursor_starts_centered_and_clamps() {
        let mut app = App::new(Mode::FourByFour, Locale::En);
        assert_eq!(app.cursor(), (2, 2));
        for _ in 0..5 {
            app.handle(Action::MoveCursor(Direction::Right));
        }
        assert_eq!(app.cursor(), (2, 3));
        for _ in 0..5 {
            app.handle(Action::MoveCursor(Direction::Up));
        }
        assert_eq!(app.cursor(), (0, 3));
    }

    #[test]
    fn test_place_under_cursor() {
        let mut app = App::new(Mode::ThreeByThree, Locale::En);
        app.handle(Action::Place);
        assert_eq!(app.engine().cell(1, 1), Some(Cell::Marked(Player::X)));
        assert_eq!(app.status_message(), "Player O's Turn");

        app.handle(Action::Place);
        assert_eq!(app.notice(), Some(Rejection::CellOccupied { row: 1, col: 1 }));
        assert_eq!(app.engine().to_move(), Player::O);
    }

    #[test]
    fn test_switch_mode_keeps_scores() {
        let mut app = App::new(Mode::ThreeByThree, Locale::En);
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            app.handle(Action::PlaceAt { row, col });
        }
        assert_eq!(app.engine().result(), GameResult::Won(Player::X));

        app.handle(Action::SwitchMode(Mode::FiveByFive));
        assert_eq!(app.engine().board().cells().len(), 25);
        assert_eq!(app.cursor(), (2, 2));
        assert_eq!(*app.engine().scores().wins_x(), 1);
    }

    #[test]
    fn test_toggle_locale_changes_status_text() {
        let mut app = App::new(Mode::ThreeByThree, Locale::En);
        app.handle(Action::ToggleLocale);
        assert_eq!(app.locale(), Locale::Th);
        assert_eq!(app.status_message(), "ตาของผู้เล่น X");
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Mode::ThreeByThree, Locale::En);
        assert!(!app.should_quit());
        app.handle(Action::Quit);
        assert!(app.should_quit());
    }
}
