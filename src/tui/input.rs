//! Keyboard and mouse mapping.

use super::app::{Action, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use xo_engine::Mode;

/// Maps a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Place,
        KeyCode::Char('n') => Action::NewGame,
        KeyCode::Char('3') => Action::SwitchMode(Mode::ThreeByThree),
        KeyCode::Char('4') => Action::SwitchMode(Mode::FourByFour),
        KeyCode::Char('5') => Action::SwitchMode(Mode::FiveByFive),
        KeyCode::Char('r') => Action::ResetScores,
        KeyCode::Char('t') => Action::ToggleLocale,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => return None,
    };
    Some(action)
}

/// Maps a left click inside `board` to a placement.
pub fn action_for_mouse(mouse: MouseEvent, board: Rect, size: usize) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    super::ui::cell_at(board, size, mouse.column, mouse.row)
        .map(|(row, col)| Action::PlaceAt { row, col })
}
