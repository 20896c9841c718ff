//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::i18n::{Locale, MessageKey, format};
use xo_engine::{Cell, GameResult, Mode, Player};

/// Width of one board cell in columns, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in rows, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen and returns the area the board occupies.
pub fn draw(frame: &mut Frame, app: &App) -> Rect {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scoreboard
            Constraint::Length(3), // Status
            Constraint::Min(CELL_HEIGHT), // Board
            Constraint::Length(3), // Controls
        ])
        .split(area);

    let locale = app.locale();
    let t = locale.translations();
    let engine = app.engine();

    let title = Paragraph::new(format!(
        "{} · {}",
        t.title,
        format(locale, MessageKey::for_mode(engine.mode()), &[])
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scoreboard(frame, chunks[1], app);
    draw_status(frame, chunks[2], app);
    let board = draw_board(frame, chunks[3], app);
    draw_controls(frame, chunks[4], locale);

    board
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, app: &App) {
    let locale = app.locale();
    let scores = app.engine().scores();
    let heading = |player: Player| format(locale, MessageKey::for_player(player), &[]);
    let line = Line::from(vec![
        Span::styled(heading(Player::X), player_style(Player::X)),
        Span::raw(format!(" {}   ", scores.wins(Player::X))),
        Span::styled(
            format(locale, MessageKey::ScoreboardDraws, &[]),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(format!(" {}   ", scores.draws())),
        Span::styled(heading(Player::O), player_style(Player::O)),
        Span::raw(format!(" {}", scores.wins(Player::O))),
    ]);
    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let style = match (app.notice(), app.engine().result()) {
        (Some(_), _) => Style::default().fg(Color::Magenta),
        (None, GameResult::Won(player)) => player_style(player),
        (None, GameResult::Draw) => Style::default().fg(Color::Yellow),
        (None, GameResult::InProgress) => player_style(app.engine().to_move()),
    };
    let status = Paragraph::new(app.status_message())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let engine = app.engine();
    let size = engine.board().size();
    let board = center_rect(area, CELL_WIDTH * size as u16, CELL_HEIGHT * size as u16);
    let winning = engine.winning_line();

    for (index, cell) in engine.board().cells().iter().enumerate() {
        let (row, col) = engine.board().coords_of(index);
        let rect = Rect::new(
            board.x + col as u16 * CELL_WIDTH,
            board.y + row as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(area);
        if rect.is_empty() {
            continue;
        }
        draw_cell(
            frame,
            rect,
            *cell,
            app.cursor() == (row, col),
            winning.is_some_and(|line| line.contains(index)),
        );
    }

    board
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: Cell, under_cursor: bool, winning: bool) {
    let (symbol, base_style) = match cell {
        Cell::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Cell::Marked(player) => (
            if player == Player::X { "X" } else { "O" },
            player_style(player),
        ),
    };

    let style = if under_cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };
    let border = if winning {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, locale: Locale) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));
    let label = |text: String| Span::raw(text);
    let other_language = match locale.toggle() {
        Locale::En => MessageKey::LanguageEnglish,
        Locale::Th => MessageKey::LanguageThai,
    };

    let line = Line::from(vec![
        key("[n] "),
        label(format(locale, MessageKey::ControlsNewGame, &[])),
        label("   ".to_string()),
        key("[r] "),
        label(format(locale, MessageKey::ControlsResetScores, &[])),
        label("   ".to_string()),
        key("[3/4/5] "),
        label(
            [Mode::ThreeByThree, Mode::FourByFour, Mode::FiveByFive]
                .map(|mode| format(locale, MessageKey::for_mode(mode), &[]))
                .join(" "),
        ),
        label("   ".to_string()),
        key("[t] "),
        label(format(locale, other_language, &[])),
        label("   ".to_string()),
        key("[q]"),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));
    frame.render_widget(controls, area);
}

fn player_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

/// Returns the `(row, col)` of the board cell at a screen position.
pub fn cell_at(board: Rect, size: usize, column: u16, row: u16) -> Option<(usize, usize)> {
    if !board.contains(Position::new(column, row)) {
        return None;
    }
    let col = usize::from((column - board.x) / CELL_WIDTH);
    let row = usize::from((row - board.y) / CELL_HEIGHT);
    (row < size && col < size).then_some((row, col))
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::Action;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> (String, Rect) {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut board = Rect::default();
        terminal
            .draw(|frame| {
                board = draw(frame, app);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        (text, board)
    }

    #[test]
    fn test_board_centered_for_each_mode() {
        for (mode, width) in [
            (Mode::ThreeByThree, 21),
            (Mode::FourByFour, 28),
            (Mode::FiveByFive, 35),
        ] {
            let app = App::new(mode, Locale::En);
            let (_, board) = render(&app);
            assert_eq!(board.width, width);
            assert_eq!(board.x, (80 - width) / 2);
        }
    }

    #[test]
    fn test_renders_localized_text() {
        let mut app = App::new(Mode::ThreeByThree, Locale::En);
        let (text, _) = render(&app);
        assert!(text.contains("Tic Tac Toe"));
        assert!(text.contains("Player X's Turn"));
        assert!(text.contains("New Game"));
        assert!(text.contains("Player X 0   Draws 0   Player O 0"));

        app.handle(Action::ToggleLocale);
        let (text, _) = render(&app);
        assert!(!text.contains("Reset Scores"));
        assert!(text.contains("English"));
    }

    #[test]
    fn test_cell_at_outside_board() {
        let board = Rect::new(10, 5, 21, 9);
        assert_eq!(cell_at(board, 3, 9, 6), None);
        assert_eq!(cell_at(board, 3, 31, 6), None);
        assert_eq!(cell_at(board, 3, 10, 14), None);
        assert_eq!(cell_at(board, 3, 10, 5), Some((0, 0)));
        assert_eq!(cell_at(board, 3, 30, 13), Some((2, 2)));
    }

    #[test]
    fn test_clicks_below_clipped_board_ignored() {
        let app = App::new(Mode::FiveByFive, Locale::En);
        let backend = TestBackend::new(80, 15);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut board = Rect::default();
        terminal
            .draw(|frame| {
                board = draw(frame, &app);
            })
            .unwrap();

        assert!(board.height < CELL_HEIGHT * 5);
        assert_eq!(cell_at(board, 5, board.x, board.bottom()), None);
        assert_eq!(cell_at(board, 5, board.x, board.bottom() + 1), None);
        assert_eq!(cell_at(board, 5, board.x, board.y), Some((0, 0)));
    }
}
