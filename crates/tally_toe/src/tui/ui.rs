//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tally_engine::{Cell, GameEngine, Player, Position, RoundOutcome};

use super::app::App;
use crate::config::Theme;

const HELP: &str = "arrows move | enter/1-9 play | r reset round | n new game | q quit";

/// Renders the whole screen from `app`.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Status
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Scoreboard
            Constraint::Length(2), // Notice + help
        ])
        .split(area);

    let title = Paragraph::new("Tally Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_status(frame, chunks[1], app.engine(), theme);
    draw_board(frame, chunks[2], app, theme);
    draw_scoreboard(frame, chunks[3], app.engine(), theme);

    let footer = Paragraph::new(vec![
        Line::from(app.notice().unwrap_or_default()).style(Style::default().fg(Color::Yellow)),
        Line::from(HELP).style(Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[4]);
}

fn player_color(player: Player, theme: &Theme) -> Color {
    match player {
        Player::X => theme.x,
        Player::O => theme.o,
    }
}

fn draw_status(frame: &mut Frame, area: Rect, engine: &GameEngine, theme: &Theme) {
    let color = match engine.outcome() {
        RoundOutcome::Win { player, .. } => player_color(player, theme),
        RoundOutcome::Draw => Color::Yellow,
        RoundOutcome::InProgress => Color::White,
    };
    let status = Paragraph::new(engine.status_message())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, theme, row);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(board_area.width as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, theme, pos);
        }
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, theme: &Theme, pos: Position) {
    let engine = app.engine();

    let (symbol, mut style) = match engine.board().get(pos) {
        Cell::Empty if app.show_hints() => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Empty => (String::new(), Style::default()),
        Cell::Marked(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player, theme))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if engine.winning_line().is_some_and(|line| line.contains(pos)) {
        style = style.bg(theme.highlight).fg(Color::Black);
    } else if engine.is_active() && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    // Middle line of the three-line cell carries the symbol.
    let cell = Paragraph::new(vec![
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
        Line::from(Span::styled(format!("{:^width$}", symbol, width = area.width as usize), style)),
        Line::from(Span::styled(" ".repeat(area.width as usize), style)),
    ]);
    frame.render_widget(cell, area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, engine: &GameEngine, theme: &Theme) {
    let (x_wins, o_wins) = engine.scores();
    let line = Line::from(vec![
        Span::styled(format!("Player X: {}", x_wins), Style::default().fg(theme.x)),
        Span::raw("    "),
        Span::styled(format!("Player O: {}", o_wins), Style::default().fg(theme.o)),
        Span::raw("    "),
        Span::raw(format!("Rounds: {}", engine.rounds_played())),
    ]);
    let scoreboard = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Scoreboard"));
    frame.render_widget(scoreboard, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn render(app: &App) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(60, 26)).expect("terminal");
        terminal
            .draw(|frame| draw(frame, app, &Theme::default()))
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_turn_and_scoreboard() {
        let app = App::new(true);
        let screen = text(&render(&app));
        assert!(screen.contains("Tally Toe"));
        assert!(screen.contains("Player X's turn"));
        assert!(screen.contains("Player X: 0"));
        assert!(screen.contains("Player O: 0"));
    }

    #[test]
    fn test_renders_win_status() {
        let mut app = App::new(true);
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        let screen = text(&render(&app));
        assert!(screen.contains("Player X wins!"));
        assert!(screen.contains("Player X: 1"));
        assert!(screen.contains("Rounds: 1"));
    }

    #[test]
    fn test_winning_line_highlighted() {
        let mut app = App::new(true);
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        let buffer = render(&app);
        let theme = Theme::default();
        let highlighted = buffer
            .content()
            .iter()
            .filter(|cell| cell.symbol() == "X" && cell.bg == theme.highlight)
            .count();
        assert_eq!(highlighted, 3);
    }

    #[test]
    fn test_hints_hidden_when_disabled() {
        let app = App::new(false);
        let screen = text(&render(&app));
        assert!(!screen.contains('5'));
        let app = App::new(true);
        let screen = text(&render(&app));
        assert!(screen.contains('5'));
    }
}
