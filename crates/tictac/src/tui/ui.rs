//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictac_core::{Board, GameStatus, Player, Position, Square};

/// Renders the whole screen from application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Mode
            Constraint::Length(1), // Controls
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.game().board(), app.cursor());

    let status_color = match app.game().status() {
        GameStatus::InProgress(_) => Color::Yellow,
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
    };
    let status = Paragraph::new(app.status_text())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let mode = Paragraph::new(app.mode_text())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(mode, chunks[3]);

    let controls = Paragraph::new(controls_line(app.game().mode().toggle_label()))
        .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[4]);
}

fn controls_line(toggle_label: &'static str) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    Line::from(vec![
        Span::styled("1-9", key),
        Span::raw("/"),
        Span::styled("arrows+Enter", key),
        Span::raw(" play  "),
        Span::styled("r", key),
        Span::raw(" Restart Game  "),
        Span::styled("m", key),
        Span::raw(format!(" {toggle_label}  ")),
        Span::styled("q", key),
        Span::raw(" quit"),
    ])
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Position) {
    let board_area = center_rect(area, 38, 11);

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

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], board, cursor, positions);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, positions: &[Position]) {
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

    for (col, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[col * 2], board, cursor, pos);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Position, pos: Position) {
    let key_hint = (pos.to_index() + 1).to_string();

    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (key_hint, Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in its 3-line cell.
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!(" {symbol} "), style)),
        Line::from(""),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use tictac_core::Game;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).expect("terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_controls() {
        let mut game = Game::seeded(0);
        game.apply_move(4);
        let screen = render(&App::new(game));

        assert!(screen.contains("Next player: O"));
        assert!(screen.contains("Restart Game"));
        assert!(screen.contains("Play vs AI"));
        assert!(screen.contains('X'));
    }

    #[test]
    fn test_renders_friend_toggle_in_ai_mode() {
        let game = Game::seeded(0).with_mode(tictac_core::GameMode::HumanVsAi);
        let screen = render(&App::new(game));
        assert!(screen.contains("Play vs Friend"));
    }
}
