//! Stateless frame rendering.
//!
//! Reads the app's current state and draws it; the only thing flowing
//! back out is the set of cell hit-boxes for mouse input.

use jubilee_tictactoe::{Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Renders one frame and returns the nine cell areas in board order.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    let title = Paragraph::new("Jubilee Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let cells = draw_board(frame, chunks[1], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    // Confetti goes on top of everything.
    frame.render_widget(app.confetti(), frame.area());

    cells
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) -> [Rect; 9] {
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

    let mut cells = [Rect::default(); 9];
    for (band, row) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row);

        for (i, col) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            let pos = Position::from_index(band * 3 + i).unwrap_or(Position::Center);
            cells[pos.index()] = col;
            draw_cell(frame, col, app, pos);
        }
        draw_vertical_sep(frame, cols[1]);
        draw_vertical_sep(frame, cols[3]);
    }
    draw_horizontal_sep(frame, rows[1]);
    draw_horizontal_sep(frame, rows[3]);

    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let (symbol, base_style) = match app.state().board().get(pos) {
        Square::Empty => (
            pos.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = app
        .winning_line()
        .is_some_and(|line| line.contains(&pos));
    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let cell = Paragraph::new(symbol)
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn draw_horizontal_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_vertical_sep(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
