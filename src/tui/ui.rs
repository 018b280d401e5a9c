//! Screen rendering: title, scoreboard, status, board grid, key help.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::game::{Board, Cell, Mark};
use crate::tui::app::App;
use crate::tui::theme::Palette;

/// Draws the whole screen.
pub fn draw(f: &mut Frame, app: &App) {
    let palette = app.theme().palette();

    // Paint the theme background across the full frame.
    f.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        f.area(),
    );

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(11),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title(f, sections[0], app, &palette);
    render_scoreboard(f, sections[1], app, &palette);
    render_status(f, sections[2], app, &palette);
    render_board(f, sections[3], app.session().state().board(), &palette);
    render_help(f, sections[4], &palette);
}

fn render_title(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let title = Line::from(vec![
        Span::styled(
            "Tic Tac Toe",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  [{}]", app.theme().label()),
            Style::default().fg(palette.dim),
        ),
    ]);
    let paragraph = Paragraph::new(title).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_scoreboard(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let scores = app.session().scores();
    let line = Line::from(vec![
        Span::styled(
            "X ",
            Style::default()
                .fg(palette.x_mark)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(scores.wins(Mark::X).to_string(), Style::default().fg(palette.text)),
        Span::styled(
            "   D ",
            Style::default().fg(palette.draw).add_modifier(Modifier::BOLD),
        ),
        Span::styled(scores.draws().to_string(), Style::default().fg(palette.text)),
        Span::styled(
            "   O ",
            Style::default()
                .fg(palette.o_mark)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(scores.wins(Mark::O).to_string(), Style::default().fg(palette.text)),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let color = match app.session().state().outcome() {
        Some(crate::game::Outcome::Won(Mark::X)) => palette.x_mark,
        Some(crate::game::Outcome::Won(Mark::O)) => palette.o_mark,
        Some(crate::game::Outcome::Draw) => palette.draw,
        None => palette.text,
    };
    let paragraph = Paragraph::new(app.status())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_board(f: &mut Frame, area: Rect, board: &Board, palette: &Palette) {
    let board_area = center_rect(area, 23, 11);
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

    render_row(f, rows[0], board, 0, palette);
    render_separator(f, rows[1], palette);
    render_row(f, rows[2], board, 3, palette);
    render_separator(f, rows[3], palette);
    render_row(f, rows[4], board, 6, palette);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, start: usize, palette: &Palette) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Length(7),
        ])
        .split(area);

    render_cell(f, cols[0], board, start, palette);
    render_vertical_sep(f, cols[1], palette);
    render_cell(f, cols[2], board, start + 1, palette);
    render_vertical_sep(f, cols[3], palette);
    render_cell(f, cols[4], board, start + 2, palette);
}

fn render_cell(f: &mut Frame, area: Rect, board: &Board, pos: usize, palette: &Palette) {
    let (text, style) = match board.get(pos) {
        Some(Cell::Empty) | None => (
            format!("{}", pos + 1),
            Style::default().fg(palette.dim),
        ),
        Some(Cell::Occupied(Mark::X)) => (
            "X".to_string(),
            Style::default()
                .fg(palette.x_mark)
                .add_modifier(Modifier::BOLD),
        ),
        Some(Cell::Occupied(Mark::O)) => (
            "O".to_string(),
            Style::default()
                .fg(palette.o_mark)
                .add_modifier(Modifier::BOLD),
        ),
    };
    // Vertically center within the 3-line cell.
    let lines = vec![Line::raw(""), Line::styled(text, style)];
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(palette.border));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new(vec![Line::raw("│"), Line::raw("│"), Line::raw("│")])
        .style(Style::default().fg(palette.border))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn render_help(f: &mut Frame, area: Rect, palette: &Palette) {
    let help = Paragraph::new("1-9 place  r new round  t theme  q quit")
        .style(Style::default().fg(palette.dim))
        .alignment(Alignment::Center);
    f.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
