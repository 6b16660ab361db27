//! Dashboard: four stat tiles, recounted from the full list on every frame.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ticketflow_core::stats::TicketStats;

fn tile(frame: &mut Frame, area: Rect, label: &str, value: usize, color: Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let count = Paragraph::new(Line::from(Span::styled(
        value.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(count, chunks[0]);

    let caption = Paragraph::new(label).alignment(Alignment::Center);
    frame.render_widget(caption, chunks[1]);
}

pub fn render(frame: &mut Frame, area: Rect, stats: &TicketStats) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "Dashboard",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(title, rows[0]);

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[2]);

    tile(frame, tiles[0], "Total", stats.total, Color::Cyan);
    tile(frame, tiles[1], "Open", stats.open, Color::Green);
    tile(frame, tiles[2], "In Progress", stats.in_progress, Color::Yellow);
    tile(frame, tiles[3], "Closed", stats.closed, Color::DarkGray);

    let keys = Paragraph::new(Line::from(vec![
        Span::styled("t", Style::default().fg(Color::Yellow)),
        Span::raw(" tickets  "),
        Span::styled("L", Style::default().fg(Color::Yellow)),
        Span::raw(" logout  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]));
    frame.render_widget(keys, rows[4]);
}
