//! The unauthenticated landing screen.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        "TicketFlow",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let tagline = Paragraph::new("Track support tickets without leaving the terminal.")
        .alignment(Alignment::Center);
    frame.render_widget(tagline, chunks[2]);

    let hints = Paragraph::new(Line::from(vec![
        Span::styled("l", Style::default().fg(Color::Yellow)),
        Span::raw(" login  "),
        Span::styled("s", Style::default().fg(Color::Yellow)),
        Span::raw(" sign up  "),
        Span::styled("q", Style::default().fg(Color::Yellow)),
        Span::raw(" quit"),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[3]);
}
