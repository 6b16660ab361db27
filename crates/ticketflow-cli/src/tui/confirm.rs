//! Blocking yes/no overlay used for delete and logout.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Debug, Clone)]
pub struct ConfirmDialog {
    prompt: String,
}

impl ConfirmDialog {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }

    /// `Some(true)` on accept, `Some(false)` on decline, `None` while the
    /// dialog stays open. Anything other than an explicit yes declines.
    pub fn handle_key(&self, key: KeyEvent) -> Option<bool> {
        match key.code {
            KeyCode::Char('y' | 'Y') => Some(true),
            KeyCode::Char('n' | 'N') | KeyCode::Esc | KeyCode::Enter => Some(false),
            _ => None,
        }
    }

    /// Render as a centered overlay on top of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = (self.prompt.chars().count() as u16 + 6).min(area.width.saturating_sub(4));
        let height = 5u16.min(area.height.saturating_sub(2));
        let dialog_area = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Confirm ")
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));
        frame.render_widget(block, dialog_area);

        let inner = Rect {
            x: dialog_area.x + 2,
            y: dialog_area.y + 1,
            width: dialog_area.width.saturating_sub(4),
            height: dialog_area.height.saturating_sub(2),
        };
        let lines = vec![
            Line::from(self.prompt.clone()),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", Style::default().fg(Color::Yellow)),
                Span::raw(" confirm  "),
                Span::styled("n", Style::default().fg(Color::Yellow)),
                Span::raw(" cancel"),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
