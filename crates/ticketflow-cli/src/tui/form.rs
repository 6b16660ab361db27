//! Small form widgets shared by the auth screens and the ticket editor.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

/// A single-line text input. Editing is append/backspace only, like the
/// rest of the dialogs in this UI.
#[derive(Debug, Clone, Default)]
pub struct Input {
    pub value: String,
    /// Render as `*` per character (password fields).
    pub masked: bool,
}

impl Input {
    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    /// Feed a key event. Returns `true` when the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => self.value.pop().is_some(),
            _ => false,
        }
    }

    fn display(&self, focused: bool) -> String {
        let shown: String = if self.masked {
            self.value.chars().map(|_| '*').collect()
        } else {
            self.value.clone()
        };
        if focused { format!("{shown}_") } else { shown }
    }

    /// Render as a one-line bordered field, highlighted when focused, red
    /// when it carries a validation error.
    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        focused: bool,
        error: Option<&str>,
    ) {
        let border = if error.is_some() {
            Style::default().fg(Color::Red)
        } else if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = error.map_or_else(|| format!(" {label} "), |msg| format!(" {label} — {msg} "));

        let para = Paragraph::new(self.display(focused))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(border),
            )
            .style(Style::default().fg(Color::White));
        frame.render_widget(para, area);
    }
}
