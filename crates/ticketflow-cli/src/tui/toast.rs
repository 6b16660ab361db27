//! Transient top-right notifications.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A message that auto-dismisses after the configured display time.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    shown_at: Instant,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            shown_at: Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            shown_at: Instant::now(),
        }
    }

    pub fn expired(&self, ttl: Duration) -> bool {
        self.shown_at.elapsed() >= ttl
    }

    /// Render in the top-right corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = (self.message.chars().count() as u16 + 4)
            .min(area.width.saturating_sub(2))
            .max(10);
        let toast_area = Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: area.y + 1,
            width,
            height: 3,
        };

        let color = match self.kind {
            ToastKind::Success => Color::Green,
            ToastKind::Error => Color::Red,
        };

        frame.render_widget(Clear, toast_area);
        let para = Paragraph::new(self.message.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        frame.render_widget(para, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::{Toast, ToastKind};
    use std::time::Duration;

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::success("Ticket created successfully!");
        assert_eq!(toast.kind, ToastKind::Success);
        assert!(!toast.expired(Duration::from_secs(3)));
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let toast = Toast::error("nope");
        assert!(toast.expired(Duration::ZERO));
    }
}
