//! Login screen.

use super::form::Input;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use ticketflow_core::validate::{FieldErrors, LoginForm};

/// What the screen wants the app to do.
pub enum LoginAction {
    /// The form validated; try these credentials.
    Submit(LoginForm),
    /// Esc: back to the landing page.
    Back,
}

const FIELDS: usize = 2;

pub struct LoginScreen {
    pub(crate) email: Input,
    pub(crate) password: Input,
    pub(crate) errors: FieldErrors,
    focus: usize,
}

impl Default for LoginScreen {
    fn default() -> Self {
        Self {
            email: Input::default(),
            password: Input::masked(),
            errors: FieldErrors::new(),
            focus: 0,
        }
    }
}

impl LoginScreen {
    /// Fresh state when the router enters the page.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn form(&self) -> LoginForm {
        LoginForm {
            email: self.email.value.clone(),
            password: self.password.value.clone(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<LoginAction> {
        match key.code {
            KeyCode::Esc => Some(LoginAction::Back),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % FIELDS;
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FIELDS - 1) % FIELDS;
                None
            }
            KeyCode::Enter => {
                let form = self.form();
                self.errors = form.validate();
                if self.errors.is_empty() {
                    Some(LoginAction::Submit(form))
                } else {
                    None
                }
            }
            _ => {
                // Editing a field clears that field's error.
                let (input, field) = if self.focus == 0 {
                    (&mut self.email, "email")
                } else {
                    (&mut self.password, "password")
                };
                if input.handle_key(key) {
                    self.errors.remove(field);
                }
                None
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let column = centered_column(area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(column);

        let title = Paragraph::new(Line::from(Span::styled(
            "Log in",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        self.email.render(
            frame,
            chunks[1],
            "Email",
            self.focus == 0,
            self.errors.get("email").map(String::as_str),
        );
        self.password.render(
            frame,
            chunks[2],
            "Password",
            self.focus == 1,
            self.errors.get("password").map(String::as_str),
        );

        let hint = Paragraph::new("Try demo@test.com / password123")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[3]);

        let keys = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" submit  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(" next field  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(keys, chunks[4]);
    }
}

/// A centered column at most 48 cells wide.
pub(crate) fn centered_column(area: Rect) -> Rect {
    let width = 48u16.min(area.width.saturating_sub(2));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height / 6,
        width,
        height: area.height.saturating_sub(area.height / 6),
    }
}

#[cfg(test)]
mod tests {
    use super::{LoginAction, LoginScreen};
    use crossterm::event::{KeyCode, KeyEvent};
    use ticketflow_core::validate::MSG_EMAIL_REQUIRED;

    fn type_str(screen: &mut LoginScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn submit_on_empty_form_keeps_screen_and_sets_errors() {
        let mut screen = LoginScreen::default();
        let action = screen.handle_key(KeyEvent::from(KeyCode::Enter));
        assert!(action.is_none());
        assert_eq!(
            screen.errors.get("email").map(String::as_str),
            Some(MSG_EMAIL_REQUIRED)
        );
    }

    #[test]
    fn submit_with_valid_form_returns_credentials() {
        let mut screen = LoginScreen::default();
        type_str(&mut screen, "demo@test.com");
        screen.handle_key(KeyEvent::from(KeyCode::Tab));
        type_str(&mut screen, "password123");

        let action = screen.handle_key(KeyEvent::from(KeyCode::Enter));
        match action {
            Some(LoginAction::Submit(form)) => {
                assert_eq!(form.email, "demo@test.com");
                assert_eq!(form.password, "password123");
            }
            _ => panic!("expected Submit"),
        }
    }

    #[test]
    fn editing_clears_that_fields_error() {
        let mut screen = LoginScreen::default();
        screen.handle_key(KeyEvent::from(KeyCode::Enter));
        assert!(screen.errors.contains_key("email"));
        assert!(screen.errors.contains_key("password"));

        type_str(&mut screen, "d");
        assert!(!screen.errors.contains_key("email"));
        assert!(screen.errors.contains_key("password"));
    }

    #[test]
    fn esc_goes_back() {
        let mut screen = LoginScreen::default();
        assert!(matches!(
            screen.handle_key(KeyEvent::from(KeyCode::Esc)),
            Some(LoginAction::Back)
        ));
    }
}
