//! Signup screen. Structurally the login form plus name and password
//! confirmation.

use super::form::Input;
use super::login::centered_column;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use ticketflow_core::validate::{FieldErrors, SignupForm};

pub enum SignupAction {
    /// The form validated; create the account.
    Submit,
    /// Esc: back to the landing page.
    Back,
}

const FIELDS: usize = 4;

pub struct SignupScreen {
    pub(crate) name: Input,
    pub(crate) email: Input,
    pub(crate) password: Input,
    pub(crate) confirm_password: Input,
    pub(crate) errors: FieldErrors,
    focus: usize,
}

impl Default for SignupScreen {
    fn default() -> Self {
        Self {
            name: Input::default(),
            email: Input::default(),
            password: Input::masked(),
            confirm_password: Input::masked(),
            errors: FieldErrors::new(),
            focus: 0,
        }
    }
}

impl SignupScreen {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn form(&self) -> SignupForm {
        SignupForm {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            password: self.password.value.clone(),
            confirm_password: self.confirm_password.value.clone(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<SignupAction> {
        match key.code {
            KeyCode::Esc => Some(SignupAction::Back),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % FIELDS;
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + FIELDS - 1) % FIELDS;
                None
            }
            KeyCode::Enter => {
                self.errors = self.form().validate();
                if self.errors.is_empty() {
                    Some(SignupAction::Submit)
                } else {
                    None
                }
            }
            _ => {
                let (input, field) = match self.focus {
                    0 => (&mut self.name, "name"),
                    1 => (&mut self.email, "email"),
                    2 => (&mut self.password, "password"),
                    _ => (&mut self.confirm_password, "confirmPassword"),
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
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(column);

        let title = Paragraph::new(Line::from(Span::styled(
            "Sign up",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let err = |field: &str| self.errors.get(field).map(String::as_str);
        self.name
            .render(frame, chunks[1], "Name", self.focus == 0, err("name"));
        self.email
            .render(frame, chunks[2], "Email", self.focus == 1, err("email"));
        self.password.render(
            frame,
            chunks[3],
            "Password",
            self.focus == 2,
            err("password"),
        );
        self.confirm_password.render(
            frame,
            chunks[4],
            "Confirm password",
            self.focus == 3,
            err("confirmPassword"),
        );

        let keys = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(" submit  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(" next field  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" back"),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(keys, chunks[5]);
    }
}

#[cfg(test)]
mod tests {
    use super::{SignupAction, SignupScreen};
    use crossterm::event::{KeyCode, KeyEvent};
    use ticketflow_core::validate::{MSG_NAME_REQUIRED, MSG_PASSWORD_MISMATCH};

    fn type_str(screen: &mut SignupScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
    }

    #[test]
    fn empty_submit_reports_name_required() {
        let mut screen = SignupScreen::default();
        assert!(screen.handle_key(KeyEvent::from(KeyCode::Enter)).is_none());
        assert_eq!(
            screen.errors.get("name").map(String::as_str),
            Some(MSG_NAME_REQUIRED)
        );
    }

    #[test]
    fn mismatched_passwords_block_submit() {
        let mut screen = SignupScreen::default();
        type_str(&mut screen, "Demo");
        screen.handle_key(KeyEvent::from(KeyCode::Tab));
        type_str(&mut screen, "new@user.org");
        screen.handle_key(KeyEvent::from(KeyCode::Tab));
        type_str(&mut screen, "hunter22");
        screen.handle_key(KeyEvent::from(KeyCode::Tab));
        type_str(&mut screen, "hunter23");

        assert!(screen.handle_key(KeyEvent::from(KeyCode::Enter)).is_none());
        assert_eq!(
            screen.errors.get("confirmPassword").map(String::as_str),
            Some(MSG_PASSWORD_MISMATCH)
        );
    }

    #[test]
    fn valid_form_submits() {
        let mut screen = SignupScreen::default();
        type_str(&mut screen, "Demo");
        screen.handle_key(KeyEvent::from(KeyCode::Tab));
        type_str(&mut screen, "new@user.org");
        screen.handle_key(KeyEvent::from(KeyCode::Tab));
        type_str(&mut screen, "hunter22");
        screen.handle_key(KeyEvent::from(KeyCode::Tab));
        type_str(&mut screen, "hunter22");

        assert!(matches!(
            screen.handle_key(KeyEvent::from(KeyCode::Enter)),
            Some(SignupAction::Submit)
        ));
    }
}
