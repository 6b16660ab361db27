//! Form validation.
//!
//! Validators are pure: they take a filled-in form and return a map from
//! field name to message. An empty map means the form is accepted. Screens
//! keep the map as transient state; it is recomputed wholesale on submit and
//! cleared per-field as the user edits.

use crate::model::{Status, TicketDraft};
use std::collections::BTreeMap;

/// Field name → human message, ordered for stable rendering.
pub type FieldErrors = BTreeMap<&'static str, String>;

pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_EMAIL_FORMAT: &str = "Invalid email format";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";
pub const MSG_PASSWORD_SHORT: &str = "Password must be at least 6 characters";
pub const MSG_NAME_REQUIRED: &str = "Name is required";
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const MSG_TITLE_REQUIRED: &str = "Title is required";
pub const MSG_TITLE_SHORT: &str = "Title must be at least 3 characters";
pub const MSG_STATUS_INVALID: &str = "Status must be: open, in_progress, or closed";
pub const MSG_DESCRIPTION_LONG: &str = "Description must be less than 500 characters";

/// `\S+@\S+.\S+` as an unanchored search: some token must contain an `@`
/// with at least one non-space character before it and a dotted, non-empty
/// remainder after it.
fn email_shape_ok(email: &str) -> bool {
    email.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            c == '@' && at > 0 && {
                let rest = &token[at + 1..];
                rest.char_indices()
                    .any(|(i, d)| d == '.' && i > 0 && i + 1 < rest.len())
            }
        })
    })
}

fn check_email(email: &str, errors: &mut FieldErrors) {
    if email.is_empty() {
        errors.insert("email", MSG_EMAIL_REQUIRED.to_string());
    } else if !email_shape_ok(email) {
        errors.insert("email", MSG_EMAIL_FORMAT.to_string());
    }
}

fn check_password(password: &str, errors: &mut FieldErrors) {
    if password.is_empty() {
        errors.insert("password", MSG_PASSWORD_REQUIRED.to_string());
    } else if password.chars().count() < 6 {
        errors.insert("password", MSG_PASSWORD_SHORT.to_string());
    }
}

/// The login screen's two fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_email(&self.email, &mut errors);
        check_password(&self.password, &mut errors);
        errors
    }
}

/// The signup screen's four fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if self.name.is_empty() {
            errors.insert("name", MSG_NAME_REQUIRED.to_string());
        }
        check_email(&self.email, &mut errors);
        check_password(&self.password, &mut errors);
        if self.confirm_password != self.password {
            errors.insert("confirmPassword", MSG_PASSWORD_MISMATCH.to_string());
        }
        errors
    }
}

/// The ticket editor's fields, as typed. `description` is the raw text area
/// content; an all-whitespace description becomes `None` in the draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketForm {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: crate::model::Priority,
}

impl TicketForm {
    /// Priority is deliberately unvalidated: any of its values passes.
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert("title", MSG_TITLE_REQUIRED.to_string());
        } else if title.chars().count() < 3 {
            errors.insert("title", MSG_TITLE_SHORT.to_string());
        }

        if !Status::ALL.contains(&self.status) {
            errors.insert("status", MSG_STATUS_INVALID.to_string());
        }

        if self.description.chars().count() > 500 {
            errors.insert("description", MSG_DESCRIPTION_LONG.to_string());
        }

        errors
    }

    /// Convert a validated form into the draft the store persists.
    #[must_use]
    pub fn into_draft(self) -> TicketDraft {
        let description = self.description.trim();
        TicketDraft {
            title: self.title.trim().to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            status: self.status,
            priority: self.priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        LoginForm, MSG_DESCRIPTION_LONG, MSG_EMAIL_FORMAT, MSG_EMAIL_REQUIRED, MSG_NAME_REQUIRED,
        MSG_PASSWORD_MISMATCH, MSG_PASSWORD_REQUIRED, MSG_PASSWORD_SHORT, MSG_STATUS_INVALID,
        MSG_TITLE_REQUIRED, MSG_TITLE_SHORT, SignupForm, TicketForm, email_shape_ok,
    };
    use crate::model::Status;

    #[test]
    fn login_empty_form_reports_both_fields() {
        let errors = LoginForm::default().validate();
        assert_eq!(errors.get("email").map(String::as_str), Some(MSG_EMAIL_REQUIRED));
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some(MSG_PASSWORD_REQUIRED)
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn login_malformed_email_reports_format() {
        let errors = LoginForm {
            email: "demo-at-test".to_string(),
            password: "password123".to_string(),
        }
        .validate();
        assert_eq!(errors.get("email").map(String::as_str), Some(MSG_EMAIL_FORMAT));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn login_short_password_reports_length() {
        let errors = LoginForm {
            email: "demo@test.com".to_string(),
            password: "abc".to_string(),
        }
        .validate();
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some(MSG_PASSWORD_SHORT)
        );
    }

    #[test]
    fn login_valid_form_is_accepted() {
        let errors = LoginForm {
            email: "demo@test.com".to_string(),
            password: "password123".to_string(),
        }
        .validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn email_shape_accepts_loose_but_dotted_addresses() {
        assert!(email_shape_ok("a@b.c"));
        assert!(email_shape_ok("demo@test.com"));
        assert!(email_shape_ok("weird@@but@ok.x"));
        // Unanchored: a valid shape inside a longer string passes.
        assert!(email_shape_ok("contact me at a@b.c please"));
    }

    #[test]
    fn email_shape_rejects_missing_parts() {
        assert!(!email_shape_ok("plain"));
        assert!(!email_shape_ok("@b.c"));
        assert!(!email_shape_ok("a@bc"));
        assert!(!email_shape_ok("a@.c"));
        assert!(!email_shape_ok("a@b."));
        assert!(!email_shape_ok("a @ b.c"));
    }

    #[test]
    fn signup_requires_name_and_matching_passwords() {
        let errors = SignupForm {
            name: String::new(),
            email: "demo@test.com".to_string(),
            password: "password123".to_string(),
            confirm_password: "password124".to_string(),
        }
        .validate();
        assert_eq!(errors.get("name").map(String::as_str), Some(MSG_NAME_REQUIRED));
        assert_eq!(
            errors.get("confirmPassword").map(String::as_str),
            Some(MSG_PASSWORD_MISMATCH)
        );
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn signup_valid_form_is_accepted() {
        let errors = SignupForm {
            name: "Demo".to_string(),
            email: "new@user.org".to_string(),
            password: "hunter22".to_string(),
            confirm_password: "hunter22".to_string(),
        }
        .validate();
        assert!(errors.is_empty());
    }

    #[test]
    fn ticket_title_hi_is_too_short_and_nothing_else_flagged() {
        let errors = TicketForm {
            title: "Hi".to_string(),
            ..TicketForm::default()
        }
        .validate();
        assert_eq!(errors.get("title").map(String::as_str), Some(MSG_TITLE_SHORT));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn ticket_blank_title_is_required_not_short() {
        let errors = TicketForm {
            title: "   ".to_string(),
            ..TicketForm::default()
        }
        .validate();
        assert_eq!(errors.get("title").map(String::as_str), Some(MSG_TITLE_REQUIRED));
    }

    #[test]
    fn ticket_unknown_status_is_rejected() {
        let errors = TicketForm {
            title: "Printer jam".to_string(),
            status: Status::Unknown,
            ..TicketForm::default()
        }
        .validate();
        assert_eq!(
            errors.get("status").map(String::as_str),
            Some(MSG_STATUS_INVALID)
        );
    }

    #[test]
    fn ticket_description_limit_is_500_inclusive() {
        let at_limit = TicketForm {
            title: "Printer jam".to_string(),
            description: "x".repeat(500),
            ..TicketForm::default()
        };
        assert!(at_limit.validate().is_empty());

        let over = TicketForm {
            description: "x".repeat(501),
            ..at_limit
        };
        assert_eq!(
            over.validate().get("description").map(String::as_str),
            Some(MSG_DESCRIPTION_LONG)
        );
    }

    #[test]
    fn into_draft_trims_and_drops_blank_description() {
        let draft = TicketForm {
            title: "  Printer jam  ".to_string(),
            description: "   ".to_string(),
            ..TicketForm::default()
        }
        .into_draft();
        assert_eq!(draft.title, "Printer jam");
        assert!(draft.description.is_none());
    }
}
