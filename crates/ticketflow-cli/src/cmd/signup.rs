//! `tf signup` — mock account creation.
//!
//! Any form that validates yields the demo session; no account is actually
//! stored.

use crate::output::{MSG_ACCOUNT_CREATED, OutputMode, render_field_errors, render_success};
use clap::Args;
use ticketflow_core::store::{FileBackend, SessionStore};
use ticketflow_core::validate::SignupForm;

#[derive(Args, Debug)]
pub struct SignupArgs {
    /// Display name.
    #[arg(long)]
    pub name: String,

    /// Account email.
    #[arg(long)]
    pub email: String,

    /// Account password (at least 6 characters).
    #[arg(long)]
    pub password: String,

    /// Must match --password.
    #[arg(long)]
    pub confirm_password: String,
}

pub fn run_signup(
    args: &SignupArgs,
    output: OutputMode,
    backend: &FileBackend,
) -> anyhow::Result<()> {
    let form = SignupForm {
        name: args.name.clone(),
        email: args.email.clone(),
        password: args.password.clone(),
        confirm_password: args.confirm_password.clone(),
    };
    let errors = form.validate();
    if !errors.is_empty() {
        render_field_errors(output, &errors)?;
        anyhow::bail!("validation failed");
    }

    SessionStore::new(backend.clone()).signup()?;
    render_success(output, MSG_ACCOUNT_CREATED)
}

#[cfg(test)]
mod tests {
    use super::SignupArgs;
    use clap::Parser;

    #[test]
    fn signup_args_parse() {
        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: SignupArgs,
        }
        let w = Wrapper::parse_from([
            "test",
            "--name",
            "Demo",
            "--email",
            "new@user.org",
            "--password",
            "hunter22",
            "--confirm-password",
            "hunter22",
        ]);
        assert_eq!(w.args.name, "Demo");
        assert_eq!(w.args.confirm_password, "hunter22");
    }
}
