//! `tf login` — establish the demo session.

use crate::output::{CliError, OutputMode, render_error, render_field_errors, render_success};
use clap::Args;
use ticketflow_core::store::{FileBackend, SessionStore};
use ticketflow_core::validate::LoginForm;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email.
    #[arg(long)]
    pub email: String,

    /// Account password.
    #[arg(long)]
    pub password: String,
}

pub fn run_login(args: &LoginArgs, output: OutputMode, backend: &FileBackend) -> anyhow::Result<()> {
    let form = LoginForm {
        email: args.email.clone(),
        password: args.password.clone(),
    };
    let errors = form.validate();
    if !errors.is_empty() {
        render_field_errors(output, &errors)?;
        anyhow::bail!("validation failed");
    }

    let session = SessionStore::new(backend.clone());
    match session.login(&args.email, &args.password) {
        Ok(established) => render_success(output, &format!("Logged in as {}", established.user)),
        Err(err) => {
            render_error(output, &CliError::new(err.to_string()))?;
            anyhow::bail!("{err}")
        }
    }
}
