//! Session gate for ticket commands.
//!
//! Mirrors the router's auth guard: commands that read or mutate tickets
//! refuse to run without a stored session and point at `tf login`.

use crate::output::{CliError, OutputMode, render_error};
use ticketflow_core::store::{KvBackend, SessionStore};

pub fn require_session<B: KvBackend>(
    session: &SessionStore<B>,
    output: OutputMode,
) -> anyhow::Result<()> {
    if session.is_authenticated() {
        return Ok(());
    }

    render_error(
        output,
        &CliError::with_details(
            "Not logged in",
            "Run: tf login --email demo@test.com --password password123",
            "not_authenticated",
        ),
    )?;
    anyhow::bail!("Not logged in")
}
