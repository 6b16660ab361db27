//! `tf create` — create a new ticket.

use crate::auth::require_session;
use crate::output::{MSG_TICKET_CREATED, OutputMode, render, render_field_errors};
use clap::Args;
use std::io::Write;
use ticketflow_core::model::{Priority, Status};
use ticketflow_core::store::{FileBackend, SessionStore, TicketStore};
use ticketflow_core::validate::TicketForm;

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Ticket title (at least 3 characters).
    #[arg(short, long)]
    pub title: String,

    /// Description text (up to 500 characters).
    #[arg(short, long)]
    pub description: Option<String>,

    /// Status: open, in_progress, or closed.
    #[arg(short, long, default_value = "open")]
    pub status: Status,

    /// Priority: low, medium, or high.
    #[arg(short, long, default_value = "medium")]
    pub priority: Priority,
}

pub fn run_create(
    args: &CreateArgs,
    output: OutputMode,
    backend: &FileBackend,
) -> anyhow::Result<()> {
    let session = SessionStore::new(backend.clone());
    require_session(&session, output)?;

    let form = TicketForm {
        title: args.title.clone(),
        description: args.description.clone().unwrap_or_default(),
        status: args.status,
        priority: args.priority,
    };
    let errors = form.validate();
    if !errors.is_empty() {
        render_field_errors(output, &errors)?;
        anyhow::bail!("validation failed");
    }

    let ticket = TicketStore::new(backend.clone()).create(form.into_draft())?;
    render(output, &ticket, |t, w| {
        writeln!(w, "✓ {MSG_TICKET_CREATED} (id {})", t.id)
    })
}
