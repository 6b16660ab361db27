//! `tf update` — edit an existing ticket.
//!
//! Only the provided flags change; omitted fields keep their stored values.
//! The merged result still has to pass the full ticket validation, so a
//! ticket whose stored status fell outside the enum cannot be saved again
//! without an explicit `--status`.

use crate::auth::require_session;
use crate::output::{
    CliError, MSG_TICKET_UPDATED, OutputMode, render_error, render_field_errors, render_success,
};
use clap::Args;
use ticketflow_core::model::{Priority, Status};
use ticketflow_core::store::{FileBackend, SessionStore, TicketStore};
use ticketflow_core::validate::TicketForm;

#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Ticket id.
    pub id: u64,

    /// New title.
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description; pass an empty string to clear it.
    #[arg(short, long)]
    pub description: Option<String>,

    /// New status: open, in_progress, or closed.
    #[arg(short, long)]
    pub status: Option<Status>,

    /// New priority: low, medium, or high.
    #[arg(short, long)]
    pub priority: Option<Priority>,
}

pub fn run_update(
    args: &UpdateArgs,
    output: OutputMode,
    backend: &FileBackend,
) -> anyhow::Result<()> {
    let session = SessionStore::new(backend.clone());
    require_session(&session, output)?;

    let store = TicketStore::new(backend.clone());
    let Some(existing) = store.load().into_iter().find(|t| t.id == args.id) else {
        render_error(
            output,
            &CliError::with_details(
                format!("Ticket {} not found", args.id),
                "Run: tf list",
                "not_found",
            ),
        )?;
        anyhow::bail!("Ticket {} not found", args.id);
    };

    let form = TicketForm {
        title: args.title.clone().unwrap_or(existing.title),
        description: args
            .description
            .clone()
            .or(existing.description)
            .unwrap_or_default(),
        status: args.status.unwrap_or(existing.status),
        priority: args.priority.unwrap_or(existing.priority),
    };
    let errors = form.validate();
    if !errors.is_empty() {
        render_field_errors(output, &errors)?;
        anyhow::bail!("validation failed");
    }

    store.update(args.id, form.into_draft())?;
    render_success(output, MSG_TICKET_UPDATED)
}
