//! `tf delete` — remove a ticket after confirmation.

use crate::auth::require_session;
use crate::cmd::confirm;
use crate::output::{
    CONFIRM_DELETE, CliError, MSG_TICKET_DELETED, OutputMode, render_error, render_success,
};
use clap::Args;
use ticketflow_core::store::{FileBackend, SessionStore, TicketStore};

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Ticket id.
    pub id: u64,

    /// Skip the confirmation prompt.
    #[arg(long)]
    pub yes: bool,
}

pub fn run_delete(
    args: &DeleteArgs,
    output: OutputMode,
    backend: &FileBackend,
) -> anyhow::Result<()> {
    let session = SessionStore::new(backend.clone());
    require_session(&session, output)?;

    let store = TicketStore::new(backend.clone());
    if !store.load().iter().any(|t| t.id == args.id) {
        render_error(
            output,
            &CliError::with_details(
                format!("Ticket {} not found", args.id),
                "Run: tf list",
                "not_found",
            ),
        )?;
        anyhow::bail!("Ticket {} not found", args.id);
    }

    if !args.yes && !confirm(CONFIRM_DELETE)? {
        return Ok(());
    }

    store.delete(args.id)?;
    render_success(output, MSG_TICKET_DELETED)
}

#[cfg(test)]
mod tests {
    use super::DeleteArgs;
    use clap::Parser;

    #[test]
    fn delete_args_parse() {
        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: DeleteArgs,
        }
        let w = Wrapper::parse_from(["test", "3", "--yes"]);
        assert_eq!(w.args.id, 3);
        assert!(w.args.yes);
    }
}
