//! `tf stats` — ticket counts by status.

use crate::auth::require_session;
use crate::output::{OutputMode, render};
use clap::Args;
use std::io::Write;
use ticketflow_core::stats::TicketStats;
use ticketflow_core::store::{FileBackend, SessionStore, TicketStore};

#[derive(Args, Debug)]
pub struct StatsArgs {}

fn render_human(stats: &TicketStats, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{:<12} {}", "total:", stats.total)?;
    writeln!(w, "{:<12} {}", "open:", stats.open)?;
    writeln!(w, "{:<12} {}", "in progress:", stats.in_progress)?;
    writeln!(w, "{:<12} {}", "closed:", stats.closed)
}

pub fn run_stats(
    _args: &StatsArgs,
    output: OutputMode,
    backend: &FileBackend,
) -> anyhow::Result<()> {
    let session = SessionStore::new(backend.clone());
    require_session(&session, output)?;

    let tickets = TicketStore::new(backend.clone()).load();
    let stats = TicketStats::count(&tickets);
    render(output, &stats, |stats, w| render_human(stats, w))
}
