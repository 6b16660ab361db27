//! `tf list` — list all tickets.

use crate::auth::require_session;
use crate::output::{OutputMode, render};
use chrono::DateTime;
use clap::Args;
use std::io::Write;
use ticketflow_core::model::Ticket;
use ticketflow_core::store::{FileBackend, SessionStore, TicketStore};

#[derive(Args, Debug)]
pub struct ListArgs {}

/// Shorten an RFC 3339 timestamp for table display; unparseable input is
/// shown as stored.
fn created_label(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw).map_or_else(
        |_| raw.to_string(),
        |ts| ts.format("%Y-%m-%d %H:%M").to_string(),
    )
}

fn render_table(tickets: &[Ticket], w: &mut dyn Write) -> std::io::Result<()> {
    if tickets.is_empty() {
        return writeln!(w, "No tickets.");
    }

    writeln!(
        w,
        "{:>4}  {:<11}  {:<8}  {:<16}  TITLE",
        "ID", "STATUS", "PRIORITY", "CREATED"
    )?;
    for ticket in tickets {
        writeln!(
            w,
            "{:>4}  {:<11}  {:<8}  {:<16}  {}",
            ticket.id,
            ticket.status.label(),
            ticket.priority.as_str(),
            created_label(&ticket.created_at),
            ticket.title,
        )?;
    }
    Ok(())
}

pub fn run_list(_args: &ListArgs, output: OutputMode, backend: &FileBackend) -> anyhow::Result<()> {
    let session = SessionStore::new(backend.clone());
    require_session(&session, output)?;

    let tickets = TicketStore::new(backend.clone()).load();
    render(output, &tickets, |tickets, w| render_table(tickets, w))
}

#[cfg(test)]
mod tests {
    use super::{created_label, render_table};
    use ticketflow_core::model::{Priority, Status, Ticket};

    #[test]
    fn created_label_shortens_rfc3339() {
        assert_eq!(
            created_label("2025-06-01T12:30:00+00:00"),
            "2025-06-01 12:30"
        );
        assert_eq!(created_label("not a date"), "not a date");
    }

    #[test]
    fn table_lists_one_row_per_ticket() {
        let tickets = vec![
            Ticket {
                id: 1,
                title: "Printer jam".to_string(),
                status: Status::Open,
                priority: Priority::High,
                created_at: "2025-06-01T12:30:00+00:00".to_string(),
                ..Ticket::default()
            },
            Ticket {
                id: 2,
                title: "Slow dashboard".to_string(),
                status: Status::InProgress,
                ..Ticket::default()
            },
        ];

        let mut buf = Vec::new();
        render_table(&tickets, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Printer jam"));
        assert!(text.contains("in progress"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn empty_table_prints_placeholder() {
        let mut buf = Vec::new();
        render_table(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "No tickets.\n");
    }
}
