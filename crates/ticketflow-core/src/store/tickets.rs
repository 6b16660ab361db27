use crate::error::StoreError;
use crate::model::{Ticket, TicketDraft};
use crate::store::kv::KvBackend;
use chrono::Utc;

/// Storage key for the serialized ticket list.
pub const TICKETS_KEY: &str = "tickets";

/// CRUD over the full ticket list, persisted as one value under
/// [`TICKETS_KEY`].
///
/// The whole list is read and rewritten on every mutation; the backend
/// guarantees each write is all-or-nothing. Ids are assigned from a
/// monotonic counter (`max + 1`) so a fresh id is always at least the
/// previous maximum.
pub struct TicketStore<B> {
    backend: B,
}

impl<B: KvBackend> TicketStore<B> {
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Load the stored ticket list in insertion order.
    ///
    /// Absent key, unreadable backend, or an unparseable value all degrade
    /// to an empty list. Parse failures are logged, never surfaced.
    pub fn load(&self) -> Vec<Ticket> {
        let raw = match self.backend.get(TICKETS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!("ticket store unreadable, treating as empty: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tickets) => tickets,
            Err(err) => {
                tracing::warn!("stored ticket list is corrupt, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `tickets`.
    pub fn save(&self, tickets: &[Ticket]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(tickets)?;
        self.backend.put(TICKETS_KEY, &raw)
    }

    /// Create a ticket from `draft`, append it, persist, and return it.
    pub fn create(&self, draft: TicketDraft) -> Result<Ticket, StoreError> {
        let mut tickets = self.load();
        let id = tickets.iter().map(|t| t.id).max().map_or(1, |max| max + 1);

        let ticket = Ticket {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            created_at: Utc::now().to_rfc3339(),
        };

        tickets.push(ticket.clone());
        self.save(&tickets)?;
        tracing::debug!(id, "created ticket");
        Ok(ticket)
    }

    /// Replace the mutable fields of the ticket with `id`, preserving its
    /// `id` and `created_at`. A missing id is a no-op, not an error.
    pub fn update(&self, id: u64, draft: TicketDraft) -> Result<(), StoreError> {
        let mut tickets = self.load();
        let Some(ticket) = tickets.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(id, "update of absent ticket ignored");
            return Ok(());
        };

        ticket.title = draft.title;
        ticket.description = draft.description;
        ticket.status = draft.status;
        ticket.priority = draft.priority;

        self.save(&tickets)
    }

    /// Remove the first ticket with `id`. A missing id is a no-op.
    pub fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut tickets = self.load();
        let Some(pos) = tickets.iter().position(|t| t.id == id) else {
            tracing::debug!(id, "delete of absent ticket ignored");
            return Ok(());
        };

        tickets.remove(pos);
        self.save(&tickets)
    }
}
