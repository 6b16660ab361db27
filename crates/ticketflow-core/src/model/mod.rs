//! Persisted data model.

pub mod ticket;

pub use ticket::{ParseEnumError, Priority, Status, Ticket, TicketDraft};
