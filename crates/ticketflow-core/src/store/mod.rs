//! Persistence: a two-key key-value store with injectable backends.
//!
//! The stores never talk to ambient global state. Every store owns a
//! [`kv::KvBackend`], so tests run against [`kv::MemoryBackend`] and the
//! binary runs against [`kv::FileBackend`].

pub mod kv;
pub mod session;
pub mod tickets;

pub use kv::{FileBackend, KvBackend, MemoryBackend};
pub use session::{Session, SessionStore, SESSION_KEY};
pub use tickets::{TicketStore, TICKETS_KEY};
