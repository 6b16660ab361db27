//! ticketflow-core library.
//!
//! Everything below the presentation layer: the ticket data model, the
//! key-value persistence stores (with injectable backends), the pure form
//! validators, the page router state machine, and dashboard aggregation.
//!
//! # Conventions
//!
//! - **Errors**: typed [`error::StoreError`] at the store boundary,
//!   `anyhow::Result` for config loading.
//! - **Logging**: `tracing` macros (`info!`, `warn!`, `debug!`).

pub mod config;
pub mod error;
pub mod model;
pub mod router;
pub mod stats;
pub mod store;
pub mod validate;
