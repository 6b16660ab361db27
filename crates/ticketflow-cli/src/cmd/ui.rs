//! `tf ui` — launch the full-screen terminal UI.

use ticketflow_core::config::UserConfig;
use ticketflow_core::store::FileBackend;

pub fn run_ui(config: &UserConfig, backend: FileBackend) -> anyhow::Result<()> {
    crate::tui::run(config, backend)
}
