//! Command handlers for the `tf` CLI.

pub mod create;
pub mod delete;
pub mod list;
pub mod login;
pub mod logout;
pub mod signup;
pub mod stats;
pub mod ui;
pub mod update;

use std::io::{BufRead, Write};

/// Ask a yes/no question on stdout and read one line from stdin.
///
/// Anything other than an explicit yes declines.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    let mut out = std::io::stdout();
    write!(out, "{prompt} [y/N] ")?;
    out.flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}
