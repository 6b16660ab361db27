//! `tf logout` — drop the session after confirmation.

use crate::cmd::confirm;
use crate::output::{CONFIRM_LOGOUT, OutputMode, render_success};
use clap::Args;
use ticketflow_core::store::{FileBackend, SessionStore};

#[derive(Args, Debug)]
pub struct LogoutArgs {
    /// Skip the confirmation prompt.
    #[arg(long)]
    pub yes: bool,
}

pub fn run_logout(
    args: &LogoutArgs,
    output: OutputMode,
    backend: &FileBackend,
) -> anyhow::Result<()> {
    if !args.yes && !confirm(CONFIRM_LOGOUT)? {
        // Declined: leave the session untouched.
        return Ok(());
    }

    SessionStore::new(backend.clone()).logout()?;
    render_success(output, "Logged out")
}

#[cfg(test)]
mod tests {
    use super::LogoutArgs;
    use clap::Parser;

    #[test]
    fn yes_flag_defaults_off() {
        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: LogoutArgs,
        }
        assert!(!Wrapper::parse_from(["test"]).args.yes);
        assert!(Wrapper::parse_from(["test", "--yes"]).args.yes);
    }
}
