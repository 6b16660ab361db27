#![forbid(unsafe_code)]

mod auth;
mod cmd;
mod output;
mod tui;

use clap::{Parser, Subcommand};
use output::OutputMode;
use std::env;
use ticketflow_core::config;
use ticketflow_core::store::FileBackend;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "ticketflow: a small ticket tracker with mock auth",
    long_about = None
)]
struct Cli {
    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags.
    const fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Session",
        about = "Log in as the demo user",
        after_help = "EXAMPLES:\n    # The only accepted credentials\n    tf login --email demo@test.com --password password123"
    )]
    Login(cmd::login::LoginArgs),

    #[command(
        next_help_heading = "Session",
        about = "Drop the current session",
        after_help = "EXAMPLES:\n    # Skip the confirmation prompt\n    tf logout --yes"
    )]
    Logout(cmd::logout::LogoutArgs),

    #[command(
        next_help_heading = "Session",
        about = "Create an account (mock: always yields the demo session)",
        after_help = "EXAMPLES:\n    tf signup --name Demo --email new@user.org --password hunter22 --confirm-password hunter22"
    )]
    Signup(cmd::signup::SignupArgs),

    #[command(
        next_help_heading = "Tickets",
        about = "List all tickets",
        after_help = "EXAMPLES:\n    # Human-readable table\n    tf list\n\n    # Machine-readable output\n    tf list --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Tickets",
        about = "Create a ticket",
        after_help = "EXAMPLES:\n    tf create --title \"Printer jam\" --priority high\n\n    tf create --title \"Slow dashboard\" --description \"Loads >5s\" --status in_progress"
    )]
    Create(cmd::create::CreateArgs),

    #[command(
        next_help_heading = "Tickets",
        about = "Update fields of an existing ticket",
        after_help = "EXAMPLES:\n    tf update 3 --status closed\n\n    tf update 3 --title \"Printer jammed again\" --priority low"
    )]
    Update(cmd::update::UpdateArgs),

    #[command(
        next_help_heading = "Tickets",
        about = "Delete a ticket",
        after_help = "EXAMPLES:\n    # Skip the confirmation prompt\n    tf delete 3 --yes"
    )]
    Delete(cmd::delete::DeleteArgs),

    #[command(
        next_help_heading = "Tickets",
        about = "Show ticket counts by status",
        after_help = "EXAMPLES:\n    tf stats\n\n    tf stats --json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        next_help_heading = "Interactive",
        about = "Run the full-screen terminal UI"
    )]
    Ui,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("TICKETFLOW_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "ticketflow=debug,info"
        } else {
            "ticketflow=info,warn"
        })
    });

    let format = env::var("TICKETFLOW_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = cli.output_mode();

    let config = config::load_user_config()?;
    let data_dir = config.resolve_data_dir();
    debug!(data_dir = %data_dir.display(), "resolved data directory");
    let backend = FileBackend::new(data_dir);

    match cli.command {
        Commands::Login(ref args) => cmd::login::run_login(args, output, &backend),
        Commands::Logout(ref args) => cmd::logout::run_logout(args, output, &backend),
        Commands::Signup(ref args) => cmd::signup::run_signup(args, output, &backend),
        Commands::List(ref args) => cmd::list::run_list(args, output, &backend),
        Commands::Create(ref args) => cmd::create::run_create(args, output, &backend),
        Commands::Update(ref args) => cmd::update::run_update(args, output, &backend),
        Commands::Delete(ref args) => cmd::delete::run_delete(args, output, &backend),
        Commands::Stats(ref args) => cmd::stats::run_stats(args, output, &backend),
        Commands::Ui => cmd::ui::run_ui(&config, backend),
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use crate::output::OutputMode;
    use clap::Parser;

    #[test]
    fn json_flag_is_global() {
        let cli = Cli::parse_from(["tf", "list", "--json"]);
        assert_eq!(cli.output_mode(), OutputMode::Json);
        assert!(matches!(cli.command, Commands::List(_)));
    }

    #[test]
    fn default_output_is_human() {
        let cli = Cli::parse_from(["tf", "stats"]);
        assert_eq!(cli.output_mode(), OutputMode::Human);
    }

    #[test]
    fn login_requires_email_and_password() {
        assert!(Cli::try_parse_from(["tf", "login", "--email", "demo@test.com"]).is_err());
        assert!(
            Cli::try_parse_from([
                "tf",
                "login",
                "--email",
                "demo@test.com",
                "--password",
                "password123"
            ])
            .is_ok()
        );
    }

    #[test]
    fn update_takes_positional_id() {
        let cli = Cli::parse_from(["tf", "update", "7", "--status", "closed"]);
        let Commands::Update(args) = cli.command else {
            panic!("expected update command");
        };
        assert_eq!(args.id, 7);
    }
}
