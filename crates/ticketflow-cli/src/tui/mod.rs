//! Full-screen terminal UI for `tf ui`.
//!
//! Screens own their state and expose `handle_key`/`render`; [`app::App`]
//! routes between them and applies their actions to the stores. Everything
//! below the terminal setup is backend-generic, so the whole UI can be
//! driven headlessly in tests against an in-memory store.

pub mod app;
pub mod confirm;
pub mod dashboard;
pub mod form;
pub mod landing;
pub mod login;
pub mod signup;
pub mod tickets;
pub mod toast;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use ticketflow_core::config::UserConfig;
use ticketflow_core::store::FileBackend;

fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Run the UI until the user quits.
pub fn run(config: &UserConfig, backend: FileBackend) -> Result<()> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(backend, &config.ui);

    let result = run_loop(&mut terminal, &mut app);

    // Restore the terminal even when the loop failed.
    restore_terminal(&mut terminal)?;
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<FileBackend>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Short poll keeps toasts and the signup delay responsive.
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => app.handle_key(key)?,
                Event::Resize(_, _) => {}
                _ => {}
            }
        }

        app.tick()?;

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
