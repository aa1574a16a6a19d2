//! bookshelf - Personal Library Catalog
//!
//! Parses the command line, picks the front end the terminal supports and
//! runs the main menu until the user exits.

use std::io::{self, IsTerminal};
use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use bookshelf::application::{run_application, AppConfig, Cli, RenderMode};
use bookshelf::domain::CatalogManager;
use bookshelf::infrastructure::{logging, JsonFileStore};
use bookshelf::presentation::{wait_for_min_height, CrosstermKeys, Interface, PlainScreen, TuiScreen};

/// Entry point for the bookshelf catalog.
///
/// # Errors
///
/// Returns an error if logging or terminal setup fails, or if the terminal
/// stops working during the session. Ending input or pressing Ctrl+C exits
/// quietly.
fn main() -> anyhow::Result<()> {
    let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
    let config = AppConfig::resolve(Cli::parse(), interactive);

    if let Some(log_file) = &config.log_file {
        logging::init_global(log_file)
            .with_context(|| format!("cannot open log file {}", log_file.display()))?;
    }
    info!(data_file = %config.data_file.display(), mode = ?config.render_mode, "starting");

    let catalog = CatalogManager::new(JsonFileStore::new(&config.data_file));
    let res = match config.render_mode {
        RenderMode::FullScreen => run_full_screen(catalog),
        RenderMode::Plain => run_plain(catalog, interactive),
    };

    match res {
        Ok(()) => Ok(()),
        Err(err) if matches!(err.kind(), io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof) => {
            info!(reason = %err, "session ended");
            Ok(())
        }
        Err(err) => {
            error!(error = %err, "session failed");
            Err(err).context("terminal session failed")
        }
    }
}

fn run_plain(catalog: CatalogManager<JsonFileStore>, interactive: bool) -> io::Result<()> {
    let screen = PlainScreen::new(io::stdin().lock(), io::stdout());
    let screen = if interactive { screen } else { screen.without_clearing() };
    run_application(&mut Interface::new(screen, catalog))
}

/// Runs the full-screen front end, restoring the terminal on every exit path.
fn run_full_screen(catalog: CatalogManager<JsonFileStore>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = match wait_for_min_height(&mut terminal) {
        Ok(()) => {
            let mut interface = Interface::new(TuiScreen::new(terminal, CrosstermKeys), catalog);
            let res = run_application(&mut interface);
            terminal = interface.into_screen().into_terminal();
            res
        }
        Err(err) => Err(err),
    };

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
