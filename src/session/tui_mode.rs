//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::ui::{self, Route, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{error::Error, io};

/// Runs the application in TUI mode
///
/// Sets up the terminal, runs the UI loop until the user quits, and restores
/// the terminal even when the loop fails.
///
/// # Arguments
/// * `session` - Session data from setup
/// * `initial_route` - Screen shown after the splash screen
pub async fn run_tui_mode(session: SessionData, initial_route: Route) -> Result<(), Box<dyn Error>> {
    print_session_starting("TUI", session.api.environment());

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(
        session.with_background_color,
        session.intervals,
        initial_route,
    );
    let app = ui::App::new(
        session.api,
        session.event_sender,
        session.event_receiver,
        session.sequencer,
        ui_config,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result?;
    print_session_exit_success();
    Ok(())
}
