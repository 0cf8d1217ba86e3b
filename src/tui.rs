//! Terminal setup and teardown.
//!
//! The alternate screen, raw mode and mouse capture are entered together and
//! undone together, including when the process panics.

use std::io::{self, Stdout};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};

/// Terminal type the event loop draws into.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal into TUI mode and installs the restoring panic hook.
///
/// # Errors
/// Returns an error if raw mode or the alternate screen cannot be entered.
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;

    set_panic_hook();

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        if let Err(e) = restore() {
            tracing::error!("Failed to restore terminal: {e}");
        }
        tracing::error!("Panic: {panic_info}");
        hook(panic_info);
    }));
}

/// Leaves TUI mode. Safe to call more than once.
///
/// # Errors
/// Returns an error if the terminal state cannot be restored.
pub fn restore() -> io::Result<()> {
    execute!(
        io::stdout(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        ratatui::crossterm::cursor::Show
    )?;
    disable_raw_mode()
}
