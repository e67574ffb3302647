use std::io;

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::CrosstermBackend;

/// Type alias for the terminal used throughout the app.
pub type Terminal = ratatui::Terminal<CrosstermBackend<io::Stdout>>;

/// Initialise the terminal: raw mode, alternate screen, hidden cursor.
/// A panic restores the terminal before the default hook prints.
pub fn init() -> Result<Terminal> {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        default_hook(info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = ratatui::Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
pub fn restore() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), Show, LeaveAlternateScreen)?;
    Ok(())
}
