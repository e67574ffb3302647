use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

/// Polls for crossterm events and maps them to `AppEvent`s.
/// A timeout with no input is reported as a tick.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        return match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(Some(AppEvent::KeyPress(key.code)))
            }
            Event::Resize(_, _) => Ok(Some(AppEvent::Tick)),
            _ => Ok(None),
        };
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop. The poll timeout shrinks to the animation
/// frame period while confetti is on screen.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(app.poll_interval())? {
            app.update(event);
        }
    }
    Ok(())
}
