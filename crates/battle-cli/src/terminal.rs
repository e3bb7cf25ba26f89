//! Raw-mode terminal lifecycle.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    cursor,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enters the alternate screen in raw mode and hands back the terminal
/// together with a guard that restores the screen even on panic.
pub fn init() -> Result<(Tui, RestoreGuard)> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, RestoreGuard))
}

fn restore() -> Result<()> {
    execute!(io::stdout(), cursor::Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restores the host terminal when dropped.
pub struct RestoreGuard;

impl Drop for RestoreGuard {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            tracing::warn!("failed to restore terminal: {err}");
        }
    }
}
