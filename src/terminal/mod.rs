//! Terminal lifecycle with RAII cleanup.
//!
//! [`TerminalManager`] puts the terminal into raw mode on the alternate
//! screen with mouse capture, and restores it when dropped. A panic hook
//! ([`setup_panic_hook`]) covers the paths where `Drop` never runs.

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

use crate::error::{BookpediaError, BookpediaResult};

/// Owns the ratatui terminal; restores the user's terminal on drop.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalManager {
    pub fn new() -> BookpediaResult<Self> {
        enable_raw_mode().map_err(BookpediaError::terminal)?;

        let mut stdout = io::stdout();
        if let Err(e) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(BookpediaError::terminal(e));
        }

        let mut terminal =
            Terminal::new(CrosstermBackend::new(stdout)).map_err(BookpediaError::terminal)?;
        terminal.clear().map_err(BookpediaError::terminal)?;
        tracing::debug!("Entered TUI mode");

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal now. Later calls, including the one from
    /// `Drop`, are no-ops.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        leave_tui_mode(self.terminal.backend_mut());
        tracing::debug!("Left TUI mode");
    }
}

impl Drop for TerminalManager {
    fn drop(&mut self) {
        self.restore();
    }
}
