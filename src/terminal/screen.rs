//! Full-screen RAII guard.

use std::io::{self, Write};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// Raw mode, alternate screen, mouse capture and a hidden cursor, undone on
/// drop.
pub struct Screen {
    active: bool,
}

impl Screen {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { active: true };
        crate::exits::mark_screen(true);
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide) {
            guard.leave();
            return Err(e);
        }
        Ok(guard)
    }

    /// Restore the terminal (also happens on drop).
    pub fn leave(&mut self) {
        if self.active {
            let mut out = io::stdout();
            let _ = execute!(out, DisableMouseCapture, Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            let _ = out.flush();
            crate::exits::mark_screen(false);
            self.active = false;
        }
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.leave();
    }
}
