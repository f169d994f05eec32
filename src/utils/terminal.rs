//! Terminal escape sequences and size queries

use std::io::{self, Write};

// ANSI sequences
pub const CLEAR_SCREEN: &str = "\x1b[2J";
pub const CURSOR_HOME: &str = "\x1b[H";

/// Column count used when stdout is not attached to a terminal
pub const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Clears the screen and moves the cursor to the top-left corner
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(CLEAR_SCREEN.as_bytes())?;
    out.write_all(CURSOR_HOME.as_bytes())
}

/// Returns the current terminal width in columns
pub fn terminal_width() -> u16 {
    match crossterm::terminal::size() {
        Ok((cols, _rows)) => cols,
        Err(e) => {
            tracing::debug!(
                "terminal size unavailable ({e}), assuming {DEFAULT_TERMINAL_WIDTH} columns"
            );
            DEFAULT_TERMINAL_WIDTH
        }
    }
}
