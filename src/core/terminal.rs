//! Terminal width discovery for lsr.
//!
//! The column layout is sized to the terminal; when the width cannot be
//! queried (output piped to a file, no tty attached) rendering falls back
//! to a fixed 80-column width.

/// Width assumed when the terminal size cannot be queried.
pub const DEFAULT_WIDTH: usize = 80;

/// # Returns
/// The current terminal width in columns, or [DEFAULT_WIDTH] when the
/// query fails or reports zero.
pub fn console_width() -> usize {
    match crossterm::terminal::size() {
        Ok((cols, _rows)) if cols > 0 => cols as usize,
        _ => DEFAULT_WIDTH,
    }
}
