//! Terminal setup and teardown

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};

/// Put the terminal into drawing mode
///
/// The full-grid variant draws on the alternate screen; the incremental
/// variant scrolls the main screen and leaves its trail behind on exit.
pub fn setup<W: Write>(out: &mut W, alternate_screen: bool) -> io::Result<()> {
    enable_raw_mode()?;
    if alternate_screen {
        execute!(out, EnterAlternateScreen)?;
    }
    execute!(out, Hide)
}

/// Undo [`setup`]
pub fn restore<W: Write>(out: &mut W, alternate_screen: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if alternate_screen {
        execute!(out, LeaveAlternateScreen)?;
    }
    execute!(out, Show)
}

/// Restore the terminal before the default panic message prints
pub fn install_panic_hook(alternate_screen: bool) {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore(&mut io::stdout(), alternate_screen);
        original_hook(panic_info);
    }));
}
