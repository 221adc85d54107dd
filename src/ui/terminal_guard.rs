use crossterm::cursor;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use log::warn;
use std::io;
use std::sync::Once;

static PANIC_HOOK_SET: Once = Once::new();

/// Keeps the terminal in raw mode with a hidden cursor while alive.
///
/// Raw mode lets Ctrl-C arrive as a key event instead of a signal, so the
/// reader can clear the screen and print its own interruption notice.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        io::stdout().execute(cursor::Hide)?;

        set_panic_hook();

        Ok(TerminalGuard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore() {
            warn!("Failed to restore terminal: {}", err);
        }
    }
}

fn restore() -> io::Result<()> {
    io::stdout().execute(cursor::Show)?;
    disable_raw_mode()
}

fn set_panic_hook() {
    PANIC_HOOK_SET.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore();
            default_hook(panic_info);
        }));
    });
}
