use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use signal_hook::consts::{SIGINT, SIGTERM};

/// Shared flag raised by termination signals.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes SIGINT, SIGTERM and (on unix) SIGHUP into this flag instead of
    /// killing the process.
    pub fn register_signals(&self) -> io::Result<()> {
        signal_hook::flag::register(SIGINT, Arc::clone(&self.0))?;
        signal_hook::flag::register(SIGTERM, Arc::clone(&self.0))?;
        #[cfg(unix)]
        signal_hook::flag::register(signal_hook::consts::SIGHUP, Arc::clone(&self.0))?;
        Ok(())
    }

    pub fn raise(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_raised(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Where interrupt key presses come from.
pub trait InputSource {
    /// Blocks up to `timeout`; returns true if an interrupt key was pressed.
    fn poll_interrupt(&mut self, timeout: Duration) -> io::Result<bool>;
}

/// Keyboard input read through crossterm. Needs a terminal on stdin.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn poll_interrupt(&mut self, timeout: Duration) -> io::Result<bool> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(is_interrupt_key(&key));
            }
        }
        Ok(false)
    }
}

/// Ctrl-C, Esc and `q` stop playback.
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Esc => true,
        _ => false,
    }
}
