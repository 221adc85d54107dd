pub mod interrupt;
pub mod terminal;
pub mod terminal_guard;
pub mod theme;

use std::io;
use std::time::Duration;

use crate::engine::FormattedWord;

pub use interrupt::{InputSource, InterruptFlag, KeyboardInput};
pub use terminal::TerminalSurface;
pub use terminal_guard::TerminalGuard;
pub use theme::Theme;

/// Closing message shown after playback ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Banner {
    Completed,
    Interrupted,
}

/// How a pacing delay ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Elapsed,
    Interrupted,
}

/// Something the playback loop can draw frames on.
pub trait Surface {
    fn clear(&mut self) -> io::Result<()>;

    fn show_frame(&mut self, frame: &FormattedWord) -> io::Result<()>;

    fn show_banner(&mut self, banner: Banner) -> io::Result<()>;

    /// Blocks for `duration` unless an interrupt arrives first.
    fn wait(&mut self, duration: Duration) -> io::Result<WaitOutcome>;
}
