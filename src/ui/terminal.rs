use crate::engine::config::DisplayConfig;
use crate::engine::FormattedWord;
use crate::ui::interrupt::{InputSource, InterruptFlag, KeyboardInput};
use crate::ui::{Banner, Surface, Theme, WaitOutcome};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Print, PrintStyledContent},
    terminal::{Clear, ClearType},
};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Longest stretch a wait blocks on input before rechecking the signal flag.
const SIGNAL_CHECK_INTERVAL: Duration = Duration::from_millis(50);

/// Draws frames on a crossterm terminal and listens for interrupts while waiting.
pub struct TerminalSurface<W: Write = Stdout, I: InputSource = KeyboardInput> {
    out: W,
    input: I,
    interrupt: InterruptFlag,
    display: DisplayConfig,
    theme: Theme,
}

impl TerminalSurface<Stdout, KeyboardInput> {
    pub fn stdout(display: DisplayConfig) -> Self {
        let theme = Theme::for_terminal(display.styled);
        Self::new(io::stdout(), KeyboardInput, display, theme)
    }
}

impl<W: Write, I: InputSource> TerminalSurface<W, I> {
    pub fn new(out: W, input: I, display: DisplayConfig, theme: Theme) -> Self {
        Self {
            out,
            input,
            interrupt: InterruptFlag::new(),
            display,
            theme,
        }
    }

    /// Handle to the flag that ends the current wait when raised.
    pub fn interrupt_flag(&self) -> InterruptFlag {
        self.interrupt.clone()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print_centered(&mut self, row: u16, text: &str) -> io::Result<()> {
        let col = centered_column(text.width(), self.display.screen_width);
        queue!(self.out, MoveTo(col, row), Print(text))
    }
}

impl<W: Write, I: InputSource> Surface for TerminalSurface<W, I> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.out.flush()
    }

    fn show_frame(&mut self, frame: &FormattedWord) -> io::Result<()> {
        let width = frame.plain().width();
        let col = centered_column(width, self.display.screen_width);

        queue!(
            self.out,
            MoveTo(col, self.display.word_row),
            Print(" ".repeat(frame.left_padding)),
            PrintStyledContent(self.theme.text.apply(frame.before.as_str())),
            PrintStyledContent(self.theme.anchor.apply(frame.focus.as_str())),
            PrintStyledContent(self.theme.text.apply(frame.after.as_str())),
            Print(" ".repeat(frame.right_padding)),
        )?;
        self.out.flush()
    }

    fn show_banner(&mut self, banner: Banner) -> io::Result<()> {
        let row = self.display.banner_row;
        let rule = "=".repeat(self.display.screen_width);

        match banner {
            Banner::Completed => {
                queue!(self.out, MoveTo(0, row), Print(&rule))?;
                self.print_centered(row + 1, "Reading complete!")?;
                queue!(self.out, MoveTo(0, row + 2), Print(&rule), MoveTo(0, row + 4))?;
            }
            Banner::Interrupted => {
                self.print_centered(row, "Reading interrupted.")?;
                queue!(self.out, MoveTo(0, row + 2))?;
            }
        }
        self.out.flush()
    }

    fn wait(&mut self, duration: Duration) -> io::Result<WaitOutcome> {
        let deadline = Instant::now() + duration;

        loop {
            if self.interrupt.is_raised() {
                return Ok(WaitOutcome::Interrupted);
            }

            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(WaitOutcome::Elapsed);
            }

            if self
                .input
                .poll_interrupt(remaining.min(SIGNAL_CHECK_INTERVAL))?
            {
                return Ok(WaitOutcome::Interrupted);
            }
        }
    }
}

/// Left column that centers `content_width` cells within `screen_width`.
pub fn centered_column(content_width: usize, screen_width: usize) -> u16 {
    let col = screen_width.saturating_sub(content_width) / 2;
    u16::try_from(col).unwrap_or(u16::MAX)
}
