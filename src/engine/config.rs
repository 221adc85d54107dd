// Configuration for the reader engine and terminal presentation.
// Defaults reproduce the classic one-word-at-a-time reader.

use std::ops::RangeInclusive;
use std::time::Duration;

use crate::engine::error::RsvpError;

/// Pacing multipliers applied on top of the base `60 / wpm` duration.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingConfig {
    /// Trailing characters that end a sentence (default `. ! ?`)
    pub full_stop_chars: Vec<char>,
    pub full_stop_multiplier: f64, // default 2.0x

    /// Trailing characters that mark a soft pause (default `, ; :`)
    pub soft_pause_chars: Vec<char>,
    pub soft_pause_multiplier: f64, // default 1.5x

    /// Words strictly longer than this get the long word multiplier (default 8)
    pub long_word_threshold: usize,
    pub long_word_multiplier: f64, // default 1.3x

    /// Words strictly shorter than this get the short word multiplier (default 3)
    pub short_word_threshold: usize,
    pub short_word_multiplier: f64, // default 0.8x
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            full_stop_chars: vec!['.', '!', '?'],
            full_stop_multiplier: 2.0,
            soft_pause_chars: vec![',', ';', ':'],
            soft_pause_multiplier: 1.5,
            long_word_threshold: 8,
            long_word_multiplier: 1.3,
            short_word_threshold: 3,
            short_word_multiplier: 0.8,
        }
    }
}

/// Screen geometry for the terminal surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Width of the ORP-centered frame (default 40)
    pub frame_width: usize,

    /// Width the frame and banners are centered within (default 80)
    pub screen_width: usize,

    /// Blank lines above the word (default 12)
    pub word_row: u16,

    /// Blank lines above the completion/interruption banner (default 10)
    pub banner_row: u16,

    /// Emphasize the focus character with colour and bold
    pub styled: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            frame_width: 40,
            screen_width: 80,
            word_row: 12,
            banner_row: 10,
            styled: true,
        }
    }
}

/// Master configuration combining all reader settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Words per minute reading speed (default 300)
    pub wpm: u32,

    /// Minimum and maximum allowed WPM
    pub wpm_range: RangeInclusive<u32>,

    /// Pause between the startup summary and the first word
    pub countdown: Duration,

    pub timing: TimingConfig,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wpm: 300,
            wpm_range: 50..=1500,
            countdown: Duration::from_secs(3),
            timing: TimingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Config {
    /// Checks a requested WPM against `wpm_range`.
    pub fn validate_wpm(&self, wpm: i64) -> Result<u32, RsvpError> {
        let min = *self.wpm_range.start();
        let max = *self.wpm_range.end();
        if wpm < i64::from(min) || wpm > i64::from(max) {
            return Err(RsvpError::WpmOutOfRange { wpm, min, max });
        }
        Ok(wpm as u32)
    }

    /// Returns a copy using `wpm`, validated against `wpm_range`.
    pub fn with_wpm(mut self, wpm: i64) -> Result<Self, RsvpError> {
        self.wpm = self.validate_wpm(wpm)?;
        Ok(self)
    }
}
