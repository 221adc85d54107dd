use std::io;

use log::{debug, info};

use super::mode::PlaybackState;
use crate::engine::config::Config;
use crate::engine::renderer::format_word;
use crate::engine::timing::word_duration;
use crate::ui::{Banner, Surface, WaitOutcome};

/// Plays a word sequence one frame at a time.
pub struct Playback {
    words: Vec<String>,
    config: Config,
    state: PlaybackState,
}

impl Playback {
    pub fn new(words: Vec<String>, config: Config) -> Self {
        Self {
            words,
            config,
            state: PlaybackState::Idle,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Waits out the countdown, then shows every word for its paced duration.
    ///
    /// Returns `Completed` after the last word, or `Interrupted` as soon as the
    /// surface reports an interrupt. Either way the closing banner is shown.
    /// Finished playback is not restartable.
    pub fn run<S: Surface>(&mut self, surface: &mut S) -> io::Result<PlaybackState> {
        if self.state.is_finished() {
            return Ok(self.state);
        }

        if !self.config.countdown.is_zero()
            && surface.wait(self.config.countdown)? == WaitOutcome::Interrupted
        {
            return self.finish(surface, PlaybackState::Interrupted);
        }

        info!(
            "Starting playback of {} words at {} WPM",
            self.words.len(),
            self.config.wpm
        );

        for index in 0..self.words.len() {
            self.state = PlaybackState::Running { index };
            let word = &self.words[index];

            let frame = format_word(word, self.config.display.frame_width);
            let duration = word_duration(word, self.config.wpm, &self.config.timing);
            debug!("Word {} {:?} for {:?}", index, word, duration);

            surface.clear()?;
            surface.show_frame(&frame)?;

            if surface.wait(duration)? == WaitOutcome::Interrupted {
                return self.finish(surface, PlaybackState::Interrupted);
            }
        }

        self.finish(surface, PlaybackState::Completed)
    }

    fn finish<S: Surface>(
        &mut self,
        surface: &mut S,
        state: PlaybackState,
    ) -> io::Result<PlaybackState> {
        self.state = state;
        info!("Playback finished: {:?}", state);

        let banner = match state {
            PlaybackState::Interrupted => Banner::Interrupted,
            _ => Banner::Completed,
        };
        surface.clear()?;
        surface.show_banner(banner)?;

        Ok(state)
    }
}
