// Timing engine - per-word display durations

use std::time::Duration;

use crate::engine::config::TimingConfig;

/// Seconds per word at the nominal rate.
pub fn wpm_to_seconds(wpm: u32) -> f64 {
    60.0 / wpm.max(1) as f64
}

fn punctuation_multiplier(word: &str, config: &TimingConfig) -> f64 {
    match word.chars().last() {
        Some(c) if config.full_stop_chars.contains(&c) => config.full_stop_multiplier,
        Some(c) if config.soft_pause_chars.contains(&c) => config.soft_pause_multiplier,
        _ => 1.0,
    }
}

fn length_multiplier(word: &str, config: &TimingConfig) -> f64 {
    let len = word.chars().count();
    if len > config.long_word_threshold {
        config.long_word_multiplier
    } else if len < config.short_word_threshold {
        config.short_word_multiplier
    } else {
        1.0
    }
}

/// Display time for `word` in seconds.
///
/// Starts from `60 / wpm`, then applies the trailing punctuation multiplier
/// and the word length multiplier. Both categories compose multiplicatively.
pub fn word_duration_secs(word: &str, wpm: u32, config: &TimingConfig) -> f64 {
    wpm_to_seconds(wpm) * punctuation_multiplier(word, config) * length_multiplier(word, config)
}

pub fn word_duration(word: &str, wpm: u32, config: &TimingConfig) -> Duration {
    Duration::from_secs_f64(word_duration_secs(word, wpm, config))
}

/// Rough reading time in minutes, ignoring punctuation pauses.
pub fn estimate_minutes(word_count: usize, wpm: u32) -> f64 {
    word_count as f64 / wpm.max(1) as f64
}
