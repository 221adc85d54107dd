pub mod config;
pub mod error;
pub mod ovp;
pub mod renderer;
pub mod timing;

pub use config::{Config, DisplayConfig, TimingConfig};
pub use error::RsvpError;
pub use ovp::calculate_anchor_position;
pub use renderer::{format_word, FormattedWord};
pub use timing::{estimate_minutes, word_duration, word_duration_secs, wpm_to_seconds};
