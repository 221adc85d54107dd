pub mod app;
pub mod mode;

pub use app::Playback;
pub use mode::PlaybackState;
