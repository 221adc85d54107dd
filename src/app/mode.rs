/// Where playback is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running { index: usize },
    Completed,
    Interrupted,
}

impl PlaybackState {
    pub fn is_finished(&self) -> bool {
        matches!(self, PlaybackState::Completed | PlaybackState::Interrupted)
    }
}
