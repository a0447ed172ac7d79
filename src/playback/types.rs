use std::time::Duration;

use crate::library::Track;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RepeatMode {
    /// Do not wrap at the end of the queue.
    Off,
    /// Wrap around to the start of the queue.
    All,
    /// Repeat the current track when it ends; manual skips still advance.
    One,
}

impl Default for RepeatMode {
    fn default() -> Self {
        Self::Off
    }
}

/// Owned copy of the playback state for the host to render.
#[derive(Debug, Clone)]
pub struct PlaybackSnapshot {
    /// The track currently loaded, if any.
    pub track: Option<Track>,
    /// Whether playback is running (as opposed to paused or stopped).
    pub playing: bool,
    /// Output volume in `0.0..=1.0`.
    pub volume: f32,
    /// Elapsed time within the current track, as last reported by the host.
    pub position: Duration,
    /// Whether navigation draws random queue positions.
    pub shuffle: bool,
    /// Wrap behavior at the queue edges.
    pub repeat: RepeatMode,
}
