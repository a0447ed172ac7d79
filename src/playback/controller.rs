//! The playback state machine: current track, queue and navigation.

use std::time::Duration;

use rand::RngExt;

use crate::config::{PlaybackSettings, RepeatModeSetting};
use crate::library::Track;

use super::types::{PlaybackSnapshot, RepeatMode};

/// Elapsed time past which "previous" restarts the current track instead of
/// moving back.
pub const DEFAULT_RESTART_THRESHOLD: Duration = Duration::from_secs(3);

/// Queue, transport flags and navigation state for the host's audio layer.
///
/// The queue is a snapshot: once set it never changes because the library
/// did. Navigation walks the queue in order unless shuffle is on, in which
/// case targets are drawn uniformly over the whole queue (the draw may land
/// on the current track again).
pub struct PlaybackController {
    queue: Vec<Track>,
    current: Option<Track>,
    playing: bool,
    volume: f32,
    position: Duration,
    shuffle: bool,
    repeat: RepeatMode,
    restart_threshold: Duration,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackController {
    pub fn new() -> Self {
        Self {
            queue: Vec::new(),
            current: None,
            playing: false,
            volume: 1.0,
            position: Duration::ZERO,
            shuffle: false,
            repeat: RepeatMode::Off,
            restart_threshold: DEFAULT_RESTART_THRESHOLD,
        }
    }

    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    pub fn current(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    pub fn position(&self) -> Duration {
        self.position
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn restart_threshold(&self) -> Duration {
        self.restart_threshold
    }

    /// Replace the queue snapshot. The current track is left alone even if
    /// it is not part of the new queue.
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.queue = tracks;
    }

    /// Load a track and start it from the beginning.
    pub fn play(&mut self, track: Track) {
        self.current = Some(track);
        self.playing = true;
        self.position = Duration::ZERO;
    }

    /// Flip play/pause. Flips even with no track loaded; the host's audio
    /// layer tolerates that.
    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    /// Flip shuffle. Nothing is reordered; shuffle only changes how the
    /// next/previous target is chosen.
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
    }

    /// Cycle the repeat mode through `Off -> All -> One`.
    pub fn cycle_repeat(&mut self) {
        self.repeat = match self.repeat {
            RepeatMode::Off => RepeatMode::All,
            RepeatMode::All => RepeatMode::One,
            RepeatMode::One => RepeatMode::Off,
        };
    }

    /// Set the volume, clamped into `0.0..=1.0`. Callers may hand over raw
    /// slider values; NaN is ignored and keeps the previous volume.
    pub fn set_volume(&mut self, volume: f32) {
        if volume.is_nan() {
            return;
        }
        self.volume = volume.clamp(0.0, 1.0);
    }

    /// Record the host-reported elapsed time within the current track.
    pub fn set_position(&mut self, position: Duration) {
        self.position = position;
    }

    /// Move to the next track.
    ///
    /// `user_triggered` distinguishes a manual skip from the current track
    /// ending on its own: repeat-one swallows the automatic advance but
    /// never a manual skip. Past the end of the queue, repeat-all wraps to
    /// the start; otherwise playback halts on the last track.
    pub fn next_track(&mut self, user_triggered: bool) {
        if self.current.is_none() || self.queue.is_empty() {
            return;
        }
        if self.repeat == RepeatMode::One && !user_triggered {
            return;
        }

        let target = if self.shuffle {
            self.random_index() as i64
        } else {
            // A current track missing from the queue counts as index -1,
            // so its successor is the queue start.
            self.current_index() + 1
        };

        if target >= self.queue.len() as i64 {
            if self.repeat == RepeatMode::All {
                self.jump_to(0);
            } else {
                self.playing = false;
            }
            return;
        }

        self.jump_to(target as usize);
    }

    /// Move to the previous track, or restart the current one when more
    /// than the restart threshold has elapsed.
    ///
    /// Before the start of the queue, repeat-all wraps to the last track;
    /// otherwise the target clamps to the first. Unlike `next_track` this
    /// never halts playback.
    pub fn prev_track(&mut self) {
        if self.current.is_none() || self.queue.is_empty() {
            return;
        }
        if self.position > self.restart_threshold {
            self.position = Duration::ZERO;
            return;
        }

        let target = if self.shuffle {
            self.random_index() as i64
        } else {
            self.current_index() - 1
        };

        if target < 0 {
            if self.repeat == RepeatMode::All {
                self.jump_to(self.queue.len() - 1);
            } else {
                self.jump_to(0);
            }
            return;
        }

        self.jump_to(target as usize);
    }

    /// Drop the queue and current track and stop. Volume, shuffle and
    /// repeat are preferences and survive.
    pub fn reset(&mut self) {
        self.queue.clear();
        self.current = None;
        self.playing = false;
        self.position = Duration::ZERO;
    }

    /// Seed transport preferences from configuration.
    pub fn apply_settings(&mut self, settings: &PlaybackSettings) {
        self.shuffle = settings.shuffle;
        self.repeat = match settings.repeat {
            RepeatModeSetting::Off => RepeatMode::Off,
            RepeatModeSetting::All => RepeatMode::All,
            RepeatModeSetting::One => RepeatMode::One,
        };
        self.set_volume(settings.volume);
        self.restart_threshold = Duration::try_from_secs_f64(settings.restart_threshold_secs)
            .unwrap_or(DEFAULT_RESTART_THRESHOLD);
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            track: self.current.clone(),
            playing: self.playing,
            volume: self.volume,
            position: self.position,
            shuffle: self.shuffle,
            repeat: self.repeat,
        }
    }

    fn current_index(&self) -> i64 {
        match &self.current {
            Some(track) => self
                .queue
                .iter()
                .position(|t| t.path == track.path)
                .map(|i| i as i64)
                .unwrap_or(-1),
            None => -1,
        }
    }

    fn random_index(&self) -> usize {
        rand::rng().random_range(0..self.queue.len())
    }

    fn jump_to(&mut self, index: usize) {
        self.current = Some(self.queue[index].clone());
        self.playing = true;
        self.position = Duration::ZERO;
    }
}
