//! Playback state: queue snapshot, transport flags and navigation rules.
//!
//! `PlaybackController` in `playback::controller` owns the state machine;
//! `playback::types` holds the repeat mode and the snapshot handed to the
//! host for rendering.

mod controller;
mod types;

pub use controller::*;
pub use types::*;
