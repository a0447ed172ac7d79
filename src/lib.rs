//! Library and playback state engine for a desktop music player.
//!
//! `rondo` owns the two state machines a player UI renders from:
//!
//! - a `Library` of track records, deduplicated by path and kept in a
//!   composite order, with substring filtering and JSON persistence;
//! - a `PlaybackController` holding the queue snapshot, the current track,
//!   transport flags and the navigation rules at the queue edges.
//!
//! `App` ties the two together with the injected collaborators (`Scanner`,
//! `LibraryStorage`, `FolderPicker`) and owns the scan lifecycle and the
//! status line. The crate renders no UI and decodes no audio; the host
//! drives it and mirrors its state into an audio layer of its choosing.

pub mod app;
pub mod config;
pub mod dialog;
pub mod library;
pub mod persist;
pub mod playback;
pub mod scan;

pub use app::{App, LibrarySummary, ScanReport};
pub use library::{Library, Track};
pub use playback::{PlaybackController, PlaybackSnapshot, RepeatMode};
