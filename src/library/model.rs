//! Library model types: `Track` and `Library`.
//!
//! The `Library` holds every known track, deduplicated by path and kept in
//! composite sort order at all times.

use std::collections::HashSet;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::order;

/// A single track record. Identity is the `path`; everything else is
/// metadata that may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub path: PathBuf,
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub track_number: Option<u32>,
    pub duration: Option<Duration>,
    /// Unix seconds the file was first seen, from filesystem metadata.
    #[serde(default)]
    pub date_added: u64,
}

/// The in-memory music library.
///
/// Two invariants hold whenever a public method returns: no two tracks share
/// a path, and the tracks are in composite order (artist, album, track
/// number, title; case-insensitive, with stand-ins for missing fields).
#[derive(Debug, Default)]
pub struct Library {
    tracks: Vec<Track>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Merge a batch of scanned records into the library.
    ///
    /// Records whose path is already known are dropped (first seen wins;
    /// existing metadata is never overwritten), the rest are appended and
    /// the composite order is re-established. Returns how many records were
    /// actually added.
    pub fn merge(&mut self, batch: Vec<Track>) -> usize {
        let mut seen: HashSet<PathBuf> = self.tracks.iter().map(|t| t.path.clone()).collect();

        let mut added = 0;
        for track in batch {
            if seen.insert(track.path.clone()) {
                self.tracks.push(track);
                added += 1;
            }
        }

        if added > 0 {
            order::sort_tracks(&mut self.tracks);
        }
        added
    }

    /// Replace the whole collection, then re-apply the dedup and sort
    /// invariants. Used when loading persisted data that may predate them.
    pub fn replace(&mut self, tracks: Vec<Track>) {
        self.tracks.clear();
        self.merge(tracks);
    }

    /// Drop every track.
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Case-insensitive substring filter over title, artist and album,
    /// in library order.
    ///
    /// An empty query returns the whole library. Missing fields never
    /// match, so a track without an artist is not found by "unknown".
    pub fn filtered(&self, query: &str) -> Vec<&Track> {
        if query.is_empty() {
            return self.tracks.iter().collect();
        }

        let needle = query.to_lowercase();
        self.tracks
            .iter()
            .filter(|t| matches_query(t, &needle))
            .collect()
    }
}

fn matches_query(track: &Track, needle: &str) -> bool {
    let field_has = |field: &Option<String>| {
        field
            .as_deref()
            .map(|v| v.to_lowercase().contains(needle))
            .unwrap_or(false)
    };

    field_has(&track.title) || field_has(&track.artist) || field_has(&track.album)
}
