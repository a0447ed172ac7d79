//! Composite track ordering: artist, then album, then track number, then
//! title. String comparisons are case-insensitive; missing or blank fields
//! sort under a stand-in value.

use std::cmp::Ordering;

use super::model::Track;

const UNKNOWN_ARTIST: &str = "unknown artist";
const UNKNOWN_ALBUM: &str = "unknown album";

/// Lowercased artist key; blank or missing artists sort as "unknown artist".
pub fn artist_key(track: &Track) -> String {
    normalized(track.artist.as_deref(), UNKNOWN_ARTIST)
}

/// Lowercased album key; blank or missing albums sort as "unknown album".
pub fn album_key(track: &Track) -> String {
    normalized(track.album.as_deref(), UNKNOWN_ALBUM)
}

/// Lowercased title key; blank or missing titles sort first as the empty
/// string.
pub fn title_key(track: &Track) -> String {
    normalized(track.title.as_deref(), "")
}

/// Total order over tracks used everywhere the library is sorted.
pub fn track_ordering(a: &Track, b: &Track) -> Ordering {
    artist_key(a)
        .cmp(&artist_key(b))
        .then_with(|| album_key(a).cmp(&album_key(b)))
        .then_with(|| {
            a.track_number
                .unwrap_or(0)
                .cmp(&b.track_number.unwrap_or(0))
        })
        .then_with(|| title_key(a).cmp(&title_key(b)))
}

/// Sort tracks in place by the composite order. The sort is stable.
pub fn sort_tracks(tracks: &mut [Track]) {
    tracks.sort_by(track_ordering);
}

fn normalized(value: Option<&str>, fallback: &str) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_lowercase(),
        None => fallback.to_string(),
    }
}
