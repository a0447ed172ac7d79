//! Filesystem scanner: walks a folder tree, picks out audio files and
//! reads their tags.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use lofty::picture::MimeType;
use lofty::prelude::*;
use lofty::probe::Probe;
use log::debug;
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::LibrarySettings;
use crate::library::Track;

use super::types::{ScanError, Scanner};

/// Scans folders on the local filesystem, driven by `LibrarySettings`.
pub struct FsScanner {
    settings: LibrarySettings,
}

impl FsScanner {
    pub fn new(settings: LibrarySettings) -> Self {
        Self { settings }
    }
}

impl Default for FsScanner {
    fn default() -> Self {
        Self::new(LibrarySettings::default())
    }
}

impl Scanner for FsScanner {
    fn scan(&self, root: &Path, parallel: bool) -> Result<Vec<Track>, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::NotADirectory(root.to_path_buf()));
        }

        let files = collect_audio_files(root, &self.settings);

        // Tag extraction dominates scan time, so it is the stage worth
        // spreading over a thread pool.
        let tracks = if parallel {
            files.par_iter().map(|path| read_track(path)).collect()
        } else {
            files.iter().map(|path| read_track(path)).collect()
        };

        Ok(tracks)
    }
}

fn collect_audio_files(root: &Path, settings: &LibrarySettings) -> Vec<PathBuf> {
    let mut walker = WalkDir::new(root).follow_links(settings.follow_links);

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
        .filter(|entry| {
            let path = entry.path();
            path.is_file()
                && (settings.include_hidden || !is_hidden(path))
                && is_audio_file(path, settings)
        })
        .map(|entry| entry.into_path())
        .collect()
}

/// Read one file into a `Track`. Tag problems degrade to a record with the
/// file-stem title rather than dropping the file from the scan.
fn read_track(path: &Path) -> Track {
    let mut title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string());
    let mut artist: Option<String> = None;
    let mut album: Option<String> = None;
    let mut track_number: Option<u32> = None;
    let mut duration = None;

    match Probe::open(path).and_then(|probe| probe.read()) {
        Ok(tagged) => {
            duration = Some(tagged.properties().duration());

            if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
                if let Some(v) = non_blank(tag.title().as_deref()) {
                    title = Some(v);
                }
                artist = non_blank(tag.artist().as_deref());
                album = non_blank(tag.album().as_deref());
                track_number = tag.track();
            }
        }
        Err(err) => {
            debug!("Failed to read tags from {}: {}", path.display(), err);
        }
    }

    Track {
        path: path.to_path_buf(),
        title,
        artist,
        album,
        track_number,
        duration,
        date_added: date_added(path),
    }
}

/// Read the embedded cover art from a file's tags.
///
/// Returns the raw image bytes and their MIME type for the host to encode
/// or render. Looked up per track on demand; cover bytes are not carried
/// on `Track`. A file without a readable tag or without pictures yields
/// `None`.
pub fn cover_art(path: &Path) -> Option<(Vec<u8>, String)> {
    let tagged = Probe::open(path).and_then(|probe| probe.read()).ok()?;
    let tag = tagged.primary_tag().or_else(|| tagged.first_tag())?;
    let picture = tag.pictures().first()?;

    let mime = match picture.mime_type() {
        Some(MimeType::Png) => "image/png",
        Some(MimeType::Jpeg) => "image/jpeg",
        Some(MimeType::Tiff) => "image/tiff",
        Some(MimeType::Bmp) => "image/bmp",
        Some(MimeType::Gif) => "image/gif",
        _ => "image/jpeg",
    };

    Some((picture.data().to_vec(), mime.to_string()))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Unix seconds the file appeared on disk: creation time where the
/// filesystem has one, else modification time, else 0.
fn date_added(path: &Path) -> u64 {
    fs::metadata(path)
        .ok()
        .and_then(|meta| meta.created().or_else(|_| meta.modified()).ok())
        .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
        .map(|since| since.as_secs())
        .unwrap_or(0)
}

fn is_audio_file(path: &Path, settings: &LibrarySettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}
