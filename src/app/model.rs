//! Application model types: `App`, `ScanReport` and `LibrarySummary`.
//!
//! `App` holds the library, the playback controller and the injected
//! storage, and owns the scan lifecycle and the status line hosts render.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::config::Settings;
use crate::dialog::FolderPicker;
use crate::library::{Library, Track};
use crate::persist::LibraryStorage;
use crate::playback::PlaybackController;
use crate::scan::{ScanError, Scanner};

/// Outcome of a finished scan.
#[derive(Debug, Clone, Copy)]
pub struct ScanReport {
    /// Records merged into the library (duplicates excluded).
    pub added: usize,
    /// Library size after the merge.
    pub total: usize,
    /// Wall time from `begin_scan` to the merge.
    pub elapsed: Duration,
}

/// What a host needs to render the library header.
#[derive(Debug, Clone)]
pub struct LibrarySummary {
    pub track_count: usize,
    pub status: String,
    pub last_scan_time: Option<Duration>,
    pub scanning: bool,
    pub selected_folder: Option<PathBuf>,
}

/// The engine aggregate a host embeds.
///
/// All mutation goes through methods so the library invariants and the
/// one-scan-at-a-time rule cannot be bypassed.
pub struct App {
    library: Library,
    playback: PlaybackController,
    storage: Box<dyn LibraryStorage>,

    status: String,
    scanning: bool,
    scan_started: Option<Instant>,
    last_scan_time: Option<Duration>,
    selected_folder: Option<PathBuf>,
}

impl App {
    /// Create an empty engine around the given storage.
    pub fn new(storage: Box<dyn LibraryStorage>) -> Self {
        Self {
            library: Library::new(),
            playback: PlaybackController::new(),
            storage,

            status: "Ready to scan".to_string(),
            scanning: false,
            scan_started: None,
            last_scan_time: None,
            selected_folder: None,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn playback(&self) -> &PlaybackController {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut PlaybackController {
        &mut self.playback
    }

    /// The last status line ("Ready to scan", "Scanning...", ...).
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn is_scanning(&self) -> bool {
        self.scanning
    }

    pub fn selected_folder(&self) -> Option<&Path> {
        self.selected_folder.as_deref()
    }

    /// Seed playback preferences from configuration.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.playback.apply_settings(&settings.playback);
    }

    /// Pull the persisted library into memory.
    ///
    /// A missing or corrupt blob leaves the library empty and the status
    /// untouched; whatever loads is re-deduplicated and re-sorted.
    pub fn load_library(&mut self) {
        if let Some(tracks) = self.storage.load() {
            self.library.replace(tracks);
            self.status = format!("Loaded {} tracks", self.library.len());
            info!("Loaded {} track(s) from storage", self.library.len());
        }
    }

    /// Mark a scan as outstanding.
    ///
    /// Returns false (and says so in the status) while another scan is
    /// outstanding; the library keeps its last settled state until
    /// `complete_scan`.
    pub fn begin_scan(&mut self) -> bool {
        if self.scanning {
            self.status = "Scan already in progress".to_string();
            return false;
        }
        self.scanning = true;
        self.scan_started = Some(Instant::now());
        self.status = "Scanning...".to_string();
        true
    }

    /// Settle an outstanding scan.
    ///
    /// Success merges the batch, persists best-effort (a persist failure is
    /// logged, never rolled back) and reports what happened. Failure leaves
    /// the library exactly as it was and surfaces the error in the status.
    pub fn complete_scan(&mut self, outcome: Result<Vec<Track>, ScanError>) -> Option<ScanReport> {
        self.scanning = false;
        let started = self.scan_started.take();

        match outcome {
            Ok(batch) => {
                let added = self.library.merge(batch);
                if let Err(err) = self.storage.save(self.library.tracks()) {
                    warn!("Failed to persist library: {}", err);
                }

                let elapsed = started.map(|t| t.elapsed()).unwrap_or_default();
                self.last_scan_time = Some(elapsed);
                self.status = format!(
                    "Found {} new tracks in {:.2}s",
                    added,
                    elapsed.as_secs_f64()
                );
                info!(
                    "Library scan completed: added {} track(s), {} total",
                    added,
                    self.library.len()
                );

                Some(ScanReport {
                    added,
                    total: self.library.len(),
                    elapsed,
                })
            }
            Err(err) => {
                self.status = format!("Error: {}", err);
                warn!("Library scan failed: {}", err);
                None
            }
        }
    }

    /// Run the injected scanner over `root` as one synchronous scan.
    pub fn scan_directory(
        &mut self,
        scanner: &dyn Scanner,
        root: &Path,
        parallel: bool,
    ) -> Option<ScanReport> {
        if !self.begin_scan() {
            return None;
        }
        let outcome = scanner.scan(root, parallel);
        self.complete_scan(outcome)
    }

    /// Ask the picker for a folder, then scan it.
    ///
    /// Cancelling the dialog is a complete no-op: no scan, no status
    /// change, no remembered folder.
    pub fn select_and_scan(
        &mut self,
        picker: &dyn FolderPicker,
        scanner: &dyn Scanner,
        parallel: bool,
    ) -> Option<ScanReport> {
        let folder = picker.pick_folder()?;
        self.selected_folder = Some(folder.clone());
        self.scan_directory(scanner, &folder, parallel)
    }

    /// Start a track, seeding the playback queue if needed.
    ///
    /// An explicit non-empty queue replaces the snapshot; otherwise an
    /// empty queue is seeded from the full library in library order.
    pub fn play_track(&mut self, track: &Track, queue: Option<&[Track]>) {
        match queue {
            Some(q) if !q.is_empty() => self.playback.set_queue(q.to_vec()),
            _ => {
                if self.playback.queue().is_empty() {
                    self.playback.set_queue(self.library.tracks().to_vec());
                }
            }
        }
        self.playback.play(track.clone());
    }

    /// Case-insensitive substring view over the library.
    pub fn filtered_view(&self, query: &str) -> Vec<&Track> {
        self.library.filtered(query)
    }

    /// Empty the library, drop the persisted blob and stop playback.
    /// Playback preferences (volume, shuffle, repeat) survive.
    pub fn reset_library(&mut self) {
        self.library.clear();
        if let Err(err) = self.storage.clear() {
            warn!("Failed to clear persisted library: {}", err);
        }
        self.playback.reset();
        self.last_scan_time = None;
        self.status = "Library cleared".to_string();
    }

    pub fn summary(&self) -> LibrarySummary {
        LibrarySummary {
            track_count: self.library.len(),
            status: self.status.clone(),
            last_scan_time: self.last_scan_time,
            scanning: self.scanning,
            selected_folder: self.selected_folder.clone(),
        }
    }
}
