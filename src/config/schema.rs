use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/rondo/config.toml` or
/// `~/.config/rondo/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RONDO__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub storage: StorageSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            playback: PlaybackSettings::default(),
            storage: StorageSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    pub max_depth: Option<usize>,
    /// Whether to extract tag metadata on a thread pool.
    pub parallel_scan: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            extensions: vec![
                "mp3".into(),
                "flac".into(),
                "wav".into(),
                "m4a".into(),
                "ogg".into(),
                "aac".into(),
            ],
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
            parallel_scan: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Default repeat mode.
    pub repeat: RepeatModeSetting,
    /// Initial volume in `0.0..=1.0`.
    pub volume: f32,
    /// Seconds into a track past which "previous" restarts it instead of
    /// moving back.
    pub restart_threshold_secs: f64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            shuffle: false,
            repeat: RepeatModeSetting::Off,
            volume: 1.0,
            restart_threshold_secs: 3.0,
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RepeatModeSetting {
    #[serde(alias = "none", alias = "no-repeat", alias = "no_repeat")]
    Off,
    #[serde(alias = "repeat-all", alias = "repeat_all", alias = "loop")]
    All,
    #[serde(alias = "repeat-one", alias = "repeat_one", alias = "single")]
    One,
}

impl Default for RepeatModeSetting {
    fn default() -> Self {
        Self::Off
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Where the library blob lives. Defaults to
    /// `{data_dir}/rondo/library.json` when unset.
    pub library_file: Option<PathBuf>,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self { library_file: None }
    }
}
