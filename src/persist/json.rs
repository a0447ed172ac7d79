//! JSON file store: the whole library is one serialized `Vec<Track>`.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;

use crate::config::StorageSettings;
use crate::library::Track;

use super::types::{LibraryStorage, StoreError};

/// Default blob location under the platform data dir.
pub fn default_library_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("rondo").join("library.json"))
        .unwrap_or_else(|| PathBuf::from("library.json"))
}

/// Stores the library as one JSON file on disk.
pub struct JsonLibraryStore {
    path: PathBuf,
}

impl JsonLibraryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self::new(
            settings
                .library_file
                .clone()
                .unwrap_or_else(default_library_file),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LibraryStorage for JsonLibraryStore {
    fn load(&self) -> Option<Vec<Track>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    warn!(
                        "Failed to read library file {}: {}",
                        self.path.display(),
                        err
                    );
                }
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(tracks) => Some(tracks),
            Err(err) => {
                warn!(
                    "Ignoring corrupt library file {}: {}",
                    self.path.display(),
                    err
                );
                None
            }
        }
    }

    fn save(&self, tracks: &[Track]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(tracks)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
