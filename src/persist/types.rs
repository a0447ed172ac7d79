use std::io;

use thiserror::Error;

use crate::library::Track;

/// Persistent home for the library blob.
///
/// `load` folds every failure into `None`: a missing, unreadable or corrupt
/// blob all mean "start empty". Implementations log the reason instead of
/// propagating it.
pub trait LibraryStorage {
    fn load(&self) -> Option<Vec<Track>>;
    fn save(&self, tracks: &[Track]) -> Result<(), StoreError>;
    /// Remove the blob. Removing an absent blob is not an error.
    fn clear(&self) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}
