use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::library::Track;

/// Produces track records for a folder tree.
///
/// Implementations are injected into the app. `parallel` is a hint to
/// extract metadata concurrently where the implementation supports it; the
/// result set must not depend on it.
pub trait Scanner {
    fn scan(&self, root: &Path, parallel: bool) -> Result<Vec<Track>, ScanError>;
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    #[error(transparent)]
    Io(#[from] io::Error),
}
