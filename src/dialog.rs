//! Folder selection: the picker contract and the native dialog.

use std::path::PathBuf;

/// Asks the user for a folder. `None` means they cancelled.
pub trait FolderPicker {
    fn pick_folder(&self) -> Option<PathBuf>;
}

/// Native directory chooser.
#[derive(Debug, Default)]
pub struct NativeFolderPicker;

impl FolderPicker for NativeFolderPicker {
    fn pick_folder(&self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_title("Select Music Folder")
            .pick_folder()
    }
}
