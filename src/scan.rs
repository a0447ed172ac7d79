//! Folder scanning: the `Scanner` contract and the filesystem
//! implementation that walks a tree and reads audio tags.

mod fs;
mod types;

pub use fs::*;
pub use types::*;
