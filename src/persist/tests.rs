use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::tempdir;

use super::*;
use crate::library::Track;

fn track(path: &str, artist: Option<&str>) -> Track {
    Track {
        path: PathBuf::from(path),
        title: Some("Song".to_string()),
        artist: artist.map(str::to_string),
        album: None,
        track_number: Some(4),
        duration: Some(Duration::from_secs(181)),
        date_added: 1_700_000_000,
    }
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let store = JsonLibraryStore::new(dir.path().join("library.json"));

    let tracks = vec![track("/m/a.mp3", Some("Band")), track("/m/b.mp3", None)];
    store.save(&tracks).unwrap();

    assert_eq!(store.load().unwrap(), tracks);
}

#[test]
fn load_missing_file_is_none() {
    let dir = tempdir().unwrap();
    let store = JsonLibraryStore::new(dir.path().join("nothing-here.json"));

    assert!(store.load().is_none());
}

#[test]
fn load_corrupt_file_is_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.json");
    fs::write(&path, "not json at all {{{").unwrap();

    let store = JsonLibraryStore::new(path);
    assert!(store.load().is_none());
}

#[test]
fn load_tolerates_records_from_older_versions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("library.json");
    // An old blob: no track_number, duration or date_added fields.
    fs::write(&path, r#"[{"path":"/m/a.mp3","title":"Song"}]"#).unwrap();

    let store = JsonLibraryStore::new(path);
    let tracks = store.load().unwrap();

    assert_eq!(tracks.len(), 1);
    assert_eq!(tracks[0].path, PathBuf::from("/m/a.mp3"));
    assert_eq!(tracks[0].title.as_deref(), Some("Song"));
    assert_eq!(tracks[0].track_number, None);
    assert_eq!(tracks[0].duration, None);
    assert_eq!(tracks[0].date_added, 0);
}

#[test]
fn clear_removes_blob_and_tolerates_absence() {
    let dir = tempdir().unwrap();
    let store = JsonLibraryStore::new(dir.path().join("library.json"));

    store.save(&[track("/m/a.mp3", None)]).unwrap();
    store.clear().unwrap();

    assert!(store.load().is_none());
    store.clear().unwrap();
}

#[test]
fn save_creates_missing_parent_dirs() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("library.json");

    let store = JsonLibraryStore::new(path.clone());
    store.save(&[track("/m/a.mp3", None)]).unwrap();

    assert!(path.is_file());
    assert_eq!(store.load().unwrap().len(), 1);
}

#[test]
fn from_settings_prefers_configured_path() {
    let settings = crate::config::StorageSettings {
        library_file: Some(PathBuf::from("/tmp/rondo-custom.json")),
    };
    let store = JsonLibraryStore::from_settings(&settings);
    assert_eq!(store.path(), Path::new("/tmp/rondo-custom.json"));

    let store = JsonLibraryStore::from_settings(&crate::config::StorageSettings::default());
    assert!(
        store.path().ends_with("rondo/library.json")
            || store.path() == Path::new("library.json")
    );
}
