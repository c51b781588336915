//! Recursive discovery of JSON files under a folder

use crate::error::{ScanError, ScanResult};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Find JSON files anywhere under `dir`, sorted by path.
///
/// Unreadable entries inside the tree are logged and skipped.
pub fn find_json_files(dir: &Path) -> ScanResult<Vec<PathBuf>> {
    if !dir.exists() {
        return Err(ScanError::NotFound(dir.to_path_buf()));
    }
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let mut json_files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        if is_file_entry(&entry) && crate::parser::filter::has_json_name(entry.path()) {
            tracing::debug!(file = %entry.path().display(), "found JSON file");
            json_files.push(entry.into_path());
        }
    }

    json_files.sort();
    Ok(json_files)
}

/// Regular files, plus symlinks that do not resolve to a folder.
///
/// Folder links are never followed. A dangling link is kept so that reading it
/// is reported as an issue for that file.
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
}
