//! Async file utilities for the Folio content catalog.
//!
//! Content lives in flat category directories (`projects/`, `insights/`),
//! one document per file. These helpers enumerate and read those entries;
//! the store layer decides what to do with the contents.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Error, Result};

/// List entry files in a flat content directory.
///
/// Returns paths whose extension matches one of `extensions` (without dot),
/// sorted lexicographically by file name so scan order is deterministic
/// across platforms. Subdirectories are ignored.
///
/// A missing directory is a valid, expected state (no content yet) and
/// yields an empty list, not an error.
pub async fn list_entries(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    let mut entries = match fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io_with_path(e, dir)),
    };

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| extensions.contains(&ext));
        if matches {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Derive an entry's slug from its path: the file name minus extension.
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(String::from)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Check if a path exists.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}
