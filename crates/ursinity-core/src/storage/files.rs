//! Filesystem helpers.
//!
//! Every operation exists twice:
//!
//! - `try_*` returns a [`FileError`] that tells "not found" apart from
//!   "permission denied" and friends.
//! - The plain form logs the error and returns a sentinel instead, for
//!   callers in a frame loop that just want a value.
//!
//! Sentinels are ambiguous by nature: [`file_size`] returns `0` both for an
//! empty file and for a failed lookup, and [`last_modified`] returns the Unix
//! epoch on failure. Use the `try_*` form when the difference matters.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use crate::error::FileError;

/// Everything the helpers know about one file, gathered in one call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub path: PathBuf,
    pub name: String,
    pub size_bytes: u64,
    pub modified: DateTime<Local>,
}

fn log_failure(op: &str, err: &FileError) {
    tracing::error!(path = %err.path().display(), error = %err, "{op} failed");
}

fn metadata(path: &Path) -> Result<fs::Metadata, FileError> {
    fs::metadata(path).map_err(|e| FileError::from_io(path, e))
}

fn file_metadata(path: &Path) -> Result<fs::Metadata, FileError> {
    let meta = metadata(path)?;
    if meta.is_dir() {
        return Err(FileError::IsADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(meta)
}

// ── Explicit ─────────────────────────────────────────────────────────

/// Regular files directly inside `dir`, sorted by path.
///
/// Sub-directories are skipped. Paths are `dir` joined with the entry name,
/// so they are absolute when `dir` is.
pub fn try_list_files(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, FileError> {
    let dir = dir.as_ref();
    let entries = fs::read_dir(dir).map_err(|e| FileError::from_io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| FileError::from_io(dir, e))?;
        let path = entry.path();
        // Follows symlinks, so a link to a file counts as a file.
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Whether `path` names an existing regular file.
///
/// A missing path, or one running through a non-directory, is `Ok(false)`.
pub fn try_file_exists(path: impl AsRef<Path>) -> Result<bool, FileError> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
            Ok(false)
        }
        Err(e) => Err(FileError::from_io(path, e)),
    }
}

/// Delete the file at `path`. Deleting a file that is already gone succeeds.
pub fn try_delete_file(path: impl AsRef<Path>) -> Result<(), FileError> {
    let path = path.as_ref();
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(path = %path.display(), "deleted file");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FileError::from_io(path, e)),
    }
}

/// Final component of `path`, extension included. Pure path manipulation,
/// the file does not have to exist.
///
/// A path ending in a separator names no file, so `"saves/"` is invalid
/// rather than `"saves"`.
pub fn try_file_name(path: impl AsRef<Path>) -> Result<String, FileError> {
    let path = path.as_ref();
    let ends_in_separator = path
        .as_os_str()
        .to_string_lossy()
        .chars()
        .next_back()
        .is_some_and(std::path::is_separator);
    if ends_in_separator {
        return Err(FileError::InvalidPath {
            path: path.to_path_buf(),
        });
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| FileError::InvalidPath {
            path: path.to_path_buf(),
        })
}

/// Size of the file in bytes.
pub fn try_file_size(path: impl AsRef<Path>) -> Result<u64, FileError> {
    Ok(file_metadata(path.as_ref())?.len())
}

/// Last write time of the file, in local time.
pub fn try_last_modified(path: impl AsRef<Path>) -> Result<DateTime<Local>, FileError> {
    let path = path.as_ref();
    let modified = file_metadata(path)?
        .modified()
        .map_err(|e| FileError::from_io(path, e))?;
    Ok(DateTime::<Local>::from(modified))
}

pub fn try_file_metadata(path: impl AsRef<Path>) -> Result<FileMetadata, FileError> {
    let path = path.as_ref();
    let meta = file_metadata(path)?;
    let modified = meta.modified().map_err(|e| FileError::from_io(path, e))?;
    Ok(FileMetadata {
        path: path.to_path_buf(),
        name: try_file_name(path)?,
        size_bytes: meta.len(),
        modified: DateTime::<Local>::from(modified),
    })
}

// ── Sentinel ─────────────────────────────────────────────────────────

/// [`try_list_files`], or `None` on error.
pub fn list_files(dir: impl AsRef<Path>) -> Option<Vec<PathBuf>> {
    try_list_files(dir)
        .inspect_err(|e| log_failure("list_files", e))
        .ok()
}

/// [`try_file_exists`], or `false` on error.
pub fn file_exists(path: impl AsRef<Path>) -> bool {
    try_file_exists(path)
        .inspect_err(|e| log_failure("file_exists", e))
        .unwrap_or(false)
}

/// [`try_delete_file`], logging instead of failing.
pub fn delete_file(path: impl AsRef<Path>) {
    if let Err(e) = try_delete_file(path) {
        log_failure("delete_file", &e);
    }
}

/// [`try_file_name`], or `None` on error.
pub fn file_name(path: impl AsRef<Path>) -> Option<String> {
    try_file_name(path)
        .inspect_err(|e| log_failure("file_name", e))
        .ok()
}

/// [`try_file_size`], or `0` on error.
pub fn file_size(path: impl AsRef<Path>) -> u64 {
    try_file_size(path)
        .inspect_err(|e| log_failure("file_size", e))
        .unwrap_or(0)
}

/// [`try_last_modified`], or the Unix epoch on error.
pub fn last_modified(path: impl AsRef<Path>) -> DateTime<Local> {
    try_last_modified(path)
        .inspect_err(|e| log_failure("last_modified", e))
        .unwrap_or_else(|_| DateTime::<Local>::from(UNIX_EPOCH))
}
