//! File system utilities.

use super::hash;
use crate::Result;
use std::path::Path;

/// Extensions treated as music videos (lowercase, without the dot).
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "avi", "webm", "mov", "flv", "wmv", "m4v", "mpg", "mpeg", "m2v",
];

/// Check if a path exists and is a directory.
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(crate::Error::PathNotFound(path.display().to_string()));
    }
    if !path.is_dir() {
        return Err(crate::Error::NotADirectory(path.display().to_string()));
    }
    Ok(())
}

/// Create a directory and all parent directories.
pub fn create_dir_all(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Whether two paths name the same existing file.
pub fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Move a file from one location to another.
///
/// A rename is tried first. Across filesystems the file is copied, the copy
/// is checked against the source's SHA-256, and only then is the source
/// removed. An existing file at `to` is never replaced.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    if same_file(from, to) {
        tracing::debug!("Already in place: {:?}", to);
        return Ok(());
    }
    if to.exists() {
        return Err(crate::Error::ExecuteError(format!(
            "Target file already exists: {}",
            to.display()
        )));
    }

    match std::fs::rename(from, to) {
        Ok(()) => {
            tracing::debug!("Moved (rename): {:?} -> {:?}", from, to);
            return Ok(());
        }
        Err(e) if e.kind() == std::io::ErrorKind::CrossesDevices => {
            tracing::debug!("Cross-filesystem move detected, using copy+delete");
        }
        Err(e) => {
            return Err(crate::Error::ExecuteError(format!(
                "Failed to move {:?}: {}",
                from, e
            )));
        }
    }

    let checksum = hash::sha256_file(from)?;
    std::fs::copy(from, to)?;

    if hash::sha256_file(to)? != checksum {
        let _ = std::fs::remove_file(to);
        return Err(crate::Error::ExecuteError(format!(
            "Checksum mismatch after copying: {:?}",
            to
        )));
    }

    std::fs::remove_file(from)?;
    tracing::debug!("Moved (copy+delete): {:?} -> {:?}", from, to);
    Ok(())
}

/// File extension as written, without the dot.
pub fn original_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_string())
}

/// Get file extension in lowercase.
pub fn get_extension(path: &Path) -> Option<String> {
    original_extension(path).map(|e| e.to_lowercase())
}

/// Check if a file is a video file based on extension.
pub fn is_video_file(path: &Path) -> bool {
    get_extension(path)
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}
