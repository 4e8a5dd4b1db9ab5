//! Directory scanner module.
//!
//! Collects every music video below a source directory up front, so files
//! moved during the run (possibly into a target nested under the source) are
//! never visited twice.

use crate::models::media::VideoFile;
use crate::utils::fs::{ensure_directory, is_video_file};
use crate::Result;
use std::path::Path;
use walkdir::WalkDir;

/// Result of scanning a directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Video files found, sorted by path.
    pub videos: Vec<VideoFile>,
    /// Total files scanned.
    pub total_files_scanned: usize,
    /// Total directories scanned.
    pub total_dirs_scanned: usize,
}

/// Create a VideoFile from a path.
fn create_video_file(path: &Path) -> Result<VideoFile> {
    let metadata = std::fs::metadata(path)?;

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(VideoFile {
        path: path.to_path_buf(),
        filename,
        size: metadata.len(),
    })
}

/// Scan a directory for music video files.
///
/// Symlinks are not followed and unreadable entries are skipped. A missing
/// path or a path that is not a directory is an error.
pub fn scan_directory(path: &Path) -> Result<ScanResult> {
    ensure_directory(path)?;

    let mut result = ScanResult::default();

    for entry in WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let entry_path = entry.path();

        if entry.file_type().is_dir() {
            result.total_dirs_scanned += 1;
            continue;
        }
        if !entry.file_type().is_file() {
            continue;
        }

        result.total_files_scanned += 1;
        if !is_video_file(entry_path) {
            continue;
        }

        match create_video_file(entry_path) {
            Ok(video_file) => result.videos.push(video_file),
            Err(e) => tracing::warn!("Failed to read video file {:?}: {}", entry_path, e),
        }
    }

    result.videos.sort_by(|a, b| a.path.cmp(&b.path));

    tracing::info!(
        "Scanned {} files in {} directories: {} videos",
        result.total_files_scanned,
        result.total_dirs_scanned,
        result.videos.len()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_video_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Blur - Song 2.avi");
        std::fs::write(&path, "12345").unwrap();

        let video = create_video_file(&path).unwrap();
        assert_eq!(video.filename, "Blur - Song 2.avi");
        assert_eq!(video.size, 5);
    }

    // Integration tests for scan_directory() live in tests/scanner_tests.rs
}
