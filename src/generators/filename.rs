//! Filename generator.

use super::folder::sanitize_filename;
use crate::models::metadata::ResolvedMetadata;

/// Marker left on local files kept beside a downloaded replacement.
pub const ORIGINAL_MARKER: &str = "(original)";

/// Container forced on host-service downloads.
pub const DOWNLOAD_EXTENSION: &str = "mp4";

/// Whether a file stem carries the `(original)` marker (any case).
pub fn is_original_marked(stem: &str) -> bool {
    stem.to_lowercase().contains(ORIGINAL_MARKER)
}

fn with_extension(stem: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) if !ext.is_empty() => format!("{}.{}", stem, ext),
        _ => stem.to_string(),
    }
}

/// Generate the canonical stem.
///
/// Format: `${artist} - ${songTitle}( ${extraInfo})`
pub fn generate_canonical_stem(metadata: &ResolvedMetadata) -> String {
    let mut stem = format!("{} - {}", metadata.artist, metadata.song_title);
    if let Some(ref extra) = metadata.extra_info {
        stem.push(' ');
        stem.push_str(extra);
    }
    sanitize_filename(&stem)
}

/// Generate the canonical filename with the original extension.
pub fn generate_canonical_filename(metadata: &ResolvedMetadata, extension: Option<&str>) -> String {
    with_extension(&generate_canonical_stem(metadata), extension)
}

/// Generate the filename for a host-service download.
///
/// Format: `${artist} - ${songTitle}.mp4`
pub fn generate_download_filename(metadata: &ResolvedMetadata) -> String {
    let stem = sanitize_filename(&format!("{} - {}", metadata.artist, metadata.song_title));
    with_extension(&stem, Some(DOWNLOAD_EXTENSION))
}

/// Generate the filename for a local file archived beside a download.
///
/// Format: `${canonicalStem} (original).${ext}`
pub fn generate_archive_filename(metadata: &ResolvedMetadata, extension: Option<&str>) -> String {
    let stem = format!("{} {}", generate_canonical_stem(metadata), ORIGINAL_MARKER);
    with_extension(&stem, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(extra: Option<&str>) -> ResolvedMetadata {
        ResolvedMetadata {
            artist: "Daft Punk".to_string(),
            song_title: "One More Time".to_string(),
            extra_info: extra.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_is_original_marked() {
        assert!(is_original_marked("Daft Punk - One More Time (original)"));
        assert!(is_original_marked("Daft Punk - One More Time (ORIGINAL)"));
        assert!(!is_original_marked("Daft Punk - One More Time (Original Mix"));
        assert!(!is_original_marked("Daft Punk - One More Time"));
    }

    #[test]
    fn test_canonical_filename() {
        assert_eq!(
            generate_canonical_filename(&metadata(None), Some("avi")),
            "Daft Punk - One More Time.avi"
        );
        assert_eq!(
            generate_canonical_filename(&metadata(Some("(Live)")), Some("mkv")),
            "Daft Punk - One More Time (Live).mkv"
        );
        assert_eq!(
            generate_canonical_filename(&metadata(None), None),
            "Daft Punk - One More Time"
        );
    }

    #[test]
    fn test_download_filename_ignores_extra_info() {
        assert_eq!(
            generate_download_filename(&metadata(Some("(Live)"))),
            "Daft Punk - One More Time.mp4"
        );
    }

    #[test]
    fn test_archive_filename() {
        assert_eq!(
            generate_archive_filename(&metadata(None), Some("mpg")),
            "Daft Punk - One More Time (original).mpg"
        );
        assert!(is_original_marked(&generate_archive_filename(
            &metadata(Some("[HD]")),
            Some("avi")
        )));
    }

    #[test]
    fn test_filenames_are_sanitized() {
        let m = ResolvedMetadata {
            artist: "AC/DC".to_string(),
            song_title: "Who Made Who?".to_string(),
            ..Default::default()
        };
        assert_eq!(generate_download_filename(&m), "AC_DC - Who Made Who_.mp4");
    }
}
