//! Media-related data models.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Video file found in the source tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// File name without path.
    pub filename: String,
    /// File size in bytes.
    pub size: u64,
}

/// Artist/title guess extracted from a filename.
///
/// `artist` and `song` are always non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub artist: String,
    /// Song title with bracketed fragments removed.
    pub song: String,
    /// Song segment as it appeared in the filename.
    pub song_original: String,
    /// Bracketed/parenthetical fragments, space-joined.
    pub extra_info: Option<String>,
}

impl ParsedName {
    /// Free-text query used for catalog and host searches.
    pub fn search_query(&self) -> String {
        format!("{} {}", self.artist, self.song)
    }
}

/// Technical characteristics of a video, either inspected locally with
/// ffprobe or advertised by the host service for its best format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaProfile {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub video_codec: Option<String>,
    pub audio_codec: Option<String>,
    /// Video bitrate in kbps (remote only).
    pub bitrate_kbps: Option<f64>,
    /// Audio bitrate in kbps (remote only).
    pub audio_bitrate_kbps: Option<f64>,
    /// Container extension (remote only).
    pub extension: Option<String>,
    /// Duration in seconds (local only).
    pub duration_secs: Option<f64>,
    /// Size in bytes; approximate for remote formats.
    pub filesize: Option<u64>,
}

impl MediaProfile {
    /// Short human readable summary, e.g. `1920x1080 h264`.
    pub fn summary(&self) -> String {
        let dims = match (self.width, self.height) {
            (Some(w), Some(h)) => format!("{}x{}", w, h),
            _ => "?x?".to_string(),
        };
        let codec = self.video_codec.as_deref().unwrap_or("unknown");
        match self.bitrate_kbps {
            Some(vbr) => format!("{} {} vbr:{:.0}kbps", dims, codec, vbr),
            None => format!("{} {}", dims, codec),
        }
    }
}

/// Metadata record returned by a host-service lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostVideoInfo {
    /// Host video id (11 characters on YouTube).
    pub id: String,
    /// Artist tag, when the host recognised the music.
    pub artist: Option<String>,
    /// Track tag, when the host recognised the music.
    pub track: Option<String>,
    /// Upload date in `YYYYMMDD` form.
    pub upload_date: Option<String>,
}

impl HostVideoInfo {
    /// Release year derived from the upload date.
    pub fn upload_year(&self) -> Option<u16> {
        use chrono::Datelike;

        let date = self.upload_date.as_deref()?;
        chrono::NaiveDate::parse_from_str(date, "%Y%m%d")
            .ok()
            .and_then(|d| u16::try_from(d.year()).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_year() {
        let info = HostVideoInfo {
            id: "FGBhQbmPwH8".to_string(),
            upload_date: Some("20091026".to_string()),
            ..Default::default()
        };
        assert_eq!(info.upload_year(), Some(2009));

        let info = HostVideoInfo {
            upload_date: Some("garbage".to_string()),
            ..Default::default()
        };
        assert_eq!(info.upload_year(), None);
    }

    #[test]
    fn test_profile_summary() {
        let profile = MediaProfile {
            width: Some(1920),
            height: Some(1080),
            video_codec: Some("avc1".to_string()),
            bitrate_kbps: Some(2500.0),
            ..Default::default()
        };
        assert_eq!(profile.summary(), "1920x1080 avc1 vbr:2500kbps");
        assert_eq!(MediaProfile::default().summary(), "?x? unknown");
    }
}
