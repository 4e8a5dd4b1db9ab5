//! FFprobe service for inspecting local video files.

use super::MediaInspector;
use crate::models::config::FfprobeConfig;
use crate::models::media::MediaProfile;
use crate::utils::process::{output_with_timeout, stderr_summary};
use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use tokio::process::Command;

/// FFprobe output format.
#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
    #[serde(default)]
    format: Option<FfprobeFormat>,
}

/// FFprobe stream information.
#[derive(Debug, Deserialize)]
struct FfprobeStream {
    codec_type: Option<String>,
    codec_name: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

/// FFprobe format information. Numbers are reported as strings.
#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
    size: Option<String>,
}

/// Local media inspector backed by ffprobe.
pub struct FfprobeInspector {
    config: FfprobeConfig,
}

impl FfprobeInspector {
    /// Create a new inspector.
    pub fn new(config: FfprobeConfig) -> Self {
        Self { config }
    }

    /// Check if ffprobe is installed.
    pub fn is_installed(&self) -> bool {
        crate::utils::process::is_installed(&self.config.program, "-version")
    }

    /// Get ffprobe version.
    pub fn get_version(&self) -> Result<String> {
        crate::utils::process::version_line(&self.config.program, "-version")
    }
}

/// Build a profile from ffprobe JSON: first video stream, first audio stream,
/// container duration and size.
fn profile_from_output(ffprobe: &FfprobeOutput) -> MediaProfile {
    let stream_of = |kind: &str| {
        ffprobe
            .streams
            .iter()
            .find(|s| s.codec_type.as_deref() == Some(kind))
    };
    let video_stream = stream_of("video");
    let audio_stream = stream_of("audio");

    let duration_secs = ffprobe
        .format
        .as_ref()
        .and_then(|f| f.duration.as_deref())
        .and_then(|d| d.parse::<f64>().ok())
        .unwrap_or(0.0);
    let filesize = ffprobe
        .format
        .as_ref()
        .and_then(|f| f.size.as_deref())
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0);

    MediaProfile {
        width: video_stream.and_then(|s| s.width),
        height: video_stream.and_then(|s| s.height),
        video_codec: video_stream.and_then(|s| s.codec_name.clone()),
        audio_codec: audio_stream.and_then(|s| s.codec_name.clone()),
        duration_secs: Some(duration_secs),
        filesize: Some(filesize),
        ..Default::default()
    }
}

#[async_trait]
impl MediaInspector for FfprobeInspector {
    async fn inspect(&self, path: &Path) -> Result<MediaProfile> {
        let mut command = Command::new(&self.config.program);
        command
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_streams",
                "-show_format",
            ])
            .arg(path);

        let output = match output_with_timeout(command, "ffprobe", self.config.timeout_secs).await
        {
            Err(crate::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(crate::Error::FfprobeNotFound)
            }
            other => other?,
        };

        if !output.status.success() {
            return Err(crate::Error::InspectError(format!(
                "{:?}: {}",
                path,
                stderr_summary(&output)
            )));
        }

        let ffprobe: FfprobeOutput = serde_json::from_slice(&output.stdout)?;
        Ok(profile_from_output(&ffprobe))
    }
}
