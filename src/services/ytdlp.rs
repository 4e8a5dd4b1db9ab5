//! yt-dlp service for YouTube lookups, format probes and downloads.

use super::VideoHost;
use crate::models::config::YtDlpConfig;
use crate::models::media::{HostVideoInfo, MediaProfile};
use crate::utils::process::{output_with_timeout, stderr_summary};
use crate::Result;
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;
use tokio::process::Command;

/// A bare YouTube video id.
static VIDEO_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap());

/// Subset of `yt-dlp --dump-json` output.
#[derive(Debug, Deserialize)]
struct DumpJson {
    id: String,
    artist: Option<String>,
    track: Option<String>,
    upload_date: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    vcodec: Option<String>,
    acodec: Option<String>,
    vbr: Option<f64>,
    abr: Option<f64>,
    ext: Option<String>,
    filesize_approx: Option<f64>,
    filesize: Option<f64>,
}

impl DumpJson {
    fn info(&self) -> HostVideoInfo {
        HostVideoInfo {
            id: self.id.clone(),
            artist: self.artist.clone(),
            track: self.track.clone(),
            upload_date: self.upload_date.clone(),
        }
    }

    fn profile(&self) -> MediaProfile {
        MediaProfile {
            width: self.width,
            height: self.height,
            video_codec: self.vcodec.clone(),
            audio_codec: self.acodec.clone(),
            bitrate_kbps: self.vbr,
            audio_bitrate_kbps: self.abr,
            extension: self.ext.clone(),
            duration_secs: None,
            filesize: self.filesize_approx.or(self.filesize).map(|s| s as u64),
        }
    }
}

/// Watch URL for a video id.
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

/// Turn a lookup argument into something yt-dlp understands: ids become
/// watch URLs, URLs pass through, anything else becomes a first-hit search.
pub fn lookup_target(query: &str) -> String {
    let query = query.trim();
    if VIDEO_ID_RE.is_match(query) {
        watch_url(query)
    } else if query.starts_with("http") {
        query.to_string()
    } else {
        format!("ytsearch1:{}", query)
    }
}

/// yt-dlp client.
pub struct YtDlpClient {
    config: YtDlpConfig,
}

impl YtDlpClient {
    /// Create a new client.
    pub fn new(config: YtDlpConfig) -> Self {
        Self { config }
    }

    /// Check if yt-dlp can be started.
    pub fn is_installed(&self) -> bool {
        crate::utils::process::is_installed(&self.config.program(), "--version")
    }

    /// yt-dlp version string.
    pub fn get_version(&self) -> Result<String> {
        crate::utils::process::version_line(&self.config.program(), "--version")
    }

    /// Run `--dump-json` against a target. `Ok(None)` when yt-dlp found nothing.
    async fn dump_json(&self, target: &str, single: bool) -> Result<Option<DumpJson>> {
        let mut command = Command::new(self.config.program());
        command.args(["--dump-json", "--no-download"]);
        if single {
            command.arg("--no-playlist");
        }
        command.arg(target);

        let output =
            output_with_timeout(command, "yt-dlp metadata", self.config.metadata_timeout_secs)
                .await?;

        if !output.status.success() {
            tracing::debug!("yt-dlp found nothing for {}: {}", target, stderr_summary(&output));
            return Ok(None);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        // Searches print one JSON document per line
        match stdout.lines().map(str::trim).find(|l| !l.is_empty()) {
            Some(line) => Ok(Some(serde_json::from_str(line)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl VideoHost for YtDlpClient {
    async fn lookup(&self, query: &str) -> Result<Option<HostVideoInfo>> {
        let target = lookup_target(query);
        tracing::debug!("yt-dlp lookup: {}", target);
        Ok(self.dump_json(&target, true).await?.map(|d| d.info()))
    }

    async fn probe_formats(&self, video_id: &str) -> Result<Option<MediaProfile>> {
        Ok(self
            .dump_json(&watch_url(video_id), false)
            .await?
            .map(|d| d.profile()))
    }

    async fn download(&self, video_id: &str, output: &Path) -> Result<()> {
        let mut command = Command::new(self.config.program());
        command
            .arg("-f")
            .arg(&self.config.format)
            .arg("-o")
            .arg(output)
            .arg(watch_url(video_id));

        let result =
            output_with_timeout(command, "yt-dlp download", self.config.download_timeout_secs)
                .await?;

        if result.status.success() {
            Ok(())
        } else {
            Err(crate::Error::DownloadFailed(format!(
                "{}: {}",
                video_id,
                stderr_summary(&result)
            )))
        }
    }
}
