//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placeholder key shipped in sample configs; treated as "not configured".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_IMVDB_API_KEY";

/// Default NFO sidecar filename.
pub const DEFAULT_SIDECAR_NAME: &str = "video.nfo";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// IMVDB configuration.
    pub imvdb: ImvdbConfig,
    /// yt-dlp configuration.
    pub ytdlp: YtDlpConfig,
    /// ffprobe configuration.
    pub ffprobe: FfprobeConfig,
    /// Sidecar filename written into every video directory.
    pub sidecar_name: String,
}

/// IMVDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImvdbConfig {
    /// API key.
    pub api_key: Option<String>,
    /// API base URL.
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

/// yt-dlp configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YtDlpConfig {
    /// Explicit program path; overrides `windows_mode`.
    pub program: Option<String>,
    /// Invoke `.\yt-dlp` from the working directory.
    pub windows_mode: bool,
    /// Timeout for metadata and format probes, in seconds.
    pub metadata_timeout_secs: u64,
    /// Timeout for downloads, in seconds.
    pub download_timeout_secs: u64,
    /// Format selector passed to `-f`.
    pub format: String,
}

/// ffprobe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FfprobeConfig {
    /// Program path.
    pub program: String,
    /// Timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            imvdb: ImvdbConfig::default(),
            ytdlp: YtDlpConfig::default(),
            ffprobe: FfprobeConfig::default(),
            sidecar_name: DEFAULT_SIDECAR_NAME.to_string(),
        }
    }
}

impl Default for ImvdbConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://imvdb.com/api/v1".to_string(),
            timeout_secs: 30,
        }
    }
}

impl ImvdbConfig {
    /// The API key, unless it is missing, blank or the placeholder.
    pub fn usable_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
    }
}

impl Default for YtDlpConfig {
    fn default() -> Self {
        Self {
            program: None,
            windows_mode: false,
            metadata_timeout_secs: 60,
            download_timeout_secs: 600,
            format: "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best".to_string(),
        }
    }
}

impl YtDlpConfig {
    /// Program to invoke.
    pub fn program(&self) -> String {
        match &self.program {
            Some(p) => p.clone(),
            None if self.windows_mode => ".\\yt-dlp".to_string(),
            None => "yt-dlp".to_string(),
        }
    }
}

impl Default for FfprobeConfig {
    fn default() -> Self {
        Self {
            program: "ffprobe".to_string(),
            timeout_secs: 30,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("music_video_organizer")
}

/// Path of the configuration file.
pub fn config_file_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Load configuration from file, then apply environment overrides.
pub fn load_config() -> Config {
    let config_path = config_file_path();

    let mut config = Config::default();
    if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(parsed) => config = parsed,
                Err(e) => tracing::warn!("Ignoring invalid config {:?}: {}", config_path, e),
            },
            Err(e) => tracing::warn!("Failed to read config {:?}: {}", config_path, e),
        }
    }

    apply_env_overrides(&mut config);
    config
}

/// Apply environment variable overrides.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = std::env::var("IMVDB_API_KEY") {
        if !key.trim().is_empty() {
            config.imvdb.api_key = Some(key);
        }
    }
}
