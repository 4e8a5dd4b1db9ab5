//! Error types for the music video organizer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the music video organizer.
#[derive(Error, Debug)]
pub enum Error {
    // Preflight errors
    #[error("ffprobe not found. Install FFmpeg: sudo apt install ffmpeg")]
    FfprobeNotFound,

    #[error("yt-dlp not found. Install it: pip install yt-dlp")]
    YtDlpNotFound,

    #[error("IMVDB API key not configured. Set IMVDB_API_KEY environment variable")]
    ImvdbApiKeyMissing,

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // Catalog errors
    #[error("IMVDB request failed: {0}")]
    CatalogError(String),

    #[error("IMVDB record is missing required fields: {0}")]
    IncompleteRecord(String),

    // Host service errors
    #[error("Download failed: {0}")]
    DownloadFailed(String),

    // Local inspection errors
    #[error("ffprobe failed: {0}")]
    InspectError(String),

    #[error("{what} timed out after {secs}s")]
    Timeout { what: String, secs: u64 },

    // Apply errors
    #[error("Execute operation failed: {0}")]
    ExecuteError(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a timeout error for an external call.
    pub fn timeout<S: Into<String>>(what: S, secs: u64) -> Self {
        Error::Timeout {
            what: what.into(),
            secs,
        }
    }
}
