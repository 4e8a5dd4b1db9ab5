//! Plan data model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What to do with the artifact for one video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PrimaryAction {
    /// Move the local file to `to`.
    MoveOriginal { from: PathBuf, to: PathBuf },
    /// Download the host copy to `download_to`. On success the local file is
    /// kept beside it as `archive_to`; on failure it is moved to `fallback_to`.
    DownloadAndArchiveOriginal {
        video_id: String,
        download_to: PathBuf,
        from: PathBuf,
        archive_to: PathBuf,
        fallback_to: PathBuf,
    },
    /// Download the host copy; there is no local file.
    DownloadOnly {
        video_id: String,
        download_to: PathBuf,
    },
}

/// Layout plan for a single video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// `<target>/<primary artist>/<artist - title>`.
    pub target_directory: PathBuf,
    /// NFO sidecar path inside the target directory.
    pub sidecar_path: PathBuf,
    pub primary_action: PrimaryAction,
}

impl Plan {
    /// Path of the file that will carry the video after a successful apply.
    pub fn primary_path(&self) -> &Path {
        match &self.primary_action {
            PrimaryAction::MoveOriginal { to, .. } => to,
            PrimaryAction::DownloadAndArchiveOriginal { download_to, .. } => download_to,
            PrimaryAction::DownloadOnly { download_to, .. } => download_to,
        }
    }

    /// Whether the plan involves a host-service download.
    pub fn downloads(&self) -> bool {
        !matches!(self.primary_action, PrimaryAction::MoveOriginal { .. })
    }
}
