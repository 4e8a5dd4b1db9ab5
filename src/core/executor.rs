//! Plan executor module.
//!
//! Applies a [`Plan`] to the filesystem:
//! - mkdir: create the target directory (idempotent)
//! - download: fetch the host copy when the plan asks for it
//! - move: relocate or archive the local file
//! - create: write the NFO sidecar once the artifact is in place

use crate::generators::nfo;
use crate::models::metadata::ResolvedMetadata;
use crate::models::plan::{Plan, PrimaryAction};
use crate::services::VideoHost;
use crate::utils::fs::{create_dir_all, move_file, same_file};
use crate::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

/// What applying a plan produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    /// File now carrying the video.
    pub primary: PathBuf,
    /// Whether the host copy was downloaded.
    pub downloaded: bool,
    /// Where the local file was archived beside the download.
    pub archived: Option<PathBuf>,
}

/// Plan executor.
pub struct Executor {
    host: Arc<dyn VideoHost>,
}

impl Executor {
    /// Create a new executor downloading through `host`.
    pub fn new(host: Arc<dyn VideoHost>) -> Self {
        Self { host }
    }

    /// Apply a plan and write its sidecar.
    ///
    /// The local file is archived before its replacement is downloaded, so a
    /// download landing on the local file's own path cannot clobber it. A
    /// failed download moves the archived file to its canonical name. A failed
    /// download with no local file is an error and leaves no sidecar behind.
    pub async fn apply(&self, plan: &Plan, metadata: &ResolvedMetadata) -> Result<ApplyReport> {
        create_dir_all(&plan.target_directory)?;

        let report = match &plan.primary_action {
            PrimaryAction::MoveOriginal { from, to } => {
                move_file(from, to)?;
                println!("  {} {}", "Moved to:".green(), to.display());
                ApplyReport {
                    primary: to.clone(),
                    downloaded: false,
                    archived: None,
                }
            }
            PrimaryAction::DownloadAndArchiveOriginal {
                video_id,
                download_to,
                from,
                archive_to,
                fallback_to,
            } => {
                if download_to.exists() && !same_file(download_to, from) {
                    return Err(crate::Error::ExecuteError(format!(
                        "Target file already exists: {}",
                        download_to.display()
                    )));
                }

                // The local file may sit at the download path already
                move_file(from, archive_to)?;

                match self.download(video_id, download_to).await {
                    Ok(()) => {
                        println!("  {}", "Downloaded successfully".green());
                        println!(
                            "  Original preserved as: {}",
                            archive_to.file_name().unwrap_or_default().to_string_lossy()
                        );
                        ApplyReport {
                            primary: download_to.clone(),
                            downloaded: true,
                            archived: Some(archive_to.clone()),
                        }
                    }
                    Err(e) => {
                        tracing::warn!("Download of {} failed: {}", video_id, e);
                        println!("  {}", "Download failed, using original".yellow());
                        if download_to.exists() {
                            std::fs::remove_file(download_to)?;
                        }
                        move_file(archive_to, fallback_to)?;
                        println!("  {} {}", "Moved to:".green(), fallback_to.display());
                        ApplyReport {
                            primary: fallback_to.clone(),
                            downloaded: false,
                            archived: None,
                        }
                    }
                }
            }
            PrimaryAction::DownloadOnly {
                video_id,
                download_to,
            } => {
                self.download(video_id, download_to).await?;
                println!("  {} {}", "Downloaded:".green(), download_to.display());
                ApplyReport {
                    primary: download_to.clone(),
                    downloaded: true,
                    archived: None,
                }
            }
        };

        nfo::write_musicvideo_nfo(metadata, &plan.sidecar_path)?;
        println!("  Created NFO: {}", plan.sidecar_path.display());

        Ok(report)
    }

    /// Download with a spinner; the spinner hides itself when not on a TTY.
    async fn download(&self, video_id: &str, output: &Path) -> Result<()> {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("  {spinner:.green} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(format!("Downloading {} from YouTube...", video_id));
        pb.enable_steady_tick(Duration::from_millis(120));

        let result = self.host.download(video_id, output).await;
        pb.finish_and_clear();

        result
    }
}
