//! Layout planning module.
//!
//! Turns resolved metadata into a [`Plan`]: the target directory, the sidecar
//! path and what happens to the video artifact. Planning is pure; nothing
//! touches the filesystem until the executor applies the plan.
//!
//! Layout: `<target>/<primary artist>/<artist> - <title>/`

use crate::generators::{filename as gen_filename, folder as gen_folder};
use crate::models::metadata::ResolvedMetadata;
use crate::models::plan::{Plan, PrimaryAction};
use crate::utils::fs::original_extension;
use std::path::{Path, PathBuf};

/// Planner for the target library layout.
#[derive(Debug, Clone)]
pub struct LayoutPlanner {
    target_root: PathBuf,
    sidecar_name: String,
}

impl LayoutPlanner {
    /// Create a planner rooted at `target_root`.
    pub fn new(target_root: impl Into<PathBuf>, sidecar_name: impl Into<String>) -> Self {
        Self {
            target_root: target_root.into(),
            sidecar_name: sidecar_name.into(),
        }
    }

    /// Directory a video lands in.
    pub fn target_directory(&self, metadata: &ResolvedMetadata) -> PathBuf {
        self.target_root
            .join(gen_folder::generate_artist_folder(metadata))
            .join(gen_folder::generate_video_folder(metadata))
    }

    /// Plan for a local file.
    ///
    /// A file whose stem carries the `(original)` marker keeps its name and is
    /// only moved. Otherwise, when `should_fetch_remote` is set and a host id
    /// is known, the remote copy is downloaded and the local file archived
    /// beside it.
    pub fn plan(
        &self,
        metadata: &ResolvedMetadata,
        original_path: &Path,
        should_fetch_remote: bool,
    ) -> Plan {
        let directory = self.target_directory(metadata);
        let extension = original_extension(original_path);
        let stem = original_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        if gen_filename::is_original_marked(&stem) {
            let filename = original_path
                .file_name()
                .map(|n| gen_folder::sanitize_filename(&n.to_string_lossy()))
                .unwrap_or_default();
            tracing::debug!("Already archived original, reusing name: {}", filename);

            return self.with_action(
                directory.clone(),
                PrimaryAction::MoveOriginal {
                    from: original_path.to_path_buf(),
                    to: directory.join(filename),
                },
            );
        }

        let canonical = directory.join(gen_filename::generate_canonical_filename(
            metadata,
            extension.as_deref(),
        ));

        let action = match (&metadata.host_video_id, should_fetch_remote) {
            (Some(video_id), true) => PrimaryAction::DownloadAndArchiveOriginal {
                video_id: video_id.clone(),
                download_to: directory.join(gen_filename::generate_download_filename(metadata)),
                from: original_path.to_path_buf(),
                archive_to: directory.join(gen_filename::generate_archive_filename(
                    metadata,
                    extension.as_deref(),
                )),
                fallback_to: canonical,
            },
            _ => PrimaryAction::MoveOriginal {
                from: original_path.to_path_buf(),
                to: canonical,
            },
        };

        self.with_action(directory, action)
    }

    /// Where a host-service download for this video is stored.
    pub fn download_path(&self, metadata: &ResolvedMetadata) -> PathBuf {
        self.target_directory(metadata)
            .join(gen_filename::generate_download_filename(metadata))
    }

    /// Plan for a catalog entry with no local file.
    ///
    /// Returns `None` when there is no host id to download from.
    pub fn plan_download(&self, metadata: &ResolvedMetadata) -> Option<Plan> {
        let video_id = metadata.host_video_id.clone()?;

        Some(self.with_action(
            self.target_directory(metadata),
            PrimaryAction::DownloadOnly {
                video_id,
                download_to: self.download_path(metadata),
            },
        ))
    }

    fn with_action(&self, directory: PathBuf, action: PrimaryAction) -> Plan {
        Plan {
            sidecar_path: directory.join(&self.sidecar_name),
            target_directory: directory,
            primary_action: action,
        }
    }
}
