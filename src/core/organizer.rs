//! Reconciliation of local files against the catalog and host service.
//!
//! Each file goes through:
//! 1. Parse the filename
//! 2. Search IMVDB and pick the first acceptable match
//! 3. Fetch the match's full record
//! 4. Search YouTube when IMVDB has no video source
//! 5. Compare local and YouTube quality
//! 6. Plan the layout and apply it, then write the sidecar
//!
//! Files are handled one at a time. Failures of IMVDB, yt-dlp or ffprobe
//! are logged and treated as missing data.

use crate::core::executor::Executor;
use crate::core::matcher;
use crate::core::parser::{FilenameParser, ParseMode};
use crate::core::planner::LayoutPlanner;
use crate::core::quality;
use crate::core::scanner::scan_directory;
use crate::models::catalog::CatalogCandidate;
use crate::models::config::DEFAULT_SIDECAR_NAME;
use crate::models::media::{HostVideoInfo, MediaProfile, ParsedName};
use crate::models::metadata::ResolvedMetadata;
use crate::services::{Catalog, MediaInspector, VideoHost};
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Organizer configuration.
#[derive(Debug, Clone)]
pub struct OrganizerConfig {
    /// Library root receiving organized videos.
    pub target: PathBuf,
    /// Filename dialect.
    pub parse_mode: ParseMode,
    /// Sidecar filename.
    pub sidecar_name: String,
}

impl OrganizerConfig {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
            parse_mode: ParseMode::Strict,
            sidecar_name: DEFAULT_SIDECAR_NAME.to_string(),
        }
    }
}

/// Why a file was left where it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The filename fits no known pattern.
    ParseMiss,
    /// Neither IMVDB nor YouTube knows the video.
    NoMatch,
}

/// Outcome of processing one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Organized { directory: PathBuf, primary: PathBuf },
    Skipped(SkipReason),
}

/// Counters for a source run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
}

/// Log a collaborator failure and carry on without its data.
pub(crate) fn or_warn<T>(result: Result<T>, what: &str) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("{} failed: {}", what, e);
            None
        }
    }
}

/// Per-file reconciliation pipeline.
pub struct Organizer {
    catalog: Arc<dyn Catalog>,
    host: Arc<dyn VideoHost>,
    inspector: Arc<dyn MediaInspector>,
    parser: FilenameParser,
    planner: LayoutPlanner,
    executor: Executor,
}

impl Organizer {
    /// Create an organizer.
    pub fn new(
        config: OrganizerConfig,
        catalog: Arc<dyn Catalog>,
        host: Arc<dyn VideoHost>,
        inspector: Arc<dyn MediaInspector>,
    ) -> Self {
        Self {
            parser: FilenameParser::new(config.parse_mode),
            planner: LayoutPlanner::new(config.target, config.sidecar_name),
            executor: Executor::new(host.clone()),
            catalog,
            host,
            inspector,
        }
    }

    /// Organize every video below `source`.
    ///
    /// Only an invalid source is an error; each file's failure is logged and
    /// counted, and the run moves on.
    pub async fn run(&self, source: &Path) -> Result<RunSummary> {
        let scan = scan_directory(source)?;
        let mut summary = RunSummary::default();

        for video in &scan.videos {
            match self.process_file(&video.path).await {
                Ok(FileOutcome::Organized { .. }) => summary.processed += 1,
                Ok(FileOutcome::Skipped(reason)) => {
                    tracing::debug!("Skipped {:?}: {:?}", video.path, reason);
                    summary.failed += 1;
                }
                Err(e) => {
                    println!("  {} {}: {}", "Error processing".red(), video.path.display(), e);
                    tracing::error!("Error processing {:?}: {}", video.path, e);
                    tracing::debug!("{:?}", e);
                    summary.failed += 1;
                }
            }
        }

        println!();
        println!("{}", "=".repeat(50));
        println!("{} {}", "Processed:".bold().green(), summary.processed);
        println!("{} {}", "Failed:".bold().red(), summary.failed);

        Ok(summary)
    }

    /// Reconcile a single file.
    pub async fn process_file(&self, path: &Path) -> Result<FileOutcome> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!();
        println!("{} {}", "Processing:".bold().cyan(), filename);

        let Some(parsed) = self.parser.parse(&filename) else {
            println!("  {}", "Could not parse filename, skipping".yellow());
            return Ok(FileOutcome::Skipped(SkipReason::ParseMiss));
        };
        println!("  Artist: {}", parsed.artist);
        println!("  Song: {}", parsed.song);

        let query = parsed.search_query();
        let stub = self.search_catalog(&query, &parsed).await;
        let detail = match &stub {
            Some(stub) => {
                println!("  IMVDB match: {} - {}", stub.artist_name, stub.song_title);
                tracing::debug!("IMVDB video ID: {}", stub.id);
                or_warn(self.catalog.video_details(stub.id).await, "IMVDB detail fetch")
            }
            None => {
                println!("  No IMVDB match found");
                None
            }
        };

        let catalog_has_source = [detail.as_ref(), stub.as_ref()]
            .into_iter()
            .flatten()
            .any(|c| c.host_video_id.is_some());

        let host_info = if catalog_has_source {
            None
        } else {
            self.search_host(&query).await
        };

        if stub.is_none() && host_info.is_none() {
            println!(
                "  {}",
                "No match found on IMVDB or YouTube, skipping".yellow()
            );
            return Ok(FileOutcome::Skipped(SkipReason::NoMatch));
        }

        let Some(resolved) = ResolvedMetadata::resolve(
            Some(&parsed),
            host_info.as_ref(),
            stub.as_ref(),
            detail.as_ref(),
        ) else {
            return Ok(FileOutcome::Skipped(SkipReason::NoMatch));
        };

        let should_fetch_remote = match resolved.host_video_id.as_deref() {
            Some(video_id) => self.remote_is_better(path, video_id).await,
            None => false,
        };

        let plan = self.planner.plan(&resolved, path, should_fetch_remote);
        tracing::debug!("Plan: {:?}", plan);

        let report = self.executor.apply(&plan, &resolved).await?;

        Ok(FileOutcome::Organized {
            directory: plan.target_directory,
            primary: report.primary,
        })
    }

    /// First acceptable IMVDB search result, if IMVDB is usable.
    async fn search_catalog(&self, query: &str, parsed: &ParsedName) -> Option<CatalogCandidate> {
        if !self.catalog.is_configured() {
            tracing::debug!("IMVDB API key not configured, skipping catalog search");
            return None;
        }

        tracing::debug!("IMVDB search query: {}", query);
        let candidates = or_warn(self.catalog.search_videos(query).await, "IMVDB search")?;
        tracing::debug!("IMVDB returned {} results", candidates.len());

        matcher::find_best_match(&candidates, parsed).cloned()
    }

    async fn search_host(&self, query: &str) -> Option<HostVideoInfo> {
        println!("  Searching YouTube...");
        let info = or_warn(self.host.lookup(query).await, "YouTube lookup").flatten()?;
        println!("  Found YouTube: {}", info.id);
        Some(info)
    }

    /// Inspect both copies and decide whether to download.
    async fn remote_is_better(&self, path: &Path, video_id: &str) -> bool {
        let local: Option<MediaProfile> =
            or_warn(self.inspector.inspect(path).await, "ffprobe inspection");
        let remote = or_warn(
            self.host.probe_formats(video_id).await,
            "YouTube format probe",
        )
        .flatten();

        tracing::debug!("Local info: {:?}", local);
        tracing::debug!("YouTube formats: {:?}", remote);

        if let (Some(local), Some(remote)) = (&local, &remote) {
            println!("  Local: {}", local.summary());
            println!("  YouTube: {}", remote.summary());
        }

        let verdict = quality::compare(local.as_ref(), remote.as_ref());
        match verdict {
            quality::QualityVerdict::Unavailable => {
                tracing::debug!("Quality comparison skipped: {}", verdict)
            }
            quality::QualityVerdict::RemoteBetter => println!("  {}", verdict.to_string().green()),
            _ => println!("  {}, skipping download", verdict),
        }

        verdict.prefers_remote()
    }
}
