//! Bulk download of every video of an IMVDB artist or director.
//!
//! Entries already present in the library are skipped before any further
//! IMVDB or YouTube call is made. Entries without a YouTube source are
//! skipped as well; nothing is re-checked for quality.

use crate::core::executor::Executor;
use crate::core::organizer::or_warn;
use crate::core::planner::LayoutPlanner;
use crate::models::catalog::{CatalogCandidate, EntityKind};
use crate::models::config::DEFAULT_SIDECAR_NAME;
use crate::models::metadata::ResolvedMetadata;
use crate::services::{Catalog, VideoHost};
use crate::Result;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

/// Counters for an entity scrape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrapeSummary {
    pub downloaded: usize,
    pub already_present: usize,
    pub no_host_source: usize,
    pub failed: usize,
}

/// What happened to one catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryOutcome {
    Downloaded,
    AlreadyPresent,
    NoHostSource,
    Failed,
}

/// Entity scraper.
pub struct Scraper {
    catalog: Arc<dyn Catalog>,
    planner: LayoutPlanner,
    executor: Executor,
}

impl Scraper {
    /// Create a scraper writing into `target`.
    pub fn new(target: impl Into<PathBuf>, catalog: Arc<dyn Catalog>, host: Arc<dyn VideoHost>) -> Self {
        Self::with_sidecar_name(target, DEFAULT_SIDECAR_NAME, catalog, host)
    }

    /// Create a scraper with a custom sidecar filename.
    pub fn with_sidecar_name(
        target: impl Into<PathBuf>,
        sidecar_name: impl Into<String>,
        catalog: Arc<dyn Catalog>,
        host: Arc<dyn VideoHost>,
    ) -> Self {
        Self {
            catalog,
            planner: LayoutPlanner::new(target, sidecar_name),
            executor: Executor::new(host),
        }
    }

    /// Download all videos of an artist or director.
    pub async fn scrape_entity(&self, slug: &str, kind: EntityKind) -> Result<ScrapeSummary> {
        println!(
            "{}",
            format!("Fetching videos for {}: {}", kind, slug).bold().cyan()
        );

        let mut summary = ScrapeSummary::default();
        let videos = or_warn(
            self.catalog.entity_videos(slug, kind).await,
            "IMVDB entity listing",
        )
        .unwrap_or_default();

        if videos.is_empty() {
            println!("No videos found for {}: {}", kind, slug);
            return Ok(summary);
        }
        println!("Found {} videos", videos.len());

        for stub in &videos {
            match self.scrape_entry(stub).await {
                EntryOutcome::Downloaded => summary.downloaded += 1,
                EntryOutcome::AlreadyPresent => summary.already_present += 1,
                EntryOutcome::NoHostSource => summary.no_host_source += 1,
                EntryOutcome::Failed => summary.failed += 1,
            }
        }

        println!();
        println!("{}", "=".repeat(50));
        println!("{} {}", "Downloaded:".bold().green(), summary.downloaded);
        println!("{} {}", "Already present:".bold(), summary.already_present);
        println!("{} {}", "No YouTube source:".bold(), summary.no_host_source);
        println!("{} {}", "Failed:".bold().red(), summary.failed);

        Ok(summary)
    }

    async fn scrape_entry(&self, stub: &CatalogCandidate) -> EntryOutcome {
        println!();
        println!("  {} - {}", stub.artist_name, stub.song_title);

        // Checked before any detail fetch, from the listing alone
        if let Some(stub_metadata) = ResolvedMetadata::resolve(None, None, Some(stub), None) {
            if self.planner.download_path(&stub_metadata).exists() {
                println!("    Already exists, skipping");
                return EntryOutcome::AlreadyPresent;
            }
        }

        let Some(detail) = or_warn(self.catalog.video_details(stub.id).await, "IMVDB detail fetch")
        else {
            println!("    {}", "Could not fetch details".red());
            return EntryOutcome::Failed;
        };

        let Some(metadata) = ResolvedMetadata::resolve(None, None, Some(stub), Some(&detail)) else {
            tracing::warn!("IMVDB video {} has no artist or title", stub.id);
            return EntryOutcome::Failed;
        };

        let Some(plan) = self.planner.plan_download(&metadata) else {
            println!("    No YouTube source");
            return EntryOutcome::NoHostSource;
        };

        if plan.primary_path().exists() {
            println!("    Already exists, skipping");
            return EntryOutcome::AlreadyPresent;
        }

        match self.executor.apply(&plan, &metadata).await {
            Ok(_) => EntryOutcome::Downloaded,
            Err(e) => {
                println!("    {} {}", "Download failed:".red(), e);
                tracing::debug!("{:?}", e);
                EntryOutcome::Failed
            }
        }
    }
}
