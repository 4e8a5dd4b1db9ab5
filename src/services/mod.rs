//! External collaborators.
//!
//! The pipeline talks to the outside world through three capabilities so that
//! tests can substitute fakes for IMVDB, yt-dlp and ffprobe.

pub mod ffprobe;
pub mod imvdb;
pub mod ytdlp;

use crate::models::catalog::{CatalogCandidate, EntityKind};
use crate::models::media::{HostVideoInfo, MediaProfile};
use crate::Result;
use async_trait::async_trait;
use std::path::Path;

/// Music video catalog (IMVDB).
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Whether the catalog can be queried at all (an API key is set).
    fn is_configured(&self) -> bool;

    /// Free-text search. Results keep the catalog's ranking.
    async fn search_videos(&self, query: &str) -> Result<Vec<CatalogCandidate>>;

    /// Full record for a video id.
    async fn video_details(&self, id: u64) -> Result<CatalogCandidate>;

    /// All videos of an artist or director entity.
    async fn entity_videos(&self, slug: &str, kind: EntityKind) -> Result<Vec<CatalogCandidate>>;
}

/// Video hosting service (YouTube through yt-dlp).
#[async_trait]
pub trait VideoHost: Send + Sync {
    /// Look up a video by id, URL or free-text query (first search hit).
    async fn lookup(&self, query: &str) -> Result<Option<HostVideoInfo>>;

    /// Best available format of a video.
    async fn probe_formats(&self, video_id: &str) -> Result<Option<MediaProfile>>;

    /// Download the best combined stream of a video to `output`.
    async fn download(&self, video_id: &str, output: &Path) -> Result<()>;
}

/// Local media inspection (ffprobe).
#[async_trait]
pub trait MediaInspector: Send + Sync {
    async fn inspect(&self, path: &Path) -> Result<MediaProfile>;
}
