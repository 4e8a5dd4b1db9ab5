//! Resolved metadata model.
//!
//! Metadata for a video is gathered from up to four sources. Each source is
//! turned into a [`MetadataLayer`] and the layers are folded in a fixed
//! order, lowest priority first:
//!
//! 1. raw filename parse
//! 2. host-service guess (yt-dlp artist/track tags, upload year, video id)
//! 3. catalog search stub
//! 4. catalog detail record
//!
//! The folded layer is frozen into an immutable [`ResolvedMetadata`].

use super::catalog::{CatalogCandidate, Credit};
use super::media::{HostVideoInfo, ParsedName};
use serde::{Deserialize, Serialize};

/// One source's contribution to the resolved metadata.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataLayer {
    pub artist: Option<String>,
    pub song_title: Option<String>,
    pub song_original: Option<String>,
    pub extra_info: Option<String>,
    pub year: Option<u16>,
    pub directors: Vec<String>,
    pub credits: Vec<Credit>,
    pub host_video_id: Option<String>,
    pub canonical_url: Option<String>,
    pub catalog_id: Option<u64>,
    pub aspect_ratio: Option<String>,
    pub thumbnail_url: Option<String>,
    pub view_count: Option<u64>,
}

/// Keep a string only if it has visible content.
fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl MetadataLayer {
    /// Layer for the raw filename parse.
    pub fn from_parsed(parsed: &ParsedName) -> Self {
        Self {
            artist: non_blank(&parsed.artist),
            song_title: non_blank(&parsed.song),
            song_original: non_blank(&parsed.song_original),
            extra_info: parsed.extra_info.as_deref().and_then(non_blank),
            ..Default::default()
        }
    }

    /// Layer for a host-service lookup result.
    pub fn from_host(info: &HostVideoInfo) -> Self {
        Self {
            artist: info.artist.as_deref().and_then(non_blank),
            song_title: info.track.as_deref().and_then(non_blank),
            year: info.upload_year(),
            host_video_id: non_blank(&info.id),
            ..Default::default()
        }
    }

    /// Layer for a catalog record (stub or detail).
    pub fn from_catalog(candidate: &CatalogCandidate) -> Self {
        Self {
            artist: non_blank(&candidate.artist_name),
            song_title: non_blank(&candidate.song_title),
            year: candidate.year,
            directors: candidate.directors.clone(),
            credits: candidate.credits.clone(),
            host_video_id: candidate.host_video_id.as_deref().and_then(non_blank),
            canonical_url: candidate.canonical_url.clone(),
            catalog_id: (candidate.id != 0).then_some(candidate.id),
            aspect_ratio: candidate.aspect_ratio.clone(),
            thumbnail_url: candidate.thumbnail_url.clone(),
            view_count: candidate.view_count,
            ..Default::default()
        }
    }

    /// Lay `higher` over `self`: every field present in `higher` wins.
    pub fn overlay(self, higher: MetadataLayer) -> MetadataLayer {
        fn vec_or<T>(higher: Vec<T>, lower: Vec<T>) -> Vec<T> {
            if higher.is_empty() {
                lower
            } else {
                higher
            }
        }

        MetadataLayer {
            artist: higher.artist.or(self.artist),
            song_title: higher.song_title.or(self.song_title),
            song_original: higher.song_original.or(self.song_original),
            extra_info: higher.extra_info.or(self.extra_info),
            year: higher.year.or(self.year),
            directors: vec_or(higher.directors, self.directors),
            credits: vec_or(higher.credits, self.credits),
            host_video_id: higher.host_video_id.or(self.host_video_id),
            canonical_url: higher.canonical_url.or(self.canonical_url),
            catalog_id: higher.catalog_id.or(self.catalog_id),
            aspect_ratio: higher.aspect_ratio.or(self.aspect_ratio),
            thumbnail_url: higher.thumbnail_url.or(self.thumbnail_url),
            view_count: higher.view_count.or(self.view_count),
        }
    }
}

/// Final metadata driving naming and the NFO sidecar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedMetadata {
    pub artist: String,
    pub song_title: String,
    pub song_original: Option<String>,
    pub extra_info: Option<String>,
    pub year: Option<u16>,
    pub directors: Vec<String>,
    pub credits: Vec<Credit>,
    pub host_video_id: Option<String>,
    pub canonical_url: Option<String>,
    pub catalog_id: Option<u64>,
    pub aspect_ratio: Option<String>,
    pub thumbnail_url: Option<String>,
    pub view_count: Option<u64>,
}

impl ResolvedMetadata {
    /// Fold the available sources in priority order.
    ///
    /// Returns `None` when no source supplies both an artist and a title.
    pub fn resolve(
        parsed: Option<&ParsedName>,
        host: Option<&HostVideoInfo>,
        stub: Option<&CatalogCandidate>,
        detail: Option<&CatalogCandidate>,
    ) -> Option<Self> {
        let layers = [
            parsed.map(MetadataLayer::from_parsed),
            host.map(MetadataLayer::from_host),
            stub.map(MetadataLayer::from_catalog),
            detail.map(MetadataLayer::from_catalog),
        ];

        let merged = layers
            .into_iter()
            .flatten()
            .fold(MetadataLayer::default(), MetadataLayer::overlay);

        Self::from_layer(merged)
    }

    /// Freeze a merged layer. Artist and title are required.
    pub fn from_layer(layer: MetadataLayer) -> Option<Self> {
        Some(Self {
            artist: layer.artist?,
            song_title: layer.song_title?,
            song_original: layer.song_original,
            extra_info: layer.extra_info,
            year: layer.year,
            directors: layer.directors,
            credits: layer.credits,
            host_video_id: layer.host_video_id,
            canonical_url: layer.canonical_url,
            catalog_id: layer.catalog_id,
            aspect_ratio: layer.aspect_ratio,
            thumbnail_url: layer.thumbnail_url,
            view_count: layer.view_count,
        })
    }
}
