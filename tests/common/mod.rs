//! Shared fakes for integration tests.
//!
//! Each fake records the calls it receives so tests can assert which
//! external lookups happened.

#![allow(dead_code)]

use async_trait::async_trait;
use music_video_organizer::models::catalog::{CatalogCandidate, EntityKind};
use music_video_organizer::models::media::{HostVideoInfo, MediaProfile};
use music_video_organizer::services::{Catalog, MediaInspector, VideoHost};
use music_video_organizer::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// In-memory IMVDB.
#[derive(Default)]
pub struct FakeCatalog {
    pub configured: bool,
    pub search_results: Vec<CatalogCandidate>,
    pub details: HashMap<u64, CatalogCandidate>,
    pub entity_results: Vec<CatalogCandidate>,
    pub fail_search: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn unconfigured() -> Self {
        Self::default()
    }

    pub fn configured() -> Self {
        Self {
            configured: true,
            ..Default::default()
        }
    }

    pub fn with_search(mut self, results: Vec<CatalogCandidate>) -> Self {
        self.search_results = results;
        self
    }

    pub fn with_detail(mut self, detail: CatalogCandidate) -> Self {
        self.details.insert(detail.id, detail);
        self
    }

    pub fn with_entity_videos(mut self, results: Vec<CatalogCandidate>) -> Self {
        self.entity_results = results;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    fn is_configured(&self) -> bool {
        self.configured
    }

    async fn search_videos(&self, query: &str) -> Result<Vec<CatalogCandidate>> {
        self.record(format!("search:{}", query));
        if self.fail_search {
            return Err(Error::CatalogError("HTTP 500".to_string()));
        }
        Ok(self.search_results.clone())
    }

    async fn video_details(&self, id: u64) -> Result<CatalogCandidate> {
        self.record(format!("details:{}", id));
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::CatalogError(format!("HTTP 404 for video {}", id)))
    }

    async fn entity_videos(&self, slug: &str, kind: EntityKind) -> Result<Vec<CatalogCandidate>> {
        self.record(format!("entity:{}:{}", kind, slug));
        Ok(self.entity_results.clone())
    }
}

/// Scripted YouTube.
#[derive(Default)]
pub struct FakeHost {
    pub lookup_result: Option<HostVideoInfo>,
    pub remote_profile: Option<MediaProfile>,
    pub download_fails: bool,
    pub formats_time_out: bool,
    pub lookups: Mutex<Vec<String>>,
    pub probes: Mutex<Vec<String>>,
    pub downloads: Mutex<Vec<(String, PathBuf)>>,
}

impl FakeHost {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_lookup(mut self, info: HostVideoInfo) -> Self {
        self.lookup_result = Some(info);
        self
    }

    pub fn with_remote(mut self, height: u32, bitrate_kbps: f64) -> Self {
        self.remote_profile = Some(MediaProfile {
            width: Some(height * 16 / 9),
            height: Some(height),
            video_codec: Some("avc1".to_string()),
            bitrate_kbps: Some(bitrate_kbps),
            extension: Some("mp4".to_string()),
            ..Default::default()
        });
        self
    }

    pub fn timing_out_formats(mut self) -> Self {
        self.formats_time_out = true;
        self
    }

    pub fn failing_downloads(mut self) -> Self {
        self.download_fails = true;
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }

    pub fn downloads(&self) -> Vec<(String, PathBuf)> {
        self.downloads.lock().unwrap().clone()
    }

    pub fn probes(&self) -> Vec<String> {
        self.probes.lock().unwrap().clone()
    }
}

#[async_trait]
impl VideoHost for FakeHost {
    async fn lookup(&self, query: &str) -> Result<Option<HostVideoInfo>> {
        self.lookups.lock().unwrap().push(query.to_string());
        Ok(self.lookup_result.clone())
    }

    async fn probe_formats(&self, video_id: &str) -> Result<Option<MediaProfile>> {
        self.probes.lock().unwrap().push(video_id.to_string());
        if self.formats_time_out {
            return Err(Error::timeout("yt-dlp format probe", 60));
        }
        Ok(self.remote_profile.clone())
    }

    async fn download(&self, video_id: &str, output: &Path) -> Result<()> {
        self.downloads
            .lock()
            .unwrap()
            .push((video_id.to_string(), output.to_path_buf()));
        if self.download_fails {
            return Err(Error::DownloadFailed(video_id.to_string()));
        }
        std::fs::write(output, format!("downloaded {}", video_id))?;
        Ok(())
    }
}

/// Scripted ffprobe; `None` behaves like an unreadable file.
#[derive(Default)]
pub struct FakeInspector {
    pub profile: Option<MediaProfile>,
}

impl FakeInspector {
    pub fn with_height(height: u32) -> Self {
        Self {
            profile: Some(MediaProfile {
                width: Some(height * 4 / 3),
                height: Some(height),
                video_codec: Some("mpeg4".to_string()),
                ..Default::default()
            }),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MediaInspector for FakeInspector {
    async fn inspect(&self, path: &Path) -> Result<MediaProfile> {
        self.profile
            .clone()
            .ok_or_else(|| Error::InspectError(format!("{:?}: invalid data", path)))
    }
}

/// Catalog record with identifying fields only.
pub fn stub(id: u64, artist: &str, title: &str) -> CatalogCandidate {
    CatalogCandidate {
        id,
        artist_name: artist.to_string(),
        song_title: title.to_string(),
        ..Default::default()
    }
}

/// Write a fake video file.
pub fn touch(path: &Path) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, "local video").unwrap();
}
