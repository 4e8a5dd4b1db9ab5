//! IMVDB API client.

use super::Catalog;
use crate::models::catalog::{CatalogCandidate, Credit, EntityKind};
use crate::models::config::ImvdbConfig;
use crate::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Extra sections requested with every detail fetch.
const DETAIL_INCLUDES: &str = "sources,credits,bts,countries,featured,popularity,aka";

/// Artist name used for director listings that lack an artist.
const UNKNOWN_ARTIST: &str = "Unknown";

/// IMVDB API client.
pub struct ImvdbClient {
    config: ImvdbConfig,
    client: reqwest::Client,
}

/// Search or entity listing response.
///
/// Results are kept as raw JSON so that one malformed entry does not sink
/// the whole response.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    results: Option<Vec<serde_json::Value>>,
}

/// Video record as returned by IMVDB.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawVideo {
    id: Option<u64>,
    song_title: Option<String>,
    year: Option<u16>,
    url: Option<String>,
    aspect_ratio: Option<String>,
    artists: Option<Vec<RawArtist>>,
    image: Option<RawImage>,
    directors: Option<Vec<RawEntity>>,
    credits: Option<RawCredits>,
    sources: Option<Vec<RawSource>>,
    popularity: Option<RawPopularity>,
}

/// Artist reference.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawArtist {
    name: Option<String>,
}

/// Image URLs by size; `o` is the original.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawImage {
    o: Option<String>,
}

/// Director reference.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEntity {
    entity_name: Option<String>,
}

/// Credits container.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCredits {
    crew: Option<Vec<RawCrew>>,
}

/// Crew member.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCrew {
    position_name: Option<String>,
    entity_name: Option<String>,
}

/// Video source (youtube, vimeo, ...).
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSource {
    source: Option<String>,
    source_data: Option<serde_json::Value>,
    is_primary: Option<bool>,
}

/// Popularity counters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawPopularity {
    views_all_time: Option<u64>,
}

/// Pick the YouTube id of a video: the primary YouTube source if one is
/// flagged, otherwise the first YouTube source.
fn select_youtube_source(sources: &[RawSource]) -> Option<String> {
    let youtube = || {
        sources
            .iter()
            .filter(|s| s.source.as_deref() == Some("youtube"))
            .filter_map(|s| {
                let id = s.source_data.as_ref()?.as_str()?.trim();
                (!id.is_empty()).then(|| (s.is_primary.unwrap_or(false), id.to_string()))
            })
    };

    youtube()
        .find(|(primary, _)| *primary)
        .or_else(|| youtube().next())
        .map(|(_, id)| id)
}

impl RawVideo {
    /// Convert into a candidate. Returns `None` when the id, title or (absent
    /// a fallback) the first artist name is missing.
    fn into_candidate(self, fallback_artist: Option<&str>) -> Option<CatalogCandidate> {
        let id = self.id?;
        let song_title = self.song_title.filter(|t| !t.trim().is_empty())?;
        let artist_name = self
            .artists
            .as_ref()
            .and_then(|a| a.first())
            .and_then(|a| a.name.clone())
            .filter(|n| !n.trim().is_empty())
            .or_else(|| fallback_artist.map(str::to_string))?;

        let host_video_id = self
            .sources
            .as_deref()
            .and_then(select_youtube_source);

        let directors = self
            .directors
            .unwrap_or_default()
            .into_iter()
            .filter_map(|d| d.entity_name)
            .collect();

        let credits = self
            .credits
            .and_then(|c| c.crew)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|c| {
                Some(Credit {
                    role: c.position_name?,
                    name: c.entity_name?,
                })
            })
            .collect();

        Some(CatalogCandidate {
            id,
            artist_name,
            song_title,
            year: self.year,
            aspect_ratio: self.aspect_ratio.filter(|a| !a.trim().is_empty()),
            canonical_url: self.url,
            thumbnail_url: self.image.and_then(|i| i.o),
            directors,
            credits,
            host_video_id,
            view_count: self.popularity.and_then(|p| p.views_all_time),
        })
    }
}

/// Decode listing entries one by one, dropping the ones that do not fit.
fn decode_results(
    results: Vec<serde_json::Value>,
    fallback_artist: Option<&str>,
) -> Vec<CatalogCandidate> {
    results
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<RawVideo>(value) {
            Ok(raw) => {
                let candidate = raw.into_candidate(fallback_artist);
                if candidate.is_none() {
                    tracing::debug!("Skipping IMVDB result without id/artist/title");
                }
                candidate
            }
            Err(e) => {
                tracing::debug!("Skipping malformed IMVDB result: {}", e);
                None
            }
        })
        .collect()
}

impl ImvdbClient {
    /// Create a new IMVDB client.
    pub fn new(config: ImvdbConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Build a request with proper authentication.
    fn build_request(&self, url: &str, key: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("IMVDB-APP-KEY", key)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// GET a path below the base URL and decode the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path_and_query: &str) -> Result<T> {
        let key = self
            .config
            .usable_key()
            .ok_or(crate::Error::ImvdbApiKeyMissing)?;
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), path_and_query);

        tracing::debug!("IMVDB GET {}", url);
        let resp = self.build_request(&url, key).send().await?;
        if !resp.status().is_success() {
            return Err(crate::Error::CatalogError(format!(
                "{} returned {}",
                url,
                resp.status()
            )));
        }

        Ok(resp.json().await?)
    }
}

#[async_trait]
impl Catalog for ImvdbClient {
    fn is_configured(&self) -> bool {
        self.config.usable_key().is_some()
    }

    async fn search_videos(&self, query: &str) -> Result<Vec<CatalogCandidate>> {
        let resp: ListResponse = self
            .get_json(&format!("search/videos?q={}", urlencoding::encode(query)))
            .await?;
        let raw = resp.results.unwrap_or_default();
        let total = raw.len();
        let candidates = decode_results(raw, None);
        tracing::debug!("IMVDB returned {} results ({} usable)", total, candidates.len());
        Ok(candidates)
    }

    async fn video_details(&self, id: u64) -> Result<CatalogCandidate> {
        let raw: RawVideo = self
            .get_json(&format!("video/{}?include={}", id, DETAIL_INCLUDES))
            .await?;
        raw.into_candidate(None)
            .ok_or_else(|| crate::Error::IncompleteRecord(format!("video {}", id)))
    }

    async fn entity_videos(&self, slug: &str, kind: EntityKind) -> Result<Vec<CatalogCandidate>> {
        let resp: ListResponse = self
            .get_json(&format!("entity/{}/videos", urlencoding::encode(slug)))
            .await?;
        let fallback = match kind {
            EntityKind::Artist => slug,
            EntityKind::Director => UNKNOWN_ARTIST,
        };
        Ok(decode_results(resp.results.unwrap_or_default(), Some(fallback)))
    }
}
