//! Catalog (IMVDB) data model.

use serde::{Deserialize, Serialize};

/// Kind of catalog entity used for bulk scraping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Artist,
    Director,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Artist => write!(f, "artist"),
            EntityKind::Director => write!(f, "director"),
        }
    }
}

/// A role-tagged credit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub role: String,
    pub name: String,
}

/// A catalog video record.
///
/// Search and entity listings produce stubs where only the identifying
/// fields are set; a detail fetch fills in the rest. Fields the catalog
/// does not provide stay unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogCandidate {
    /// IMVDB video id.
    pub id: u64,
    /// First listed artist.
    pub artist_name: String,
    pub song_title: String,
    pub year: Option<u16>,
    pub aspect_ratio: Option<String>,
    /// Canonical IMVDB page URL.
    pub canonical_url: Option<String>,
    pub thumbnail_url: Option<String>,
    /// Directors in catalog order.
    pub directors: Vec<String>,
    /// Crew credits in catalog order.
    pub credits: Vec<Credit>,
    /// YouTube id of the catalog's video source.
    pub host_video_id: Option<String>,
    pub view_count: Option<u64>,
}
