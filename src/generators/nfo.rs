//! NFO sidecar generator (Kodi `<musicvideo>` format).

use crate::models::metadata::ResolvedMetadata;
use crate::Result;
use std::path::Path;

/// Generate music video NFO content.
///
/// Title, artist and year are always present; every other tag is omitted
/// when the value is unknown.
pub fn generate_musicvideo_nfo(metadata: &ResolvedMetadata) -> String {
    let mut nfo = String::new();

    nfo.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n");
    nfo.push_str("<musicvideo>\n");

    nfo.push_str(&format!(
        "  <title>{}</title>\n",
        escape_xml(&metadata.song_title)
    ));
    nfo.push_str(&format!("  <artist>{}</artist>\n", escape_xml(&metadata.artist)));
    let year = metadata.year.map(|y| y.to_string()).unwrap_or_default();
    nfo.push_str(&format!("  <year>{}</year>\n", year));

    for director in &metadata.directors {
        nfo.push_str(&format!("  <director>{}</director>\n", escape_xml(director)));
    }

    if let Some(ref aspect) = metadata.aspect_ratio {
        nfo.push_str(&format!(
            "  <aspectratio>{}</aspectratio>\n",
            escape_xml(aspect)
        ));
    }

    if let Some(ref id) = metadata.host_video_id {
        nfo.push_str(&format!("  <youtube_id>{}</youtube_id>\n", escape_xml(id)));
    }

    // Catalog references
    if let Some(ref url) = metadata.canonical_url {
        nfo.push_str(&format!("  <imvdb_url>{}</imvdb_url>\n", escape_xml(url)));
    }
    if let Some(id) = metadata.catalog_id {
        nfo.push_str(&format!("  <imvdb_id>{}</imvdb_id>\n", id));
    }

    if let Some(views) = metadata.view_count {
        nfo.push_str(&format!("  <views>{}</views>\n", views));
    }

    if let Some(ref thumb) = metadata.thumbnail_url {
        nfo.push_str(&format!("  <thumb>{}</thumb>\n", escape_xml(thumb)));
    }

    if !metadata.credits.is_empty() {
        nfo.push_str("  <credits>\n");
        for credit in &metadata.credits {
            nfo.push_str(&format!(
                "    <credit role=\"{}\">{}</credit>\n",
                escape_xml(&credit.role),
                escape_xml(&credit.name)
            ));
        }
        nfo.push_str("  </credits>\n");
    }

    nfo.push_str("</musicvideo>\n");
    nfo
}

/// Write the NFO sidecar, replacing any previous one.
pub fn write_musicvideo_nfo(metadata: &ResolvedMetadata, path: &Path) -> Result<()> {
    std::fs::write(path, generate_musicvideo_nfo(metadata))?;
    tracing::debug!("Created NFO: {:?}", path);
    Ok(())
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
