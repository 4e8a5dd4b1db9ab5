//! Catalog matching.
//!
//! Picks the first catalog search result whose artist and title loosely agree
//! with the filename guess. The catalog's own ranking is trusted: candidates
//! are not re-scored, and the first acceptable one wins.

use crate::models::catalog::CatalogCandidate;
use crate::models::media::ParsedName;

/// Case-insensitive containment in either direction.
fn loosely_equal(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Whether a candidate agrees with the parsed name.
///
/// Candidates with a blank artist or title never match: an empty string is
/// contained in everything.
pub fn is_acceptable(candidate: &CatalogCandidate, parsed: &ParsedName) -> bool {
    let artist = candidate.artist_name.trim();
    let title = candidate.song_title.trim();
    if artist.is_empty() || title.is_empty() {
        return false;
    }

    loosely_equal(&parsed.artist, artist) && loosely_equal(&parsed.song, title)
}

/// First acceptable candidate in catalog order.
pub fn find_best_match<'a>(
    candidates: &'a [CatalogCandidate],
    parsed: &ParsedName,
) -> Option<&'a CatalogCandidate> {
    candidates.iter().find(|c| is_acceptable(c, parsed))
}
