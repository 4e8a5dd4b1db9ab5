//! Folder name generator.

use crate::models::metadata::ResolvedMetadata;
use regex::Regex;
use std::sync::LazyLock;

/// Featured-artist clause, up to the end of the name.
static FEATURING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:featuring|feat)\.?\s+.*$").unwrap());

/// Sanitize a string for use in file and folder names.
///
/// Characters that are invalid on common filesystems become `_`, and trailing
/// whitespace and dots are dropped. Already-clean strings come back unchanged.
pub fn sanitize_filename(s: &str) -> String {
    let replaced: String = s
        .chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            _ => c,
        })
        .collect();

    replaced
        .trim_end_matches(|c: char| c.is_whitespace() || c == '.')
        .to_string()
}

/// Artist name without a "feat. X" / "featuring X" tail.
pub fn primary_artist(artist: &str) -> String {
    FEATURING.replace(artist, "").trim().to_string()
}

/// Generate the per-artist folder name.
///
/// Collaborations are filed under the lead artist.
pub fn generate_artist_folder(metadata: &ResolvedMetadata) -> String {
    sanitize_filename(&primary_artist(&metadata.artist))
}

/// Generate the per-video folder name.
///
/// Format: `${artist} - ${songTitle}`
pub fn generate_video_folder(metadata: &ResolvedMetadata) -> String {
    sanitize_filename(&format!("{} - {}", metadata.artist, metadata.song_title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(artist: &str, title: &str) -> ResolvedMetadata {
        ResolvedMetadata {
            artist: artist.to_string(),
            song_title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sanitize_replaces_every_invalid_char() {
        assert_eq!(sanitize_filename(r#"a<b>c:d"e/f\g|h?i*j"#), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize_filename("AC/DC"), "AC_DC");
    }

    #[test]
    fn test_sanitize_trims_trailing_dots_and_whitespace() {
        assert_eq!(sanitize_filename("Hello... "), "Hello");
        assert_eq!(sanitize_filename("Mr. Oizo"), "Mr. Oizo");
        assert_eq!(sanitize_filename("  leading kept"), "  leading kept");
    }

    #[test]
    fn test_sanitize_is_fixed_point() {
        for s in ["Daft Punk", "Mr. Oizo - Flat Beat", "R.E.M", "Sigur Rós", ""] {
            let once = sanitize_filename(s);
            assert_eq!(once, s);
            assert_eq!(sanitize_filename(&once), once);
        }
        let dirty = sanitize_filename("What?. ");
        assert_eq!(sanitize_filename(&dirty), dirty);
    }

    #[test]
    fn test_primary_artist() {
        assert_eq!(primary_artist("Kanye West feat. Jay-Z"), "Kanye West");
        assert_eq!(primary_artist("Moby Featuring Gwen Stefani"), "Moby");
        assert_eq!(primary_artist("Eve FEAT Gwen Stefani & Co"), "Eve");
        assert_eq!(primary_artist("Featurette"), "Featurette");
        assert_eq!(primary_artist("Daft Punk"), "Daft Punk");
    }

    #[test]
    fn test_generate_folders() {
        let m = metadata("Kanye West feat. Jay-Z", "Run This Town");
        assert_eq!(generate_artist_folder(&m), "Kanye West");
        assert_eq!(generate_video_folder(&m), "Kanye West feat. Jay-Z - Run This Town");

        let m = metadata("AC/DC", "Thunderstruck?");
        assert_eq!(generate_artist_folder(&m), "AC_DC");
        assert_eq!(generate_video_folder(&m), "AC_DC - Thunderstruck_");
    }
}
