//! Filename parser module.
//!
//! Extracts an artist / song title guess from a video filename. Two dialects
//! are supported:
//!
//! - **Strict**: `Artist Name - Song Title (extra info).ext`, underscores
//!   allowed as spaces (`Artist_Name_-_Song_Title.ext`).
//! - **Oddities**: tolerates scene-release junk, dots as spaces and a few
//!   alternative separators (`Artist.feat.Other.-.Song.Title.[stuff]`,
//!   `Artist by Song`, `Artist-song_title-junk-junk`).
//!
//! Parsing is conservative: a filename that does not fit yields `None` and the
//! file is skipped rather than guessed at.

use crate::models::media::ParsedName;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Scene-release junk stripped in oddities mode, applied in order.
static SCENE_JUNK: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"[-\.]svcd.*$",
        r"[-\.]dvdrip.*$",
        r"[-\.]lbvidz.*$",
        r"[-\.]gnrules.*$",
        r"[-\.]littlec.*$",
        r"[-\.]mV$",
        r"[-\.]mb$",
        r"[-\.]fioretti.*$",
        r"[-\.]detox.*$",
        r"[-\.]tolerance.*$",
        r"[-\.]gray.*$",
        r"[-\.]fused.*$",
        r"[-\.]EViLSouL.*$",
        r"[-\.]sZb.*$",
        r"[-\.]X264.*$",
        r"[-\.]AC3.*$",
        r"\[.*?\]",
        r"\(Official Video\)",
        r"\(Official\)",
        "\"",
        "＂",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
    .collect()
});

/// A bracketed, parenthesised or braced span.
static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\(\[\{].*?[\)\]\}]").unwrap());

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static BY_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i) by ").unwrap());

/// Trailing "Featuring X" / "feat X" clause on the artist side.
static FEATURING_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(?:featuring|feat)\.?\s+.*$").unwrap());

static LOOSE_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*-\s*").unwrap());

/// Filename parsing dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Require the literal ` - ` separator.
    #[default]
    Strict,
    /// Permissive parsing for scene releases and dotted names.
    Oddities,
}

impl ParseMode {
    /// Mode selected by the `--oddities` flag.
    pub fn from_oddities_flag(oddities: bool) -> Self {
        if oddities {
            ParseMode::Oddities
        } else {
            ParseMode::Strict
        }
    }
}

/// Filename parser for a fixed dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilenameParser {
    mode: ParseMode,
}

impl FilenameParser {
    /// Create a parser for the given dialect.
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Parse a filename (with or without directories and extension).
    pub fn parse(&self, filename: &str) -> Option<ParsedName> {
        let stem = Path::new(filename)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| filename.to_string());

        match self.mode {
            ParseMode::Strict => parse_strict(&stem),
            ParseMode::Oddities => parse_oddities(&stem),
        }
    }
}

/// Parse a filename (convenience function).
pub fn parse_filename(filename: &str, mode: ParseMode) -> Option<ParsedName> {
    FilenameParser::new(mode).parse(filename)
}

fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s, " ").trim().to_string()
}

/// Split the song segment into the cleaned title and bracketed extras, and
/// assemble the record. Fails if either side ends up empty.
fn build(artist: &str, song_segment: &str) -> Option<ParsedName> {
    let artist = artist.trim();
    let song_original = song_segment.trim();

    let extras: Vec<&str> = BRACKETED
        .find_iter(song_original)
        .map(|m| m.as_str())
        .collect();
    let song = collapse_whitespace(&BRACKETED.replace_all(song_original, " "));

    if artist.is_empty() || song.is_empty() {
        return None;
    }

    Some(ParsedName {
        artist: artist.to_string(),
        song,
        song_original: song_original.to_string(),
        extra_info: (!extras.is_empty()).then(|| extras.join(" ")),
    })
}

/// `Artist - Song`, underscores as spaces, split on the first separator only.
fn parse_strict(stem: &str) -> Option<ParsedName> {
    let name = stem.replace('_', " ");
    let (artist, song) = name.split_once(" - ")?;
    build(artist, song)
}

/// Normalise a scene-style name: strip junk, dots and underscores to spaces.
fn normalize_oddities(stem: &str) -> String {
    let mut name = stem.to_string();
    for pattern in SCENE_JUNK.iter() {
        name = pattern.replace_all(&name, "").into_owned();
    }

    // Keep "..", which often separates artist and title, from vanishing
    let name = name.replace("..", " . ").replace(['.', '_'], " ");
    collapse_whitespace(&name)
}

fn parse_oddities(stem: &str) -> Option<ParsedName> {
    let name = normalize_oddities(stem);

    if let Some((artist, song)) = name.split_once(" - ") {
        return build(artist, song);
    }

    if let Some(m) = BY_SEPARATOR.find(&name) {
        let before = &name[..m.start()];
        let after = &name[m.end()..];
        let artist = FEATURING_TAIL.replace(before, "");
        return build(&artist, after);
    }

    // Artist-song-junk-junk: anything past the second segment is junk
    let mut parts = LOOSE_DASH.split(&name);
    match (parts.next(), parts.next()) {
        (Some(artist), Some(song)) => build(artist, song),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(name: &str) -> Option<ParsedName> {
        parse_filename(name, ParseMode::Strict)
    }

    fn oddities(name: &str) -> Option<ParsedName> {
        parse_filename(name, ParseMode::Oddities)
    }

    #[test]
    fn test_strict_basic() {
        let parsed = strict("Daft Punk - Around the World.mkv").unwrap();
        assert_eq!(parsed.artist, "Daft Punk");
        assert_eq!(parsed.song, "Around the World");
        assert_eq!(parsed.song_original, "Around the World");
        assert!(parsed.extra_info.is_none());
    }

    #[test]
    fn test_strict_underscores_and_extra_info() {
        let parsed = strict("Daft_Punk_-_One_More_Time_(Official_Video).mp4").unwrap();
        assert_eq!(parsed.artist, "Daft Punk");
        assert_eq!(parsed.song, "One More Time");
        assert_eq!(parsed.song_original, "One More Time (Official Video)");
        assert_eq!(parsed.extra_info.as_deref(), Some("(Official Video)"));
    }

    #[test]
    fn test_strict_splits_on_first_separator_only() {
        let parsed = strict("Blur - Song 2 - Live at Wembley.avi").unwrap();
        assert_eq!(parsed.artist, "Blur");
        assert_eq!(parsed.song, "Song 2 - Live at Wembley");
    }

    #[test]
    fn test_strict_multiple_bracketed_spans() {
        let parsed = strict("Moby - Porcelain [HD] (1999) {remaster}.mp4").unwrap();
        assert_eq!(parsed.song, "Porcelain");
        assert_eq!(parsed.extra_info.as_deref(), Some("[HD] (1999) {remaster}"));
    }

    #[test]
    fn test_strict_inner_bracket_keeps_words_apart() {
        let parsed = strict("Prodigy - Breathe (Live) Remix.mp4").unwrap();
        assert_eq!(parsed.song, "Breathe Remix");
    }

    #[test]
    fn test_strict_requires_separator() {
        assert!(strict("Daft Punk-Around the World.mkv").is_none());
        assert!(strict("Around the World.mkv").is_none());
        assert!(strict("Daft.Punk.-.Around.the.World.mkv").is_none());
    }

    #[test]
    fn test_strict_rejects_empty_sides() {
        assert!(strict(" - Around the World.mkv").is_none());
        assert!(strict("Daft Punk - (Live).mkv").is_none());
    }

    #[test]
    fn test_oddities_dotted_scene_release() {
        let parsed = oddities("Daft.Punk.-.Around.The.World.DVDRip.XviD-GRP.avi").unwrap();
        assert_eq!(parsed.artist, "Daft Punk");
        assert_eq!(parsed.song, "Around The World");
    }

    #[test]
    fn test_oddities_strips_brackets_and_official_video() {
        let parsed = oddities("Daft Punk - One More Time (Official Video) [1080p].mp4").unwrap();
        assert_eq!(parsed.artist, "Daft Punk");
        assert_eq!(parsed.song, "One More Time");
        assert!(parsed.extra_info.is_none());
    }

    #[test]
    fn test_oddities_double_dot_separator() {
        let parsed = oddities("Mr..Oizo.-.Flat.Beat.mpg").unwrap();
        assert_eq!(parsed.artist, "Mr Oizo");
        assert_eq!(parsed.song, "Flat Beat");
    }

    #[test]
    fn test_oddities_by_separator_trims_featuring() {
        let parsed = oddities("Kanye West Featuring Jay-Z by Run This Town.mp4");
        // " - " does not occur, but the loose dash inside Jay-Z must not win
        let parsed = parsed.unwrap();
        assert_eq!(parsed.artist, "Kanye West");
        assert_eq!(parsed.song, "Run This Town");

        let parsed = oddities("Moby.feat.Gwen.Stefani.BY.South.Side.mpg").unwrap();
        assert_eq!(parsed.artist, "Moby");
        assert_eq!(parsed.song, "South Side");
    }

    #[test]
    fn test_oddities_loose_dash_discards_junk() {
        let parsed = oddities("beck-loser-svcd-grp.mpg").unwrap();
        assert_eq!(parsed.artist, "beck");
        assert_eq!(parsed.song, "loser");

        let parsed = oddities("Beck-Loser_Live-junk-more_junk.mpg").unwrap();
        assert_eq!(parsed.artist, "Beck");
        assert_eq!(parsed.song, "Loser Live");
    }

    #[test]
    fn test_oddities_no_separator() {
        assert!(oddities("just_a_video.mp4").is_none());
    }

    #[test]
    fn test_oddities_strips_quotes() {
        let parsed = oddities("Nirvana - \"Come As You Are\".mp4").unwrap();
        assert_eq!(parsed.song, "Come As You Are");
    }

    #[test]
    fn test_oddities_idempotent_on_clean_input() {
        let first = oddities("Daft Punk - One More Time (Live).mp4").unwrap();
        let again = oddities(&format!("{} - {}.mp4", first.artist, first.song_original)).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_parse_mode_from_flag() {
        assert_eq!(ParseMode::from_oddities_flag(true), ParseMode::Oddities);
        assert_eq!(ParseMode::from_oddities_flag(false), ParseMode::Strict);
        assert_eq!(ParseMode::default(), ParseMode::Strict);
    }
}
