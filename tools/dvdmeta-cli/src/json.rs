//! JSON line output, one object per report.

use serde::Serialize;

use dvdmeta_core::{ContentMatch, Disc, DurationWindow, MatchKind, MatchSummary};

/// Summary of one decoded report.
#[derive(Debug, Serialize)]
pub struct DiscOutput<'a> {
    pub file: &'a str,
    pub disc: &'a Disc,
    /// `ix` of the track at the declared longest position, if it exists.
    pub longest_track_index: Option<i64>,
    pub total_duration: f64,
    pub audio_languages: Vec<String>,
    pub subtitle_languages: Vec<String>,
}

impl<'a> DiscOutput<'a> {
    pub fn new(file: &'a str, disc: &'a Disc) -> Self {
        Self {
            file,
            disc,
            longest_track_index: disc.longest_track().map(|t| t.index),
            total_duration: disc.total_duration(),
            audio_languages: disc.audio_languages(),
            subtitle_languages: disc.subtitle_languages(),
        }
    }
}

/// One match, reduced to the indices needed to locate it on the disc.
#[derive(Debug, Serialize)]
pub struct MatchOutput {
    #[serde(rename = "type")]
    pub kind: MatchKind,
    pub track: i64,
    pub chapter: Option<i64>,
    pub duration: f64,
    pub minutes: f64,
}

impl From<&ContentMatch<'_>> for MatchOutput {
    fn from(content: &ContentMatch<'_>) -> Self {
        Self {
            kind: content.kind(),
            track: content.track().index,
            chapter: content.chapter().map(|c| c.index),
            duration: content.duration(),
            minutes: content.duration() / 60.0,
        }
    }
}

/// Matches found in one report around a target duration.
#[derive(Debug, Serialize)]
pub struct EpisodesOutput<'a> {
    pub file: &'a str,
    pub window: DurationWindow,
    pub matches: Vec<MatchOutput>,
    pub summary: MatchSummary,
}

impl<'a> EpisodesOutput<'a> {
    pub fn new(file: &'a str, window: DurationWindow, matches: &[ContentMatch<'_>]) -> Self {
        Self {
            file,
            window,
            matches: matches.iter().map(MatchOutput::from).collect(),
            summary: MatchSummary::from_matches(matches),
        }
    }
}

/// A report that failed to decode.
#[derive(Debug, Serialize)]
pub struct ErrorOutput<'a> {
    pub file: &'a str,
    pub error: String,
}
