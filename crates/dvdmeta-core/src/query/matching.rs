//! # Duration Matching
//!
//! Finds tracks and chapters whose length falls inside an inclusive
//! window around a target duration. A track that matches as a whole is
//! reported once and its chapters are never looked at.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{Chapter, Disc, Track};

/// Inclusive `[target - tolerance, target + tolerance]` window, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DurationWindow {
    /// Target duration in seconds.
    pub target_seconds: f64,
    /// Allowed deviation in seconds. Negative values give an empty window.
    pub tolerance_seconds: f64,
}

impl Default for DurationWindow {
    /// Forty minutes, give or take five.
    fn default() -> Self {
        Self::from_minutes(40.0, 5.0)
    }
}

impl DurationWindow {
    /// Creates a window from a target and tolerance given in minutes.
    #[must_use]
    pub fn from_minutes(target_minutes: f64, tolerance_minutes: f64) -> Self {
        Self {
            target_seconds: target_minutes * 60.0,
            tolerance_seconds: tolerance_minutes * 60.0,
        }
    }

    /// Set the target, in minutes.
    #[must_use]
    pub fn with_target_minutes(mut self, minutes: f64) -> Self {
        self.target_seconds = minutes * 60.0;
        self
    }

    /// Set the tolerance, in minutes.
    #[must_use]
    pub fn with_tolerance_minutes(mut self, minutes: f64) -> Self {
        self.tolerance_seconds = minutes * 60.0;
        self
    }

    /// Lower bound in seconds.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.target_seconds - self.tolerance_seconds
    }

    /// Upper bound in seconds.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.target_seconds + self.tolerance_seconds
    }

    /// Returns `true` if `seconds` lies inside the window, bounds included.
    #[must_use]
    pub fn contains(&self, seconds: f64) -> bool {
        seconds >= self.lower() && seconds <= self.upper()
    }
}

/// Whether a match covers a whole track or a single chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Track,
    Chapter,
}

impl fmt::Display for MatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Track => write!(f, "track"),
            Self::Chapter => write!(f, "chapter"),
        }
    }
}

/// A track or chapter whose length fell inside a [`DurationWindow`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentMatch<'a> {
    /// The whole track matched.
    Track {
        /// The matching track.
        track: &'a Track,
        /// The track length, in seconds.
        duration: f64,
    },
    /// One chapter of a non-matching track matched.
    Chapter {
        /// The track the chapter belongs to.
        track: &'a Track,
        /// The matching chapter.
        chapter: &'a Chapter,
        /// The chapter length, in seconds.
        duration: f64,
    },
}

impl<'a> ContentMatch<'a> {
    #[must_use]
    pub fn kind(&self) -> MatchKind {
        match self {
            Self::Track { .. } => MatchKind::Track,
            Self::Chapter { .. } => MatchKind::Chapter,
        }
    }

    /// The matching track, or the track containing the matching chapter.
    #[must_use]
    pub fn track(&self) -> &'a Track {
        match *self {
            Self::Track { track, .. } | Self::Chapter { track, .. } => track,
        }
    }

    /// The matching chapter; `None` for track matches.
    #[must_use]
    pub fn chapter(&self) -> Option<&'a Chapter> {
        match *self {
            Self::Track { .. } => None,
            Self::Chapter { chapter, .. } => Some(chapter),
        }
    }

    /// Matched duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        match *self {
            Self::Track { duration, .. } | Self::Chapter { duration, .. } => duration,
        }
    }
}

/// Counts of track and chapter matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub tracks: usize,
    pub chapters: usize,
}

impl MatchSummary {
    #[must_use]
    pub fn from_matches(matches: &[ContentMatch<'_>]) -> Self {
        matches
            .iter()
            .fold(Self::default(), |mut summary, m| {
                match m.kind() {
                    MatchKind::Track => summary.tracks += 1,
                    MatchKind::Chapter => summary.chapters += 1,
                }
                summary
            })
    }

    /// Total number of matches.
    #[must_use]
    pub fn total(&self) -> usize {
        self.tracks + self.chapters
    }
}

impl Disc {
    /// Finds content whose length is within `tolerance_minutes` of `target_minutes`.
    ///
    /// Tracks are visited in document order. A track whose own length is
    /// inside the window yields one track match and its chapters are
    /// skipped; otherwise every chapter inside the window yields a chapter
    /// match.
    ///
    /// # Examples
    /// ```
    /// use dvdmeta_core::{Decoder, MatchKind};
    ///
    /// let disc = Decoder::new()
    ///     .unwrap()
    ///     .decode(b"<lsdvd><track><ix>1</ix><length>2400.0</length></track></lsdvd>")
    ///     .unwrap();
    ///
    /// let matches = disc.find_content_around_duration(40.0, 5.0);
    /// assert_eq!(matches.len(), 1);
    /// assert_eq!(matches[0].kind(), MatchKind::Track);
    /// assert_eq!(matches[0].duration(), 2400.0);
    /// ```
    #[must_use]
    pub fn find_content_around_duration(
        &self,
        target_minutes: f64,
        tolerance_minutes: f64,
    ) -> Vec<ContentMatch<'_>> {
        self.find_content_in_window(&DurationWindow::from_minutes(
            target_minutes,
            tolerance_minutes,
        ))
    }

    /// [`Disc::find_content_around_duration`] with a 40 minute target and 5 minute tolerance.
    #[must_use]
    pub fn find_forty_minute_content(&self) -> Vec<ContentMatch<'_>> {
        self.find_content_around_duration(40.0, 5.0)
    }

    /// Finds content whose length lies inside `window`.
    #[must_use]
    pub fn find_content_in_window(&self, window: &DurationWindow) -> Vec<ContentMatch<'_>> {
        let mut matches = Vec::new();

        for track in &self.tracks {
            if window.contains(track.length) {
                matches.push(ContentMatch::Track {
                    track,
                    duration: track.length,
                });
                continue;
            }

            matches.extend(
                track
                    .chapters
                    .iter()
                    .filter(|chapter| window.contains(chapter.length))
                    .map(|chapter| ContentMatch::Chapter {
                        track,
                        chapter,
                        duration: chapter.length,
                    }),
            );
        }

        matches
    }
}
