use std::collections::BTreeSet;

use crate::types::{Disc, Track};

impl Disc {
    /// Returns the track at the declared 1-based `longest_track` position.
    ///
    /// The declared index is used as-is; no search over track lengths is
    /// made. Returns `None` when the index is not positive or points past
    /// the last track.
    #[must_use]
    pub fn longest_track(&self) -> Option<&Track> {
        let position = usize::try_from(self.longest_track).ok()?;
        position.checked_sub(1).and_then(|offset| self.tracks.get(offset))
    }

    /// Returns the first track whose `index` field equals `index`.
    #[must_use]
    pub fn track_by_index(&self, index: i64) -> Option<&Track> {
        self.tracks.iter().find(|track| track.index == index)
    }

    /// Sum of every track length, in seconds.
    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.tracks.iter().map(|track| track.length).sum()
    }

    /// Unique non-empty audio languages across all tracks.
    #[must_use]
    pub fn audio_languages(&self) -> Vec<String> {
        unique_languages(
            self.tracks
                .iter()
                .flat_map(|track| &track.audio_streams)
                .map(|audio| audio.language.as_str()),
        )
    }

    /// Unique non-empty subtitle languages across all tracks.
    #[must_use]
    pub fn subtitle_languages(&self) -> Vec<String> {
        unique_languages(
            self.tracks
                .iter()
                .flat_map(|track| &track.subtitle_streams)
                .map(|subtitle| subtitle.language.as_str()),
        )
    }
}

// Exact, case-sensitive uniqueness; the order of the result carries no meaning.
fn unique_languages<'a>(languages: impl Iterator<Item = &'a str>) -> Vec<String> {
    languages
        .filter(|language| !language.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AudioStream, SubtitleStream};

    fn track(index: i64, length: f64) -> Track {
        Track {
            index,
            length,
            ..Track::default()
        }
    }

    fn disc(tracks: Vec<Track>, longest_track: i64) -> Disc {
        Disc {
            tracks,
            longest_track,
            ..Disc::default()
        }
    }

    fn audio(language: &str) -> AudioStream {
        AudioStream {
            language: language.into(),
            ..AudioStream::default()
        }
    }

    fn subtitle(language: &str) -> SubtitleStream {
        SubtitleStream {
            language: language.into(),
            ..SubtitleStream::default()
        }
    }

    #[test]
    fn longest_track_uses_declared_position() {
        let d = disc(vec![track(1, 100.0), track(2, 200.0)], 2);
        assert_eq!(d.longest_track().map(|t| t.index), Some(2));
    }

    #[test]
    fn longest_track_is_not_recomputed() {
        let d = disc(vec![track(1, 9000.0), track(2, 10.0)], 2);
        assert_eq!(d.longest_track().map(|t| t.length), Some(10.0));
    }

    #[test]
    fn longest_track_is_positional_not_by_index_field() {
        let d = disc(vec![track(7, 1.0), track(3, 2.0)], 1);
        assert_eq!(d.longest_track().map(|t| t.index), Some(7));
    }

    #[test]
    fn longest_track_out_of_bounds_is_none() {
        let tracks = vec![track(1, 100.0), track(2, 200.0)];
        for declared in [0, -1, 3, i64::MIN, i64::MAX] {
            let d = disc(tracks.clone(), declared);
            assert!(d.longest_track().is_none(), "declared {declared}");
        }
        assert!(disc(Vec::new(), 1).longest_track().is_none());
    }

    #[test]
    fn track_by_index_matches_field_value() {
        let d = disc(vec![track(1, 100.0), track(3, 300.0)], 1);
        assert_eq!(d.track_by_index(3).map(|t| t.length), Some(300.0));
        // Position 2 exists, but no track carries index 2.
        assert!(d.track_by_index(2).is_none());
        assert!(d.track_by_index(999).is_none());
    }

    #[test]
    fn track_by_index_returns_first_duplicate() {
        let d = disc(vec![track(2, 1.0), track(2, 2.0)], 0);
        assert_eq!(d.track_by_index(2).map(|t| t.length), Some(1.0));
    }

    #[test]
    fn total_duration_sums_lengths() {
        let d = disc(vec![track(1, 100.0), track(2, 200.0)], 2);
        assert_eq!(d.total_duration(), 300.0);
        assert_eq!(Disc::default().total_duration(), 0.0);
    }

    #[test]
    fn languages_are_unique_and_non_empty() {
        let mut first = track(1, 100.0);
        first.audio_streams = vec![audio("English"), audio(""), audio("English")];
        first.subtitle_streams = vec![subtitle("Spanish")];
        let mut second = track(2, 200.0);
        second.audio_streams = vec![audio("French"), audio("english")];
        second.subtitle_streams = vec![subtitle(""), subtitle("Spanish")];
        let d = disc(vec![first, second], 2);

        let mut audio_langs = d.audio_languages();
        audio_langs.sort();
        assert_eq!(audio_langs, vec!["English", "French", "english"]);
        assert_eq!(d.subtitle_languages(), vec!["Spanish"]);
    }

    #[test]
    fn languages_of_empty_disc() {
        assert!(Disc::default().audio_languages().is_empty());
        assert!(Disc::default().subtitle_languages().is_empty());
    }
}
