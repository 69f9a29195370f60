use serde::{Deserialize, Serialize};

use super::track::Track;

/// The decoded root record of one `lsdvd -Ox` report.
///
/// A `Disc` is a read-only snapshot: the decoder builds the whole graph in
/// one pass and nothing in this crate mutates it afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    /// Device or image path the report was taken from (`<device>`).
    pub device: String,

    /// Volume title (`<title>`).
    pub title: String,

    /// Video manager identifier (`<vmg_id>`).
    pub vmg_id: String,

    /// Provider identifier (`<provider_id>`).
    pub provider_id: String,

    /// Tracks in document order.
    pub tracks: Vec<Track>,

    /// 1-based position of the longest track, as declared by the report.
    ///
    /// Taken verbatim; it is not checked against the track lengths.
    pub longest_track: i64,
}

impl Disc {
    /// Number of tracks on the disc.
    #[must_use]
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` if the report lists no tracks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disc_is_empty() {
        let disc = Disc::default();
        assert!(disc.is_empty());
        assert_eq!(disc.track_count(), 0);
        assert_eq!(disc.longest_track, 0);
        assert!(disc.device.is_empty());
    }

    #[test]
    fn disc_serialization_roundtrip() {
        let disc = Disc {
            device: "./s1d1/Law And Order Svu".into(),
            title: "LAW_AND_ORDER".into(),
            vmg_id: "DVDVIDEO-VMG".into(),
            provider_id: "UNIVERSAL".into(),
            tracks: vec![Track {
                index: 1,
                length: 2583.5,
                ..Track::default()
            }],
            longest_track: 1,
        };

        let json = serde_json::to_string_pretty(&disc).unwrap();
        let back: Disc = serde_json::from_str(&json).unwrap();
        assert_eq!(disc, back);
    }
}
