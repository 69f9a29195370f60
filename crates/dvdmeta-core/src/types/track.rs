use serde::{Deserialize, Serialize};

use super::chapter::{Cell, Chapter};
use super::stream::{AudioStream, SubtitleStream};

/// One playable title on the disc.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// 1-based track number (`<ix>`), taken verbatim.
    pub index: i64,

    /// Playback length in seconds (`<length>`).
    ///
    /// Independent of the chapter and cell lengths, which may disagree.
    pub length: f64,

    /// Video title set identifier (`<vts_id>`).
    pub vts_id: String,

    /// Video title set number (`<vts>`).
    pub vts: i64,

    /// Title number inside the title set (`<ttn>`).
    pub ttn: i64,

    /// Frame rate (`<fps>`).
    pub fps: f64,

    /// Broadcast standard, e.g. `PAL` or `NTSC` (`<format>`).
    pub format: String,

    /// Aspect ratio label, e.g. `16/9` (`<aspect>`).
    pub aspect: String,

    /// Frame width in pixels (`<width>`).
    pub width: i64,

    /// Frame height in pixels (`<height>`).
    pub height: i64,

    /// Display format, e.g. `Letterbox` or `Pan&Scan` (`<df>`).
    pub df: String,

    /// Subpicture palette colors in document order (`<palette><color>`).
    pub palette: Vec<String>,

    /// Number of camera angles (`<angles>`).
    pub angles: i64,

    /// Audio streams (`<audio>`).
    pub audio_streams: Vec<AudioStream>,

    /// Subtitle streams (`<subp>`).
    pub subtitle_streams: Vec<SubtitleStream>,

    /// Chapters (`<chapter>`).
    pub chapters: Vec<Chapter>,

    /// Cells (`<cell>`).
    pub cells: Vec<Cell>,
}

impl Track {
    /// Length in minutes.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.length / 60.0
    }

    /// Frame size formatted as `WIDTHxHEIGHT`.
    #[must_use]
    pub fn resolution(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}
