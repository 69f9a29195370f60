use serde::{Deserialize, Serialize};

/// A chapter of a track (`<chapter>`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// 1-based chapter number (`<ix>`).
    pub index: i64,
    /// Length in seconds (`<length>`).
    pub length: f64,
    /// Cell the chapter starts at (`<startcell>`).
    pub start_cell: i64,
}

impl Chapter {
    /// Length in minutes.
    #[must_use]
    pub fn minutes(&self) -> f64 {
        self.length / 60.0
    }
}

/// A playback cell of a track (`<cell>`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// 1-based cell number (`<ix>`).
    pub index: i64,
    /// Length in seconds (`<length>`).
    pub length: f64,
}
