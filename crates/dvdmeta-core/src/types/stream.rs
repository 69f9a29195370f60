use serde::{Deserialize, Serialize};

/// An audio stream of a track (`<audio>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AudioStream {
    /// 1-based stream number (`<ix>`).
    pub index: i64,
    /// Two-letter language code (`<langcode>`).
    pub language_code: String,
    /// Language name (`<language>`).
    pub language: String,
    /// Codec label, e.g. `ac3` (`<format>`).
    pub format: String,
    /// Sample frequency in Hz (`<frequency>`).
    pub frequency: i64,
    /// Quantization label (`<quantization>`).
    pub quantization: String,
    /// Channel count (`<channels>`).
    pub channels: i64,
    /// Application mode flag (`<ap_mode>`).
    pub ap_mode: i64,
    /// Content type label (`<content>`).
    pub content: String,
    /// Stream identifier, e.g. `0x80` (`<streamid>`).
    pub stream_id: String,
}

/// A subtitle stream of a track (`<subp>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleStream {
    /// 1-based stream number (`<ix>`).
    pub index: i64,
    /// Two-letter language code (`<langcode>`).
    pub language_code: String,
    /// Language name (`<language>`).
    pub language: String,
    /// Content type label (`<content>`).
    pub content: String,
    /// Stream identifier, e.g. `0x20` (`<streamid>`).
    pub stream_id: String,
}
