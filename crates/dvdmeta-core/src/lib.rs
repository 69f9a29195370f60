//! # dvdmeta Core
//!
//! Typed model and tolerant decoder for the XML reports written by
//! `lsdvd -Ox`, plus read-only queries over the decoded disc: longest
//! track, lookup by index, language and duration summaries, and matching
//! of tracks or chapters against a target duration.
//!
//! ## Quick Start
//!
//! ```rust
//! use dvdmeta_core::{Decoder, MatchKind};
//!
//! let xml = br#"<lsdvd>
//!     <title>SEASON_1_DISC_1</title>
//!     <track><ix>1</ix><length>2583.5</length><df>Pan&Scan</df></track>
//!     <longest_track>1</longest_track>
//! </lsdvd>"#;
//!
//! let disc = Decoder::new().unwrap().decode(xml).unwrap();
//! assert_eq!(disc.tracks[0].df, "Pan&Scan");
//! assert_eq!(disc.longest_track().map(|t| t.index), Some(1));
//!
//! let matches = disc.find_forty_minute_content();
//! assert_eq!(matches[0].kind(), MatchKind::Track);
//! ```
pub mod decoder;
pub mod error;
pub mod query;
pub mod types;

// Re-export primary API
pub use decoder::{Decoder, EntityRepair, parse_bytes, parse_file};
pub use error::{DvdError, Result};
pub use query::{ContentMatch, DurationWindow, MatchKind, MatchSummary};
pub use types::{AudioStream, Cell, Chapter, Disc, SubtitleStream, Track};
