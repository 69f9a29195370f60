//! # Query Layer
//!
//! Read-only questions asked of a decoded [`Disc`](crate::types::Disc).
//! Nothing here fails: a missing result is `None` or an empty `Vec`.

pub mod disc;
pub mod matching;

pub use matching::{ContentMatch, DurationWindow, MatchKind, MatchSummary};
