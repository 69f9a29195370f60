pub mod chapter;
pub mod disc;
pub mod stream;
pub mod track;

pub use chapter::{Cell, Chapter};
pub use disc::Disc;
pub use stream::{AudioStream, SubtitleStream};
pub use track::Track;
