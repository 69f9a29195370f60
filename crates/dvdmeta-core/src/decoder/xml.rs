//! Tag-name to field mapping over a parsed `roxmltree` document.

use std::str::FromStr;

use roxmltree::Node;
use tracing::trace;

use crate::error::{DvdError, Result};
use crate::types::{AudioStream, Cell, Chapter, Disc, SubtitleStream, Track};

/// Builds model values from the elements of one document.
pub(crate) struct TreeReader<'s> {
    source_name: &'s str,
}

impl<'s> TreeReader<'s> {
    pub(crate) fn new(source_name: &'s str) -> Self {
        Self { source_name }
    }

    pub(crate) fn read_disc(&self, root: Node) -> Result<Disc> {
        let mut disc = Disc::default();

        for child in root.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "device" => disc.device = text(child),
                "title" => disc.title = text(child),
                "vmg_id" => disc.vmg_id = text(child),
                "provider_id" => disc.provider_id = text(child),
                "track" => disc.tracks.push(self.read_track(child)?),
                "longest_track" => disc.longest_track = self.number(child)?,
                other => trace!(element = other, parent = "lsdvd", "ignoring element"),
            }
        }

        Ok(disc)
    }

    fn read_track(&self, node: Node) -> Result<Track> {
        let mut track = Track::default();

        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "ix" => track.index = self.number(child)?,
                "length" => track.length = self.number(child)?,
                "vts_id" => track.vts_id = text(child),
                "vts" => track.vts = self.number(child)?,
                "ttn" => track.ttn = self.number(child)?,
                "fps" => track.fps = self.number(child)?,
                "format" => track.format = text(child),
                "aspect" => track.aspect = text(child),
                "width" => track.width = self.number(child)?,
                "height" => track.height = self.number(child)?,
                "df" => track.df = text(child),
                "palette" => track.palette.extend(
                    child
                        .children()
                        .filter(|n| n.is_element() && n.tag_name().name() == "color")
                        .map(text),
                ),
                "angles" => track.angles = self.number(child)?,
                "audio" => track.audio_streams.push(self.read_audio(child)?),
                "subp" => track.subtitle_streams.push(self.read_subtitle(child)?),
                "chapter" => track.chapters.push(self.read_chapter(child)?),
                "cell" => track.cells.push(self.read_cell(child)?),
                other => trace!(element = other, parent = "track", "ignoring element"),
            }
        }

        Ok(track)
    }

    fn read_audio(&self, node: Node) -> Result<AudioStream> {
        let mut audio = AudioStream::default();

        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "ix" => audio.index = self.number(child)?,
                "langcode" => audio.language_code = text(child),
                "language" => audio.language = text(child),
                "format" => audio.format = text(child),
                "frequency" => audio.frequency = self.number(child)?,
                "quantization" => audio.quantization = text(child),
                "channels" => audio.channels = self.number(child)?,
                "ap_mode" => audio.ap_mode = self.number(child)?,
                "content" => audio.content = text(child),
                "streamid" => audio.stream_id = text(child),
                other => trace!(element = other, parent = "audio", "ignoring element"),
            }
        }

        Ok(audio)
    }

    fn read_subtitle(&self, node: Node) -> Result<SubtitleStream> {
        let mut subtitle = SubtitleStream::default();

        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "ix" => subtitle.index = self.number(child)?,
                "langcode" => subtitle.language_code = text(child),
                "language" => subtitle.language = text(child),
                "content" => subtitle.content = text(child),
                "streamid" => subtitle.stream_id = text(child),
                other => trace!(element = other, parent = "subp", "ignoring element"),
            }
        }

        Ok(subtitle)
    }

    fn read_chapter(&self, node: Node) -> Result<Chapter> {
        let mut chapter = Chapter::default();

        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "ix" => chapter.index = self.number(child)?,
                "length" => chapter.length = self.number(child)?,
                "startcell" => chapter.start_cell = self.number(child)?,
                other => trace!(element = other, parent = "chapter", "ignoring element"),
            }
        }

        Ok(chapter)
    }

    fn read_cell(&self, node: Node) -> Result<Cell> {
        let mut cell = Cell::default();

        for child in node.children().filter(|n| n.is_element()) {
            match child.tag_name().name() {
                "ix" => cell.index = self.number(child)?,
                "length" => cell.length = self.number(child)?,
                other => trace!(element = other, parent = "cell", "ignoring element"),
            }
        }

        Ok(cell)
    }

    /// Converts the trimmed text of `node`. An element with no text at all
    /// is the zero value; whitespace-only text does not convert.
    fn number<T>(&self, node: Node) -> Result<T>
    where
        T: FromStr + Default,
    {
        let raw = text(node);
        if raw.is_empty() {
            return Ok(T::default());
        }

        let value = raw.trim();

        value.parse().map_err(|_| DvdError::InvalidValue {
            source_name: self.source_name.to_string(),
            element: node.tag_name().name().to_string(),
            value: value.to_string(),
        })
    }
}

/// Character data directly inside `node`, verbatim.
fn text(node: Node) -> String {
    node.children()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}
