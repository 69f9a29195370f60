//! # lsdvd Report Decoder
//!
//! Turns the XML written by `lsdvd -Ox` into a [`Disc`]. Decoding is
//! all-or-nothing: either the full model is returned or an error that
//! names the document and the underlying cause.

pub mod repair;
mod xml;

use std::borrow::Cow;
use std::path::Path;

use tracing::debug;

use crate::error::{DvdError, MEMORY_SOURCE, Result};
use crate::types::Disc;

pub use repair::EntityRepair;

/// Root element of an lsdvd report.
pub const ROOT_ELEMENT: &str = "lsdvd";

/// Decoder for lsdvd XML reports.
///
/// Holds the compiled entity repair rules, so one instance can be reused
/// across any number of documents.
pub struct Decoder {
    repair: EntityRepair,
}

impl Decoder {
    /// Constructs a new `Decoder`.
    ///
    /// # Errors
    ///
    /// Returns `DvdError::RegexError` if the repair rules fail to compile.
    pub fn new() -> Result<Self> {
        Ok(Self {
            repair: EntityRepair::new()?,
        })
    }

    /// Reads the report at `path` and decodes it.
    ///
    /// # Errors
    ///
    /// Returns `DvdError::Io` if the file cannot be read, or any format
    /// error produced by [`Decoder::decode_named`].
    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<Disc> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let data = std::fs::read(path).map_err(|source| DvdError::Io {
            source_name: source_name.clone(),
            source,
        })?;

        self.decode_named(&source_name, &data)
    }

    /// Decodes an in-memory report.
    ///
    /// # Examples
    /// ```
    /// use dvdmeta_core::Decoder;
    ///
    /// let decoder = Decoder::new().unwrap();
    /// let disc = decoder
    ///     .decode(b"<lsdvd><title>DEMO</title><longest_track>1</longest_track></lsdvd>")
    ///     .unwrap();
    ///
    /// assert_eq!(disc.title, "DEMO");
    /// assert_eq!(disc.longest_track, 1);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Decoder::decode_named`].
    pub fn decode(&self, data: &[u8]) -> Result<Disc> {
        self.decode_named(MEMORY_SOURCE, data)
    }

    /// Decodes an in-memory report, naming it `source_name` in errors.
    ///
    /// # Errors
    ///
    /// - `DvdError::InvalidUtf8` if the repaired bytes are not UTF-8.
    /// - `DvdError::MalformedXml` if they are not well-formed XML.
    /// - `DvdError::UnexpectedRoot` if the root element is not `<lsdvd>`.
    /// - `DvdError::InvalidValue` if a numeric element does not convert.
    pub fn decode_named(&self, source_name: &str, data: &[u8]) -> Result<Disc> {
        let repaired = self.repair.apply(data);
        let text = std::str::from_utf8(&repaired).map_err(|source| DvdError::InvalidUtf8 {
            source_name: source_name.to_string(),
            source,
        })?;

        let doc = roxmltree::Document::parse(text).map_err(|source| DvdError::MalformedXml {
            source_name: source_name.to_string(),
            source,
        })?;

        let root = doc.root_element();
        if root.tag_name().name() != ROOT_ELEMENT {
            return Err(DvdError::UnexpectedRoot {
                source_name: source_name.to_string(),
                found: root.tag_name().name().to_string(),
            });
        }

        let disc = xml::TreeReader::new(source_name).read_disc(root)?;

        debug!(
            source = source_name,
            repaired = matches!(repaired, Cow::Owned(_)),
            tracks = disc.tracks.len(),
            "decoded lsdvd report"
        );

        Ok(disc)
    }
}

/// Convenience function to decode a report file with a fresh decoder.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Disc> {
    Decoder::new()?.decode_file(path)
}

/// Convenience function to decode an in-memory report with a fresh decoder.
pub fn parse_bytes(data: &[u8]) -> Result<Disc> {
    Decoder::new()?.decode(data)
}
