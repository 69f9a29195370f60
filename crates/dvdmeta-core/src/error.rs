use thiserror::Error;

/// Source name used for documents decoded straight from memory.
pub const MEMORY_SOURCE: &str = "<memory>";

/// Errors that can occur while decoding an lsdvd report.
///
/// Every variant carries the name of the document it came from (a file
/// path, or [`MEMORY_SOURCE`]) so callers can report a useful diagnostic.
#[derive(Debug, Error)]
pub enum DvdError {
    /// The report file could not be read.
    #[error("failed to read file {source_name}: {source}")]
    Io {
        /// Path of the report.
        source_name: String,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The repaired document is not valid UTF-8.
    #[error("failed to parse XML from {source_name}: {source}")]
    InvalidUtf8 {
        /// Name of the document.
        source_name: String,
        /// Position of the first invalid byte.
        source: std::str::Utf8Error,
    },

    /// The repaired document is not well-formed XML.
    #[error("failed to parse XML from {source_name}: {source}")]
    MalformedXml {
        /// Name of the document.
        source_name: String,
        /// Parser diagnostic.
        source: roxmltree::Error,
    },

    /// The document root is not `<lsdvd>`.
    #[error("failed to parse XML from {source_name}: expected element <lsdvd> but found <{found}>")]
    UnexpectedRoot {
        /// Name of the document.
        source_name: String,
        /// Tag name of the root actually found.
        found: String,
    },

    /// A numeric element holds text that does not convert to its type.
    #[error("failed to parse XML from {source_name}: invalid value {value:?} in <{element}>")]
    InvalidValue {
        /// Name of the document.
        source_name: String,
        /// Tag name of the offending element.
        element: String,
        /// Trimmed text content that failed to convert.
        value: String,
    },

    /// A repair pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),
}

impl DvdError {
    /// Returns `true` if the report could not be read at all.
    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Returns `true` if the report was read but is not a decodable lsdvd document.
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            Self::InvalidUtf8 { .. }
                | Self::MalformedXml { .. }
                | Self::UnexpectedRoot { .. }
                | Self::InvalidValue { .. }
        )
    }

    /// Name of the document the error refers to, when there is one.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        match self {
            Self::Io { source_name, .. }
            | Self::InvalidUtf8 { source_name, .. }
            | Self::MalformedXml { source_name, .. }
            | Self::UnexpectedRoot { source_name, .. }
            | Self::InvalidValue { source_name, .. } => Some(source_name),
            Self::RegexError(_) => None,
        }
    }
}

/// Result type alias for dvdmeta operations.
pub type Result<T> = std::result::Result<T, DvdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = DvdError::UnexpectedRoot {
            source_name: "s1d1.xml".into(),
            found: "invalid".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to parse XML from s1d1.xml: expected element <lsdvd> but found <invalid>"
        );

        let err = DvdError::InvalidValue {
            source_name: MEMORY_SOURCE.into(),
            element: "length".into(),
            value: "abc".into(),
        };
        assert!(err.to_string().contains("<length>"));
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn error_classification() {
        let io = DvdError::Io {
            source_name: "missing.xml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(io.is_io());
        assert!(!io.is_format());
        assert_eq!(io.source_name(), Some("missing.xml"));

        let format = DvdError::UnexpectedRoot {
            source_name: MEMORY_SOURCE.into(),
            found: "x".into(),
        };
        assert!(format.is_format());
        assert!(!format.is_io());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DvdError>();
    }
}
