use super::Reader;
use crate::ParseError;
use thiserror::Error;

#[doc = r#"
The fatal error of a parse.

Carries the absolute byte position in the input where decoding stopped.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReaderErrorKind {
    /// The bytes do not follow the file format.
    #[error("Invalid format: {0}")]
    InvalidFormat(#[from] ParseError),
    /// A read asked for more bytes than remain.
    #[error("Unexpected end of data")]
    UnexpectedEof,
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }
    /// True if the input ran out
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::UnexpectedEof)
    }
    /// True if the bytes were malformed
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::InvalidFormat(_))
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the parse error, if the bytes were malformed
    pub fn parse_error(&self) -> Option<&ParseError> {
        match &self.kind {
            ReaderErrorKind::InvalidFormat(e) => Some(e),
            ReaderErrorKind::UnexpectedEof => None,
        }
    }
    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Create a new invalid format error
    pub const fn invalid_format(position: usize, error: ParseError) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::InvalidFormat(error),
        }
    }

    /// Create a new end of data error
    pub const fn eof(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::UnexpectedEof,
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;

pub(crate) fn inv_data(reader: &Reader<'_>, v: impl Into<ParseError>) -> ReaderError {
    ReaderError::invalid_format(reader.buffer_position(), v.into())
}
