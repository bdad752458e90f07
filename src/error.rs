use thiserror::Error;

#[doc = r#"
Structural problems found while decoding bytes.

Every variant here is fatal: the reader wraps it in a
[`ReaderError`](crate::reader::ReaderError) carrying the byte position.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Chunk framing
    #[error("Chunk: {0}")]
    Chunk(#[from] ChunkError),
    /// Event status and data bytes
    #[error("Event: {0}")]
    Event(#[from] EventError),
    /// Meta event payloads
    #[error("Meta: {0}")]
    Meta(#[from] MetaError),
}

/// Chunk id and length mismatches
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChunkError {
    /// Expected `MThd`
    #[error("Expected a header chunk (MThd), found {0:?}")]
    NotHeader([u8; 4]),
    /// Expected `MTrk`
    #[error("Expected a track chunk (MTrk), found {0:?}")]
    NotTrack([u8; 4]),
    /// The header chunk always declares 6 bytes.
    #[error("Header chunk length must be 6, found {0}")]
    HeaderLength(u32),
}

/// Invalid event framing
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    /// A status byte that does not start a channel, meta or sysex event
    #[error("Invalid status byte {0:#04X}")]
    InvalidStatus(u8),
    /// A data byte found where a status byte was expected, with running status off
    #[error("Missing status byte, found data byte {0:#04X}")]
    MissingStatus(u8),
    /// Channel data bytes must have the high bit clear
    #[error("Invalid data byte {0:#04X}")]
    InvalidDataByte(u8),
}

/// Meta event payloads that cannot be interpreted
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaError {
    /// Payload too short for its meta type
    #[error("Meta type {meta_type:#04X} needs at least {expected} bytes, found {found}")]
    Length {
        /// The meta type byte
        meta_type: u8,
        /// Minimum payload length
        expected: usize,
        /// Actual payload length
        found: usize,
    },
    /// Set Tempo of zero microseconds per quarter note
    #[error("Tempo of zero microseconds per quarter note")]
    ZeroTempo,
    /// Set Tempo payload longer than 4 bytes
    #[error("Tempo payload of {0} bytes does not fit in 32 bits")]
    TempoWidth(usize),
    /// The denominator exponent does not fit a u32
    #[error("Time signature denominator 2^{0} is out of range")]
    Denominator(u8),
}

/// Errors from [`SmpteOffset::parse`](crate::file::meta::SmpteOffset::parse)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SmpteError {
    /// Frame type bits of an offset
    #[error("Invalid offset frame type: {0}")]
    TrackFrame(u8),
    /// Offset payload length
    #[error("SMPTE offset must be 5 bytes, found {0}")]
    Length(usize),
    /// Hours above 23
    #[error("Invalid hour offset: {0}")]
    HourOffset(u8),
    /// Minutes above 59
    #[error("Invalid minute offset: {0}")]
    MinuteOffset(u8),
    /// Seconds above 59
    #[error("Invalid second offset: {0}")]
    SecondOffset(u8),
    /// Subframes above 99
    #[error("Invalid subframe offset: {0}")]
    Subframe(u8),
}
