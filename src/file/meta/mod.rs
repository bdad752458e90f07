#![doc = r#"
Meta events: file-level annotations that are never sent to a device.

A meta event is `FF <type> <len> <data>`, where `<len>` is a variable-length
quantity. The type byte selects how `<data>` is interpreted:

| type | event |
|---|---|
| `00` | Sequence number |
| `01`-`07` | Text, copyright, track name, instrument name, lyric, marker, cue point |
| `20` | Channel prefix |
| `2F` | End of track |
| `51` | Set tempo |
| `54` | SMPTE offset |
| `58` | Time signature |
| `59` | Key signature |
| `7F` | Sequencer specific |

Any other type is kept as [`MetaMessage::Unknown`]. A Set Tempo payload that
is zero or wider than 32 bits is kept as [`MetaMessage::InvalidTempo`].
"#]

mod key_signature;
pub use key_signature::*;

mod smpte_offset;
pub use smpte_offset::*;

mod tempo;
pub use tempo::*;

mod time_signature;
pub use time_signature::*;

use alloc::{borrow::Cow, string::String};
use num_enum::TryFromPrimitive;

use crate::{
    MetaError,
    reader::{ReadResult, Reader, inv_data},
};

/// Status byte introducing a meta event
pub const META_EVENT: u8 = 0xFF;

/// The known meta event type bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum MetaType {
    SequenceNumber = 0x00,
    Text = 0x01,
    Copyright = 0x02,
    TrackName = 0x03,
    InstrumentName = 0x04,
    Lyric = 0x05,
    Marker = 0x06,
    CuePoint = 0x07,
    ChannelPrefix = 0x20,
    EndOfTrack = 0x2F,
    Tempo = 0x51,
    SmpteOffset = 0x54,
    TimeSignature = 0x58,
    KeySignature = 0x59,
    SequencerSpecific = 0x7F,
}

/// The text of a text-like meta event, as stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Text<'a>(&'a [u8]);

impl<'a> Text<'a> {
    /// Wrap raw bytes
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self(bytes)
    }
    /// The raw bytes
    pub const fn bytes(&self) -> &'a [u8] {
        self.0
    }
    /// Decode the text. Invalid sequences become `U+FFFD`.
    pub fn as_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.0)
    }
}

#[doc = r#"
A decoded meta event
"#]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetaMessage<'a> {
    /// `FF 00`: identifies a sequence or pattern
    SequenceNumber(u64),
    /// `FF 01`: any text
    Text(Text<'a>),
    /// `FF 02`: copyright notice
    Copyright(Text<'a>),
    /// `FF 03`: sequence or track name
    TrackName(Text<'a>),
    /// `FF 04`: instrument name
    InstrumentName(Text<'a>),
    /// `FF 05`: a lyric syllable
    Lyric(Text<'a>),
    /// `FF 06`: rehearsal mark or section name
    Marker(Text<'a>),
    /// `FF 07`: cue point
    CuePoint(Text<'a>),
    /// `FF 20`: channel the following non-channel events belong to
    ChannelPrefix(u64),
    /// `FF 2F`: end of track, with its (normally empty) payload
    EndOfTrack(&'a [u8]),
    /// `FF 51`: tempo change
    Tempo(Tempo),
    /// `FF 51` with a payload that is not a usable tempo, kept raw
    InvalidTempo(&'a [u8]),
    /// `FF 54`: raw SMPTE offset bytes. See [`SmpteOffset::parse`].
    SmpteOffset(&'a [u8]),
    /// `FF 58`: time signature
    TimeSignature(TimeSignature),
    /// `FF 59`: key signature
    KeySignature(KeySignature),
    /// `FF 7F`: sequencer specific data
    SequencerSpecific(&'a [u8]),
    /// A type byte this crate does not know
    Unknown {
        /// The type byte
        meta_type: u8,
        /// The raw payload
        data: &'a [u8],
    },
}

impl<'a> MetaMessage<'a> {
    /// Decode a meta event whose `FF` status byte was already consumed.
    pub(crate) fn read(reader: &mut Reader<'a>) -> ReadResult<Self> {
        let type_byte = reader.read_u8()?;
        let data = reader.read_varlen_slice()?;

        let Ok(meta_type) = MetaType::try_from(type_byte) else {
            return Ok(Self::Unknown {
                meta_type: type_byte,
                data,
            });
        };

        let text = Text::new(data);
        let message = match meta_type {
            MetaType::SequenceNumber => Self::SequenceNumber(be_value(data)),
            MetaType::Text => Self::Text(text),
            MetaType::Copyright => Self::Copyright(text),
            MetaType::TrackName => Self::TrackName(text),
            MetaType::InstrumentName => Self::InstrumentName(text),
            MetaType::Lyric => Self::Lyric(text),
            MetaType::Marker => Self::Marker(text),
            MetaType::CuePoint => Self::CuePoint(text),
            MetaType::ChannelPrefix => Self::ChannelPrefix(be_value(data)),
            MetaType::EndOfTrack => Self::EndOfTrack(data),
            MetaType::Tempo => match Tempo::from_bytes(data) {
                Ok(tempo) => Self::Tempo(tempo),
                Err(_) => Self::InvalidTempo(data),
            },
            MetaType::SmpteOffset => Self::SmpteOffset(data),
            MetaType::TimeSignature => Self::TimeSignature(
                TimeSignature::from_bytes(data).map_err(|e| inv_data(reader, e))?,
            ),
            MetaType::KeySignature => Self::KeySignature(
                KeySignature::from_bytes(data).map_err(|e| inv_data(reader, e))?,
            ),
            MetaType::SequencerSpecific => Self::SequencerSpecific(data),
        };
        Ok(message)
    }

    /// The type byte of this event
    pub fn meta_type(&self) -> u8 {
        let known = match self {
            Self::SequenceNumber(_) => MetaType::SequenceNumber,
            Self::Text(_) => MetaType::Text,
            Self::Copyright(_) => MetaType::Copyright,
            Self::TrackName(_) => MetaType::TrackName,
            Self::InstrumentName(_) => MetaType::InstrumentName,
            Self::Lyric(_) => MetaType::Lyric,
            Self::Marker(_) => MetaType::Marker,
            Self::CuePoint(_) => MetaType::CuePoint,
            Self::ChannelPrefix(_) => MetaType::ChannelPrefix,
            Self::EndOfTrack(_) => MetaType::EndOfTrack,
            Self::Tempo(_) | Self::InvalidTempo(_) => MetaType::Tempo,
            Self::SmpteOffset(_) => MetaType::SmpteOffset,
            Self::TimeSignature(_) => MetaType::TimeSignature,
            Self::KeySignature(_) => MetaType::KeySignature,
            Self::SequencerSpecific(_) => MetaType::SequencerSpecific,
            Self::Unknown { meta_type, .. } => return *meta_type,
        };
        known as u8
    }

    /// The text of text-like events
    pub const fn text(&self) -> Option<&Text<'a>> {
        match self {
            Self::Text(t)
            | Self::Copyright(t)
            | Self::TrackName(t)
            | Self::InstrumentName(t)
            | Self::Lyric(t)
            | Self::Marker(t)
            | Self::CuePoint(t) => Some(t),
            _ => None,
        }
    }
}

/// Big-endian unsigned integer of any length. Bytes past the eighth shift out.
fn be_value(bytes: &[u8]) -> u64 {
    bytes.iter().fold(0, |acc, b| (acc << 8) | u64::from(*b))
}

pub(crate) const fn require_len(
    meta_type: MetaType,
    data: &[u8],
    expected: usize,
) -> Result<(), MetaError> {
    if data.len() < expected {
        return Err(MetaError::Length {
            meta_type: meta_type as u8,
            expected,
            found: data.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
fn decode(bytes: &[u8]) -> MetaMessage<'_> {
    let mut reader = Reader::from_byte_slice(bytes);
    let msg = MetaMessage::read(&mut reader).unwrap();
    assert!(reader.is_empty());
    msg
}

#[test]
fn text_events() {
    let msg = decode(b"\x03\x05Piano");
    assert_eq!(msg, MetaMessage::TrackName(Text::new(b"Piano")));
    assert_eq!(msg.text().unwrap().as_str(), "Piano");
    assert_eq!(msg.meta_type(), 0x03);

    let msg = decode(b"\x07\x03cue");
    assert!(matches!(msg, MetaMessage::CuePoint(_)));
}

#[test]
fn sequence_number_and_channel_prefix() {
    assert_eq!(decode(&[0x00, 0x02, 0x01, 0x02]), MetaMessage::SequenceNumber(0x0102));
    assert_eq!(decode(&[0x20, 0x01, 0x09]), MetaMessage::ChannelPrefix(9));
}

#[test]
fn end_of_track() {
    assert_eq!(decode(&[0x2F, 0x00]), MetaMessage::EndOfTrack(&[]));
}

#[test]
fn unknown_type_keeps_payload() {
    let msg = decode(&[0x4B, 0x02, 0xAA, 0xBB]);
    assert_eq!(
        msg,
        MetaMessage::Unknown {
            meta_type: 0x4B,
            data: &[0xAA, 0xBB]
        }
    );
    assert_eq!(msg.meta_type(), 0x4B);
}

#[test]
fn truncated_payload_is_eof() {
    let mut reader = Reader::from_byte_slice(&[0x01, 0x05, b'a', b'b']);
    assert!(MetaMessage::read(&mut reader).unwrap_err().is_eof());
}

#[test]
fn unusable_tempo_is_kept_raw() {
    let msg = decode(&[0x51, 0x03, 0x00, 0x00, 0x00]);
    assert_eq!(msg, MetaMessage::InvalidTempo(&[0, 0, 0]));
    assert_eq!(msg.meta_type(), 0x51);

    let msg = decode(&[0x51, 0x03, 0x07, 0xA1, 0x20]);
    assert!(matches!(msg, MetaMessage::Tempo(t) if t.micros_per_quarter_note() == 500_000));
}
