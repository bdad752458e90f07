use crate::{
    ChunkError,
    file::{FormatType, Tempo, Timing},
    reader::{ReadResult, Reader, ReaderError},
};

#[doc = r#"
The header chunk of a MIDI file.

```text
"MThd" | length = 6 | format | track count | division
  4B   |     4B     |   2B   |     2B      |    2B
```

The tempo is not part of the chunk: it is the last Set Tempo event found in
any track, filled in once every track has been read.
"#]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    format: FormatType,
    track_count: u16,
    timing: Timing,
    tempo: Option<Tempo>,
}

impl Header {
    /// `MThd`
    pub const CHUNK_ID: [u8; 4] = *b"MThd";
    /// The only valid header chunk length
    pub const CHUNK_LENGTH: u32 = 6;

    /// Create a header with no tempo
    pub const fn new(format: FormatType, track_count: u16, timing: Timing) -> Self {
        Self {
            format,
            track_count,
            timing,
            tempo: None,
        }
    }

    /// Read the 14 header bytes.
    ///
    /// Exactly 14 bytes are consumed; the length field is checked, never used
    /// to skip.
    pub fn read(reader: &mut Reader<'_>) -> ReadResult<Self> {
        let start = reader.buffer_position();
        let chunk_id = reader.read_exact_size::<4>()?;
        if chunk_id != Self::CHUNK_ID {
            return Err(ReaderError::invalid_format(
                start,
                ChunkError::NotHeader(chunk_id).into(),
            ));
        }

        let length = reader.read_u32_be()?;
        if length != Self::CHUNK_LENGTH {
            return Err(ReaderError::invalid_format(
                start + 4,
                ChunkError::HeaderLength(length).into(),
            ));
        }

        let format = FormatType::from(reader.read_u16_be()?);
        let track_count = reader.read_u16_be()?;
        let division = reader.read_i16_be()?;
        let timing = Timing::from_division(division);

        tracing::debug!(?format, track_count, division, "read header chunk");

        Ok(Self::new(format, track_count, timing))
    }

    pub(crate) fn set_tempo(&mut self, tempo: Option<Tempo>) {
        self.tempo = tempo;
    }

    /// The file format
    pub const fn format(&self) -> FormatType {
        self.format
    }

    /// The number of track chunks the header declares
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// Get the timing props
    pub const fn timing(&self) -> &Timing {
        &self.timing
    }

    /// The raw signed division
    pub const fn division(&self) -> i16 {
        self.timing.division()
    }

    /// The last tempo seen in the file, if any
    pub const fn tempo(&self) -> Option<Tempo> {
        self.tempo
    }

    /// The last tempo seen in the file, in beats per minute
    pub fn bpm(&self) -> Option<f64> {
        self.tempo.map(|t| t.bpm())
    }
}

#[test]
fn read_header_chunk() {
    let bytes = [
        b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 1, 0, 2, 0x01, 0xE0, 0xAA,
    ];
    let mut reader = Reader::from_byte_slice(&bytes);
    let header = Header::read(&mut reader).unwrap();

    assert_eq!(header.format(), FormatType::Simultaneous);
    assert_eq!(header.track_count(), 2);
    assert_eq!(header.timing().ticks_per_quarter_note(), Some(480));
    assert_eq!(header.tempo(), None);
    assert_eq!(reader.buffer_position(), 14);
}

#[test]
fn wrong_header_id() {
    let bytes = [b'M', b'T', b'r', b'k', 0, 0, 0, 6, 0, 1, 0, 2, 0x01, 0xE0];
    let err = Header::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
    assert!(err.is_invalid_format());
    assert_eq!(err.position(), 0);
}

#[test]
fn wrong_header_length() {
    let bytes = [b'M', b'T', b'h', b'd', 0, 0, 0, 8, 0, 1, 0, 2, 0x01, 0xE0, 0, 0];
    let err = Header::read(&mut Reader::from_byte_slice(&bytes)).unwrap_err();
    assert_eq!(
        err.parse_error(),
        Some(&crate::ParseError::Chunk(ChunkError::HeaderLength(8)))
    );
}
