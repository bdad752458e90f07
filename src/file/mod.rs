#![doc = r#"
Rusty representation of a [`MidiFile`]
"#]

mod builder;
pub use builder::*;

mod format;
pub use format::*;

mod header;
pub use header::*;

pub mod meta;
pub use meta::Tempo;

mod note;
pub use note::*;

mod resolver;
pub use resolver::*;

mod tempo_map;
pub use tempo_map::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use crate::{
    ParseConfig, ParseWarning,
    reader::{ReadResult, Reader},
};
use alloc::vec::Vec;

#[doc = r#"
A decoded Standard MIDI File.

Holds the header, the tracks in file order, the tempo map and every
warning raised while decoding. Event payloads borrow from the parsed bytes.
"#]
#[derive(Clone, Debug, PartialEq)]
pub struct MidiFile<'a> {
    header: Header,
    tracks: Vec<Track<'a>>,
    tempo_map: TempoMap,
    warnings: Vec<ParseWarning>,
}

impl<'a> MidiFile<'a> {
    /// Parse a set of bytes with the default [`ParseConfig`]
    pub fn parse(bytes: &'a [u8]) -> ReadResult<Self> {
        Self::parse_with(bytes, ParseConfig::default())
    }

    /// Parse a set of bytes.
    ///
    /// Reads the header, then exactly as many track chunks as it declares.
    /// Bytes after the last track are ignored. Any structural error aborts
    /// the whole parse.
    pub fn parse_with(bytes: &'a [u8], config: ParseConfig) -> ReadResult<Self> {
        let mut reader = Reader::from_byte_slice(bytes);
        let header = Header::read(&mut reader)?;

        let mut builder = MidiFileBuilder::new(header, config);
        for _ in 0..header.track_count() {
            builder.read_track(&mut reader)?;
        }
        if !reader.is_empty() {
            tracing::debug!(
                remaining = reader.remaining(),
                "ignoring bytes after the last track"
            );
        }

        let file = builder.build();
        tracing::debug!(
            tracks = file.tracks.len(),
            warnings = file.warnings.len(),
            "parsed midi file"
        );
        Ok(file)
    }

    /// Returns header info
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns the header timing
    pub fn timing(&self) -> &Timing {
        self.header.timing()
    }

    /// Returns the format type for the file.
    pub fn format_type(&self) -> FormatType {
        self.header.format()
    }

    /// Returns the track list
    pub fn tracks(&self) -> &[Track<'a>] {
        &self.tracks
    }

    /// Executes the provided function for all the tracks in the file.
    pub fn for_each_track<F>(&self, func: F)
    where
        F: FnMut(&Track<'a>),
    {
        self.tracks.iter().for_each(func)
    }

    /// Every tempo change in the file
    pub fn tempo_map(&self) -> &TempoMap {
        &self.tempo_map
    }

    /// Non-fatal anomalies, in the order they were found
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// The notes of a track placed in real time with the tempo map.
    ///
    /// Returns `None` if there is no track at `index`.
    pub fn note_times(&self, index: usize) -> Option<impl Iterator<Item = TimedNote> + '_> {
        let track = self.tracks.get(index)?;
        let timing = self.timing();
        Some(track.notes().iter().map(move |note| TimedNote {
            note: *note,
            start: self.tempo_map.micros_at(note.start_ticks(), timing),
            end: self.tempo_map.micros_at(note.end_ticks(), timing),
        }))
    }
}
