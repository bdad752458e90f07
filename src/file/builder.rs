use alloc::vec::Vec;

use super::{Header, MidiFile, TempoMap, Track};
use crate::{
    ParseConfig, ParseWarning,
    reader::{ReadResult, Reader},
};

/// Collects the tracks of a file after its header has been read.
///
/// Tempo changes are gathered into a [`TempoMap`] as each track completes;
/// the header's tempo is settled only in [`MidiFileBuilder::build`].
#[derive(Debug)]
pub struct MidiFileBuilder<'a> {
    header: Header,
    config: ParseConfig,
    tracks: Vec<Track<'a>>,
    tempo_map: TempoMap,
    warnings: Vec<ParseWarning>,
}

impl<'a> MidiFileBuilder<'a> {
    /// Start a file from its header
    pub fn new(header: Header, config: ParseConfig) -> Self {
        let mut warnings = Vec::new();
        if header.timing().is_zero() {
            ParseWarning::ZeroDivision {
                division: header.division(),
            }
            .report(&mut warnings);
        }
        Self {
            header,
            config,
            tracks: Vec::with_capacity(usize::from(header.track_count())),
            tempo_map: TempoMap::default(),
            warnings,
        }
    }

    /// Read the next track chunk from `reader`.
    pub fn read_track(&mut self, reader: &mut Reader<'a>) -> ReadResult<()> {
        let index = self.tracks.len();
        let track = Track::read(
            reader,
            index,
            *self.header.timing(),
            &self.config,
            &mut self.warnings,
        )?;
        self.tempo_map.record_track(index, &track);
        self.tracks.push(track);
        Ok(())
    }

    /// Finish the file.
    pub fn build(mut self) -> MidiFile<'a> {
        self.tempo_map.sort_timeline();
        self.header.set_tempo(self.tempo_map.last());
        MidiFile {
            header: self.header,
            tracks: self.tracks,
            tempo_map: self.tempo_map,
            warnings: self.warnings,
        }
    }
}
