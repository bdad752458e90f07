use alloc::vec::Vec;

use crate::{
    ChunkError, EventError, ParseConfig, ParseWarning,
    file::{
        Note, NoteResolver, Timing,
        meta::{META_EVENT, MetaMessage, Tempo, Text},
    },
    message::{ChannelVoiceMessage, SYSEX_CONTINUATION, SYSEX_START, SysExMessage},
    reader::{ReadResult, Reader, ReaderError},
};

#[doc = r#"
The body of a track event
"#]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackMessage<'a> {
    /// A channel voice message
    ChannelVoice(ChannelVoiceMessage),
    /// A meta event
    Meta(MetaMessage<'a>),
    /// A system exclusive packet
    SysEx(SysExMessage<'a>),
}

#[doc = r#"
One event of a track, with its delta time and the running tick total.
"#]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackEvent<'a> {
    delta_ticks: u64,
    accumulated_ticks: u64,
    message: TrackMessage<'a>,
}

/// The last channel status byte, when running status is accepted.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RunningStatus {
    enabled: bool,
    last: Option<u8>,
}

impl RunningStatus {
    pub(crate) const fn new(enabled: bool) -> Self {
        Self {
            enabled,
            last: None,
        }
    }
}

impl<'a> TrackEvent<'a> {
    /// Create a new track event
    pub const fn new(delta_ticks: u64, accumulated_ticks: u64, message: TrackMessage<'a>) -> Self {
        Self {
            delta_ticks,
            accumulated_ticks,
            message,
        }
    }

    /// Decode one event: a delta time, a status byte, then its payload.
    ///
    /// `ticks` is the running total before this event.
    pub(crate) fn read(
        reader: &mut Reader<'a>,
        ticks: u64,
        running: &mut RunningStatus,
    ) -> ReadResult<Self> {
        let delta_ticks = reader.read_varlen()?;

        let status_at = reader.buffer_position();
        let byte = reader.peek_u8()?;
        let status = if byte < 0x80 {
            match running.last {
                Some(status) if running.enabled => status,
                _ => {
                    return Err(ReaderError::invalid_format(
                        status_at,
                        EventError::MissingStatus(byte).into(),
                    ));
                }
            }
        } else {
            reader.read_u8()?
        };

        let message = match status {
            META_EVENT => {
                running.last = None;
                TrackMessage::Meta(MetaMessage::read(reader)?)
            }
            SYSEX_START | SYSEX_CONTINUATION => {
                running.last = None;
                TrackMessage::SysEx(SysExMessage::read(status, reader)?)
            }
            0x80..=0xEF => {
                running.last = Some(status);
                TrackMessage::ChannelVoice(ChannelVoiceMessage::read(status, reader)?)
            }
            other => {
                return Err(ReaderError::invalid_format(
                    status_at,
                    EventError::InvalidStatus(other).into(),
                ));
            }
        };

        Ok(Self {
            delta_ticks,
            accumulated_ticks: ticks.saturating_add(delta_ticks),
            message,
        })
    }

    /// Ticks since the previous event of the track
    pub const fn delta_ticks(&self) -> u64 {
        self.delta_ticks
    }

    /// Ticks since the start of the track
    pub const fn accumulated_ticks(&self) -> u64 {
        self.accumulated_ticks
    }

    /// The event body
    pub const fn message(&self) -> &TrackMessage<'a> {
        &self.message
    }
}

#[doc = r#"
A decoded track chunk: its events, in file order, and the notes resolved
from them.
"#]
#[derive(Debug, Clone, PartialEq)]
pub struct Track<'a> {
    byte_length: u32,
    events: Vec<TrackEvent<'a>>,
    notes: Vec<Note>,
}

impl<'a> Track<'a> {
    /// `MTrk`
    pub const CHUNK_ID: [u8; 4] = *b"MTrk";

    /// Read one track chunk.
    ///
    /// Events are decoded from exactly `length` bytes. An event running past
    /// that boundary, or a length running past the end of the input, is an
    /// unexpected end of data. End of Track events do not stop decoding.
    pub(crate) fn read(
        reader: &mut Reader<'a>,
        index: usize,
        timing: Timing,
        config: &ParseConfig,
        warnings: &mut Vec<ParseWarning>,
    ) -> ReadResult<Self> {
        let start = reader.buffer_position();
        let chunk_id = reader.read_exact_size::<4>()?;
        if chunk_id != Self::CHUNK_ID {
            return Err(ReaderError::invalid_format(
                start,
                ChunkError::NotTrack(chunk_id).into(),
            ));
        }
        let byte_length = reader.read_u32_be()?;
        let Ok(len) = usize::try_from(byte_length) else {
            return Err(ReaderError::eof(reader.buffer_position()));
        };
        let mut body = reader.sub_reader(len)?;
        tracing::debug!(track = index, byte_length, offset = start, "reading track chunk");

        let mut running = RunningStatus::new(config.allows_running_status());
        let mut resolver = NoteResolver::new(index, timing, config);
        let mut events = Vec::new();
        let mut ticks = 0;

        while !body.is_empty() {
            let event = TrackEvent::read(&mut body, ticks, &mut running)?;
            ticks = event.accumulated_ticks();
            tracing::trace!(track = index, ticks, message = ?event.message(), "event");

            match event.message() {
                TrackMessage::ChannelVoice(cv) => resolver.handle(cv, ticks, warnings),
                TrackMessage::Meta(MetaMessage::InvalidTempo(data)) => {
                    if let Err(reason) = Tempo::from_bytes(data) {
                        ParseWarning::InvalidTempo {
                            track: index,
                            ticks,
                            reason,
                        }
                        .report(warnings)
                    }
                }
                TrackMessage::Meta(MetaMessage::Unknown { meta_type, .. }) => {
                    ParseWarning::UnknownMetaType {
                        track: index,
                        meta_type: *meta_type,
                        ticks,
                    }
                    .report(warnings)
                }
                _ => {}
            }
            events.push(event);
        }

        let notes = resolver.finish(ticks, warnings);
        Ok(Self {
            byte_length,
            events,
            notes,
        })
    }

    /// The declared length of the track body in bytes
    pub const fn byte_length(&self) -> u32 {
        self.byte_length
    }

    /// The events of the track, in file order
    pub fn events(&self) -> &[TrackEvent<'a>] {
        &self.events
    }

    /// Notes resolved from the track, ordered by start tick
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Tick of the last event
    pub fn length_ticks(&self) -> u64 {
        self.events.last().map_or(0, TrackEvent::accumulated_ticks)
    }

    /// The first track or sequence name
    pub fn name(&self) -> Option<Text<'a>> {
        self.events.iter().find_map(|e| match e.message {
            TrackMessage::Meta(MetaMessage::TrackName(name)) => Some(name),
            _ => None,
        })
    }

    /// Tempo changes in file order, with their absolute ticks
    pub fn tempo_changes(&self) -> impl Iterator<Item = (u64, Tempo)> + '_ {
        self.events.iter().filter_map(|e| match e.message {
            TrackMessage::Meta(MetaMessage::Tempo(tempo)) => Some((e.accumulated_ticks, tempo)),
            _ => None,
        })
    }
}

#[cfg(test)]
fn read_body(body: &[u8], config: ParseConfig) -> (ReadResult<Track<'_>>, Vec<ParseWarning>) {
    let mut bytes = alloc::vec::Vec::from(*b"MTrk");
    bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
    bytes.extend_from_slice(body);
    let bytes = alloc::boxed::Box::leak(bytes.into_boxed_slice());

    let mut warnings = Vec::new();
    let timing = Timing::from_division(96);
    let track = Track::read(
        &mut Reader::from_byte_slice(bytes),
        0,
        timing,
        &config,
        &mut warnings,
    );
    (track, warnings)
}

#[test]
fn accumulates_ticks() {
    let (track, warnings) = read_body(
        &[
            0x00, 0x90, 60, 100, //
            0x60, 0x80, 60, 0, //
            0x81, 0x00, 0xFF, 0x2F, 0x00,
        ],
        ParseConfig::default(),
    );
    let track = track.unwrap();
    let ticks: Vec<u64> = track
        .events()
        .iter()
        .map(TrackEvent::accumulated_ticks)
        .collect();
    assert_eq!(ticks, [0, 96, 224]);
    assert_eq!(track.events()[2].delta_ticks(), 128);
    assert_eq!(
        track.events()[1],
        TrackEvent::new(
            0x60,
            96,
            TrackMessage::ChannelVoice(ChannelVoiceMessage::new(
                crate::message::Channel::One,
                crate::message::VoiceEvent::NoteOff {
                    pitch: crate::Pitch::MIDDLE_C,
                    velocity: 0
                },
            ))
        )
    );
    assert_eq!(track.length_ticks(), 224);
    assert_eq!(track.notes().len(), 1);
    assert!(warnings.is_empty());
}

#[test]
fn events_after_end_of_track_are_decoded() {
    let (track, _) = read_body(
        &[0x00, 0xFF, 0x2F, 0x00, 0x00, 0xC0, 0x05],
        ParseConfig::default(),
    );
    assert_eq!(track.unwrap().events().len(), 2);
}

#[test]
fn running_status_rejected_by_default() {
    let body = [0x00, 0x90, 60, 100, 0x10, 64, 100];
    let (track, _) = read_body(&body, ParseConfig::default());
    let err = track.unwrap_err();
    assert_eq!(
        err.parse_error(),
        Some(&crate::ParseError::Event(EventError::MissingStatus(64)))
    );
    assert_eq!(err.position(), 8 + 5);
}

#[test]
fn running_status_when_enabled() {
    let body = [
        0x00, 0x90, 60, 100, //
        0x10, 64, 100, //
        0x10, 60, 0, //
        0x00, 0xFF, 0x01, 0x00, //
        0x10, 64, 0,
    ];
    let (track, _) = read_body(&body, ParseConfig::default().running_status(true));
    let err = track.unwrap_err();
    // meta events cancel running status
    assert_eq!(
        err.parse_error(),
        Some(&crate::ParseError::Event(EventError::MissingStatus(64)))
    );

    let (track, warnings) = read_body(&body[..14], ParseConfig::default().running_status(true));
    let track = track.unwrap();
    assert_eq!(track.events().len(), 4);
    assert_eq!(track.notes().len(), 1);
    assert_eq!(warnings.len(), 1);
}

#[test]
fn system_common_status_rejected() {
    let (track, _) = read_body(&[0x00, 0xF2, 0x00, 0x00], ParseConfig::default());
    assert_eq!(
        track.unwrap_err().parse_error(),
        Some(&crate::ParseError::Event(EventError::InvalidStatus(0xF2)))
    );
}
