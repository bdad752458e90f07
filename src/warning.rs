use alloc::vec::Vec;

use crate::{MetaError, message::Channel, pitch::Pitch};
use thiserror::Error;

#[doc = r#"
A semantic anomaly found while decoding.

Warnings never interrupt a parse. They are collected, in the order
they were found, on [`MidiFile::warnings`](crate::file::MidiFile::warnings).
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// A Note-On was still sounding when its track ended.
    #[error("Track {track}: note {pitch} on channel {channel} started at tick {start_ticks} was never released")]
    UnterminatedNote {
        /// Zero-based track index
        track: usize,
        /// Channel of the Note-On
        channel: Channel,
        /// Pitch of the Note-On
        pitch: Pitch,
        /// Tick the note started on
        start_ticks: u64,
    },
    /// A Note-Off (or zero-velocity Note-On) released a pitch that was not sounding.
    #[error("Track {track}: note off for {pitch} on channel {channel} at tick {ticks} has no matching note on")]
    UnmatchedNoteOff {
        /// Zero-based track index
        track: usize,
        /// Channel of the Note-Off
        channel: Channel,
        /// Pitch of the Note-Off
        pitch: Pitch,
        /// Tick of the Note-Off
        ticks: u64,
    },
    /// The header declares zero ticks per quarter note or per frame.
    /// Beats are then counted in raw ticks.
    #[error("Header division {division} has zero ticks, counting beats in ticks")]
    ZeroDivision {
        /// The raw division field
        division: i16,
    },
    /// A Set Tempo payload that is zero or too wide. The event was kept raw
    /// and left out of the tempo map.
    #[error("Track {track}: unusable tempo at tick {ticks}: {reason}")]
    InvalidTempo {
        /// Zero-based track index
        track: usize,
        /// Tick of the event
        ticks: u64,
        /// Why the payload was rejected
        reason: MetaError,
    },
    /// A meta event type outside the known table. Its payload was kept as raw bytes.
    #[error("Track {track}: unknown meta type {meta_type:#04X} at tick {ticks}")]
    UnknownMetaType {
        /// Zero-based track index
        track: usize,
        /// The unrecognized type byte
        meta_type: u8,
        /// Tick of the event
        ticks: u64,
    },
}

impl ParseWarning {
    /// The track the warning was raised in, `None` for the header.
    pub const fn track(&self) -> Option<usize> {
        match self {
            Self::UnterminatedNote { track, .. }
            | Self::UnmatchedNoteOff { track, .. }
            | Self::InvalidTempo { track, .. }
            | Self::UnknownMetaType { track, .. } => Some(*track),
            Self::ZeroDivision { .. } => None,
        }
    }

    pub(crate) fn report(self, warnings: &mut Vec<Self>) {
        tracing::warn!(track = ?self.track(), "{self}");
        warnings.push(self);
    }
}
