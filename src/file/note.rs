use crate::{Pitch, UMicros, message::Channel};

#[doc = r#"
A sounding note, derived from a Note-On and the Note-Off that released it.

Notes are not wire events. They are produced per track by the
[`NoteResolver`](super::NoteResolver), with times in both ticks and beats
(ticks divided by the header's ticks per quarter note).
"#]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    pub(crate) pitch: Pitch,
    pub(crate) velocity: u8,
    pub(crate) channel: Channel,
    pub(crate) start_ticks: u64,
    pub(crate) end_ticks: u64,
    pub(crate) absolute_start_time: f64,
    pub(crate) duration: f64,
}

impl Note {
    /// The key played
    pub const fn pitch(&self) -> Pitch {
        self.pitch
    }
    /// The Note-On velocity
    pub const fn velocity(&self) -> u8 {
        self.velocity
    }
    /// The channel of the Note-On
    pub const fn channel(&self) -> Channel {
        self.channel
    }
    /// Tick of the Note-On
    pub const fn start_ticks(&self) -> u64 {
        self.start_ticks
    }
    /// Tick of the release
    pub const fn end_ticks(&self) -> u64 {
        self.end_ticks
    }
    /// Start time in beats
    pub const fn absolute_start_time(&self) -> f64 {
        self.absolute_start_time
    }
    /// Length in beats
    pub const fn duration(&self) -> f64 {
        self.duration
    }
}

/// A [`Note`] placed in real time using the file's tempo map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimedNote {
    /// The note
    pub note: Note,
    /// When the note starts
    pub start: UMicros,
    /// When the note is released
    pub end: UMicros,
}

impl TimedNote {
    /// How long the note sounds
    pub fn length(&self) -> UMicros {
        self.end.saturating_sub(self.start)
    }
}
