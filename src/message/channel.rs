use core::fmt;

use num_enum::{FromPrimitive, IntoPrimitive, TryFromPrimitive};

use crate::{
    EventError, Pitch,
    reader::{ReadResult, Reader, inv_data},
};

/// One of the sixteen MIDI channels.
///
/// The wire value is zero-based: [`Channel::One`] is `0`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, IntoPrimitive,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Channel {
    #[num_enum(default)]
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// Channel from the low nibble of a status byte
    pub fn from_status(status: u8) -> Self {
        Self::from_primitive(status & 0x0F)
    }
    /// Zero-based channel number
    pub fn index(self) -> u8 {
        self.into()
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index() + 1)
    }
}

/// The high nibble of a channel voice status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VoiceKind {
    /// `0x8n`
    NoteOff = 0x8,
    /// `0x9n`
    NoteOn = 0x9,
    /// `0xAn`, polyphonic key pressure
    Aftertouch = 0xA,
    /// `0xBn`
    ControlChange = 0xB,
    /// `0xCn`
    ProgramChange = 0xC,
    /// `0xDn`
    ChannelPressure = 0xD,
    /// `0xEn`
    PitchBend = 0xE,
}

impl VoiceKind {
    /// Number of data bytes following the status byte
    pub const fn data_len(self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 1,
            _ => 2,
        }
    }
}

#[doc = r#"
The payload of a channel voice message
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceEvent {
    /// Release a key
    NoteOff {
        /// The key released
        pitch: Pitch,
        /// Release velocity
        velocity: u8,
    },
    /// Press a key. A velocity of zero releases it instead.
    NoteOn {
        /// The key pressed
        pitch: Pitch,
        /// Strike velocity
        velocity: u8,
    },
    /// Pressure change on a held key
    Aftertouch {
        /// The held key
        pitch: Pitch,
        /// New pressure
        pressure: u8,
    },
    /// Controller value change
    ControlChange {
        /// Controller number
        controller: u8,
        /// New value
        value: u8,
    },
    /// Instrument change
    ProgramChange {
        /// New program
        program: u8,
    },
    /// Pressure change for the whole channel
    ChannelPressure {
        /// New pressure
        pressure: u8,
    },
    /// Pitch wheel change
    PitchBend {
        /// Least significant 7 bits
        lsb: u8,
        /// Most significant 7 bits
        msb: u8,
    },
}

impl VoiceEvent {
    /// The kind nibble of this event
    pub const fn kind(&self) -> VoiceKind {
        match self {
            Self::NoteOff { .. } => VoiceKind::NoteOff,
            Self::NoteOn { .. } => VoiceKind::NoteOn,
            Self::Aftertouch { .. } => VoiceKind::Aftertouch,
            Self::ControlChange { .. } => VoiceKind::ControlChange,
            Self::ProgramChange { .. } => VoiceKind::ProgramChange,
            Self::ChannelPressure { .. } => VoiceKind::ChannelPressure,
            Self::PitchBend { .. } => VoiceKind::PitchBend,
        }
    }
}

#[doc = r#"
A channel voice message: a [`VoiceEvent`] addressed to a [`Channel`]
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelVoiceMessage {
    channel: Channel,
    event: VoiceEvent,
}

impl ChannelVoiceMessage {
    /// Create a new channel voice message
    pub const fn new(channel: Channel, event: VoiceEvent) -> Self {
        Self { channel, event }
    }

    /// Decode the data bytes that follow `status`.
    ///
    /// `status` must already have been consumed from `reader`.
    pub(crate) fn read(status: u8, reader: &mut Reader<'_>) -> ReadResult<Self> {
        let kind = VoiceKind::try_from(status >> 4)
            .map_err(|_| inv_data(reader, EventError::InvalidStatus(status)))?;
        let channel = Channel::from_status(status);

        let bytes = reader.read_exact(kind.data_len())?;
        if let Some(&bad) = bytes.iter().find(|b| **b > 0x7F) {
            return Err(inv_data(reader, EventError::InvalidDataByte(bad)));
        }
        let pitch = || Pitch::new(bytes[0]).map_err(|e| inv_data(reader, e));

        let event = match kind {
            VoiceKind::NoteOff => VoiceEvent::NoteOff {
                pitch: pitch()?,
                velocity: bytes[1],
            },
            VoiceKind::NoteOn => VoiceEvent::NoteOn {
                pitch: pitch()?,
                velocity: bytes[1],
            },
            VoiceKind::Aftertouch => VoiceEvent::Aftertouch {
                pitch: pitch()?,
                pressure: bytes[1],
            },
            VoiceKind::ControlChange => VoiceEvent::ControlChange {
                controller: bytes[0],
                value: bytes[1],
            },
            VoiceKind::ProgramChange => VoiceEvent::ProgramChange { program: bytes[0] },
            VoiceKind::ChannelPressure => VoiceEvent::ChannelPressure { pressure: bytes[0] },
            VoiceKind::PitchBend => VoiceEvent::PitchBend {
                lsb: bytes[0],
                msb: bytes[1],
            },
        };
        Ok(Self { channel, event })
    }

    /// The channel addressed
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// The event sent to the channel
    pub const fn event(&self) -> &VoiceEvent {
        &self.event
    }

    /// The pitch and velocity of a Note-On with a nonzero velocity.
    pub const fn note_start(&self) -> Option<(Pitch, u8)> {
        match self.event {
            VoiceEvent::NoteOn { pitch, velocity } if velocity > 0 => Some((pitch, velocity)),
            _ => None,
        }
    }

    /// The pitch released by a Note-Off, or by a Note-On with zero velocity.
    pub const fn note_release(&self) -> Option<Pitch> {
        match self.event {
            VoiceEvent::NoteOff { pitch, .. } | VoiceEvent::NoteOn { pitch, velocity: 0 } => {
                Some(pitch)
            }
            _ => None,
        }
    }

    /// The 14-bit pitch wheel value, centered on `0x2000`
    pub const fn pitch_bend(&self) -> Option<u16> {
        match self.event {
            VoiceEvent::PitchBend { lsb, msb } => Some(((msb as u16) << 7) | lsb as u16),
            _ => None,
        }
    }
}

#[cfg(test)]
fn decode(bytes: &[u8]) -> ReadResult<ChannelVoiceMessage> {
    let mut reader = Reader::from_byte_slice(bytes);
    let status = reader.read_u8()?;
    ChannelVoiceMessage::read(status, &mut reader)
}

#[test]
fn channel_from_low_nibble() {
    let msg = decode(&[0x93, 60, 100]).unwrap();
    assert_eq!(msg.channel(), Channel::Four);
    assert_eq!(msg.channel().index(), 3);
    assert_eq!(msg.note_start(), Some((Pitch::MIDDLE_C, 100)));
}

#[test]
fn one_byte_payloads() {
    let mut reader = Reader::from_byte_slice(&[0xC0, 5, 0xD1, 64]);
    let status = reader.read_u8().unwrap();
    let program = ChannelVoiceMessage::read(status, &mut reader).unwrap();
    assert_eq!(*program.event(), VoiceEvent::ProgramChange { program: 5 });

    let status = reader.read_u8().unwrap();
    let pressure = ChannelVoiceMessage::read(status, &mut reader).unwrap();
    assert_eq!(pressure.channel(), Channel::Two);
    assert_eq!(*pressure.event(), VoiceEvent::ChannelPressure { pressure: 64 });
    assert_eq!(program.event().kind(), VoiceKind::ProgramChange);
    assert_eq!(pressure.event().kind(), VoiceKind::ChannelPressure);
    assert!(reader.is_empty());
}

#[test]
fn zero_velocity_note_on_releases() {
    let msg = decode(&[0x90, 60, 0]).unwrap();
    assert_eq!(msg.note_start(), None);
    assert_eq!(msg.note_release(), Some(Pitch::MIDDLE_C));
}

#[test]
fn pitch_bend_value() {
    let msg = decode(&[0xE0, 0x00, 0x40]).unwrap();
    assert_eq!(msg.pitch_bend(), Some(0x2000));
}

#[test]
fn rejects_high_data_bytes() {
    let err = decode(&[0xB0, 0x07, 0x90]).unwrap_err();
    assert_eq!(
        err.parse_error(),
        Some(&crate::ParseError::Event(EventError::InvalidDataByte(0x90)))
    );
}
