mod smpte;
pub use smpte::*;

/// The header's `division` field.
///
/// A positive division is the number of ticks per quarter note. A negative
/// one has the two's complement of the SMPTE frame rate in its high byte and
/// the ticks per frame in its low byte.
///
/// Every value is accepted. A division of zero ticks (per quarter note or per
/// frame) leaves beats undefined; conversions then count one tick as one beat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// Delta times count fractions of a quarter note
    TicksPerQuarterNote(u16),

    /// Delta times count fractions of an SMPTE frame
    Smpte(SmpteHeader),
}

impl Timing {
    /// Interpret a raw division value.
    pub const fn from_division(division: i16) -> Self {
        if division >= 0 {
            return Self::TicksPerQuarterNote(division as u16);
        }
        let [fps, ticks_per_frame] = division.to_be_bytes();
        Self::Smpte(SmpteHeader {
            fps: SmpteFps::from_header_byte(fps as i8),
            ticks_per_frame,
        })
    }

    /// True if the division declares zero ticks per quarter note or per frame
    pub const fn is_zero(&self) -> bool {
        self.ticks_per_beat() == 0
    }

    /// The raw signed division as stored in the header
    pub const fn division(&self) -> i16 {
        match self {
            Self::TicksPerQuarterNote(tpqn) => *tpqn as i16,
            Self::Smpte(s) => i16::from_be_bytes([s.fps.as_header_byte(), s.ticks_per_frame]),
        }
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(*t),
            Self::Smpte(_) => None,
        }
    }

    /// Ticks in one beat, the unit of note start times and durations.
    ///
    /// With SMPTE timing there is no beat; one second of ticks is used
    /// instead, so note times are measured in seconds.
    pub const fn ticks_per_beat(&self) -> u32 {
        match self {
            Self::TicksPerQuarterNote(t) => *t as u32,
            Self::Smpte(s) => s.ticks_per_second(),
        }
    }

    /// Convert an absolute tick count to beats.
    ///
    /// With a zero division ticks are returned unscaled.
    pub fn ticks_to_beats(&self, ticks: u64) -> f64 {
        ticks as f64 / f64::from(self.ticks_per_beat().max(1))
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteHeader {
    pub(crate) fps: SmpteFps,
    pub(crate) ticks_per_frame: u8,
}

impl SmpteHeader {
    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }

    /// Nominal frames per second times ticks per frame
    pub const fn ticks_per_second(&self) -> u32 {
        self.fps.as_division() as u32 * self.ticks_per_frame as u32
    }
}

#[test]
fn ticks_per_quarter_note_division() {
    let timing = Timing::from_division(480);
    assert_eq!(timing.ticks_per_quarter_note(), Some(480));
    assert_eq!(timing.ticks_to_beats(960), 2.0);
    assert_eq!(timing.division(), 480);
}

#[test]
fn smpte_division() {
    let division = i16::from_be_bytes([0xE7, 40]);
    let timing = Timing::from_division(division);
    let Timing::Smpte(smpte) = timing else {
        panic!("expected smpte timing");
    };
    assert_eq!(smpte.fps(), SmpteFps::TwentyFive);
    assert_eq!(smpte.ticks_per_frame(), 40);
    assert_eq!(timing.ticks_per_beat(), 1000);
    assert_eq!(timing.division(), division);
}

#[test]
fn unusual_divisions_are_kept() {
    let zero = Timing::from_division(0);
    assert_eq!(zero, Timing::TicksPerQuarterNote(0));
    assert!(zero.is_zero());
    assert_eq!(zero.ticks_to_beats(96), 96.0);

    let division = i16::from_be_bytes([0xEC, 10]);
    let timing = Timing::from_division(division);
    let Timing::Smpte(smpte) = timing else {
        panic!("expected smpte timing");
    };
    assert_eq!(smpte.fps(), SmpteFps::Other(20));
    assert_eq!(timing.ticks_per_beat(), 200);
    assert_eq!(timing.division(), division);

    let no_ticks = Timing::from_division(i16::from_be_bytes([0xE8, 0]));
    assert!(no_ticks.is_zero());
    assert_eq!(no_ticks.ticks_to_beats(7), 7.0);
}
