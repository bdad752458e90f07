#![doc = r#"
SMPTE time code rates.

A file may time its events in fractions of a video frame instead of
fractions of a beat. The header then names one of four frame rates:
24 (film), 25 (PAL/SECAM), 29.97 (NTSC color, "drop frame") and 30.
Any other rate found in a header is kept as [`SmpteFps::Other`].
"#]

/// The possible FPS (Frames Per Second) for MIDI tracks and files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second
    TwentyFour,
    /// 25 frames per second
    TwentyFive,
    /// 29.97 frames per second (30000/1001), drop-frame
    TwentyNine,
    /// 30 frames per second
    Thirty,
    /// A nonstandard rate, stored as a positive frame count
    Other(u8),
}

impl SmpteFps {
    /// The nominal integer rate used for tick arithmetic.
    ///
    /// Drop-frame 29.97 fps counts as 30 here.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine | Self::Thirty => 30,
            Self::Other(fps) => *fps,
        }
    }

    /// The actual frame rate.
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
            Self::Other(fps) => *fps as f64,
        }
    }

    /// Read the high byte of a negative header division
    pub(crate) const fn from_header_byte(byte: i8) -> Self {
        match byte {
            -24 => Self::TwentyFour,
            -25 => Self::TwentyFive,
            -29 => Self::TwentyNine,
            -30 => Self::Thirty,
            other => Self::Other(other.unsigned_abs()),
        }
    }

    /// The high byte of a header division using this rate
    pub(crate) const fn as_header_byte(&self) -> u8 {
        let fps = match self {
            Self::TwentyNine => 29,
            other => other.as_division(),
        };
        (fps as i8).wrapping_neg() as u8
    }
}

/// NTSC drop-frame rate: 29.97002997... fps
const DROP_FRAME: f64 = 30_000. / 1001.;

#[test]
fn header_bytes() {
    for byte in [-24i8, -25, -29, -30, -20, -1, -128] {
        let fps = SmpteFps::from_header_byte(byte);
        assert_eq!(fps.as_header_byte(), byte as u8);
    }
    assert_eq!(SmpteFps::from_header_byte(-20), SmpteFps::Other(20));
    assert_eq!(SmpteFps::from_header_byte(-128).as_division(), 128);
}
