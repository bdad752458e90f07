use crate::{SmpteError, file::SmpteFps};

/// The SMPTE time at which a track is meant to start.
///
/// Tracks store the 5 offset bytes undecoded in
/// [`MetaMessage::SmpteOffset`](super::MetaMessage::SmpteOffset);
/// [`SmpteOffset::parse`] validates and splits them.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteOffset {
    /// The frame rate for this offset.
    pub fps: SmpteFps,
    /// Hour component of the time code (0-23).
    pub hour: u8,
    /// Minute component of the time code (0-59).
    pub minute: u8,
    /// Second component of the time code (0-59).
    pub second: u8,
    /// Frame number within the current second.
    pub frame: u8,
    /// Hundredths of a frame (0-99).
    pub subframe: u8,
}

impl SmpteOffset {
    /// Parse the 5 payload bytes `0rrhhhhh mm ss ff sf`.
    ///
    /// `rr` selects the frame rate: `00` 24, `01` 25, `10` 29.97 and `11` 30 fps.
    pub const fn parse(data: &[u8]) -> Result<Self, SmpteError> {
        if data.len() != 5 {
            return Err(SmpteError::Length(data.len()));
        }

        let fps = match data[0] >> 5 {
            0 => SmpteFps::TwentyFour,
            1 => SmpteFps::TwentyFive,
            2 => SmpteFps::TwentyNine,
            3 => SmpteFps::Thirty,
            v => return Err(SmpteError::TrackFrame(v)),
        };
        let hour = data[0] & 0b0001_1111;
        if hour > 23 {
            return Err(SmpteError::HourOffset(hour));
        }
        if data[1] > 59 {
            return Err(SmpteError::MinuteOffset(data[1]));
        }
        if data[2] > 59 {
            return Err(SmpteError::SecondOffset(data[2]));
        }
        if data[4] > 99 {
            return Err(SmpteError::Subframe(data[4]));
        }
        Ok(Self {
            fps,
            hour,
            minute: data[1],
            second: data[2],
            frame: data[3],
            subframe: data[4],
        })
    }

    /// The offset in microseconds, using its own frame rate.
    pub const fn as_micros(&self) -> f64 {
        let whole_seconds = self.hour as u64 * 3600 + self.minute as u64 * 60 + self.second as u64;
        let frames = self.frame as f64 + self.subframe as f64 / 100.;
        (whole_seconds * 1_000_000) as f64 + frames * 1_000_000. / self.fps.as_f64()
    }
}

#[test]
fn parse_smpte_offset() {
    use pretty_assertions::assert_eq;
    let offset = SmpteOffset::parse(&[0x41, 0x17, 0x2D, 0x0C, 0x22]).unwrap();

    assert_eq!(offset.fps, SmpteFps::TwentyNine);
    assert_eq!(offset.hour, 1);
    assert_eq!(offset.minute, 23);
    assert_eq!(offset.second, 45);
    assert_eq!(offset.frame, 12);
    assert_eq!(offset.subframe, 34);
}

#[test]
fn smpte_offset_micros() {
    let offset = SmpteOffset::parse(&[0x20, 0x00, 0x01, 0x05, 0x00]).unwrap();
    assert_eq!(offset.fps, SmpteFps::TwentyFive);
    assert_eq!(offset.as_micros(), 1_200_000.);
}

#[test]
fn parse_invalid_smpte_offset() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        SmpteOffset::parse(&[0x7F, 0x17, 0x2D, 0x0C, 0x22]),
        Err(SmpteError::HourOffset(31))
    );
    assert_eq!(
        SmpteOffset::parse(&[0x41, 0x50, 0x2D, 0x0C, 0x22]),
        Err(SmpteError::MinuteOffset(80))
    );
    assert_eq!(SmpteOffset::parse(&[0x41]), Err(SmpteError::Length(1)));
}
