use super::{MetaType, require_len};
use crate::MetaError;

#[doc = r#"
`FF 58 04 nn dd cc bb`: a time signature.

`nn` is the numerator. The denominator is stored as a power of two, so
`dd = 3` means eighth notes. `cc` is the number of MIDI clocks per
metronome click and `bb` the number of notated 32nd notes per quarter
note. Only `nn` and `dd` are required; the last two are kept when present.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeSignature {
    numerator: u8,
    denominator_exponent: u8,
    clocks_per_click: Option<u8>,
    thirty_seconds_per_quarter: Option<u8>,
}

impl TimeSignature {
    /// Decode the payload of a time signature event
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetaError> {
        require_len(MetaType::TimeSignature, data, 2)?;
        let denominator_exponent = data[1];
        if denominator_exponent >= 32 {
            return Err(MetaError::Denominator(denominator_exponent));
        }
        Ok(Self {
            numerator: data[0],
            denominator_exponent,
            clocks_per_click: data.get(2).copied(),
            thirty_seconds_per_quarter: data.get(3).copied(),
        })
    }

    /// Beats per bar
    pub const fn numerator(&self) -> u8 {
        self.numerator
    }

    /// The note value of one beat, `2^dd`
    pub const fn denominator(&self) -> u32 {
        1 << self.denominator_exponent
    }

    /// MIDI clocks per metronome click, if stored
    pub const fn clocks_per_click(&self) -> Option<u8> {
        self.clocks_per_click
    }

    /// Notated 32nd notes per quarter note, if stored
    pub const fn thirty_seconds_per_quarter(&self) -> Option<u8> {
        self.thirty_seconds_per_quarter
    }
}

#[test]
fn six_eight() {
    let sig = TimeSignature::from_bytes(&[0x06, 0x03, 0x24, 0x08]).unwrap();
    assert_eq!(sig.numerator(), 6);
    assert_eq!(sig.denominator(), 8);
    assert_eq!(sig.clocks_per_click(), Some(36));
    assert_eq!(sig.thirty_seconds_per_quarter(), Some(8));
}

#[test]
fn two_byte_signature() {
    let sig = TimeSignature::from_bytes(&[0x03, 0x02]).unwrap();
    assert_eq!(sig.denominator(), 4);
    assert_eq!(sig.clocks_per_click(), None);
}

#[test]
fn short_or_oversized_signature() {
    assert_eq!(
        TimeSignature::from_bytes(&[0x04]),
        Err(MetaError::Length {
            meta_type: 0x58,
            expected: 2,
            found: 1
        })
    );
    assert_eq!(
        TimeSignature::from_bytes(&[0x04, 40]),
        Err(MetaError::Denominator(40))
    );
}
