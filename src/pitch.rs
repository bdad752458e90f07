use core::fmt;

use crate::EventError;

#[doc = r#"
A MIDI key number, 0-127.

Each value corresponds to some [`Key`] and [`Octave`].
[`Pitch`] `0` is `C(-1)`, `60` is middle C (`C4`) and `127` is `G9`.

# Example
```rust
# use smfread::prelude::*;
let pitch = Pitch::new(63).unwrap();

assert_eq!(pitch.key(), Key::DSharp);
assert_eq!(pitch.octave(), Octave::new(4));
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pitch(u8);

impl Pitch {
    /// Middle C
    pub const MIDDLE_C: Self = Self(60);

    /// Create a pitch, rejecting bytes with the high bit set.
    pub const fn new(byte: u8) -> Result<Self, EventError> {
        if byte > 0x7F {
            return Err(EventError::InvalidDataByte(byte));
        }
        Ok(Self(byte))
    }

    /// Identifies the key of the pitch
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_mod_12(self.0 % 12)
    }

    /// Identifies the octave of the pitch
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave((self.0 / 12) as i8 - 1)
    }

    /// Returns the underlying key number
    pub const fn byte(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key(), self.octave())
    }
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// One of the twelve pitch classes
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Key {
    const fn from_mod_12(class: u8) -> Self {
        use Key::*;
        match class {
            0 => C,
            1 => CSharp,
            2 => D,
            3 => DSharp,
            4 => E,
            5 => F,
            6 => FSharp,
            7 => G,
            8 => GSharp,
            9 => A,
            10 => ASharp,
            _ => B,
        }
    }

    /// Returns true for the five black keys
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        use Key::*;
        matches!(self, CSharp | DSharp | FSharp | GSharp | ASharp)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Key::*;
        let name = match self {
            C => "C",
            CSharp => "C#",
            D => "D",
            DSharp => "D#",
            E => "E",
            F => "F",
            FSharp => "F#",
            G => "G",
            GSharp => "G#",
            A => "A",
            ASharp => "A#",
            B => "B",
        };
        f.write_str(name)
    }
}

/// The octave of a [`Pitch`]. Values range from -1 to 9.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Octave(i8);

impl Octave {
    /// Should be a value between [-1, 9]. Clamps between these two values.
    pub const fn new(octave: i8) -> Self {
        if octave < -1 {
            Self(-1)
        } else if octave > 9 {
            Self(9)
        } else {
            Self(octave)
        }
    }

    /// The octave, from `[-1,9]`
    pub const fn value(&self) -> i8 {
        self.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn key_and_octave_of_pitch() {
    let c = Pitch::new(12).unwrap();
    assert_eq!(c.key(), Key::C);
    assert_eq!(c.octave().value(), 0);

    let a_sharp = Pitch::new(94).unwrap();
    assert_eq!(a_sharp.key(), Key::ASharp);
    assert_eq!(a_sharp.octave().value(), 6);

    assert_eq!(Pitch::new(0).unwrap().octave().value(), -1);
    assert_eq!(Pitch::new(127).unwrap().key(), Key::G);

    let black_keys = (60..72)
        .filter(|&p| Pitch::new(p).unwrap().key().is_sharp())
        .count();
    assert_eq!(black_keys, 5);
    assert!(a_sharp.key().is_sharp());
}

#[test]
fn pitch_rejects_status_bytes() {
    assert_eq!(Pitch::new(0x80), Err(EventError::InvalidDataByte(0x80)));
}

#[test]
fn pitch_display() {
    use alloc::string::ToString;
    assert_eq!(Pitch::MIDDLE_C.to_string(), "C4");
    assert_eq!(Pitch::new(61).unwrap().to_string(), "C#4");
}
