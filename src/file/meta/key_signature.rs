use super::{MetaType, require_len};
use crate::MetaError;

const MAJOR_TONICS: [&str; 15] = [
    "Cb", "Gb", "Db", "Ab", "Eb", "Bb", "F", "C", "G", "D", "A", "E", "B", "F#", "C#",
];
const MINOR_TONICS: [&str; 15] = [
    "Ab", "Eb", "Bb", "F", "C", "G", "D", "A", "E", "B", "F#", "C#", "G#", "D#", "A#",
];

#[doc = r#"
`FF 59 02 sf mi`: a key signature.

`sf` is a signed count of sharps (positive) or flats (negative), from -7
to 7. `mi` is `0` for a major key and `1` for a minor key.

# Example
```rust
# use smfread::prelude::*;
let key = KeySignature::from_bytes(&[0xFD, 0x01]).unwrap();
assert_eq!(key.sharps(), -3);
assert!(key.is_minor());
assert_eq!(key.tonic(), Some("C"));
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeySignature {
    sharps: i8,
    scale: u8,
}

impl KeySignature {
    /// Decode the payload of a key signature event
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetaError> {
        require_len(MetaType::KeySignature, data, 2)?;
        Ok(Self {
            sharps: data[0] as i8,
            scale: data[1],
        })
    }

    /// Sharps if positive, flats if negative
    pub const fn sharps(&self) -> i8 {
        self.sharps
    }

    /// The raw scale byte
    pub const fn scale(&self) -> u8 {
        self.scale
    }

    /// True for a minor key
    pub const fn is_minor(&self) -> bool {
        self.scale == 1
    }

    /// The name of the key's tonic, if `sf` is within -7..=7
    pub fn tonic(&self) -> Option<&'static str> {
        let idx = usize::try_from(i16::from(self.sharps) + 7).ok()?;
        let table = if self.is_minor() {
            &MINOR_TONICS
        } else {
            &MAJOR_TONICS
        };
        table.get(idx).copied()
    }
}

#[test]
fn major_keys() {
    let c = KeySignature::from_bytes(&[0x00, 0x00]).unwrap();
    assert_eq!(c.tonic(), Some("C"));
    assert!(!c.is_minor());

    let d = KeySignature::from_bytes(&[0x02, 0x00]).unwrap();
    assert_eq!(d.tonic(), Some("D"));

    let c_flat = KeySignature::from_bytes(&[0xF9, 0x00]).unwrap();
    assert_eq!(c_flat.sharps(), -7);
    assert_eq!(c_flat.tonic(), Some("Cb"));
}

#[test]
fn minor_keys_and_out_of_range() {
    let a_minor = KeySignature::from_bytes(&[0x00, 0x01]).unwrap();
    assert_eq!(a_minor.tonic(), Some("A"));

    let weird = KeySignature::from_bytes(&[0x09, 0x00]).unwrap();
    assert_eq!(weird.tonic(), None);
}

#[test]
fn short_key_signature() {
    assert!(KeySignature::from_bytes(&[0x01]).is_err());
}
