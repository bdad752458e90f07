use crate::MetaError;

/// Microseconds in a minute
pub const MICROS_PER_MINUTE: f64 = 60_000_000.;

#[doc = r#"
A Set Tempo meta event, in microseconds per quarter note.

# Example
```rust
# use smfread::prelude::*;
let tempo = Tempo::new(500_000).unwrap();
assert_eq!(tempo.bpm(), 120.0);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tempo {
    micros_per_quarter_note: u32,
}

impl Default for Tempo {
    /// 120 beats per minute, the tempo of a file with no Set Tempo event
    fn default() -> Self {
        Self {
            micros_per_quarter_note: 500_000,
        }
    }
}

impl Tempo {
    /// Create a tempo. Zero is rejected.
    pub const fn new(micros_per_quarter_note: u32) -> Result<Self, MetaError> {
        if micros_per_quarter_note == 0 {
            return Err(MetaError::ZeroTempo);
        }
        Ok(Self {
            micros_per_quarter_note,
        })
    }

    /// Decode the big-endian payload, normally 3 bytes and at most 4.
    pub fn from_bytes(data: &[u8]) -> Result<Self, MetaError> {
        if data.len() > 4 {
            return Err(MetaError::TempoWidth(data.len()));
        }
        Self::new(data.iter().fold(0u32, |acc, b| (acc << 8) | u32::from(*b)))
    }

    /// Microseconds per quarter note
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.micros_per_quarter_note
    }

    /// Beats per minute
    pub fn bpm(&self) -> f64 {
        MICROS_PER_MINUTE / f64::from(self.micros_per_quarter_note)
    }
}

#[test]
fn tempo_to_bpm() {
    let tempo = Tempo::from_bytes(&[0x07, 0xA1, 0x20]).unwrap();
    assert_eq!(tempo.micros_per_quarter_note(), 500_000);
    assert_eq!(tempo.bpm(), 120.0);

    let tempo = Tempo::from_bytes(&[0x09, 0x27, 0xC0]).unwrap();
    assert_eq!(tempo.bpm(), 100.0);
}

#[test]
fn zero_tempo_rejected() {
    assert_eq!(Tempo::from_bytes(&[0, 0, 0]), Err(MetaError::ZeroTempo));
    assert_eq!(Tempo::from_bytes(&[]), Err(MetaError::ZeroTempo));
}

#[test]
fn wide_tempo_rejected() {
    assert_eq!(
        Tempo::from_bytes(&[1, 0, 0, 0, 0]),
        Err(MetaError::TempoWidth(5))
    );
    let widest = Tempo::from_bytes(&[0, 0x07, 0xA1, 0x20]).unwrap();
    assert_eq!(widest.micros_per_quarter_note(), 500_000);
}
