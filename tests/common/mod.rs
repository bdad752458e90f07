#![allow(dead_code)]

/// Encode a variable-length quantity, most significant group first.
pub fn varlen(mut value: u64) -> Vec<u8> {
    let mut groups = vec![(value & 0x7F) as u8];
    value >>= 7;
    while value > 0 {
        groups.push((value & 0x7F) as u8 | 0x80);
        value >>= 7;
    }
    groups.reverse();
    groups
}

/// A 14 byte header chunk
pub fn header(format: u16, tracks: u16, division: i16) -> Vec<u8> {
    let mut bytes = b"MThd".to_vec();
    bytes.extend_from_slice(&6u32.to_be_bytes());
    bytes.extend_from_slice(&format.to_be_bytes());
    bytes.extend_from_slice(&tracks.to_be_bytes());
    bytes.extend_from_slice(&division.to_be_bytes());
    bytes
}

/// A track chunk whose declared length matches `body`
pub fn track(body: &[u8]) -> Vec<u8> {
    track_with_length(body, body.len() as u32)
}

/// A track chunk declaring `length` regardless of the body
pub fn track_with_length(body: &[u8], length: u32) -> Vec<u8> {
    let mut bytes = b"MTrk".to_vec();
    bytes.extend_from_slice(&length.to_be_bytes());
    bytes.extend_from_slice(body);
    bytes
}

/// Header plus tracks
pub fn smf(format: u16, division: i16, tracks: &[&[u8]]) -> Vec<u8> {
    let mut bytes = header(format, tracks.len() as u16, division);
    for body in tracks {
        bytes.extend(track(body));
    }
    bytes
}

/// Builds a track body event by event
#[derive(Default)]
pub struct Body(Vec<u8>);

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event(mut self, delta: u64, bytes: &[u8]) -> Self {
        self.0.extend(varlen(delta));
        self.0.extend_from_slice(bytes);
        self
    }

    pub fn note_on(self, delta: u64, channel: u8, pitch: u8, velocity: u8) -> Self {
        self.event(delta, &[0x90 | channel, pitch, velocity])
    }

    pub fn note_off(self, delta: u64, channel: u8, pitch: u8) -> Self {
        self.event(delta, &[0x80 | channel, pitch, 0x40])
    }

    pub fn meta(self, delta: u64, meta_type: u8, data: &[u8]) -> Self {
        let mut bytes = vec![0xFF, meta_type];
        bytes.extend(varlen(data.len() as u64));
        bytes.extend_from_slice(data);
        self.event(delta, &bytes)
    }

    pub fn tempo(self, delta: u64, micros_per_quarter_note: u32) -> Self {
        self.meta(delta, 0x51, &micros_per_quarter_note.to_be_bytes()[1..])
    }

    pub fn end_of_track(self, delta: u64) -> Self {
        self.meta(delta, 0x2F, &[])
    }

    pub fn build(self) -> Vec<u8> {
        self.0
    }
}
