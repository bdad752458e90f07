use crate::reader::{ReadResult, Reader};

/// Status byte of a system exclusive packet
pub const SYSEX_START: u8 = 0xF0;
/// Status byte of a system exclusive continuation (or escape) packet
pub const SYSEX_CONTINUATION: u8 = 0xF7;

#[doc = r#"
A system exclusive packet stored in a track.

In a file, sysex data is length-prefixed with a variable-length quantity.
A message may be split over several events: the first uses `F0`, the
rest use `F7`. The payload is kept exactly as stored, including any
trailing `F7` terminator.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SysExMessage<'a> {
    continuation: bool,
    data: &'a [u8],
}

impl<'a> SysExMessage<'a> {
    /// Create a new sysex message
    pub const fn new(continuation: bool, data: &'a [u8]) -> Self {
        Self { continuation, data }
    }

    pub(crate) fn read(status: u8, reader: &mut Reader<'a>) -> ReadResult<Self> {
        let data = reader.read_varlen_slice()?;
        Ok(Self {
            continuation: status == SYSEX_CONTINUATION,
            data,
        })
    }

    /// True if this packet was introduced by `F7`
    pub const fn is_continuation(&self) -> bool {
        self.continuation
    }

    /// The raw payload
    pub const fn data(&self) -> &'a [u8] {
        self.data
    }
}

#[test]
fn sysex_keeps_payload_order() {
    let mut reader = Reader::from_byte_slice(&[0x04, 0x43, 0x12, 0x00, 0xF7, 0x99]);
    let msg = SysExMessage::read(SYSEX_START, &mut reader).unwrap();
    assert!(!msg.is_continuation());
    assert_eq!(msg.data(), &[0x43, 0x12, 0x00, 0xF7]);
    assert_eq!(msg, SysExMessage::new(false, &[0x43, 0x12, 0x00, 0xF7]));
    assert_eq!(reader.remaining(), 1);
}
