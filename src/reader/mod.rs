#![doc = r#"
The byte cursor used to decode MIDI files.

[`Reader`] walks a borrowed byte slice front to back. Every read either
returns exactly the requested bytes and advances, or fails with
[`ReaderErrorKind::UnexpectedEof`] and leaves the position untouched.

All multi-byte integers in a MIDI file are big-endian.
"#]

mod error;
pub use error::*;

/// A sequential reader over a fixed byte buffer.
#[derive(Debug, Clone)]
pub struct Reader<'slc> {
    buf: &'slc [u8],
    position: usize,
    /// Absolute offset of `buf[0]` in the original input
    offset: usize,
}

impl<'slc> Reader<'slc> {
    /// Create a reader at the start of `bytes`
    pub const fn from_byte_slice(bytes: &'slc [u8]) -> Self {
        Self {
            buf: bytes,
            position: 0,
            offset: 0,
        }
    }

    /// Absolute position in the original input
    pub const fn buffer_position(&self) -> usize {
        self.offset + self.position
    }

    /// Bytes left to read
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.position
    }

    /// True if nothing is left to read
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Read exactly `n` bytes.
    pub fn read_exact(&mut self, n: usize) -> ReadResult<&'slc [u8]> {
        if n > self.remaining() {
            return Err(ReaderError::eof(self.buffer_position()));
        }
        let start = self.position;
        self.position += n;
        Ok(&self.buf[start..self.position])
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let mut out = [0; N];
        out.copy_from_slice(self.read_exact(N)?);
        Ok(out)
    }

    /// Read one byte
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let byte = self.peek_u8()?;
        self.position += 1;
        Ok(byte)
    }

    /// Look at the next byte without consuming it
    pub fn peek_u8(&self) -> ReadResult<u8> {
        self.buf
            .get(self.position)
            .copied()
            .ok_or_else(|| ReaderError::eof(self.buffer_position()))
    }

    /// Read a big-endian `u16`
    pub fn read_u16_be(&mut self) -> ReadResult<u16> {
        self.read_exact_size().map(u16::from_be_bytes)
    }

    /// Read a big-endian `i16`
    pub fn read_i16_be(&mut self) -> ReadResult<i16> {
        self.read_exact_size().map(i16::from_be_bytes)
    }

    /// Read a big-endian `u32`
    pub fn read_u32_be(&mut self) -> ReadResult<u32> {
        self.read_exact_size().map(u32::from_be_bytes)
    }

    /// Read a variable-length quantity.
    ///
    /// Seven bits per byte, most significant group first. A set high bit
    /// means another byte follows. The length is not capped: bits shifted
    /// past 64 are lost, and a sequence that never terminates runs into the
    /// end of the buffer.
    pub fn read_varlen(&mut self) -> ReadResult<u64> {
        let start = self.position;
        let mut acc: u64 = 0;
        loop {
            let byte = match self.read_u8() {
                Ok(b) => b,
                Err(e) => {
                    self.position = start;
                    return Err(e);
                }
            };
            acc = (acc << 7) | u64::from(byte & 0x7F);
            if byte & 0x80 == 0 {
                return Ok(acc);
            }
        }
    }

    /// Read a variable-length quantity, then that many bytes.
    pub fn read_varlen_slice(&mut self) -> ReadResult<&'slc [u8]> {
        let start = self.position;
        let len = self.read_varlen()?;
        let Ok(len) = usize::try_from(len) else {
            let err = ReaderError::eof(self.buffer_position());
            self.position = start;
            return Err(err);
        };
        self.read_exact(len).inspect_err(|_| self.position = start)
    }

    /// Split off a reader over exactly the next `n` bytes, advancing past them.
    ///
    /// Positions reported by the new reader stay absolute.
    pub fn sub_reader(&mut self, n: usize) -> ReadResult<Reader<'slc>> {
        let offset = self.buffer_position();
        let buf = self.read_exact(n)?;
        Ok(Reader {
            buf,
            position: 0,
            offset,
        })
    }
}

#[test]
fn read_exact_advances() {
    let mut reader = Reader::from_byte_slice(&[1, 2, 3, 4, 5]);
    assert_eq!(reader.read_exact(2).unwrap(), &[1, 2]);
    assert_eq!(reader.buffer_position(), 2);
    assert_eq!(reader.peek_u8().unwrap(), 3);
    assert_eq!(reader.read_u8().unwrap(), 3);
    assert_eq!(reader.remaining(), 2);
}

#[test]
fn read_past_end_fails_without_moving() {
    let mut reader = Reader::from_byte_slice(&[1, 2, 3]);
    reader.read_u8().unwrap();
    let err = reader.read_exact(3).unwrap_err();
    assert!(err.is_eof());
    assert_eq!(err.position(), 1);
    assert_eq!(reader.buffer_position(), 1);
}

#[test]
fn big_endian_fields() {
    let mut reader = Reader::from_byte_slice(&[0x00, 0x00, 0x00, 0x06, 0x01, 0xE0, 0xE7, 0x28]);
    assert_eq!(reader.read_u32_be().unwrap(), 6);
    assert_eq!(reader.read_u16_be().unwrap(), 480);
    assert_eq!(reader.read_i16_be().unwrap(), -6360);
}

#[test]
fn varlen_known_values() {
    let cases: &[(&[u8], u64)] = &[
        (&[0x00], 0),
        (&[0x40], 0x40),
        (&[0x7F], 0x7F),
        (&[0x81, 0x00], 0x80),
        (&[0xC0, 0x00], 0x2000),
        (&[0xFF, 0x7F], 0x3FFF),
        (&[0x81, 0x80, 0x00], 0x4000),
        (&[0xFF, 0xFF, 0x7F], 0x1F_FFFF),
        (&[0x81, 0x80, 0x80, 0x00], 0x20_0000),
        (&[0xFF, 0xFF, 0xFF, 0x7F], 0x0FFF_FFFF),
    ];
    for (bytes, expected) in cases {
        let mut reader = Reader::from_byte_slice(bytes);
        assert_eq!(reader.read_varlen().unwrap(), *expected);
        assert!(reader.is_empty());
    }
}

#[test]
fn varlen_longer_than_four_bytes() {
    let mut reader = Reader::from_byte_slice(&[0x81, 0x80, 0x80, 0x80, 0x00]);
    assert_eq!(reader.read_varlen().unwrap(), 1 << 28);
}

#[test]
fn unterminated_varlen_is_eof() {
    let mut reader = Reader::from_byte_slice(&[0x81, 0x80, 0x80]);
    let err = reader.read_varlen().unwrap_err();
    assert!(err.is_eof());
    assert_eq!(reader.buffer_position(), 0);
}

#[test]
fn sub_reader_reports_absolute_positions() {
    let mut reader = Reader::from_byte_slice(&[9, 9, 1, 2, 3, 7]);
    reader.read_exact(2).unwrap();
    let mut sub = reader.sub_reader(3).unwrap();
    assert_eq!(reader.read_u8().unwrap(), 7);

    assert_eq!(sub.read_exact(3).unwrap(), &[1, 2, 3]);
    let err = sub.read_u8().unwrap_err();
    assert_eq!(err.position(), 5);
}
