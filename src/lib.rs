#![doc = r#"
Decode Standard MIDI Files into an event timeline.

A Standard MIDI File (SMF) is a header chunk (`MThd`) followed by one or more
track chunks (`MTrk`). Each track is a stream of delta-timed events: channel
voice messages, meta events and system exclusive packets.

[`MidiFile::parse`](crate::file::MidiFile::parse) reads a whole file in one
pass and returns

- the [`Header`](crate::file::Header), with the global timing and the last
  tempo seen,
- every [`Track`](crate::file::Track) with its raw events and the
  [`Note`](crate::file::Note)s resolved from Note-On/Note-Off pairs,
- a [`TempoMap`](crate::file::TempoMap) of every tempo change,
- and a list of non-fatal [`ParseWarning`]s.

Structural problems (wrong chunk ids, truncated data) abort the parse with a
single [`ReaderError`](crate::reader::ReaderError).

# Example
```rust
# use smfread::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    b'M', b'T', b'r', b'k', 0, 0, 0, 12,
    0x00, 0x90, 60, 100,
    0x60, 0x80, 60, 0,
    0x00, 0xFF, 0x2F, 0x00,
];

let file = MidiFile::parse(&bytes).unwrap();
let note = &file.tracks()[0].notes()[0];

assert_eq!(note.pitch().byte(), 60);
assert_eq!(note.absolute_start_time(), 0.0);
assert_eq!(note.duration(), 1.0);
```
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
pub use config::*;

mod error;
pub use error::*;

mod warning;
pub use warning::*;

pub mod file;
pub mod message;
pub mod reader;

mod micros;
pub use micros::*;

mod pitch;
pub use pitch::*;

/// Commonly used types
pub mod prelude {
    pub use crate::{
        ChunkError, EventError, Key, MetaError, NoteKey, Octave, ParseConfig, ParseError,
        ParseWarning, Pitch, SmpteError, UMicros, UnterminatedPolicy,
        file::{meta::*, *},
        message::*,
        reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
    };
}
