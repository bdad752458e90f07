mod common;

use common::{Body, header, smf, track};
use pretty_assertions::assert_eq;
use smfread::prelude::*;

fn parse_error(err: &ReaderError) -> ParseError {
    err.parse_error().cloned().expect("invalid format")
}

#[test]
fn reads_ticks_per_quarter_note() {
    let bytes = header(1, 0, 480);
    let file = MidiFile::parse(&bytes).unwrap();

    assert_eq!(file.format_type(), FormatType::Simultaneous);
    assert_eq!(file.header().track_count(), 0);
    assert_eq!(file.header().division(), 480);
    assert_eq!(file.timing(), &Timing::TicksPerQuarterNote(480));
    assert_eq!(file.header().tempo(), None);
    assert!(file.tracks().is_empty());
}

#[test]
fn reads_smpte_division() {
    let bytes = header(0, 0, i16::from_be_bytes([0xE2, 80]));
    let file = MidiFile::parse(&bytes).unwrap();

    let Timing::Smpte(smpte) = file.timing() else {
        panic!("expected smpte timing");
    };
    assert_eq!(smpte.fps(), SmpteFps::Thirty);
    assert_eq!(smpte.ticks_per_frame(), 80);
    assert_eq!(file.timing().ticks_per_beat(), 2400);
}

#[test]
fn keeps_unknown_format_numbers() {
    let bytes = header(7, 0, 96);
    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.format_type(), FormatType::Other(7));
    assert_eq!(u16::from(file.format_type()), 7);
}

#[test]
fn rejects_wrong_chunk_id() {
    let mut bytes = header(0, 0, 96);
    bytes[..4].copy_from_slice(b"RIFF");

    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_invalid_format());
    assert_eq!(err.position(), 0);
    assert_eq!(
        parse_error(&err),
        ParseError::Chunk(ChunkError::NotHeader(*b"RIFF"))
    );
}

#[test]
fn rejects_header_length_other_than_six() {
    for length in [0u32, 5, 7, 0xFFFF_FFFF] {
        let mut bytes = header(0, 0, 96);
        bytes[4..8].copy_from_slice(&length.to_be_bytes());

        let err = MidiFile::parse(&bytes).unwrap_err();
        assert_eq!(err.position(), 4);
        assert_eq!(
            parse_error(&err),
            ParseError::Chunk(ChunkError::HeaderLength(length))
        );
    }
}

#[test]
fn zero_division_is_a_warning() {
    let body = Body::new()
        .note_on(0, 0, 60, 100)
        .note_off(3, 0, 60)
        .end_of_track(0)
        .build();
    let bytes = smf(0, 0, &[&body]);
    let file = MidiFile::parse(&bytes).unwrap();

    assert_eq!(file.timing(), &Timing::TicksPerQuarterNote(0));
    assert_eq!(file.warnings(), [ParseWarning::ZeroDivision { division: 0 }]);
    assert_eq!(file.warnings()[0].track(), None);
    let notes = file.tracks()[0].notes();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].duration(), 3.0);
}

#[test]
fn keeps_unknown_smpte_rates() {
    for (fps_byte, fps) in [(0xE0u8, 32u8), (0xEC, 20)] {
        let bytes = header(0, 0, i16::from_be_bytes([fps_byte, 10]));
        let file = MidiFile::parse(&bytes).unwrap();

        let Timing::Smpte(smpte) = file.timing() else {
            panic!("expected smpte timing");
        };
        assert_eq!(smpte.fps(), SmpteFps::Other(fps));
        assert_eq!(smpte.ticks_per_frame(), 10);
        assert_eq!(file.timing().ticks_per_beat(), u32::from(fps) * 10);
        assert!(file.warnings().is_empty());
    }
}

#[test]
fn zero_ticks_per_frame_is_a_warning() {
    let division = i16::from_be_bytes([0xE8, 0]);
    let bytes = header(0, 0, division);
    let file = MidiFile::parse(&bytes).unwrap();

    assert_eq!(file.header().division(), division);
    assert!(file.timing().is_zero());
    assert_eq!(file.warnings(), [ParseWarning::ZeroDivision { division }]);
}

#[test]
fn truncated_header() {
    let bytes = header(0, 1, 96);
    for len in [0, 3, 8, 13] {
        let err = MidiFile::parse(&bytes[..len]).unwrap_err();
        assert!(err.is_eof(), "{len}");
    }
}

#[test]
fn missing_tracks_run_out_of_data() {
    let mut bytes = header(1, 2, 96);
    bytes.extend(track(&[0x00, 0xFF, 0x2F, 0x00]));

    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_eof());
    assert_eq!(err.position(), bytes.len());
}

#[test]
fn ignores_bytes_after_the_last_track() {
    let mut bytes = smf(0, 96, &[&[0x00, 0xFF, 0x2F, 0x00]]);
    bytes.extend_from_slice(b"MTrk\x00\x00\x00\x04junk and more");

    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.tracks().len(), 1);
}
