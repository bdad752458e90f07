mod common;

use common::{Body, smf};
use pretty_assertions::assert_eq;
use smfread::prelude::*;

const RATES: [(SmpteFps, u8, u8); 4] = [
    (SmpteFps::TwentyFour, 0xE8, 0b00),
    (SmpteFps::TwentyFive, 0xE7, 0b01),
    (SmpteFps::TwentyNine, 0xE3, 0b10),
    (SmpteFps::Thirty, 0xE2, 0b11),
];

/// One track: an offset, then middle C held for 96 ticks.
fn file_with_offset(header_byte: u8, offset: [u8; 5]) -> Vec<u8> {
    let body = Body::new()
        .meta(0, 0x54, &offset)
        .note_on(0, 0, 60, 100)
        .note_off(96, 0, 60)
        .end_of_track(0)
        .build();
    smf(0, i16::from_be_bytes([header_byte, 40]), &[&body])
}

fn first_offset(file: &MidiFile<'_>) -> SmpteOffset {
    let TrackMessage::Meta(MetaMessage::SmpteOffset(data)) = file.tracks()[0].events()[0].message()
    else {
        panic!("expected an smpte offset");
    };
    SmpteOffset::parse(data).unwrap()
}

#[test]
fn header_rates_and_offsets() {
    for (fps, header_byte, rate_bits) in RATES {
        let bytes = file_with_offset(header_byte, [rate_bits << 5 | 12, 30, 15, 18, 50]);
        let file = MidiFile::parse(&bytes).unwrap();

        let Timing::Smpte(smpte) = file.timing() else {
            panic!("expected smpte timing");
        };
        assert_eq!(smpte.fps(), fps);
        assert_eq!(smpte.ticks_per_frame(), 40);

        let offset = first_offset(&file);
        assert_eq!(
            offset,
            SmpteOffset {
                fps,
                hour: 12,
                minute: 30,
                second: 15,
                frame: 18,
                subframe: 50,
            }
        );
        let expected = 45_015_000_000.0 + 18.5 * 1_000_000.0 / fps.as_f64();
        assert!((offset.as_micros() - expected).abs() < 0.01);
    }
}

#[test]
fn note_times_are_seconds() {
    // 960, 1000, 1200 and 1200 ticks per second
    let expected = [(0.1, 100_000), (0.096, 96_000), (0.08, 80_000), (0.08, 80_000)];
    for ((_, header_byte, _), (seconds, micros)) in RATES.into_iter().zip(expected) {
        let bytes = file_with_offset(header_byte, [0, 0, 0, 0, 0]);
        let file = MidiFile::parse(&bytes).unwrap();

        let note = file.tracks()[0].notes()[0];
        assert_eq!(note.absolute_start_time(), 0.0);
        assert_eq!(note.duration(), seconds);

        let timed = file.note_times(0).unwrap().next().unwrap();
        assert_eq!(timed.length(), UMicros::new(micros));
    }
}

#[test]
fn tempo_does_not_move_smpte_ticks() {
    let body = Body::new()
        .tempo(0, 1_000_000)
        .note_on(0, 0, 60, 100)
        .note_off(1000, 0, 60)
        .build();
    let bytes = smf(0, i16::from_be_bytes([0xE7, 40]), &[&body]);
    let file = MidiFile::parse(&bytes).unwrap();

    let timed = file.note_times(0).unwrap().next().unwrap();
    assert_eq!(timed.end, UMicros::new(1_000_000));
    assert_eq!(file.header().bpm(), Some(60.0));
}

#[test]
fn invalid_offset_payload_does_not_fail_the_parse() {
    let bytes = file_with_offset(0xE8, [0x1F, 0, 0, 0, 0]);
    let file = MidiFile::parse(&bytes).unwrap();

    let TrackMessage::Meta(MetaMessage::SmpteOffset(data)) = file.tracks()[0].events()[0].message()
    else {
        panic!("expected an smpte offset");
    };
    assert_eq!(SmpteOffset::parse(data), Err(SmpteError::HourOffset(31)));
}

#[test]
fn offsets_per_track() {
    let ten_seconds = Body::new().meta(0, 0x54, &[0x20, 0, 10, 0, 0]).build();
    let one_minute = Body::new().meta(0, 0x54, &[0x20, 1, 0, 0, 0]).build();
    let bytes = smf(1, i16::from_be_bytes([0xE7, 40]), &[&ten_seconds, &one_minute]);
    let file = MidiFile::parse(&bytes).unwrap();

    let mut offsets = Vec::new();
    file.for_each_track(|track| {
        for event in track.events() {
            if let TrackMessage::Meta(MetaMessage::SmpteOffset(data)) = event.message() {
                offsets.push(SmpteOffset::parse(data).unwrap());
            }
        }
    });

    assert_eq!(offsets.len(), 2);
    assert_eq!((offsets[0].minute, offsets[0].second), (0, 10));
    assert_eq!((offsets[1].minute, offsets[1].second), (1, 0));
    let diff = offsets[1].as_micros() - offsets[0].as_micros();
    assert!((diff - 50_000_000.0).abs() < 1.0);
}
