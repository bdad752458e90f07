mod common;

use common::{Body, header, smf, track, track_with_length};
use pretty_assertions::assert_eq;
use smfread::prelude::*;

fn two_events() -> Vec<u8> {
    Body::new().note_on(0, 0, 60, 100).end_of_track(0).build()
}

#[test]
fn declared_length_too_short() {
    let body = two_events();
    let mut bytes = header(0, 1, 96);
    bytes.extend(track_with_length(&body, 6));

    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_eof());
    // the meta type byte sits just past the declared end
    assert_eq!(err.position(), 14 + 8 + 6);
}

#[test]
fn declared_length_past_end_of_input() {
    let body = two_events();
    let mut bytes = header(0, 1, 96);
    bytes.extend(track_with_length(&body, 100));

    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_eof());
    assert_eq!(err.position(), 14 + 8);
}

#[test]
fn next_track_starts_at_declared_end() {
    let first = two_events();
    let second = Body::new().event(0, &[0xC3, 0x05]).build();
    let bytes = smf(1, 96, &[&first, &second]);

    let file = MidiFile::parse(&bytes).unwrap();
    assert_eq!(file.tracks()[0].byte_length(), 8);
    assert_eq!(file.tracks()[1].events().len(), 1);
    assert_eq!(
        file.tracks()[1].events()[0].message(),
        &TrackMessage::ChannelVoice(ChannelVoiceMessage::new(
            Channel::Four,
            VoiceEvent::ProgramChange { program: 5 }
        ))
    );
}

#[test]
fn rejects_wrong_track_id() {
    let mut bytes = header(0, 1, 96);
    let mut chunk = track(&two_events());
    chunk[..4].copy_from_slice(b"MTrx");
    bytes.extend(chunk);

    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.position(), 14);
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::Chunk(ChunkError::NotTrack(*b"MTrx")))
    );
}

#[test]
fn empty_track() {
    let bytes = smf(0, 96, &[&[]]);
    let file = MidiFile::parse(&bytes).unwrap();
    assert!(file.tracks()[0].events().is_empty());
    assert_eq!(file.tracks()[0].length_ticks(), 0);
}

#[test]
fn truncated_channel_message() {
    let bytes = smf(0, 96, &[&[0x00, 0x90, 60]]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert!(err.is_eof());
}

#[test]
fn rejects_data_byte_with_high_bit() {
    let bytes = smf(0, 96, &[&[0x00, 0x90, 0x80, 100]]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::Event(EventError::InvalidDataByte(0x80)))
    );
}

#[test]
fn rejects_missing_status() {
    let bytes = smf(0, 96, &[&[0x00, 60, 100]]);
    let err = MidiFile::parse(&bytes).unwrap_err();
    assert_eq!(err.position(), 14 + 8 + 1);
    assert_eq!(
        err.parse_error(),
        Some(&ParseError::Event(EventError::MissingStatus(60)))
    );
}
