use pretty_assertions::assert_eq;
use smfread::prelude::*;

/// `0rrhhhhh mm ss ff sf`
fn offset_bytes(rate: u8, hour: u8, minute: u8, second: u8, frame: u8, subframe: u8) -> [u8; 5] {
    [(rate << 5) | (hour & 0x1F), minute, second, frame, subframe]
}

#[test]
fn wrong_payload_length() {
    for len in [0, 1, 4, 6, 10] {
        let data = vec![0u8; len];
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::Length(len)));
    }
}

#[test]
fn rate_bits_above_three() {
    for rate in 4..=7 {
        let data = offset_bytes(rate, 1, 2, 3, 4, 5);
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::TrackFrame(rate)));
    }
}

#[test]
fn hour_out_of_range() {
    for hour in 24..=31 {
        let data = offset_bytes(0, hour, 0, 0, 0, 0);
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::HourOffset(hour)));
    }
}

#[test]
fn minute_and_second_out_of_range() {
    for value in [60, 61, 99, 255] {
        assert_eq!(
            SmpteOffset::parse(&offset_bytes(1, 12, value, 30, 0, 0)),
            Err(SmpteError::MinuteOffset(value))
        );
        assert_eq!(
            SmpteOffset::parse(&offset_bytes(1, 12, 30, value, 0, 0)),
            Err(SmpteError::SecondOffset(value))
        );
    }
}

#[test]
fn subframe_out_of_range() {
    for subframe in [100, 128, 255] {
        let data = offset_bytes(2, 0, 0, 0, 0, subframe);
        assert_eq!(SmpteOffset::parse(&data), Err(SmpteError::Subframe(subframe)));
    }
}

#[test]
fn first_invalid_field_is_reported() {
    assert_eq!(
        SmpteOffset::parse(&offset_bytes(0, 25, 61, 61, 0, 100)),
        Err(SmpteError::HourOffset(25))
    );
    assert_eq!(
        SmpteOffset::parse(&offset_bytes(0, 23, 61, 61, 0, 100)),
        Err(SmpteError::MinuteOffset(61))
    );
    assert_eq!(
        SmpteOffset::parse(&offset_bytes(0, 23, 59, 61, 0, 100)),
        Err(SmpteError::SecondOffset(61))
    );
}

#[test]
fn rate_and_hour_share_a_byte() {
    let rates = [
        SmpteFps::TwentyFour,
        SmpteFps::TwentyFive,
        SmpteFps::TwentyNine,
        SmpteFps::Thirty,
    ];
    for (bits, fps) in rates.into_iter().enumerate() {
        for hour in 0..=23 {
            let offset = SmpteOffset::parse(&offset_bytes(bits as u8, hour, 0, 0, 0, 0)).unwrap();
            assert_eq!((offset.fps, offset.hour), (fps, hour));
        }
    }
}

#[test]
fn frame_numbers_are_not_checked_against_the_rate() {
    let offset = SmpteOffset::parse(&offset_bytes(0, 0, 0, 0, 24, 0)).unwrap();
    assert_eq!(offset.frame, 24);
}

#[test]
fn micros_just_before_midnight() {
    let offset = SmpteOffset::parse(&offset_bytes(0, 23, 59, 59, 23, 99)).unwrap();
    let expected = 86_399_000_000.0 + (23.99 / 24.0) * 1_000_000.0;
    assert!((offset.as_micros() - expected).abs() < 1.0);

    let midnight = SmpteOffset::parse(&offset_bytes(1, 0, 0, 0, 0, 0)).unwrap();
    assert_eq!(midnight.as_micros(), 0.0);
}

#[test]
fn drop_frame_is_1001_over_30000_seconds() {
    let offset = SmpteOffset::parse(&offset_bytes(2, 0, 0, 0, 1, 0)).unwrap();
    assert!((offset.as_micros() - 1_001_000.0 / 30.0).abs() < 0.001);
}
