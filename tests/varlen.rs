mod common;

use common::varlen;
use pretty_assertions::assert_eq;
use smfread::prelude::*;

fn decode(bytes: &[u8]) -> (u64, usize) {
    let mut reader = Reader::from_byte_slice(bytes);
    let value = reader.read_varlen().unwrap();
    (value, reader.buffer_position())
}

#[test]
fn every_value_up_to_21_bits() {
    for value in 0..(1u64 << 21) {
        let encoded = varlen(value);
        assert_eq!(decode(&encoded), (value, encoded.len()), "{value}");
    }
}

#[test]
fn sampled_values_up_to_28_bits() {
    for value in ((1u64 << 21)..(1u64 << 28)).step_by(997) {
        let encoded = varlen(value);
        assert_eq!(encoded.len(), 4);
        assert_eq!(decode(&encoded), (value, 4), "{value}");
    }
}

#[test]
fn group_boundaries() {
    for bits in [7, 14, 21, 28] {
        let edge = 1u64 << bits;
        for value in [edge - 1, edge] {
            let encoded = varlen(value);
            assert_eq!(encoded.len(), bits / 7 + usize::from(value == edge));
            assert_eq!(decode(&encoded).0, value);
        }
    }
}

#[test]
fn stops_after_the_last_group() {
    let mut bytes = varlen(0x0FFF_FFFF);
    bytes.extend_from_slice(&[0x81, 0x00]);

    let mut reader = Reader::from_byte_slice(&bytes);
    assert_eq!(reader.read_varlen().unwrap(), 0x0FFF_FFFF);
    assert_eq!(reader.read_varlen().unwrap(), 128);
    assert!(reader.is_empty());
}

#[test]
fn longer_than_four_bytes() {
    let value = (1u64 << 35) + 5;
    let encoded = varlen(value);
    assert_eq!(encoded.len(), 6);
    assert_eq!(decode(&encoded), (value, 6));
}

#[test]
fn unterminated_runs_out_of_data() {
    let mut reader = Reader::from_byte_slice(&[0x81, 0x80, 0x80]);
    let err = reader.read_varlen().unwrap_err();
    assert!(err.is_eof());
    assert_eq!(reader.buffer_position(), 0);
}
