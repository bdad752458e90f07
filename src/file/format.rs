use num_enum::{FromPrimitive, IntoPrimitive};

#[doc = r#"
The header's `format` field: how the tracks of a file relate.

Values other than 0, 1 and 2 are kept as [`FormatType::Other`]; the tracks
are still decoded.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum FormatType {
    /// Format 0: one track holding every channel
    SingleMultiChannel = 0,
    /// Format 1: tracks played at the same time
    Simultaneous = 1,
    /// Format 2: independent single-track patterns
    SequentiallyIndependent = 2,
    /// Any other format number
    #[num_enum(catch_all)]
    Other(u16),
}

#[test]
fn format_numbers() {
    assert_eq!(FormatType::from(1u16), FormatType::Simultaneous);
    assert_eq!(FormatType::from(7u16), FormatType::Other(7));
    assert_eq!(u16::from(FormatType::SequentiallyIndependent), 2);
}
