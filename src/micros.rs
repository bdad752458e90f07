use core::{
    fmt,
    ops::{Add, Sub},
};

/// A non-negative span or position in real time, in whole microseconds.
///
/// Produced by [`TempoMap::micros_at`](crate::file::TempoMap::micros_at)
/// when placing ticks on a clock.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UMicros(u64);

impl UMicros {
    /// Zero.
    pub const ZERO: Self = Self(0);

    /// Wrap a microsecond count
    pub const fn new(microseconds: u64) -> Self {
        Self(microseconds)
    }

    /// The microsecond count
    pub const fn us(&self) -> u64 {
        self.0
    }

    /// Round a floating point microsecond value, clamping negatives to zero
    pub(crate) fn from_f64(micros: f64) -> Self {
        if micros <= 0. {
            return Self::ZERO;
        }
        Self((micros + 0.5) as u64)
    }

    /// The value in seconds
    pub const fn as_secs_f64(&self) -> f64 {
        self.0 as f64 / 1_000_000.
    }

    /// `self - other`, or zero if `other` is later
    pub const fn saturating_sub(&self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl Add for UMicros {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sub for UMicros {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        self.saturating_sub(rhs)
    }
}

impl fmt::Display for UMicros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.0)
    }
}

#[test]
fn rounding_and_seconds() {
    assert_eq!(UMicros::from_f64(1_249_999.5), UMicros::new(1_250_000));
    assert_eq!(UMicros::from_f64(-3.), UMicros::ZERO);
    assert_eq!(UMicros::new(1_500_000).as_secs_f64(), 1.5);
    assert_eq!(UMicros::new(3) - UMicros::new(5), UMicros::ZERO);
    assert_eq!(UMicros::new(3) + UMicros::new(5), UMicros::new(8));
}
