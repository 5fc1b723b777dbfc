//! Shape-count splitting
//!
//! A time quantity (hour mod 12, or minute divided into five-minute
//! buckets) is displayed as two shapes whose edge counts sum to it.
//! The choice among valid splits is randomized so the face varies
//! from one redraw to the next.

use rand::RngCore;

/// Maximum edge count a single shape can display
pub const MAX_EDGES: u8 = 6;

/// A time quantity in `[0, 11]` to be encoded as a shape pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bucket(u8);

impl Bucket {
    /// Create a bucket from a raw value.
    ///
    /// # Panics
    ///
    /// Panics if `value > 11`. Callers derive values from bounded
    /// modular arithmetic, so an out-of-range value is a contract
    /// violation, not a recoverable error.
    pub fn new(value: u8) -> Self {
        assert!(value <= 11, "bucket out of range");
        Self(value)
    }

    /// Bucket for an hour in 24-hour form
    pub fn from_hour(hour: u8) -> Self {
        Self::new(hour % 12)
    }

    /// Bucket for a minute, quantized to five-minute steps
    pub fn from_minute(minute: u8) -> Self {
        Self::new((minute % 60) / 5)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// The two edge counts a bucket is split into for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShapePair {
    pub first: u8,
    pub second: u8,
}

impl ShapePair {
    pub fn sum(self) -> u8 {
        self.first + self.second
    }
}

/// Split a bucket into a pair of edge counts summing to it, with both
/// halves in `[0, MAX_EDGES]`.
///
/// The randomized choice draws from the injected generator; seed it
/// once at process start. By case:
///
/// - 0 splits deterministically into (0, 0)
/// - 1 is a coin flip between (1, 0) and (0, 1)
/// - 2..=6 picks the first half uniformly from `0..=b`
/// - 7..=11 keeps both halves near the six-edge maximum
pub fn split(bucket: Bucket, rng: &mut impl RngCore) -> ShapePair {
    let b = bucket.value();
    match b {
        0 => ShapePair { first: 0, second: 0 },
        1 => {
            if rng.next_u32() % 2 == 0 {
                ShapePair { first: 1, second: 0 }
            } else {
                ShapePair { first: 0, second: 1 }
            }
        }
        2..=6 => {
            let first = (rng.next_u32() % (b as u32 + 1)) as u8;
            ShapePair {
                first,
                second: b - first,
            }
        }
        _ => {
            // The modulus is 12 - b, so `first` ranges over [b-6, 5]:
            // a 6-edge first shape is never chosen and b = 11 always
            // produces (5, 6). Long-standing display behavior; keep it
            // unless the upper-bucket visuals are deliberately revised.
            let first = (b - MAX_EDGES) + (rng.next_u32() % (12 - b) as u32) as u8;
            ShapePair {
                first,
                second: b - first,
            }
        }
    }
}
