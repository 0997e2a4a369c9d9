//! Sliding-bitmask strategy: the previous sample supplies boundary context.

use crate::{PatternMatcher, PATTERN, WINDOW_MASK};

/// Count the occurrences whose final bit lies in `sample`, given the sample
/// that preceded it.
///
/// This is the shared per-byte kernel: [`SlidingWindowMatcher`] calls it on
/// every sample, and the LUT build reuses it to precompute table entries.
///
/// The combined view places `prev` in the high byte and `sample` in the low
/// byte. Shifting by 7 exposes bits `[9:7]` (two context bits plus the
/// sample's MSB); shifting by 0 exposes bits `[2:0]`. Those eight positions
/// are exactly the windows that end inside `sample`, so a match that finished
/// in `prev` is never double-counted here.
pub(crate) fn count_windows(prev: u8, sample: u8) -> u32 {
    let combined = (u16::from(prev) << 8) | u16::from(sample);
    (0..u8::BITS)
        .filter(|shift| (combined >> shift) & WINDOW_MASK == PATTERN)
        .count() as u32
}

/// Counts occurrences by masking every 3-bit window of a 16-bit combined view.
#[derive(Debug, Default)]
pub struct SlidingWindowMatcher {
    prev: u8,
}

impl SlidingWindowMatcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatternMatcher for SlidingWindowMatcher {
    fn process(&mut self, sample: u8) -> u32 {
        let matched = count_windows(self.prev, sample);
        self.prev = sample;
        matched
    }
}
