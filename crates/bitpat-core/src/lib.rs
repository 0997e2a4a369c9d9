#![forbid(unsafe_code)]

//! Streaming occurrence counter for a fixed 3-bit pattern.
//!
//! Input arrives one byte (one *sample*) at a time. The logical bit stream is
//! the concatenation of every sample's bits, MSB first, and we count how often
//! the pattern [`PATTERN`] (`110`) occurs in that stream — including
//! occurrences that straddle a sample boundary, which is why every strategy
//! carries cross-call context.
//!
//! Three strategies implement the same [`PatternMatcher`] contract:
//!
//! - [`StateMachineMatcher`]: an explicit three-state automaton advanced one
//!   bit at a time;
//! - [`SlidingWindowMatcher`]: keeps the previous sample and scans all eight
//!   3-bit windows of a 16-bit combined view;
//! - [`LutMatcher`]: one precomputed 1024-entry table lookup per sample.
//!
//! They are interchangeable: for any byte sequence, all three report the same
//! cumulative total. Counting is overlap-friendly (the window slides by one
//! bit, not by the pattern length), and each occurrence is attributed to
//! exactly one sample — the one containing its final bit. That attribution
//! rule is what makes per-sample counts from different strategies directly
//! comparable; changing it would silently break the equivalence.

mod automaton;
mod lut;
mod window;

pub use automaton::StateMachineMatcher;
pub use lut::LutMatcher;
pub use window::SlidingWindowMatcher;

/// The bit pattern being counted.
pub const PATTERN: u16 = 0b110;

/// Width of [`PATTERN`] in bits.
pub const PATTERN_BITS: u32 = 3;

/// Mask selecting one pattern-width window from a shifted combined view.
pub(crate) const WINDOW_MASK: u16 = (1u16 << PATTERN_BITS) - 1;

/// One pattern-counting strategy, driven a sample at a time.
///
/// `process` is total: every byte value is valid input and no call can fail.
/// State is created only through the strategy's constructor, so a matcher can
/// never be observed in an invalid configuration.
pub trait PatternMatcher {
    /// Consume one sample and return the number of pattern occurrences whose
    /// final bit lies within this sample.
    ///
    /// The matcher updates its internal context so that occurrences spanning
    /// into the next sample are resolved by the next call.
    fn process(&mut self, sample: u8) -> u32;
}
