//! Explicit-automaton strategy: one transition per bit, MSB first.

use crate::PatternMatcher;

/// How much of the pattern's `11` prefix has been seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Prefix {
    /// No usable prefix (initial state, or the last bit was a `0` that did
    /// not complete a match).
    #[default]
    Empty,
    /// One leading `1` seen.
    One,
    /// `11` seen; a `0` now completes the pattern.
    OneOne,
}

/// Counts occurrences by advancing a three-state automaton one bit at a time.
#[derive(Debug, Default)]
pub struct StateMachineMatcher {
    pos: Prefix,
}

impl StateMachineMatcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PatternMatcher for StateMachineMatcher {
    fn process(&mut self, sample: u8) -> u32 {
        let mut matched = 0;
        for shift in (0..u8::BITS).rev() {
            let bit = (sample >> shift) & 1 != 0;
            self.pos = match (self.pos, bit) {
                (Prefix::Empty, true) => Prefix::One,
                (Prefix::One, true) => Prefix::OneOne,
                // A longer run of 1s still ends in a valid `11` prefix, so
                // `111...0` yields a match at the trailing zero.
                (Prefix::OneOne, true) => Prefix::OneOne,
                (Prefix::OneOne, false) => {
                    matched += 1;
                    Prefix::Empty
                }
                (_, false) => Prefix::Empty,
            };
        }
        matched
    }
}
