//! Cross-strategy equivalence: the three matchers must never disagree on the
//! cumulative count for any byte sequence, from any split of that sequence.

use bitpat_core::{LutMatcher, PatternMatcher, SlidingWindowMatcher, StateMachineMatcher};
use proptest::prelude::*;

fn run(matcher: &mut dyn PatternMatcher, bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .map(|&sample| u64::from(matcher.process(sample)))
        .sum()
}

/// Totals from fresh instances of all three strategies, in a fixed order.
fn totals(bytes: &[u8]) -> [u64; 3] {
    [
        run(&mut StateMachineMatcher::new(), bytes),
        run(&mut SlidingWindowMatcher::new(), bytes),
        run(&mut LutMatcher::new(), bytes),
    ]
}

#[test]
fn empty_stream_counts_nothing() {
    assert_eq!(totals(&[]), [0, 0, 0]);
}

#[test]
fn fixed_vectors_agree_on_known_counts() {
    assert_eq!(totals(&[0b1100_0000]), [1, 1, 1]);
    assert_eq!(totals(&[0x00]), [0, 0, 0]);
    assert_eq!(totals(&[0xFF, 0x80]), [1, 1, 1]);
    // 11111111 10000000 11000000 00000000: one boundary match, one inside
    // the third sample.
    assert_eq!(totals(&[0xFF, 0x80, 0b1100_0000, 0x00]), [2, 2, 2]);
}

#[test]
fn cross_boundary_match_belongs_to_the_second_sample() {
    let mut sm = StateMachineMatcher::new();
    let mut sw = SlidingWindowMatcher::new();
    let mut lut = LutMatcher::new();
    for matcher in [&mut sm as &mut dyn PatternMatcher, &mut sw, &mut lut] {
        assert_eq!(matcher.process(0xFF), 0);
        assert_eq!(matcher.process(0x80), 1);
    }
}

#[test]
fn lut_matches_sliding_window_for_every_combined_index() {
    // Exhaustive over the full 10-bit (context, sample) space, fed as the
    // same two synthetic bytes the table build derives from the index.
    for combined in 0..1u16 << 10 {
        let hi = (combined >> 8) as u8;
        let lo = (combined & 0xFF) as u8;
        let mut sw = SlidingWindowMatcher::new();
        let mut lut = LutMatcher::new();
        let expected = sw.process(hi) + sw.process(lo);
        let got = lut.process(hi) + lut.process(lo);
        assert_eq!(got, expected, "combined index {combined:#05x}");
    }
}

proptest! {
    #[test]
    fn strategies_agree_on_any_stream(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let [sm, sw, lut] = totals(&bytes);
        prop_assert_eq!(sm, sw);
        prop_assert_eq!(sw, lut);
    }

    #[test]
    fn split_feeding_matches_a_single_pass(
        bytes in prop::collection::vec(any::<u8>(), 0..512),
        split in any::<prop::sample::Index>(),
    ) {
        let cut = split.index(bytes.len() + 1);
        let (head, tail) = bytes.split_at(cut);

        let mut sm = StateMachineMatcher::new();
        let mut sw = SlidingWindowMatcher::new();
        let mut lut = LutMatcher::new();
        let resumed = [
            run(&mut sm, head) + run(&mut sm, tail),
            run(&mut sw, head) + run(&mut sw, tail),
            run(&mut lut, head) + run(&mut lut, tail),
        ];
        prop_assert_eq!(resumed, totals(&bytes));
    }

    #[test]
    fn reruns_from_fresh_state_are_deterministic(
        bytes in prop::collection::vec(any::<u8>(), 0..512),
    ) {
        prop_assert_eq!(totals(&bytes), totals(&bytes));
    }
}
