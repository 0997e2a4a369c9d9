//! Lookup-table strategy: precompute every context+sample window count once.

use std::sync::OnceLock;

use crate::window;
use crate::PatternMatcher;

/// Number of distinct (2 context bits, 8 sample bits) combined indexes.
const TABLE_LEN: usize = 1 << 10;

/// Mask reducing a `prev << 8 | sample` view to the table index.
const COMBINED_MASK: u16 = (TABLE_LEN - 1) as u16;

/// Built on first [`LutMatcher::new`] and read-only afterwards, so any number
/// of matcher instances (each with its own context cursor) can share it.
static TABLE: OnceLock<[u8; TABLE_LEN]> = OnceLock::new();

/// Build-time reuse of the sliding-window kernel: feed the index's high part
/// and low byte through it as two consecutive samples from a zeroed context.
/// The high part is at most 2 bits wide, so no window ending inside it can
/// hold the pattern; each entry is exactly the count ending in the low byte.
fn build_table() -> [u8; TABLE_LEN] {
    let mut table = [0u8; TABLE_LEN];
    for (combined, entry) in table.iter_mut().enumerate() {
        let hi = (combined >> 8) as u8;
        let lo = (combined & 0xFF) as u8;
        let matched = window::count_windows(0x00, hi) + window::count_windows(hi, lo);
        // At most eight windows end inside one sample, so u8 cannot overflow.
        *entry = matched as u8;
    }
    table
}

/// Counts occurrences with a single table lookup per sample.
#[derive(Debug)]
pub struct LutMatcher {
    prev: u8,
    table: &'static [u8; TABLE_LEN],
}

impl LutMatcher {
    /// Triggers the one-time table build; later instances reuse the table.
    pub fn new() -> Self {
        Self {
            prev: 0x00,
            table: TABLE.get_or_init(build_table),
        }
    }
}

impl Default for LutMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternMatcher for LutMatcher {
    fn process(&mut self, sample: u8) -> u32 {
        let combined = ((u16::from(self.prev) << 8) | u16::from(sample)) & COMBINED_MASK;
        self.prev = sample;
        u32::from(self.table[usize::from(combined)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_single_pattern_at_byte_start() {
        assert_eq!(LutMatcher::new().process(0b1100_0000), 1);
    }

    #[test]
    fn zero_byte_has_no_matches() {
        assert_eq!(LutMatcher::new().process(0x00), 0);
    }

    #[test]
    fn counts_match_straddling_the_boundary() {
        let mut m = LutMatcher::new();
        assert_eq!(m.process(0xFF), 0);
        assert_eq!(m.process(0x80), 1);
    }

    #[test]
    fn instances_share_one_table() {
        let a = LutMatcher::new();
        let b = LutMatcher::new();
        assert!(std::ptr::eq(a.table, b.table));
    }
}
