//! Drives every strategy over identical batches, accumulating each one's
//! total count and wall-clock time, and verifies the totals agree.

use std::time::{Duration, Instant};

use bitpat_core::{LutMatcher, PatternMatcher, SlidingWindowMatcher, StateMachineMatcher};
use thiserror::Error;
use tracing::{enabled, trace, Level};

/// One named strategy plus its running totals.
pub struct Contender {
    name: &'static str,
    matcher: Box<dyn PatternMatcher>,
    total: u64,
    elapsed: Duration,
}

impl Contender {
    pub fn new(name: &'static str, matcher: Box<dyn PatternMatcher>) -> Self {
        Self {
            name,
            matcher,
            total: 0,
            elapsed: Duration::ZERO,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cumulative pattern occurrences over every batch so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Wall-clock time spent inside this contender's `process` loop.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    fn run(&mut self, samples: &[u8]) {
        let start = Instant::now();
        let mut matched = 0u64;
        for &sample in samples {
            matched += u64::from(self.matcher.process(sample));
        }
        self.elapsed += start.elapsed();
        self.total += matched;
        trace!(
            strategy = self.name,
            batch_len = samples.len(),
            matched,
            total = self.total,
            "batch complete"
        );
    }
}

/// Two contenders reported different cumulative totals for the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("strategy {name} reported {total} matches, expected {expected} (after {bytes} bytes)")]
pub struct Disagreement {
    pub name: &'static str,
    pub total: u64,
    pub expected: u64,
    pub bytes: u64,
}

/// The comparator: feeds one batch at a time to every contender.
pub struct Race {
    contenders: Vec<Contender>,
    bytes: u64,
}

impl Race {
    /// All three strategies from fresh state. The LUT table is built here,
    /// before any batch is timed.
    pub fn standard() -> Self {
        Self::new(vec![
            Contender::new("state-machine", Box::new(StateMachineMatcher::new())),
            Contender::new("sliding-window", Box::new(SlidingWindowMatcher::new())),
            Contender::new("lut", Box::new(LutMatcher::new())),
        ])
    }

    pub fn new(contenders: Vec<Contender>) -> Self {
        Self {
            contenders,
            bytes: 0,
        }
    }

    /// Feed the same batch to every contender, timing each one separately.
    pub fn run_batch(&mut self, samples: &[u8]) {
        if enabled!(Level::TRACE) {
            for &sample in samples {
                trace!("sample {sample:#04x} = {sample:08b}");
            }
        }
        for contender in &mut self.contenders {
            contender.run(samples);
        }
        self.bytes += samples.len() as u64;
    }

    /// Total bytes streamed so far.
    pub fn bytes(&self) -> u64 {
        self.bytes
    }

    pub fn contenders(&self) -> &[Contender] {
        &self.contenders
    }

    /// Check the cross-strategy invariant: every contender's total matches
    /// the first one's. Returns the agreed total.
    pub fn verify(&self) -> Result<u64, Disagreement> {
        let Some(first) = self.contenders.first() else {
            return Ok(0);
        };
        for contender in &self.contenders[1..] {
            if contender.total != first.total {
                return Err(Disagreement {
                    name: contender.name,
                    total: contender.total,
                    expected: first.total,
                    bytes: self.bytes,
                });
            }
        }
        Ok(first.total)
    }
}
