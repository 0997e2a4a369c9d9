#![forbid(unsafe_code)]

//! The collaborators around [`bitpat_core`]'s matchers: byte sources,
//! batching, per-strategy wall-clock accumulation, and the comparator that
//! drives every strategy over identical bytes and checks they agree.
//!
//! The core itself is pure state transitions; everything that can fail or
//! touch the outside world (entropy, files, clocks) lives here.

mod race;
mod source;

pub use race::{Contender, Disagreement, Race};
pub use source::{ByteSource, FileSource, RngSource, SourceError};
