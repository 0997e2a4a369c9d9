#![forbid(unsafe_code)]

//! Streams bytes through all three pattern-counting strategies and reports
//! each one's total count and accumulated wall-clock time.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bitpat_harness::{ByteSource, FileSource, Race, RngSource};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "bitpat",
    about = "Count occurrences of the bit pattern 110 in a byte stream, \
             comparing three equivalent strategies"
)]
struct Args {
    /// Total number of bytes to stream through every strategy.
    #[arg(long, default_value_t = 10_000_000)]
    bytes: u64,

    /// Bytes per timed batch.
    #[arg(long, default_value_t = 1000)]
    batch_size: usize,

    /// Read samples from this file or device instead of the OS entropy
    /// source (e.g. /dev/urandom, or a capture to replay).
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Seed a deterministic RNG instead of the OS entropy source.
    #[arg(long, conflicts_with = "input")]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if args.batch_size == 0 {
        bail!("--batch-size must be nonzero");
    }

    let mut source: Box<dyn ByteSource> = match (&args.input, args.seed) {
        (Some(path), _) => Box::new(
            FileSource::open(path).with_context(|| format!("open {}", path.display()))?,
        ),
        (None, Some(seed)) => Box::new(RngSource::seeded(seed)),
        (None, None) => Box::new(RngSource::os()),
    };

    let mut race = Race::standard();
    let mut batch = vec![0u8; args.batch_size];
    let mut remaining = args.bytes;
    while remaining > 0 {
        let len = remaining.min(batch.len() as u64) as usize;
        let chunk = &mut batch[..len];
        source.fill(chunk).context("refill sample batch")?;
        race.run_batch(chunk);
        remaining -= len as u64;
    }

    for contender in race.contenders() {
        println!(
            "{:<15} total count: {:>10}, time: {:.2} ms",
            contender.name(),
            contender.total(),
            contender.elapsed().as_secs_f64() * 1e3,
        );
    }
    race.verify()
        .with_context(|| format!("strategy totals diverged over {} bytes", race.bytes()))?;
    Ok(())
}
