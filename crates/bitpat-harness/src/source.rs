//! Where sample bytes come from. Sources are opaque to the matchers: any
//! order-preserving stream of arbitrary byte values works.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    /// A bounded source ran dry before the requested batch was filled.
    #[error("byte source exhausted after {delivered} bytes")]
    Exhausted { delivered: u64 },

    #[error("byte source I/O error")]
    Io(#[from] io::Error),

    #[error("entropy source failed")]
    Entropy(#[from] rand::Error),
}

/// An order-preserving stream of sample bytes.
pub trait ByteSource {
    /// Fill `buf` completely with the next bytes of the stream.
    ///
    /// On error the buffer contents are unspecified and the source should not
    /// be reused.
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SourceError>;
}

/// Samples drawn from a random number generator.
///
/// [`RngSource::os`] pulls OS entropy (the unbounded default);
/// [`RngSource::seeded`] yields a reproducible stream for debugging and
/// tests.
#[derive(Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl RngSource<OsRng> {
    pub fn os() -> Self {
        Self { rng: OsRng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> ByteSource for RngSource<R> {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        self.rng.try_fill_bytes(buf)?;
        Ok(())
    }
}

/// Samples read from a file or device path (e.g. `/dev/urandom`).
#[derive(Debug)]
pub struct FileSource {
    reader: BufReader<File>,
    delivered: u64,
}

impl FileSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        Ok(Self {
            reader: BufReader::new(File::open(path)?),
            delivered: 0,
        })
    }
}

impl ByteSource for FileSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<(), SourceError> {
        match self.reader.read_exact(buf) {
            Ok(()) => {
                self.delivered += buf.len() as u64;
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Err(SourceError::Exhausted {
                delivered: self.delivered,
            }),
            Err(err) => Err(err.into()),
        }
    }
}
