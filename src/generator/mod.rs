//! Random file generation.
//!
//! Produces a file of alphanumeric characters by drawing fixed-size chunks
//! from a caller-supplied random source and appending them to the output one
//! after another. The random source is created once by the caller and passed
//! down by `&mut` reference, so a whole run consumes a single seeded stream.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::config::GeneratorConfig;

pub use chunk::{ALPHABET, generate_chunk};

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("failed to open {} for writing: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write chunk {iteration} to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        iteration: u64,
        #[source]
        source: io::Error,
    },
}

pub struct RandomFileGenerator {
    pub config: GeneratorConfig,
}

#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub path: PathBuf,
    pub iterations: u64,
    pub bytes_written: u64,
    pub elapsed: Duration,
}

impl RandomFileGenerator {
    /// Creates a generator for the given output settings.
    ///
    /// # Examples
    ///
    /// ```
    /// # use create_large_file::config::GeneratorConfig;
    /// # use create_large_file::generator::RandomFileGenerator;
    /// let generator = RandomFileGenerator::new(GeneratorConfig::default());
    /// assert_eq!(generator.config.chunk_size, 10_000_000);
    /// ```
    pub fn new(config: GeneratorConfig) -> Self {
        RandomFileGenerator { config }
    }
}

impl GenerationReport {
    pub fn throughput_mbs(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        self.bytes_written as f64 / 1_000_000.0 / secs
    }
}

mod chunk;
mod write;
