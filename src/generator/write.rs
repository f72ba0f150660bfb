use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use super::{GenerationReport, GeneratorError, RandomFileGenerator, generate_chunk};

impl RandomFileGenerator {
    /// Writes `iterations()` chunks of random characters to the configured
    /// path, truncating whatever was there.
    ///
    /// The file is opened before anything is generated, so a path that cannot
    /// be opened fails with [`GeneratorError::FileOpen`] without consuming the
    /// random source. The handle lives in the writer owned by this call and is
    /// closed when it goes out of scope, on success and on every error return.
    ///
    /// When `file_size` is not a multiple of `chunk_size` the trailing
    /// remainder is not written; see [`GeneratorConfig::expected_len`].
    ///
    /// [`GeneratorConfig::expected_len`]: crate::config::GeneratorConfig::expected_len
    pub fn run<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GenerationReport, GeneratorError> {
        let path = &self.config.file_path;
        let chunk_size = self.config.chunk_size;

        let file = File::create(path).map_err(|source| GeneratorError::FileOpen {
            path: path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);

        let iterations = self.config.iterations();
        info!(
            "GENERATE | writing {} chunks of {} bytes to {:?}",
            iterations, chunk_size, path
        );

        let start = Instant::now();
        let mut bytes_written: u64 = 0;
        for iteration in 0..iterations {
            let chunk = generate_chunk(rng, chunk_size);
            writer
                .write_all(&chunk)
                .map_err(|source| GeneratorError::Write {
                    path: path.clone(),
                    iteration,
                    source,
                })?;
            bytes_written += chunk.len() as u64;
            debug!("GENERATE | chunk {}/{} written", iteration + 1, iterations);
        }

        writer.flush().map_err(|source| GeneratorError::Write {
            path: path.clone(),
            iteration: iterations,
            source,
        })?;

        let report = GenerationReport {
            path: path.clone(),
            iterations,
            bytes_written,
            elapsed: start.elapsed(),
        };
        info!(
            "GENERATE | wrote {} bytes in {:.2?} ({:.1} MB/s)",
            report.bytes_written,
            report.elapsed,
            report.throughput_mbs()
        );
        Ok(report)
    }
}
