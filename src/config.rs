use std::path::PathBuf;

/// Sizes are decimal, same as the `GB`/`MB` suffixes used elsewhere.
pub const GB: u64 = 1_000_000_000;
pub const FILE_SIZE: u64 = GB; // 1 GB file
pub const CHUNK_SIZE: usize = 10_000_000; // chunked to reduce the number of disk accesses

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub file_path: PathBuf,
    pub file_size: u64,
    pub chunk_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            file_path: PathBuf::from(default_file_name(FILE_SIZE)),
            file_size: FILE_SIZE,
            chunk_size: CHUNK_SIZE,
        }
    }
}

impl GeneratorConfig {
    pub fn new(file_path: impl Into<PathBuf>, file_size: u64, chunk_size: usize) -> Self {
        GeneratorConfig {
            file_path: file_path.into(),
            file_size,
            chunk_size,
        }
    }

    /// Number of whole chunks that fit in `file_size`. Any remainder is dropped.
    pub fn iterations(&self) -> u64 {
        self.file_size.checked_div(self.chunk_size as u64).unwrap_or(0)
    }

    /// Bytes a run will actually write, which is less than `file_size` when
    /// it is not a multiple of `chunk_size`.
    pub fn expected_len(&self) -> u64 {
        self.iterations() * self.chunk_size as u64
    }
}

pub fn default_file_name(file_size: u64) -> String {
    format!("./large_file_{}_gb.txt", file_size / GB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.file_path, PathBuf::from("./large_file_1_gb.txt"));
        assert_eq!(config.file_size, 1_000_000_000);
        assert_eq!(config.chunk_size, 10_000_000);
        assert_eq!(config.iterations(), 100);
        assert_eq!(config.expected_len(), config.file_size);
    }

    #[test]
    fn test_default_file_name() {
        assert_eq!(default_file_name(GB), "./large_file_1_gb.txt");
        assert_eq!(default_file_name(5 * GB), "./large_file_5_gb.txt");
        // below a gigabyte the integer division floors to zero
        assert_eq!(default_file_name(500_000_000), "./large_file_0_gb.txt");
    }

    #[test]
    fn test_iterations_drop_remainder() {
        let config = GeneratorConfig::new("out.txt", 35, 10);
        assert_eq!(config.iterations(), 3);
        assert_eq!(config.expected_len(), 30);
        assert!(config.expected_len() < config.file_size);
    }

    #[test]
    fn test_zero_chunk_size() {
        let config = GeneratorConfig::new("out.txt", 30, 0);
        assert_eq!(config.iterations(), 0);
        assert_eq!(config.expected_len(), 0);
    }

    #[test]
    fn test_chunk_larger_than_file() {
        let config = GeneratorConfig::new("out.txt", 5, 10);
        assert_eq!(config.iterations(), 0);
    }
}
