//! Configuration types for table processing and data generation

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{io_with_path, Result};

/// Column holding the sequences, as written by the generator
pub const DEFAULT_SEQUENCE_COLUMN: &str = "DNA_Sequence";

/// Thread count configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThreadCount {
    /// Use all available CPU cores
    #[default]
    Auto,
    /// Use a specific number of threads
    Fixed(usize),
}

impl ThreadCount {
    /// Get the actual number of threads to use
    pub fn get_count(&self) -> usize {
        match self {
            Self::Auto => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
            Self::Fixed(n) => (*n).max(1),
        }
    }
}

/// Parameters for loading and annotating a sequence table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessParams {
    pub sequence_column: String,
    pub thread_count: ThreadCount,
}

impl Default for ProcessParams {
    fn default() -> Self {
        Self {
            sequence_column: DEFAULT_SEQUENCE_COLUMN.to_string(),
            thread_count: ThreadCount::Auto,
        }
    }
}

impl ProcessParams {
    /// Load parameters from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| io_with_path(e, path))?;
        Ok(serde_json::from_str(&json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json_pretty()?).map_err(|e| io_with_path(e, path))
    }
}

/// Parameters for random test data generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorParams {
    pub count: usize,
    pub length: usize,
    pub header: String,
    /// Fixed RNG seed for reproducible output
    pub seed: Option<u64>,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            count: 10_000,
            length: 50,
            header: DEFAULT_SEQUENCE_COLUMN.to_string(),
            seed: None,
        }
    }
}
