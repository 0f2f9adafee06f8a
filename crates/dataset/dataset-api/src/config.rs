//! Dataset configuration types.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the source table, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/monthly_region_births.csv";

/// Configuration for loading the source table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path to the CSV source file
    pub path: PathBuf,
}

impl DatasetConfig {
    /// Create a configuration pointing at a specific file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the source file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

/// Builder for DatasetConfig.
#[derive(Debug, Default)]
pub struct DatasetConfigBuilder {
    path: Option<PathBuf>,
}

impl DatasetConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source file path.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Build the configuration, falling back to the default path.
    pub fn build(self) -> DatasetConfig {
        DatasetConfig {
            path: self.path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH)),
        }
    }
}
