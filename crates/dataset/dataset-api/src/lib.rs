//! Dataset Consumer API
//!
//! Configuration types for dataset consumers.

mod config;

pub use config::{DatasetConfig, DatasetConfigBuilder, DEFAULT_DATA_PATH};

// Re-export SPI types
pub use dataset_spi::{AgeGroup, BirthRecord, BirthTable, DatasetError, Month, Result, TableSource};
