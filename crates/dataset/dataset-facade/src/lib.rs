//! Dataset Facade
//!
//! Unified re-exports for the dataset module.
//!
//! This facade provides a single entry point for all dataset functionality:
//! - `dataset_spi` - Traits, types, and errors for table sources
//! - `dataset_api` - Configuration types and builders
//! - `dataset_core` - Implementations (CSV source, table store)
//!
//! # Example
//!
//! ```rust,ignore
//! use dataset_facade::{shared_table, CsvTableSource, DatasetConfig};
//!
//! let source = CsvTableSource::new(DatasetConfig::default());
//! let table = shared_table(&source).expect("load birth table");
//! println!("{} rows", table.len());
//! ```

// Re-export everything from SPI
pub use dataset_spi::*;

// Re-export everything from API
pub use dataset_api::*;

// Re-export everything from Core
pub use dataset_core::*;
