//! Error types for dataset operations.

mod dataset_error;

pub use dataset_error::{DatasetError, Result};
