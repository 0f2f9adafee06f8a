//! Analytics Facade
//!
//! Unified re-exports for the analytics module.
//!
//! This facade provides a single entry point for all analytics functionality:
//! - `analytics_spi` - Filter spec, aggregate models, and errors
//! - `analytics_api` - Builders
//! - `analytics_core` - Filtering and aggregation implementations
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_facade::{aggregate, filter_table, FilterSpec};
//!
//! let spec = FilterSpec::select_all(&table);
//! let filtered = filter_table(&table, &spec);
//! let report = aggregate(&filtered, &spec.selected_ages());
//! println!("total births: {}", report.kpis.total_births);
//! ```

// Re-export everything from SPI
pub use analytics_spi::*;

// Re-export everything from API
pub use analytics_api::*;

// Re-export everything from Core
pub use analytics_core::*;
