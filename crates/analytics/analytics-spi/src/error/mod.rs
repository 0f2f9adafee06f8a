//! Error types for analytics operations.

mod analytics_error;

pub use analytics_error::{AnalyticsError, Result};
