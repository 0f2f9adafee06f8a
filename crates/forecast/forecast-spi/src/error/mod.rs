//! Error types for forecast operations.

mod forecast_error;

pub use forecast_error::{ForecastError, Result};
