//! Forecast Service Provider Interface
//!
//! Defines the forecaster capability, the monthly series model, and errors.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::Forecaster;
pub use error::{ForecastError, Result};
pub use model::{
    month_index, next_stamp, ForecastPoint, ForecastResult, MonthlyPoint, MonthlySeries,
};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dataset_spi::Month;

    #[test]
    fn test_forecaster_is_object_safe() {
        fn _takes_dyn(_f: &dyn Forecaster) {}
    }

    #[test]
    fn test_series_reexports() {
        let series = MonthlySeries::new(vec![MonthlyPoint::new(2020, Month::January, 1.0)]);
        assert_eq!(series.last_stamp(), Some((2020, Month::January)));
    }
}
