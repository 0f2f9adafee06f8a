//! Forecast Facade
//!
//! Re-exports the full forecasting stack: the `Forecaster` contract and
//! series model from the SPI, configuration from the API, and the two
//! back-ends from core.
//!
//! # Example
//!
//! ```no_run
//! use forecast_facade::*;
//! use dataset_spi::Month;
//!
//! let points: Vec<MonthlyPoint> = (0..24)
//!     .map(|i| MonthlyPoint::new(2020 + i / 12, Month::from_number(i as u32 % 12 + 1).unwrap(), 100.0))
//!     .collect();
//! let series = MonthlySeries::new(points);
//!
//! let forecaster = SeasonalTrendForecaster::default();
//! let result = forecaster.fit(&series, DEFAULT_HORIZON).unwrap();
//! assert_eq!(result.future.len(), DEFAULT_HORIZON);
//! ```

pub use forecast_api::*;
pub use forecast_core::*;
pub use forecast_spi::*;
