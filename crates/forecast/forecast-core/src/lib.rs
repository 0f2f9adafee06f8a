//! Forecast Core
//!
//! The two forecasting back-ends and their supporting pieces: series
//! builders, accuracy metrics, the interval band, the SARIMA model, and
//! order selection.

pub mod auto;
pub mod confidence;
pub mod metrics;
pub mod sarima;
pub mod seasonal_trend;
pub mod series;

pub use auto::{tune, AutoSarimaForecaster};
pub use confidence::interval_band;
pub use sarima::SeasonalArima;
pub use seasonal_trend::{SeasonalTrend, SeasonalTrendForecaster};
pub use series::{region_series, selection_series};
