//! Forecast API
//!
//! Configuration and builders for the forecasting back-ends.

pub mod config;

pub use config::{
    clamp_sarima_horizon, clamp_trend_horizon, AutoSarimaConfig, AutoSarimaConfigBuilder,
    ScoreMetric, SeasonalTrendConfig, SeasonalTrendConfigBuilder, DEFAULT_HORIZON,
    SARIMA_HORIZON_MAX, SARIMA_HORIZON_MIN, TREND_HORIZON_MAX, TREND_HORIZON_MIN,
};

// Re-export SPI types so downstream crates only need one import
pub use forecast_spi::{
    ForecastError, ForecastPoint, ForecastResult, Forecaster, MonthlyPoint, MonthlySeries, Result,
};
