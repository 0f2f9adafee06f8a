//! Reusable widgets for the TUI.

mod chart;

pub use chart::{create_forecast_chart, create_trend_chart, ChartSeries, ForecastChartData};
