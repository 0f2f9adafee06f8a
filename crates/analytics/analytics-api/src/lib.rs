//! Analytics Consumer API
//!
//! Builders for analytics consumers.

mod builder;

pub use builder::FilterSpecBuilder;

// Re-export SPI types
pub use analytics_spi::{
    AgeShare, AggregateReport, AnalyticsError, FilterSpec, HeatmapMatrix, KpiSummary,
    MonthlyAverage, RegionShare, Result, TrendSeries, YearlyTotal,
};
