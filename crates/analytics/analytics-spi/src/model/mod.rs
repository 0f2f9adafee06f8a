//! Analytics model types.

mod aggregates;
mod filter_spec;
mod heatmap;
mod kpi;

pub use aggregates::{
    AgeShare, AggregateReport, MonthlyAverage, RegionShare, TrendSeries, YearlyTotal,
};
pub use filter_spec::FilterSpec;
pub use heatmap::HeatmapMatrix;
pub use kpi::KpiSummary;
