//! Analytics Service Provider Interface
//!
//! Defines the filter specification, aggregate views, and errors for the
//! descriptive-statistics layer of the dashboard.

pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use error::{AnalyticsError, Result};
pub use model::{
    AgeShare, AggregateReport, FilterSpec, HeatmapMatrix, KpiSummary, MonthlyAverage, RegionShare,
    TrendSeries, YearlyTotal,
};

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use dataset_spi::{BirthRecord, BirthTable};

    #[test]
    fn test_select_all_on_empty_table() {
        let spec = FilterSpec::select_all(&BirthTable::default());
        assert_eq!(spec.year_range, (0, 0));
        assert!(spec.regions.is_empty());
        assert_eq!(spec.months.len(), 12);
    }

    #[test]
    fn test_filter_spec_matches_reexport() {
        let table = BirthTable::new(vec![BirthRecord::new(
            2020, "January", "East", 100, 10, 40, 30, 20,
        )]);
        let spec = FilterSpec::select_all(&table);
        assert!(spec.matches(&table.records()[0]));
    }
}
