//! Derived view state and display formatting.
//!
//! The view model is pure: filters in, filtered table and aggregates out.
//! Rendering reads from here and never computes aggregates itself.

use analytics_facade::{aggregate, filter_table, AggregateReport, FilterSpec};
use dataset_facade::BirthTable;

use crate::widgets::ChartSeries;

/// Everything the tabs render, recomputed on each filter change.
pub struct ViewModel {
    pub spec: FilterSpec,
    pub filtered: BirthTable,
    pub report: AggregateReport,
    /// Trend chart geometry, rebuilt with the report so draws only borrow
    pub age_chart: Vec<ChartSeries>,
    pub region_chart: Vec<ChartSeries>,
}

impl ViewModel {
    pub fn compute(table: &BirthTable, spec: FilterSpec) -> Self {
        let filtered = filter_table(table, &spec);
        let report = aggregate(&filtered, &spec.selected_ages());
        let age_chart = ChartSeries::from_trends(&report.age_trend);
        let region_chart = ChartSeries::from_trends(&report.region_trend);
        Self {
            spec,
            filtered,
            report,
            age_chart,
            region_chart,
        }
    }

    /// Regions present in the current selection, sorted.
    pub fn regions(&self) -> Vec<String> {
        self.filtered.regions()
    }
}

/// Thousands-separated count, e.g. 1234567 -> "1,234,567".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// One-decimal mean, or the missing-value placeholder.
pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{value:.1}"),
        None => "--".to_string(),
    }
}
