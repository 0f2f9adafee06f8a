//! Building monthly series from a birth table.
//!
//! Aggregates count rows into a univariate series, one value per observed
//! (year, month). Unlike the calendar-keyed aggregates, a month label that
//! does not resolve here is an error: a forecast input with silently dropped
//! rows would be misleading.

use std::collections::BTreeMap;

use dataset_spi::{BirthTable, Month};
use forecast_spi::{ForecastError, MonthlyPoint, MonthlySeries, Result};

/// Total births per observed month across the whole table.
///
/// Months absent from the table are absent from the series; callers decide
/// whether gaps are acceptable.
pub fn selection_series(table: &BirthTable) -> Result<MonthlySeries> {
    monthly_sums(table, |_| true)
}

/// Total births per observed month for a single region.
pub fn region_series(table: &BirthTable, region: &str) -> Result<MonthlySeries> {
    monthly_sums(table, |r| r == region)
}

fn monthly_sums(table: &BirthTable, keep: impl Fn(&str) -> bool) -> Result<MonthlySeries> {
    let mut sums: BTreeMap<(i32, Month), f64> = BTreeMap::new();
    for record in table.records() {
        if !keep(&record.region) {
            continue;
        }
        let month = Month::from_name(&record.month)
            .ok_or_else(|| ForecastError::UnrecognizedMonth(record.month.clone()))?;
        *sums.entry((record.year, month)).or_insert(0.0) += record.birth_count as f64;
    }

    let points = sums
        .into_iter()
        .map(|((year, month), value)| MonthlyPoint::new(year, month, value))
        .collect();
    Ok(MonthlySeries::new(points))
}
