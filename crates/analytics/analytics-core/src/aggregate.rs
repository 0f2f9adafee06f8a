//! Group-by aggregates over the filtered table.
//!
//! All aggregates recompute from scratch on each call. Grouping uses
//! `BTreeMap` so iteration order is sorted and deterministic; arg-max style
//! indicators take the first maximum in that order on ties.

use std::collections::BTreeMap;

use analytics_spi::{
    AgeShare, AggregateReport, KpiSummary, MonthlyAverage, RegionShare, TrendSeries, YearlyTotal,
};
use dataset_spi::{AgeGroup, BirthTable, Month};

use crate::heatmap::heatmap_matrix;

/// Compute every aggregate view for one render pass.
///
/// `ages` is the user's age-column selection in canonical order; it scopes
/// the age-based aggregates only and never filters rows.
pub fn aggregate(filtered: &BirthTable, ages: &[AgeGroup]) -> AggregateReport {
    tracing::debug!(rows = filtered.len(), ages = ages.len(), "recomputing aggregates");
    AggregateReport {
        kpis: kpis(filtered, ages),
        yearly: yearly_totals(filtered),
        monthly_avg: monthly_averages(filtered),
        age_share: age_share(filtered, ages),
        region_share: region_share(filtered),
        age_trend: age_trend_by_year(filtered, ages),
        region_trend: region_trend_by_year(filtered),
        heatmap: heatmap_matrix(filtered),
    }
}

/// The four scalar KPIs. Arg-max indicators are `None` over an empty table.
pub fn kpis(filtered: &BirthTable, ages: &[AgeGroup]) -> KpiSummary {
    if filtered.is_empty() {
        return KpiSummary::empty();
    }

    let mut per_region: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for record in filtered.records() {
        let entry = per_region.entry(&record.region).or_insert((0, 0));
        entry.0 += record.birth_count;
        entry.1 += 1;
    }

    // Mean over regions of each region's per-row mean.
    let avg_per_region = {
        let sum: f64 = per_region
            .values()
            .map(|(total, rows)| *total as f64 / *rows as f64)
            .sum();
        Some(sum / per_region.len() as f64)
    };

    let top_region = first_max(per_region.iter().map(|(region, (total, _))| (*region, *total)))
        .map(|r| r.to_string());

    let dominant_age_group = first_max(
        ages.iter()
            .map(|g| (*g, filtered.records().iter().map(|r| r.age_count(*g)).sum::<u64>())),
    );

    KpiSummary {
        total_births: filtered.total_births(),
        avg_per_region,
        top_region,
        dominant_age_group,
    }
}

/// Per-year birth_count sums, ascending year.
pub fn yearly_totals(filtered: &BirthTable) -> Vec<YearlyTotal> {
    let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
    for record in filtered.records() {
        *by_year.entry(record.year).or_default() += record.birth_count;
    }
    by_year
        .into_iter()
        .map(|(year, births)| YearlyTotal { year, births })
        .collect()
}

/// Mean birth_count for each of the twelve canonical months, calendar order.
/// Months with no rows are `None`. Rows with malformed month labels belong to
/// no calendar month and drop out here.
pub fn monthly_averages(filtered: &BirthTable) -> Vec<MonthlyAverage> {
    Month::all()
        .iter()
        .map(|month| {
            let values: Vec<u64> = filtered
                .records()
                .iter()
                .filter(|r| r.month == month.name())
                .map(|r| r.birth_count)
                .collect();
            let mean = if values.is_empty() {
                None
            } else {
                Some(values.iter().sum::<u64>() as f64 / values.len() as f64)
            };
            MonthlyAverage {
                month: *month,
                mean,
            }
        })
        .collect()
}

/// Filtered totals of the selected age columns, canonical order.
pub fn age_share(filtered: &BirthTable, ages: &[AgeGroup]) -> Vec<AgeShare> {
    ages.iter()
        .map(|group| AgeShare {
            group: *group,
            births: filtered.records().iter().map(|r| r.age_count(*group)).sum(),
        })
        .collect()
}

/// Per-region birth_count sums, sorted region order.
pub fn region_share(filtered: &BirthTable) -> Vec<RegionShare> {
    let mut by_region: BTreeMap<String, u64> = BTreeMap::new();
    for record in filtered.records() {
        *by_region.entry(record.region.clone()).or_default() += record.birth_count;
    }
    by_region
        .into_iter()
        .map(|(region, births)| RegionShare { region, births })
        .collect()
}

/// One per-year series for each selected age column.
pub fn age_trend_by_year(filtered: &BirthTable, ages: &[AgeGroup]) -> Vec<TrendSeries> {
    ages.iter()
        .map(|group| {
            let mut by_year: BTreeMap<i32, u64> = BTreeMap::new();
            for record in filtered.records() {
                *by_year.entry(record.year).or_default() += record.age_count(*group);
            }
            TrendSeries {
                label: group.label().to_string(),
                points: by_year.into_iter().collect(),
            }
        })
        .collect()
}

/// One per-year birth_count series for each region, sorted region order.
pub fn region_trend_by_year(filtered: &BirthTable) -> Vec<TrendSeries> {
    let mut by_region: BTreeMap<String, BTreeMap<i32, u64>> = BTreeMap::new();
    for record in filtered.records() {
        *by_region
            .entry(record.region.clone())
            .or_default()
            .entry(record.year)
            .or_default() += record.birth_count;
    }
    by_region
        .into_iter()
        .map(|(label, points)| TrendSeries {
            label,
            points: points.into_iter().collect(),
        })
        .collect()
}

/// First key reaching the maximum value, in iteration order. `None` when the
/// iterator is empty.
fn first_max<K, I>(pairs: I) -> Option<K>
where
    I: IntoIterator<Item = (K, u64)>,
{
    let mut best: Option<(K, u64)> = None;
    for (key, value) in pairs {
        match &best {
            Some((_, max)) if value <= *max => {}
            _ => best = Some((key, value)),
        }
    }
    best.map(|(key, _)| key)
}
