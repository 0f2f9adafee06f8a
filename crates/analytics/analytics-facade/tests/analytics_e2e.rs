//! End-to-end tests for the analytics module, carrying the dashboard's
//! concrete acceptance scenarios.

use analytics_facade::{aggregate, filter_table, FilterSpec, FilterSpecBuilder, KpiSummary};
use dataset_spi::{AgeGroup, BirthRecord, BirthTable, Month};

/// One region "East", birth_count=100 every month of 2020 and 2021, age
/// columns <20=10, 20-29=40, 30-39=30, 40+=5.
fn east_table() -> BirthTable {
    let mut rows = Vec::new();
    for year in [2020, 2021] {
        for month in Month::all() {
            rows.push(BirthRecord::new(year, month.name(), "East", 100, 10, 40, 30, 5));
        }
    }
    BirthTable::new(rows)
}

#[test]
fn e2e_east_scenario() {
    let table = east_table();
    let spec = FilterSpecBuilder::new()
        .year_range(2020, 2021)
        .regions(["East"])
        .build()
        .unwrap();

    let filtered = filter_table(&table, &spec);
    let report = aggregate(&filtered, &spec.selected_ages());

    assert_eq!(report.kpis.total_births, 2400);
    assert_eq!(report.kpis.top_region.as_deref(), Some("East"));
    assert_eq!(report.yearly.len(), 2);
    assert_eq!(report.yearly[0].year, 2020);
    assert_eq!(report.yearly[0].births, 1200);
    assert_eq!(report.yearly[1].year, 2021);
    assert_eq!(report.yearly[1].births, 1200);
    assert_eq!(report.kpis.dominant_age_group, Some(AgeGroup::From20To29));
}

#[test]
fn e2e_filter_invariants() {
    let table = east_table();
    let mut spec = FilterSpec::select_all(&table);
    spec.year_range = (2021, 2021);
    spec.months = ["January".to_string(), "June".to_string()].into_iter().collect();

    let filtered = filter_table(&table, &spec);

    assert!(filtered.len() <= table.len());
    for row in filtered.records() {
        assert_eq!(row.year, 2021);
        assert!(spec.months.contains(&row.month));
        assert!(spec.regions.contains(&row.region));
    }
    assert_eq!(filtered.len(), 2);
}

#[test]
fn e2e_yearly_rollup_conserves_total() {
    let table = east_table();
    let spec = FilterSpec::select_all(&table);
    let filtered = filter_table(&table, &spec);
    let report = aggregate(&filtered, &spec.selected_ages());

    let rollup: u64 = report.yearly.iter().map(|y| y.births).sum();
    assert_eq!(rollup, filtered.total_births());
}

#[test]
fn e2e_month_order_is_calendar_not_source() {
    // Rows inserted December-first must still aggregate January -> December.
    let mut rows = Vec::new();
    for month in Month::all().iter().rev() {
        rows.push(BirthRecord::new(2020, month.name(), "East", 100, 10, 40, 30, 5));
    }
    let table = BirthTable::new(rows);
    let spec = FilterSpec::select_all(&table);
    let report = aggregate(&filter_table(&table, &spec), &spec.selected_ages());

    let months: Vec<_> = report.monthly_avg.iter().map(|m| m.month).collect();
    assert_eq!(months, Month::all().to_vec());
}

#[test]
fn e2e_empty_selection_yields_placeholders() {
    let table = east_table();
    let mut spec = FilterSpec::select_all(&table);
    spec.regions.clear();

    let filtered = filter_table(&table, &spec);
    assert!(filtered.is_empty());

    let report = aggregate(&filtered, &spec.selected_ages());
    assert_eq!(report.kpis, KpiSummary::empty());
    assert!(report.yearly.is_empty());
    assert!(report.monthly_avg.iter().all(|m| m.mean.is_none()));
}

#[test]
fn e2e_heatmap_nulls_distinguish_missing_from_zero() {
    let table = BirthTable::new(vec![
        BirthRecord::new(2020, "January", "East", 0, 0, 0, 0, 0),
        BirthRecord::new(2020, "February", "West", 90, 10, 40, 30, 10),
    ]);
    let spec = FilterSpec::select_all(&table);
    let report = aggregate(&filter_table(&table, &spec), &spec.selected_ages());

    let east = report.heatmap.regions.iter().position(|r| r == "East").unwrap();
    let west = report.heatmap.regions.iter().position(|r| r == "West").unwrap();

    // East/January is a true zero mean; East/February has no rows at all.
    assert_eq!(report.heatmap.cell(east, Month::January), Some(0.0));
    assert_eq!(report.heatmap.cell(east, Month::February), None);
    assert_eq!(report.heatmap.cell(west, Month::February), Some(90.0));
}
