//! End-to-end tests for the forecasting stack through the facade.

use dataset_spi::{BirthRecord, BirthTable, Month};
use forecast_facade::*;

fn seasonal_table(regions: &[&str], years: std::ops::RangeInclusive<i32>) -> BirthTable {
    let mut records = Vec::new();
    for &region in regions {
        for year in years.clone() {
            for month in Month::all() {
                // Mild trend plus a summer peak
                let base = 100 + (year - 2019) * 2;
                let seasonal = match month {
                    Month::June | Month::July | Month::August => 15,
                    Month::January | Month::February => -10,
                    _ => 0,
                };
                let count = (base + seasonal) as u64;
                records.push(BirthRecord::new(
                    year,
                    month.name(),
                    region,
                    count,
                    count / 10,
                    count / 2,
                    count / 3,
                    count / 20,
                ));
            }
        }
    }
    BirthTable::new(records)
}

#[test]
fn test_seasonal_trend_end_to_end() {
    let table = seasonal_table(&["East", "West"], 2019..=2022);
    let series = selection_series(&table).unwrap();
    assert_eq!(series.len(), 48);

    let forecaster = SeasonalTrendForecaster::default();
    let result = forecaster.fit(&series, DEFAULT_HORIZON).unwrap();

    assert_eq!(result.model_name, "seasonal-trend");
    assert_eq!(result.future.len(), DEFAULT_HORIZON);
    assert_eq!(result.fitted.as_ref().map(Vec::len), Some(48));
    assert!(result.has_bounds());

    // Forecast continues from January after the last observed December
    assert_eq!(result.future[0].year, 2023);
    assert_eq!(result.future[0].month, Month::January);
    assert_eq!(result.future[0].label(), "Jan 2023");
}

#[test]
fn test_auto_sarima_end_to_end() {
    let table = seasonal_table(&["East", "West"], 2019..=2022);
    let series = region_series(&table, "East").unwrap();
    assert_eq!(series.len(), 48);

    let forecaster = AutoSarimaForecaster::default();
    let result = forecaster.fit(&series, DEFAULT_HORIZON).unwrap();

    assert_eq!(result.model_name, "auto-sarima");
    assert_eq!(result.future.len(), DEFAULT_HORIZON);
    assert!(result.fitted.is_none());
    assert!(!result.has_bounds());
}

#[test]
fn test_constant_history_forecasts_constant() {
    let mut records = Vec::new();
    for year in 2020..=2022 {
        for month in Month::all() {
            records.push(BirthRecord::new(year, month.name(), "East", 100, 10, 50, 35, 5));
        }
    }
    let table = BirthTable::new(records);
    let series = selection_series(&table).unwrap();

    let trend = SeasonalTrendForecaster::default().fit(&series, 12).unwrap();
    for row in &trend.future {
        assert!((row.point - 100.0).abs() < 1e-6);
    }

    let sarima = AutoSarimaForecaster::default().fit(&series, 12).unwrap();
    for row in &sarima.future {
        assert!((row.point - 100.0).abs() < 1e-6);
    }
}

#[test]
fn test_backends_enforce_their_floors() {
    // 12 months is enough for the trend fit but not for SARIMA
    let table = seasonal_table(&["East"], 2022..=2022);
    let series = region_series(&table, "East").unwrap();
    assert_eq!(series.len(), 12);

    assert!(SeasonalTrendForecaster::default().fit(&series, 12).is_ok());
    assert!(matches!(
        AutoSarimaForecaster::default().fit(&series, 12),
        Err(ForecastError::InsufficientData { required: 24, .. })
    ));
}

#[test]
fn test_malformed_month_fails_series_building() {
    let table = BirthTable::new(vec![BirthRecord::new(
        2020, "Smarch", "East", 100, 10, 50, 35, 5,
    )]);
    assert!(matches!(
        selection_series(&table),
        Err(ForecastError::UnrecognizedMonth(_))
    ));
}

#[test]
fn test_horizon_clamping_bounds() {
    assert_eq!(clamp_trend_horizon(0), TREND_HORIZON_MIN);
    assert_eq!(clamp_sarima_horizon(1000), SARIMA_HORIZON_MAX);
}

#[test]
fn test_trend_band_contains_future_of_noiseless_trend() {
    let mut records = Vec::new();
    let mut level = 100i64;
    for year in 2019..=2022 {
        for month in Month::all() {
            records.push(BirthRecord::new(
                year,
                month.name(),
                "East",
                level as u64,
                10,
                50,
                35,
                5,
            ));
            level += 1;
        }
    }
    let table = BirthTable::new(records);
    let series = selection_series(&table).unwrap();

    let result = SeasonalTrendForecaster::default().fit(&series, 6).unwrap();
    for row in &result.future {
        let lower = row.lower.unwrap();
        let upper = row.upper.unwrap();
        assert!(lower <= row.point && row.point <= upper);
    }
}
