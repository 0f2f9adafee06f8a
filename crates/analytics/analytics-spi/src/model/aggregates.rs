//! Chart-ready aggregate rows.

use serde::{Deserialize, Serialize};

use dataset_spi::{AgeGroup, Month};

use super::{HeatmapMatrix, KpiSummary};

/// Per-year birth_count sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyTotal {
    pub year: i32,
    pub births: u64,
}

/// Per-calendar-month birth_count mean.
///
/// One entry per canonical month in January-December order; `mean` is `None`
/// for months with no matching rows, never zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    pub month: Month,
    pub mean: Option<f64>,
}

/// Filtered total for one selected age column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeShare {
    pub group: AgeGroup,
    pub births: u64,
}

/// Per-region birth_count sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionShare {
    pub region: String,
    pub births: u64,
}

/// One labeled series of per-year sums, for the trend charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    /// Age group label or region name
    pub label: String,
    /// (year, sum) points in ascending year order
    pub points: Vec<(i32, u64)>,
}

/// Everything one render pass derives from the filtered table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub kpis: KpiSummary,
    /// Ascending year order
    pub yearly: Vec<YearlyTotal>,
    /// Twelve entries, calendar order
    pub monthly_avg: Vec<MonthlyAverage>,
    /// Selected age groups, canonical order
    pub age_share: Vec<AgeShare>,
    /// Sorted region order
    pub region_share: Vec<RegionShare>,
    /// One series per selected age group
    pub age_trend: Vec<TrendSeries>,
    /// One series per region
    pub region_trend: Vec<TrendSeries>,
    pub heatmap: HeatmapMatrix,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yearly_total_roundtrip() {
        let row = YearlyTotal {
            year: 2020,
            births: 1200,
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: YearlyTotal = serde_json::from_str(&json).unwrap();
        assert_eq!(row, back);
    }

    #[test]
    fn test_monthly_average_none_is_not_zero() {
        let absent = MonthlyAverage {
            month: Month::April,
            mean: None,
        };
        let zero = MonthlyAverage {
            month: Month::April,
            mean: Some(0.0),
        };
        assert_ne!(absent, zero);
    }
}
