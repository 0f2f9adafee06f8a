//! Forecast output types.

use serde::{Deserialize, Serialize};

use dataset_spi::Month;

/// One forecasted future month.
///
/// Bounds are per-row optional: the seasonal-trend back-end fills them, the
/// SARIMA back-end does not. The two contracts stay visibly different.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub year: i32,
    pub month: Month,
    /// Point estimate
    pub point: f64,
    /// Lower interval bound, where the back-end provides one
    pub lower: Option<f64>,
    /// Upper interval bound, where the back-end provides one
    pub upper: Option<f64>,
}

impl ForecastPoint {
    /// Display label, e.g. "Mar 2027".
    pub fn label(&self) -> String {
        format!("{} {}", self.month.short_name(), self.year)
    }
}

/// Output of one fit: optional in-sample back-fit plus the future months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    /// Name of the back-end that produced this result
    pub model_name: String,
    /// In-sample estimates, one per history point (seasonal-trend only)
    pub fitted: Option<Vec<f64>>,
    /// One row per future month, chronological
    pub future: Vec<ForecastPoint>,
}

impl ForecastResult {
    /// Whether every future row carries interval bounds.
    pub fn has_bounds(&self) -> bool {
        !self.future.is_empty()
            && self.future.iter().all(|p| p.lower.is_some() && p.upper.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        let point = ForecastPoint {
            year: 2027,
            month: Month::March,
            point: 100.0,
            lower: None,
            upper: None,
        };
        assert_eq!(point.label(), "Mar 2027");
    }

    #[test]
    fn test_has_bounds() {
        let banded = ForecastResult {
            model_name: "test".to_string(),
            fitted: None,
            future: vec![ForecastPoint {
                year: 2026,
                month: Month::January,
                point: 100.0,
                lower: Some(90.0),
                upper: Some(110.0),
            }],
        };
        assert!(banded.has_bounds());

        let point_only = ForecastResult {
            model_name: "test".to_string(),
            fitted: None,
            future: vec![ForecastPoint {
                year: 2026,
                month: Month::January,
                point: 100.0,
                lower: None,
                upper: None,
            }],
        };
        assert!(!point_only.has_bounds());
    }

    #[test]
    fn test_empty_future_has_no_bounds() {
        let empty = ForecastResult {
            model_name: "test".to_string(),
            fitted: None,
            future: Vec::new(),
        };
        assert!(!empty.has_bounds());
    }
}
