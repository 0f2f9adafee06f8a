//! Seasonal-trend regression back-end.
//!
//! Fits an OLS trend over absolute month indices, so gaps in the observed
//! series keep their true distance, then adds zero-sum additive factors per
//! calendar month. Produces a full back-fit and a growing interval band.

use serde::{Deserialize, Serialize};

use dataset_spi::Month;
use forecast_api::SeasonalTrendConfig;
use forecast_spi::{
    month_index, next_stamp, ForecastError, ForecastPoint, ForecastResult, Forecaster,
    MonthlySeries, Result,
};

use crate::confidence::interval_band;

/// Trend plus per-calendar-month additive factors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalTrend {
    /// Month index of the first observation; x values are offsets from here
    origin: i64,
    intercept: f64,
    slope: f64,
    /// Additive factor per calendar month, January first, summing to zero
    factors: [f64; 12],
}

impl SeasonalTrend {
    /// Fit trend and seasonal factors to an observed series.
    ///
    /// Two points are enough for the trend line; factors for calendar months
    /// that never appear stay at the normalized baseline.
    pub fn fit(series: &MonthlySeries) -> Result<Self> {
        if series.len() < 2 {
            return Err(ForecastError::InsufficientData {
                required: 2,
                actual: series.len(),
            });
        }

        if series.values().iter().any(|v| v.is_nan() || v.is_infinite()) {
            return Err(ForecastError::InvalidData(
                "series contains NaN or infinite values".to_string(),
            ));
        }

        let origin = series.points()[0].month_index();
        let n = series.len() as f64;

        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_x2 = 0.0;
        let mut sum_xy = 0.0;
        for point in series.points() {
            let x = (point.month_index() - origin) as f64;
            sum_x += x;
            sum_y += point.value;
            sum_x2 += x * x;
            sum_xy += x * point.value;
        }

        let denominator = n * sum_x2 - sum_x * sum_x;
        if denominator.abs() < 1e-10 {
            return Err(ForecastError::NumericalError(
                "singular design in trend fit".to_string(),
            ));
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        // Mean detrended value per calendar month
        let mut sums = [0.0_f64; 12];
        let mut counts = [0_usize; 12];
        for point in series.points() {
            let x = (point.month_index() - origin) as f64;
            let slot = point.month.number() as usize - 1;
            sums[slot] += point.value - (intercept + slope * x);
            counts[slot] += 1;
        }

        let mut factors = [0.0_f64; 12];
        for slot in 0..12 {
            if counts[slot] > 0 {
                factors[slot] = sums[slot] / counts[slot] as f64;
            }
        }

        // Normalize to sum to zero so the trend keeps the level
        let mean_factor = factors.iter().sum::<f64>() / 12.0;
        for factor in &mut factors {
            *factor -= mean_factor;
        }

        Ok(Self {
            origin,
            intercept,
            slope,
            factors,
        })
    }

    /// Model estimate for a calendar month, observed or future.
    pub fn estimate(&self, year: i32, month: Month) -> f64 {
        let x = (month_index(year, month) - self.origin) as f64;
        self.intercept + self.slope * x + self.factors[month.number() as usize - 1]
    }

    /// In-sample estimates, one per observed point.
    pub fn fitted_values(&self, series: &MonthlySeries) -> Vec<f64> {
        series
            .points()
            .iter()
            .map(|p| self.estimate(p.year, p.month))
            .collect()
    }

    /// Trend slope per month.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Seasonal factors, January first.
    pub fn factors(&self) -> &[f64; 12] {
        &self.factors
    }
}

/// The whole-selection forecasting back-end: back-fit plus interval band.
#[derive(Debug, Clone, Default)]
pub struct SeasonalTrendForecaster {
    config: SeasonalTrendConfig,
}

impl SeasonalTrendForecaster {
    pub fn new(config: SeasonalTrendConfig) -> Self {
        Self { config }
    }
}

impl Forecaster for SeasonalTrendForecaster {
    fn name(&self) -> &str {
        "seasonal-trend"
    }

    fn fit(&self, series: &MonthlySeries, horizon: usize) -> Result<ForecastResult> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter {
                name: "horizon".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let model = SeasonalTrend::fit(series)?;
        let fitted = model.fitted_values(series);
        let residuals: Vec<f64> = series
            .values()
            .iter()
            .zip(fitted.iter())
            .map(|(y, f)| y - f)
            .collect();

        let (mut year, mut month) = series.last_stamp().ok_or(ForecastError::InsufficientData {
            required: 2,
            actual: 0,
        })?;

        let mut stamps = Vec::with_capacity(horizon);
        let mut points = Vec::with_capacity(horizon);
        for _ in 0..horizon {
            (year, month) = next_stamp(year, month);
            stamps.push((year, month));
            points.push(model.estimate(year, month));
        }

        let (lower, upper) = interval_band(&points, &residuals, self.config.confidence_level)?;

        tracing::debug!(
            observations = series.len(),
            horizon,
            slope = model.slope(),
            "seasonal-trend fit complete"
        );

        let future = stamps
            .into_iter()
            .zip(points)
            .zip(lower.into_iter().zip(upper))
            .map(|(((year, month), point), (lo, hi))| ForecastPoint {
                year,
                month,
                point,
                lower: Some(lo),
                upper: Some(hi),
            })
            .collect();

        Ok(ForecastResult {
            model_name: self.name().to_string(),
            fitted: Some(fitted),
            future,
        })
    }
}
