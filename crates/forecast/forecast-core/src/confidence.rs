//! Prediction interval band for the seasonal-trend back-end.
//!
//! The band grows with horizon: residual spread scaled by sqrt(h + 1) and a
//! Student-t quantile whose degrees of freedom come from the fit.

use statrs::distribution::{ContinuousCDF, StudentsT};

use forecast_spi::{ForecastError, Result};

/// Compute (lower, upper) bounds for a point forecast from fit residuals.
///
/// A near-perfect fit collapses the band onto the point forecast rather than
/// producing a degenerate distribution.
pub fn interval_band(
    forecast: &[f64],
    residuals: &[f64],
    confidence_level: f64,
) -> Result<(Vec<f64>, Vec<f64>)> {
    if residuals.is_empty() {
        return Ok((forecast.to_vec(), forecast.to_vec()));
    }

    let n = residuals.len() as f64;
    let mean = residuals.iter().sum::<f64>() / n;
    let variance = residuals.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    if std_dev < 1e-10 {
        return Ok((forecast.to_vec(), forecast.to_vec()));
    }

    let df = residuals.len().saturating_sub(2).max(1) as f64;
    let t = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| ForecastError::NumericalError(e.to_string()))?;
    let quantile = t.inverse_cdf(1.0 - (1.0 - confidence_level) / 2.0);

    // Standard error grows with distance from the observed window
    let mut lower = Vec::with_capacity(forecast.len());
    let mut upper = Vec::with_capacity(forecast.len());
    for (h, &point) in forecast.iter().enumerate() {
        let se = std_dev * ((h + 1) as f64).sqrt();
        lower.push(point - quantile * se);
        upper.push(point + quantile * se);
    }

    Ok((lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_brackets_the_forecast() {
        let forecast = vec![100.0, 110.0, 120.0];
        let residuals = vec![-2.0, 1.0, -1.0, 2.0, 0.0];
        let (lower, upper) = interval_band(&forecast, &residuals, 0.95).unwrap();
        for i in 0..3 {
            assert!(lower[i] < forecast[i]);
            assert!(upper[i] > forecast[i]);
        }
    }

    #[test]
    fn test_band_widens_with_horizon() {
        let forecast = vec![100.0, 100.0, 100.0];
        let residuals = vec![-5.0, 5.0, -5.0, 5.0];
        let (lower, upper) = interval_band(&forecast, &residuals, 0.95).unwrap();
        assert!(upper[2] - lower[2] > upper[0] - lower[0]);
    }

    #[test]
    fn test_perfect_fit_collapses_band() {
        let forecast = vec![100.0, 110.0];
        let residuals = vec![0.0, 0.0, 0.0, 0.0];
        let (lower, upper) = interval_band(&forecast, &residuals, 0.95).unwrap();
        assert_eq!(lower, forecast);
        assert_eq!(upper, forecast);
    }

    #[test]
    fn test_higher_confidence_is_wider() {
        let forecast = vec![100.0];
        let residuals = vec![-3.0, 1.0, 2.0, -1.0, 1.0, 0.0];
        let (l95, u95) = interval_band(&forecast, &residuals, 0.95).unwrap();
        let (l80, u80) = interval_band(&forecast, &residuals, 0.80).unwrap();
        assert!(u95[0] - l95[0] > u80[0] - l80[0]);
    }

    #[test]
    fn test_empty_residuals_collapse_band() {
        let forecast = vec![50.0];
        let (lower, upper) = interval_band(&forecast, &[], 0.95).unwrap();
        assert_eq!(lower, forecast);
        assert_eq!(upper, forecast);
    }
}
