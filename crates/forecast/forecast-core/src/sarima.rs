//! Seasonal ARIMA model.
//!
//! Seasonal differencing at the configured period, then regular differencing,
//! then AR coefficients from the Yule-Walker equations (Levinson-Durbin) and
//! MA coefficients from residual autocorrelation. Forecasts are produced on
//! the differenced scale and integrated back.

use serde::{Deserialize, Serialize};

use forecast_spi::{ForecastError, Result};

/// A SARIMA(p, d, q)(0, D, 0)[period] model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonalArima {
    p: usize,
    d: usize,
    q: usize,
    seasonal_d: usize,
    period: usize,
    ar_coeffs: Vec<f64>,
    ma_coeffs: Vec<f64>,
    constant: f64,
    /// Seasonal differencing stages; stage 0 is the original data
    stages: Vec<Vec<f64>>,
    /// Fully differenced data the AR/MA fit runs on
    working: Vec<f64>,
    residuals: Vec<f64>,
    fitted: bool,
}

impl SeasonalArima {
    /// Create an unfitted model with the given orders.
    pub fn new(p: usize, d: usize, q: usize, seasonal_d: usize, period: usize) -> Result<Self> {
        if p > 10 {
            return Err(ForecastError::InvalidParameter {
                name: "p".to_string(),
                reason: "AR order must be <= 10".to_string(),
            });
        }
        if d > 2 {
            return Err(ForecastError::InvalidParameter {
                name: "d".to_string(),
                reason: "differencing order must be <= 2".to_string(),
            });
        }
        if q > 10 {
            return Err(ForecastError::InvalidParameter {
                name: "q".to_string(),
                reason: "MA order must be <= 10".to_string(),
            });
        }
        if seasonal_d > 2 {
            return Err(ForecastError::InvalidParameter {
                name: "seasonal_d".to_string(),
                reason: "seasonal differencing order must be <= 2".to_string(),
            });
        }
        if period < 2 {
            return Err(ForecastError::InvalidParameter {
                name: "period".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }

        Ok(Self {
            p,
            d,
            q,
            seasonal_d,
            period,
            ar_coeffs: vec![0.0; p],
            ma_coeffs: vec![0.0; q],
            constant: 0.0,
            stages: Vec::new(),
            working: Vec::new(),
            residuals: Vec::new(),
            fitted: false,
        })
    }

    /// Model orders as (p, d, q, seasonal_d).
    pub fn orders(&self) -> (usize, usize, usize, usize) {
        (self.p, self.d, self.q, self.seasonal_d)
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Fit coefficients to the series.
    pub fn fit(&mut self, data: &[f64]) -> Result<()> {
        let min_required = self.period * self.seasonal_d + self.p + self.d + self.q + 10;
        if data.len() < min_required {
            return Err(ForecastError::InsufficientData {
                required: min_required,
                actual: data.len(),
            });
        }

        if data.iter().any(|x| x.is_nan() || x.is_infinite()) {
            return Err(ForecastError::InvalidData(
                "data contains NaN or infinite values".to_string(),
            ));
        }

        self.stages = vec![data.to_vec()];
        for _ in 0..self.seasonal_d {
            let prev = self.stages.last().map(|s| s.as_slice()).unwrap_or(&[]);
            self.stages.push(seasonal_difference(prev, self.period));
        }
        let base = self.stages.last().map(|s| s.as_slice()).unwrap_or(&[]);
        self.working = difference(base, self.d);

        let n = self.working.len();
        if n <= self.p {
            return Err(ForecastError::InsufficientData {
                required: self.p + 1,
                actual: n,
            });
        }

        self.ar_coeffs = estimate_ar_coefficients(&self.working, self.p);

        let mean = self.working.iter().sum::<f64>() / n as f64;
        self.constant = mean;

        self.residuals = vec![0.0; n];
        for i in self.p..n {
            let mut prediction = self.constant;
            for j in 0..self.p {
                prediction += self.ar_coeffs[j] * (self.working[i - j - 1] - mean);
            }
            self.residuals[i] = self.working[i] - prediction;
        }

        self.ma_coeffs = estimate_ma_coefficients(&self.residuals, self.q);

        self.fitted = true;
        Ok(())
    }

    /// Forecast `steps` values past the end of the fitted series.
    pub fn predict(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(ForecastError::NotFitted);
        }

        if steps == 0 {
            return Ok(Vec::new());
        }

        let n = self.working.len();
        let mut extended = self.working.clone();
        let mut extended_residuals = self.residuals.clone();

        for _ in 0..steps {
            let mut forecast = self.constant;

            for j in 0..self.p {
                let idx = extended.len() - j - 1;
                forecast += self.ar_coeffs[j] * (extended[idx] - self.constant);
            }

            for j in 0..self.q {
                if extended_residuals.len() > j {
                    let idx = extended_residuals.len() - j - 1;
                    forecast += self.ma_coeffs[j] * extended_residuals[idx];
                }
            }

            extended.push(forecast);
            extended_residuals.push(0.0); // future residuals are 0
        }

        let forecasts = extended[n..].to_vec();
        let forecasts = self.undifference_regular(&forecasts);
        Ok(self.undifference_seasonal(&forecasts))
    }

    /// Reverse regular differencing against the seasonally-differenced base.
    fn undifference_regular(&self, forecasts: &[f64]) -> Vec<f64> {
        if self.d == 0 {
            return forecasts.to_vec();
        }

        let base = self.stages.last().map(|s| s.as_slice()).unwrap_or(&[]);
        let Some(&last_value) = base.last() else {
            return forecasts.to_vec();
        };

        let mut result = forecasts.to_vec();
        for _ in 0..self.d {
            let mut cumsum = vec![last_value + result[0]];
            for i in 1..result.len() {
                cumsum.push(cumsum[i - 1] + result[i]);
            }
            result = cumsum;
        }
        result
    }

    /// Reverse seasonal differencing, stage by stage.
    fn undifference_seasonal(&self, forecasts: &[f64]) -> Vec<f64> {
        let mut result = forecasts.to_vec();
        for stage in self.stages.iter().rev().skip(1) {
            let mut extended = stage.clone();
            for &value in &result {
                let prior = extended[extended.len() - self.period];
                extended.push(value + prior);
            }
            result = extended[stage.len()..].to_vec();
        }
        result
    }
}

/// Difference a series `order` times at lag 1.
fn difference(data: &[f64], order: usize) -> Vec<f64> {
    let mut result = data.to_vec();
    for _ in 0..order {
        let mut differenced = Vec::with_capacity(result.len().saturating_sub(1));
        for i in 1..result.len() {
            differenced.push(result[i] - result[i - 1]);
        }
        result = differenced;
    }
    result
}

/// Difference a series once at the seasonal lag.
fn seasonal_difference(data: &[f64], period: usize) -> Vec<f64> {
    if data.len() <= period {
        return Vec::new();
    }
    (period..data.len()).map(|i| data[i] - data[i - period]).collect()
}

/// Yule-Walker AR estimation via Levinson-Durbin recursion.
fn estimate_ar_coefficients(data: &[f64], p: usize) -> Vec<f64> {
    if p == 0 {
        return Vec::new();
    }

    let n = data.len();
    let mean: f64 = data.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = data.iter().map(|x| x - mean).collect();

    let mut autocorr = vec![0.0; p + 1];
    for k in 0..=p {
        let mut sum = 0.0;
        for i in k..n {
            sum += centered[i] * centered[i - k];
        }
        autocorr[k] = sum / n as f64;
    }

    let mut coeffs = vec![0.0; p];
    if autocorr[0].abs() > 1e-10 {
        coeffs[0] = autocorr[1] / autocorr[0];

        for k in 1..p {
            let mut sum = autocorr[k + 1];
            for j in 0..k {
                sum -= coeffs[j] * autocorr[k - j];
            }

            let mut denom = autocorr[0];
            for j in 0..k {
                denom -= coeffs[j] * autocorr[j + 1];
            }

            if denom.abs() > 1e-10 {
                let new_coeff = sum / denom;
                let old_coeffs = coeffs.clone();
                coeffs[k] = new_coeff;
                for j in 0..k {
                    coeffs[j] = old_coeffs[j] - new_coeff * old_coeffs[k - 1 - j];
                }
            }
        }
    }

    coeffs
}

/// MA estimation from residual autocorrelation, clamped for stability.
fn estimate_ma_coefficients(residuals: &[f64], q: usize) -> Vec<f64> {
    if q == 0 || residuals.is_empty() {
        return vec![0.0; q];
    }

    let n = residuals.len();
    let mean: f64 = residuals.iter().sum::<f64>() / n as f64;
    let centered: Vec<f64> = residuals.iter().map(|x| x - mean).collect();

    let mut coeffs = vec![0.0; q];
    let var: f64 = centered.iter().map(|x| x * x).sum::<f64>() / n as f64;

    if var.abs() > 1e-10 {
        for k in 0..q {
            let mut sum = 0.0;
            for i in (k + 1)..n {
                sum += centered[i] * centered[i - k - 1];
            }
            coeffs[k] = (sum / n as f64) / var;
            coeffs[k] = coeffs[k].clamp(-0.99, 0.99);
        }
    }

    coeffs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_validation() {
        assert!(SeasonalArima::new(1, 1, 1, 1, 12).is_ok());
        assert!(SeasonalArima::new(11, 0, 0, 0, 12).is_err());
        assert!(SeasonalArima::new(0, 3, 0, 0, 12).is_err());
        assert!(SeasonalArima::new(0, 0, 11, 0, 12).is_err());
        assert!(SeasonalArima::new(1, 0, 0, 3, 12).is_err());
        assert!(SeasonalArima::new(1, 0, 0, 0, 1).is_err());
    }

    #[test]
    fn test_not_fitted_error() {
        let model = SeasonalArima::new(1, 0, 0, 0, 12).unwrap();
        assert!(matches!(model.predict(3), Err(ForecastError::NotFitted)));
    }

    #[test]
    fn test_insufficient_data() {
        let mut model = SeasonalArima::new(1, 0, 0, 1, 12).unwrap();
        let data = vec![1.0; 10];
        assert!(matches!(
            model.fit(&data),
            Err(ForecastError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_constant_series_forecasts_constant() {
        let data = vec![100.0; 36];
        let mut model = SeasonalArima::new(1, 0, 0, 1, 12).unwrap();
        model.fit(&data).unwrap();
        let forecast = model.predict(12).unwrap();
        assert_eq!(forecast.len(), 12);
        for value in forecast {
            assert!((value - 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_linear_trend_continues() {
        let data: Vec<f64> = (0..40).map(|i| 10.0 + 2.0 * i as f64).collect();
        let mut model = SeasonalArima::new(1, 1, 0, 0, 12).unwrap();
        model.fit(&data).unwrap();
        let forecast = model.predict(3).unwrap();
        // Differenced series is the constant 2, so the trend continues
        assert!((forecast[0] - 90.0).abs() < 1.0);
        assert!(forecast[2] > forecast[0]);
    }

    #[test]
    fn test_seasonal_pattern_repeats() {
        // Pure 12-month cycle, no trend
        let cycle = [
            10.0, 12.0, 15.0, 20.0, 25.0, 30.0, 32.0, 30.0, 24.0, 18.0, 14.0, 11.0,
        ];
        let data: Vec<f64> = (0..48).map(|i| cycle[i % 12]).collect();
        let mut model = SeasonalArima::new(1, 0, 0, 1, 12).unwrap();
        model.fit(&data).unwrap();
        let forecast = model.predict(12).unwrap();
        for (i, value) in forecast.iter().enumerate() {
            assert!((value - cycle[i]).abs() < 1e-6, "month {i}: {value}");
        }
    }

    #[test]
    fn test_rejects_nan() {
        let mut data = vec![1.0; 36];
        data[5] = f64::NAN;
        let mut model = SeasonalArima::new(1, 0, 0, 0, 12).unwrap();
        assert!(matches!(
            model.fit(&data),
            Err(ForecastError::InvalidData(_))
        ));
    }

    #[test]
    fn test_zero_steps_is_empty() {
        let mut model = SeasonalArima::new(1, 0, 0, 0, 12).unwrap();
        model.fit(&vec![5.0; 30]).unwrap();
        assert!(model.predict(0).unwrap().is_empty());
    }
}
