//! Order selection for the SARIMA back-end.
//!
//! Grid search over (p, d, q, seasonal_d), scored on a chronological holdout.
//! Candidates that fail to fit or predict are skipped without comment; the
//! best surviving order is refit on the full series.

use forecast_api::{AutoSarimaConfig, ScoreMetric};
use forecast_spi::{
    next_stamp, ForecastError, ForecastPoint, ForecastResult, Forecaster, MonthlySeries, Result,
};

use crate::metrics::{mae, mape, rmse, train_test_split};
use crate::sarima::SeasonalArima;

fn score(metric: ScoreMetric, actual: &[f64], predicted: &[f64]) -> f64 {
    match metric {
        ScoreMetric::Mae => mae(actual, predicted),
        ScoreMetric::Rmse => rmse(actual, predicted),
        ScoreMetric::Mape => mape(actual, predicted),
    }
}

/// Search the order grid and return the best model refit on the full series.
pub fn tune(values: &[f64], config: &AutoSarimaConfig) -> Result<SeasonalArima> {
    let (train, test) = train_test_split(values, config.test_ratio);
    if test.is_empty() {
        return Err(ForecastError::InsufficientData {
            required: 2,
            actual: values.len(),
        });
    }

    let mut best: Option<(usize, usize, usize, usize, f64)> = None;

    for p in 0..=config.max_p {
        for d in 0..=config.max_d {
            for q in 0..=config.max_q {
                for seasonal_d in 0..=config.max_seasonal_d {
                    // A pure differencing model has nothing to tune
                    if p == 0 && q == 0 {
                        continue;
                    }

                    let Ok(mut model) = SeasonalArima::new(p, d, q, seasonal_d, config.period)
                    else {
                        continue;
                    };
                    if model.fit(train).is_err() {
                        continue;
                    }
                    let Ok(predictions) = model.predict(test.len()) else {
                        continue;
                    };

                    let candidate_score = score(config.metric, test, &predictions);
                    if candidate_score.is_finite()
                        && best.map_or(true, |(_, _, _, _, s)| candidate_score < s)
                    {
                        best = Some((p, d, q, seasonal_d, candidate_score));
                    }
                }
            }
        }
    }

    let Some((p, d, q, seasonal_d, best_score)) = best else {
        return Err(ForecastError::NumericalError(
            "no candidate order converged on the holdout".to_string(),
        ));
    };

    tracing::debug!(p, d, q, seasonal_d, score = best_score, "selected SARIMA order");

    let mut model = SeasonalArima::new(p, d, q, seasonal_d, config.period)?;
    model.fit(values)?;
    Ok(model)
}

/// The single-region forecasting back-end: strict monthly grid, auto-tuned
/// orders, point forecasts only.
#[derive(Debug, Clone, Default)]
pub struct AutoSarimaForecaster {
    config: AutoSarimaConfig,
}

impl AutoSarimaForecaster {
    pub fn new(config: AutoSarimaConfig) -> Self {
        Self { config }
    }
}

impl Forecaster for AutoSarimaForecaster {
    fn name(&self) -> &str {
        "auto-sarima"
    }

    fn fit(&self, series: &MonthlySeries, horizon: usize) -> Result<ForecastResult> {
        if horizon == 0 {
            return Err(ForecastError::InvalidParameter {
                name: "horizon".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        // Missing months become zero: the model sees a strict monthly grid
        let grid = series.resample_monthly();
        let required = self.config.period * 2;
        if grid.len() < required {
            return Err(ForecastError::InsufficientData {
                required,
                actual: grid.len(),
            });
        }

        let model = tune(&grid.values(), &self.config)?;
        let predictions = model.predict(horizon)?;

        let (mut year, mut month) = grid.last_stamp().ok_or(ForecastError::InsufficientData {
            required,
            actual: 0,
        })?;

        let (p, d, q, seasonal_d) = model.orders();
        tracing::debug!(
            observations = grid.len(),
            horizon,
            p,
            d,
            q,
            seasonal_d,
            "auto-sarima fit complete"
        );

        let future = predictions
            .into_iter()
            .map(|point| {
                (year, month) = next_stamp(year, month);
                ForecastPoint {
                    year,
                    month,
                    point,
                    lower: None,
                    upper: None,
                }
            })
            .collect();

        Ok(ForecastResult {
            model_name: self.name().to_string(),
            fitted: None,
            future,
        })
    }
}
